use std::sync::{Arc, Mutex};

use super::{create_store, init_tracing, select_count, select_text, AppAction};
use oxide_select::{Binding, Connector, Store, TestRenderer};

#[test]
fn given_binding_when_unsubscribed_should_ignore_further_dispatches() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();
    let mut count = connector.bind(select_count, renderer.clone());

    store.dispatch(AppAction::CounterInc);
    count.unsubscribe();

    store.dispatch(AppAction::CounterInc);
    store.dispatch(AppAction::CounterInc);

    assert!(!count.is_active());
    assert_eq!(store.get_state().counter.count, 3);
    assert_eq!(count.get(), 1);
    assert_eq!(count.version(), 1);
    assert_eq!(renderer.count(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn given_unsubscribed_binding_when_unsubscribed_again_should_do_nothing() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let mut text = connector.bind(select_text, |_: String| {});

    text.unsubscribe();
    text.unsubscribe();
    drop(text);

    assert_eq!(store.listener_count(), 0);
}

#[test]
fn given_binding_when_dropped_should_release_store_listener() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());

    {
        let _text = connector.bind(select_text, |_: String| {});
        let _count = connector.bind(select_count, |_: i32| {});
        assert_eq!(store.listener_count(), 2);
    }

    assert_eq!(store.listener_count(), 0);
}

#[test]
fn given_binding_when_disposed_should_return_last_value() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let text = connector.bind(select_text, |_: String| {});

    store.dispatch(AppAction::FormSetText("last".to_string()));

    assert_eq!(text.dispose(), "last");
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn given_many_short_lived_bindings_should_not_leak_listeners() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());

    for round in 0..50 {
        let count = connector.bind(select_count, |_: i32| {});
        store.dispatch(AppAction::CounterInc);
        assert_eq!(count.get(), round + 1);
    }

    assert_eq!(store.listener_count(), 0);
}

#[test]
fn given_binding_released_by_earlier_listener_during_dispatch_should_not_render() {
    init_tracing();
    let store = create_store();
    let holder: Arc<Mutex<Option<Binding<i32>>>> = Arc::new(Mutex::new(None));

    // Registered first, so it runs before the binding's own listener.
    let _releaser = {
        let holder = holder.clone();
        store.subscribe(Box::new(move || {
            holder.lock().unwrap().take();
        }))
    };

    let renderer = TestRenderer::new();
    let connector = Connector::new(store.clone());
    *holder.lock().unwrap() = Some(connector.bind(select_count, renderer.clone()));

    store.dispatch(AppAction::CounterInc);

    assert!(holder.lock().unwrap().is_none());
    assert_eq!(renderer.count(), 0);
    assert_eq!(store.listener_count(), 1);
}
