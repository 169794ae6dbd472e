use super::{create_store, init_tracing, select_text, AppAction, AppState, TextProps};
use oxide_select::{Connector, Store, TestRenderer};

#[test]
fn given_empty_form_when_bound_should_expose_initial_text_without_rendering() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();

    let text = connector.bind(select_text, renderer.clone());

    assert_eq!(text.get(), "");
    assert_eq!(text.version(), 0);
    assert_eq!(renderer.count(), 0);
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn given_empty_form_when_text_set_should_transition_to_new_text() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();
    let text = connector.bind(select_text, renderer.clone());

    store.dispatch(AppAction::FormSetText("text".to_string()));

    assert_eq!(store.get_state().form.text, "text");
    assert_eq!(text.get(), "text");
    assert_eq!(text.version(), 1);
    assert_eq!(renderer.last(), Some("text".to_string()));
}

#[test]
fn given_text_set_when_same_text_set_again_should_not_transition() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();
    let text = connector.bind(select_text, renderer.clone());

    store.dispatch(AppAction::FormSetText("text".to_string()));
    store.dispatch(AppAction::FormSetText("text".to_string()));

    assert_eq!(store.dispatch_count(), 2);
    assert_eq!(store.get_state().form.text, "text");
    assert_eq!(text.get(), "text");
    assert_eq!(text.version(), 1);
    renderer.with_renders(|renders| {
        assert_eq!(renders, &vec!["text".to_string()]);
    });
}

#[test]
fn given_composite_props_when_text_set_should_render_combined_content_once() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();
    let symbol = "!";

    let props = connector.bind(
        move |state: &AppState| TextProps {
            text: select_text(state),
            symbol,
        },
        renderer.clone(),
    );

    assert_eq!(props.with(TextProps::content), "!");

    store.dispatch(AppAction::FormSetText("text".to_string()));
    assert_eq!(props.with(TextProps::content), "text!");

    store.dispatch(AppAction::FormSetText("text".to_string()));
    assert_eq!(props.with(TextProps::content), "text!");

    assert_eq!(renderer.count(), 1);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].content(), "text!");
    });
}

#[test]
fn given_empty_props_when_any_action_dispatched_should_never_render() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();

    let defaults = connector.bind(|_: &AppState| (), renderer.clone());

    store.dispatch(AppAction::FormSetText("text".to_string()));
    store.dispatch(AppAction::CounterInc);
    store.dispatch(AppAction::NameSet("name".to_string()));

    assert_eq!(defaults.version(), 0);
    assert_eq!(renderer.count(), 0);
}

#[test]
fn given_views_sharing_a_store_when_text_set_should_update_each_binding() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let input_renderer = TestRenderer::new();
    let text_renderer = TestRenderer::new();

    let input = connector.bind(select_text, input_renderer.clone());
    let text = connector.bind(
        |state: &AppState| TextProps {
            text: select_text(state),
            symbol: "!",
        },
        text_renderer.clone(),
    );

    assert_eq!(store.listener_count(), 2);

    store.dispatch(AppAction::FormSetText("text".to_string()));

    assert_eq!(input.get(), "text");
    assert_eq!(text.with(TextProps::content), "text!");
    assert_eq!(input_renderer.count(), 1);
    assert_eq!(text_renderer.count(), 1);
}

#[test]
fn given_binding_when_read_repeatedly_should_not_resubscribe() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let text = connector.bind(select_text, |_: String| {});

    for _ in 0..10 {
        let _ = text.get();
        let _ = text.version();
    }

    assert_eq!(store.listener_count(), 1);
    assert!(text.is_active());
}
