use std::panic::{catch_unwind, AssertUnwindSafe};

use super::{create_store, init_tracing, AppAction, AppState};
use oxide_select::{Connector, Store, TestRenderer};

#[test]
#[should_panic(expected = "selector failed")]
fn given_failing_selector_when_bound_should_propagate_to_caller() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store);

    let _binding = connector.bind(
        |_: &AppState| -> i32 { panic!("selector failed") },
        |_: i32| {},
    );
}

#[test]
fn given_selector_failing_after_dispatch_should_propagate_to_dispatcher() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());
    let renderer = TestRenderer::new();

    let count = connector.bind(
        |state: &AppState| {
            if state.counter.count > 0 {
                panic!("selector failed");
            }
            state.counter.count
        },
        renderer.clone(),
    );

    let result = catch_unwind(AssertUnwindSafe(|| store.dispatch(AppAction::CounterInc)));

    assert!(result.is_err());
    assert_eq!(store.get_state().counter.count, 1);
    assert_eq!(count.get(), 0);
    assert_eq!(renderer.count(), 0);
}

#[test]
fn given_failing_equality_should_leave_bound_value_unchanged() {
    init_tracing();
    let store = create_store();
    let connector = Connector::new(store.clone());

    let count = connector.bind_with(
        |state: &AppState| state.counter.count,
        |_: &i32, _: &i32| -> bool { panic!("equality failed") },
        |_: i32| {},
    );

    let result = catch_unwind(AssertUnwindSafe(|| store.dispatch(AppAction::CounterInc)));

    assert!(result.is_err());
    assert_eq!(count.get(), 0);
    assert_eq!(count.version(), 0);
}
