//! The store contract that bindings read from and listen to.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(all(feature = "no_std", any(test, feature = "testing")))]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::Subscription;

/// Callback registered with a [`Store`], invoked after every state change.
pub type Listener = Box<dyn Fn() + Send + Sync>;

/// Application state container that bindings observe.
///
/// The store owns the single writer path ([`dispatch`](Self::dispatch)) and
/// notifies every registered [`Listener`] after each state change. Bindings
/// only ever read through [`select`](Self::select) and listen through
/// [`subscribe`](Self::subscribe).
///
/// Implementors are cheap handles onto shared state (cloning shares the
/// same state and listeners), which is what lets a binding keep a handle
/// inside its listener.
///
/// Implementations must:
/// - run listeners synchronously, in registration order, once per dispatch
///   and in dispatch order
/// - not hold any lock over the state while listeners run, since listeners
///   read the state back through [`select`](Self::select)
/// - stop invoking a listener once its [`Subscription`] is cancelled
pub trait Store: Clone + Send + Sync + 'static {
    /// Full application state.
    type State;

    /// Actions accepted by [`dispatch`](Self::dispatch).
    type Action;

    /// Read the current state through a borrow.
    fn select<R>(&self, selector: impl FnOnce(&Self::State) -> R) -> R;

    /// Snapshot of the current state.
    fn get_state(&self) -> Self::State
    where
        Self::State: Clone,
    {
        self.select(|state| state.clone())
    }

    /// Apply an action and notify listeners.
    fn dispatch(&self, action: Self::Action);

    /// Register a listener. The returned guard unregisters it when cancelled
    /// or dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

#[cfg(any(test, feature = "testing"))]
/// In-memory reducer store for exercising bindings in tests.
///
/// Only available with the `testing` feature.
///
/// Every [`dispatch`](Store::dispatch) replaces the state with
/// `reducer(&state, action)` and then runs all listeners synchronously, in
/// registration order, after the internal lock has been released. Clones
/// share the same state and listeners.
///
/// # Example
///
/// ```rust
/// use oxide_select::{Store, TestStore};
///
/// let store = TestStore::new(0, |count: &i32, by: i32| count + by);
///
/// let subscription = store.subscribe(Box::new(|| {}));
/// assert_eq!(store.listener_count(), 1);
///
/// store.dispatch(3);
/// assert_eq!(store.get_state(), 3);
///
/// drop(subscription);
/// assert_eq!(store.listener_count(), 0);
/// ```
pub struct TestStore<State, Action> {
    inner: Arc<Mutex<TestStoreInner<State, Action>>>,
}

#[cfg(any(test, feature = "testing"))]
type Reducer<State, Action> = Box<dyn Fn(&State, Action) -> State + Send + Sync>;

#[cfg(any(test, feature = "testing"))]
struct TestStoreInner<State, Action> {
    state: State,
    reducer: Reducer<State, Action>,
    listeners: Vec<(u64, Arc<Listener>)>,
    next_listener_id: u64,
    dispatches: usize,
}

#[cfg(any(test, feature = "testing"))]
impl<State, Action> Clone for TestStore<State, Action> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State, Action> TestStore<State, Action>
where
    State: Send + 'static,
    Action: Send + 'static,
{
    /// Create a store holding `state` and reducing actions with `reducer`.
    pub fn new(
        state: State,
        reducer: impl Fn(&State, Action) -> State + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TestStoreInner {
                state,
                reducer: Box::new(reducer),
                listeners: Vec::new(),
                next_listener_id: 0,
                dispatches: 0,
            })),
        }
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Number of actions dispatched so far.
    pub fn dispatch_count(&self) -> usize {
        self.inner.lock().dispatches
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State, Action> Store for TestStore<State, Action>
where
    State: Send + 'static,
    Action: Send + 'static,
{
    type State = State;
    type Action = Action;

    fn select<R>(&self, selector: impl FnOnce(&State) -> R) -> R {
        selector(&self.inner.lock().state)
    }

    fn dispatch(&self, action: Action) {
        let listeners: Vec<Arc<Listener>> = {
            let mut inner = self.inner.lock();
            let next = (inner.reducer)(&inner.state, action);
            inner.state = next;
            inner.dispatches += 1;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };

        tracing::trace!(listeners = listeners.len(), "notifying listeners");
        for listener in listeners {
            (*listener)();
        }
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.lock();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Arc::new(listener)));
            id
        };

        let inner = self.inner.clone();
        Subscription::new(move || {
            inner.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
        })
    }
}
