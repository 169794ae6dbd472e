//! Selective subscription binding: a live, selector-derived view of a store.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{Equality, Renderer, Store, Subscription};

/// Value state shared between a [`Binding`] and its store listener.
struct Slot<T> {
    current: T,
    version: u64,
    active: bool,
}

/// Live link between a selector and a renderable value.
///
/// A binding subscribes to its store exactly once, when it is created, and
/// unsubscribes exactly once, when it is dropped or
/// [`unsubscribe`](Self::unsubscribe)d. In between, every store notification
/// re-runs the selector; the result replaces the bound value and is handed to
/// the binding's [`Renderer`] only when the equality strategy reports a
/// change.
///
/// Reading the value ([`get`](Self::get), [`with`](Self::with)) never touches
/// the subscription, so a view may read it on every render.
///
/// Bindings are usually created through a [`Connector`](crate::Connector).
///
/// # Example
///
/// ```rust
/// use oxide_select::{Binding, ByValue, Store, TestStore};
///
/// #[derive(Clone)]
/// struct State { count: i32, name: String }
///
/// enum Action { Increment, Rename(String) }
///
/// let store = TestStore::new(
///     State { count: 0, name: String::new() },
///     |state: &State, action: Action| match action {
///         Action::Increment => State { count: state.count + 1, ..state.clone() },
///         Action::Rename(name) => State { name, ..state.clone() },
///     },
/// );
///
/// let mut renders = Vec::new();
/// let (forwarder, rendered) = oxide_select::channel();
/// let binding = Binding::new(&store, |state: &State| state.count, ByValue, forwarder);
///
/// store.dispatch(Action::Rename("oxide".into()));
/// store.dispatch(Action::Increment);
///
/// renders.extend(rendered.try_iter());
/// assert_eq!(renders, vec![1]);
/// assert_eq!(binding.get(), 1);
/// ```
pub struct Binding<T> {
    slot: Arc<Mutex<Slot<T>>>,
    subscription: Subscription,
}

impl<T: Send + 'static> Binding<T> {
    /// Select the initial value and subscribe to `store`.
    ///
    /// `selector` runs once here and again after every dispatch until the
    /// binding is released. A panicking selector propagates to this call for
    /// the initial selection, and to [`Store::dispatch`] afterwards.
    ///
    /// # Arguments
    ///
    /// * `store` - The store to read from and listen to
    /// * `selector` - Pure projection from the store state to the bound value
    /// * `equality` - Strategy deciding whether a new selection is a change
    /// * `renderer` - Receives a copy of every adopted change
    pub fn new<St, Sel, Cmp, R>(store: &St, selector: Sel, equality: Cmp, renderer: R) -> Self
    where
        T: Clone,
        St: Store,
        Sel: Fn(&St::State) -> T + Send + Sync + 'static,
        Cmp: Equality<T> + Send + Sync + 'static,
        R: Renderer<T> + Send + 'static,
    {
        let initial = store.select(&selector);

        let slot = Arc::new(Mutex::new(Slot {
            current: initial,
            version: 0,
            active: true,
        }));

        let listener = {
            let store = store.clone();
            let slot = slot.clone();
            let renderer = Mutex::new(renderer);

            Box::new(move || {
                if !slot.lock().active {
                    return;
                }

                // Select outside the slot lock so readers are never blocked on
                // the selector.
                let next = store.select(&selector);

                let adopted = {
                    let mut slot = slot.lock();
                    if !slot.active || equality.equals(&slot.current, &next) {
                        tracing::trace!(version = slot.version, "selection unchanged");
                        None
                    } else {
                        slot.current = next.clone();
                        slot.version += 1;
                        tracing::trace!(version = slot.version, "selection changed");
                        Some(next)
                    }
                };

                if let Some(next) = adopted {
                    let Some(mut renderer) = renderer.try_lock() else {
                        panic!("binding renderer re-entered its own binding; forward changes through a channel instead");
                    };
                    renderer.render(next);
                }
            })
        };

        let registration = store.subscribe(listener);
        tracing::debug!("binding subscribed");

        let subscription = {
            let slot = slot.clone();
            let mut registration = registration;
            Subscription::new(move || {
                slot.lock().active = false;
                registration.cancel();
                tracing::debug!("binding unsubscribed");
            })
        };

        Binding { slot, subscription }
    }
}

impl<T> Binding<T> {
    /// Clone of the current bound value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.slot.lock().current.clone()
    }

    /// Access the current bound value by reference without cloning.
    ///
    /// The closure runs while the binding is locked; it must not dispatch to
    /// the store.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.lock().current)
    }

    /// Number of changes adopted since the binding was created.
    ///
    /// Unchanged while notifications keep producing equal selections, which
    /// makes it a cheap dirty check for render loops.
    pub fn version(&self) -> u64 {
        self.slot.lock().version
    }

    /// Whether the binding is still listening to its store.
    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop listening to the store. The last bound value stays readable.
    ///
    /// Takes effect immediately, including for a notification the store is
    /// currently delivering. Calling it again does nothing.
    pub fn unsubscribe(&mut self) {
        self.subscription.cancel();
    }

    /// Stop listening and take the last bound value.
    pub fn dispose(mut self) -> T
    where
        T: Clone,
    {
        self.unsubscribe();
        self.get()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let slot = self.slot.lock();
        f.debug_struct("Binding")
            .field("current", &slot.current)
            .field("version", &slot.version)
            .field("active", &self.subscription.is_active())
            .finish()
    }
}
