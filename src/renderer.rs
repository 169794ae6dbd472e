//! Renderer abstraction: how a binding signals that its value changed.

#[cfg(all(feature = "no_std", any(test, feature = "testing")))]
use alloc::vec::Vec;

use flume::{Receiver, Sender};

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Receiver of changed values.
///
/// A [`Binding`](crate::Binding) calls [`render`](Self::render) exactly once
/// per adopted change, with a copy of the new value. Values judged equal by
/// the binding's equality strategy never reach the renderer.
///
/// Closures taking the value implement this trait, so a re-render hook can be
/// written inline.
///
/// # Example
///
/// ```rust
/// use oxide_select::Renderer;
///
/// struct ConsoleRenderer;
///
/// impl Renderer<String> for ConsoleRenderer {
///     fn render(&mut self, text: String) {
///         println!("{}", text);
///     }
/// }
///
/// let mut renders = 0;
/// let mut counting = |_: String| renders += 1;
/// counting.render("hello".to_string());
/// assert_eq!(renders, 1);
/// ```
pub trait Renderer<T> {
    /// Adopt `value` as the current output and re-render.
    ///
    /// This runs synchronously inside the store's dispatch. It must not
    /// dispatch to the store or read its own binding; hand the value to a
    /// [`Forwarder`] when follow-up work is needed.
    fn render(&mut self, value: T);
}

impl<T, F> Renderer<T> for F
where
    F: FnMut(T),
{
    fn render(&mut self, value: T) {
        self(value)
    }
}

/// Renderer that queues changed values on a channel instead of rendering
/// inline.
///
/// Use it to feed an event loop, or to defer work that would otherwise
/// re-enter the store from inside a notification. Created by [`channel`].
///
/// # Example
///
/// ```rust
/// use oxide_select::{channel, Renderer};
///
/// let (mut forwarder, changes) = channel();
/// forwarder.render(7);
/// assert_eq!(changes.try_recv(), Ok(7));
/// ```
pub struct Forwarder<T>(Sender<T>);

impl<T> Clone for Forwarder<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Renderer<T> for Forwarder<T> {
    fn render(&mut self, value: T) {
        // A dropped receiver means nobody is listening anymore.
        self.0.send(value).ok();
    }
}

/// Create a [`Forwarder`] and the receiving end of its unbounded queue.
///
/// The receiver can be drained with `try_recv`/`try_iter` from a render loop
/// or awaited with `recv_async`.
pub fn channel<T>() -> (Forwarder<T>, Receiver<T>) {
    let (sender, receiver) = flume::unbounded();
    (Forwarder(sender), receiver)
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every rendered value for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone for assertions
/// and hand another to the binding.
///
/// # Example
///
/// ```rust
/// use oxide_select::{Connector, Store, TestRenderer, TestStore};
///
/// #[derive(Clone)]
/// struct State { count: i32 }
///
/// let store = TestStore::new(State { count: 0 }, |s: &State, by: i32| State { count: s.count + by });
/// let connector = Connector::new(store.clone());
///
/// let renderer = TestRenderer::new();
/// let binding = connector.bind(|s: &State| s.count, renderer.clone());
///
/// store.dispatch(2);
///
/// assert_eq!(binding.get(), 2);
/// renderer.with_renders(|renders| assert_eq!(renders, &vec![2]));
/// ```
pub struct TestRenderer<T> {
    renders: Arc<Mutex<Vec<T>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<T> Clone for TestRenderer<T> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<T> Renderer<T> for TestRenderer<T> {
    fn render(&mut self, value: T) {
        self.renders.lock().push(value);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<T> Default for TestRenderer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<T> TestRenderer<T> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// The most recently rendered value, if any.
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.renders.lock().last().cloned()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives every value rendered so far, oldest first.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<T>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
