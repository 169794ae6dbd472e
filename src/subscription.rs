//! RAII guard for store listener registrations.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

/// Disposer returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Holding a `Subscription` keeps the listener registered. Dropping it, or
/// calling [`cancel`](Self::cancel), releases the listener exactly once, so
/// every exit path of the owning scope unregisters from the store.
///
/// # Example
///
/// ```rust
/// use oxide_select::Subscription;
///
/// let mut subscription = Subscription::new(|| println!("released"));
/// assert!(subscription.is_active());
///
/// subscription.cancel();
/// assert!(!subscription.is_active());
/// ```
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Create a guard that runs `release` when cancelled or dropped.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the listener now. Later calls, and the eventual drop, do nothing.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether the listener is still registered through this guard.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
