#![cfg_attr(feature = "no_std", no_std)]

//! Selective store bindings for Rust views, with `no_std` support.
//!
//! A [`Binding`] reads a derived slice of a shared application [`Store`] and
//! re-renders its view only when that slice changes. "Changed" is decided by
//! a pluggable [`Equality`] strategy whose default, [`Shallow`], compares
//! values one level deep.
//!
//! Each binding subscribes to the store once, when it is created, and
//! unsubscribes once, when it is dropped, so reading the bound value on every
//! render never churns listeners.
//!
//! ## Example
//!
//! ```rust
//! use oxide_select::{Connector, Store, TestRenderer, TestStore};
//!
//! #[derive(Clone)]
//! struct Counter { count: i32 }
//!
//! #[derive(Clone)]
//! struct Name { name: String }
//!
//! #[derive(Clone)]
//! struct State { counter: Counter, name: Name }
//!
//! enum Action { CounterInc, NameSet(String) }
//!
//! fn reduce(state: &State, action: Action) -> State {
//!     match action {
//!         Action::CounterInc => State {
//!             counter: Counter { count: state.counter.count + 1 },
//!             ..state.clone()
//!         },
//!         Action::NameSet(name) => State { name: Name { name }, ..state.clone() },
//!     }
//! }
//!
//! let store = TestStore::new(
//!     State { counter: Counter { count: 0 }, name: Name { name: String::new() } },
//!     reduce,
//! );
//! let connector = Connector::new(store.clone());
//!
//! // Any `FnMut(T)` works as a renderer; `TestRenderer` records every render.
//! let renderer = TestRenderer::new();
//! let count = connector.bind(|state: &State| state.counter.count, renderer.clone());
//!
//! store.dispatch(Action::NameSet("test".into()));
//! assert_eq!(renderer.count(), 0);
//!
//! store.dispatch(Action::CounterInc);
//! assert_eq!(renderer.count(), 1);
//! assert_eq!(count.get(), 1);
//!
//! // Dropping the binding releases its store listener.
//! drop(count);
//! assert_eq!(store.listener_count(), 0);
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod binding;
mod connector;
mod equality;
mod renderer;
mod shallow;
mod store;
mod subscription;

// Public re-exports
pub use binding::Binding;
pub use connector::Connector;
pub use equality::{ByValue, Equality, Shallow};
pub use renderer::{channel, Forwarder, Renderer};
pub use shallow::{Identical, ShallowEq};
pub use store::{Listener, Store};
pub use subscription::Subscription;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use store::TestStore;
