//! Pluggable strategies deciding whether a selected value changed.

use crate::ShallowEq;

/// Equality strategy used by a [`Binding`](crate::Binding) to decide whether
/// a freshly selected value should replace the retained one.
///
/// Any `Fn(&T, &T) -> bool` is a strategy, so callers needing a deep or
/// domain-specific comparison can pass a closure.
///
/// # Example
///
/// ```rust
/// use oxide_select::{ByValue, Equality, Shallow};
///
/// assert!(Shallow.equals(&(1, "a"), &(1, "a")));
/// assert!(ByValue.equals(&vec![vec![1]], &vec![vec![1]]));
///
/// let case_insensitive = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
/// assert!(case_insensitive.equals(&"Text".to_string(), &"TEXT".to_string()));
/// ```
pub trait Equality<T: ?Sized> {
    /// Whether `previous` and `next` should be treated as the same value.
    fn equals(&self, previous: &T, next: &T) -> bool;
}

impl<T, F> Equality<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, previous: &T, next: &T) -> bool {
        self(previous, next)
    }
}

/// One-level structural comparison through [`ShallowEq`].
///
/// This is the default strategy of a [`Connector`](crate::Connector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shallow;

impl<T: ShallowEq + ?Sized> Equality<T> for Shallow {
    fn equals(&self, previous: &T, next: &T) -> bool {
        previous.shallow_eq(next)
    }
}

/// Full comparison through [`PartialEq`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByValue;

impl<T: PartialEq + ?Sized> Equality<T> for ByValue {
    fn equals(&self, previous: &T, next: &T) -> bool {
        previous == next
    }
}
