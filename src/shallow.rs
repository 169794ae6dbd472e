//! Shallow structural comparison: first-level members compared by identity.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, collections::BTreeMap, collections::BTreeSet, rc::Rc, string::String, sync::Arc, vec::Vec};
#[cfg(not(feature = "no_std"))]
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
    rc::Rc,
    sync::Arc,
};

/// Reference/primitive identity.
///
/// Primitives and strings are identical when their values are equal. Floats
/// compare by bit pattern, so `NaN` is identical to itself and `0.0` is not
/// identical to `-0.0`. Shared pointers are identical only when they point at
/// the same allocation; their contents are never inspected.
pub trait Identical {
    fn identical(&self, other: &Self) -> bool;
}

/// One-level structural equality.
///
/// Two values are shallowly equal when they have the same shape at the top
/// level (same keys, same length, same variant) and every first-level member
/// is [`Identical`]. Nested structures are not compared.
///
/// Implement it for your own props types with [`shallow_eq!`](crate::shallow_eq).
pub trait ShallowEq {
    fn shallow_eq(&self, other: &Self) -> bool;
}

macro_rules! by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identical for $ty {
                #[inline]
                fn identical(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl ShallowEq for $ty {
                #[inline]
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

by_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, str, String,
);

macro_rules! by_bits {
    ($($ty:ty),*) => {
        $(
            impl Identical for $ty {
                #[inline]
                fn identical(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }
            }

            impl ShallowEq for $ty {
                #[inline]
                fn shallow_eq(&self, other: &Self) -> bool {
                    self.identical(other)
                }
            }
        )*
    };
}

by_bits!(f32, f64);

impl<T: Identical + ?Sized> Identical for &T {
    fn identical(&self, other: &Self) -> bool {
        (**self).identical(*other)
    }
}

impl<T: ShallowEq + ?Sized> ShallowEq for &T {
    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(*other)
    }
}

impl<T: ?Sized> Identical for Arc<T> {
    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ShallowEq + ?Sized> ShallowEq for Arc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other) || (**self).shallow_eq(&**other)
    }
}

impl<T: ?Sized> Identical for Rc<T> {
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ShallowEq + ?Sized> ShallowEq for Rc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other) || (**self).shallow_eq(&**other)
    }
}

// A box owns its contents, so there is no identity to share between two boxes.
impl<T: ShallowEq + ?Sized> ShallowEq for Box<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(&**other)
    }
}

impl<T: Identical> Identical for Option<T> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.identical(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Identical> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

impl<T: Identical> ShallowEq for [T] {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.identical(b))
    }
}

impl<T: Identical, const N: usize> ShallowEq for [T; N] {
    fn shallow_eq(&self, other: &Self) -> bool {
        self[..].shallow_eq(&other[..])
    }
}

impl<T: Identical> ShallowEq for Vec<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        self[..].shallow_eq(&other[..])
    }
}

impl<K: Ord, V: Identical> ShallowEq for BTreeMap<K, V> {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.identical(o)))
    }
}

impl<K: Ord> ShallowEq for BTreeSet<K> {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|key| other.contains(key))
    }
}

#[cfg(not(feature = "no_std"))]
impl<K: Eq + Hash, V: Identical, S: BuildHasher> ShallowEq for HashMap<K, V, S> {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.identical(o)))
    }
}

#[cfg(not(feature = "no_std"))]
impl<K: Eq + Hash, S: BuildHasher> ShallowEq for HashSet<K, S> {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|key| other.contains(key))
    }
}

macro_rules! tuples {
    ($(($($name:ident : $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Identical),+> ShallowEq for ($($name,)+) {
                fn shallow_eq(&self, other: &Self) -> bool {
                    true $(&& self.$idx.identical(&other.$idx))+
                }
            }
        )*
    };
}

tuples!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);

/// Implement [`ShallowEq`] for a struct by comparing the listed fields with
/// [`Identical`].
///
/// Every field that takes part in rendering should be listed; unlisted fields
/// are ignored by the comparison.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use oxide_select::{shallow_eq, ShallowEq};
///
/// struct TextProps {
///     text: String,
///     symbol: &'static str,
///     tags: Arc<Vec<String>>,
/// }
///
/// shallow_eq!(TextProps { text, symbol, tags });
///
/// let tags = Arc::new(vec!["a".to_string()]);
/// let a = TextProps { text: "hi".into(), symbol: "!", tags: tags.clone() };
/// let b = TextProps { text: "hi".into(), symbol: "!", tags };
/// assert!(a.shallow_eq(&b));
///
/// // Same contents, different allocation: not shallowly equal.
/// let c = TextProps { text: "hi".into(), symbol: "!", tags: Arc::new(vec!["a".to_string()]) };
/// assert!(!a.shallow_eq(&c));
/// ```
#[macro_export]
macro_rules! shallow_eq {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::ShallowEq for $ty {
            fn shallow_eq(&self, other: &Self) -> bool {
                true $(&& $crate::Identical::identical(&self.$field, &other.$field))*
            }
        }
    };
}
