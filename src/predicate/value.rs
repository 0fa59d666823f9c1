//! Equality and projection predicates
//!
//! `eq`/`ne` compare against a captured value; `by` tests a predicate
//! against a key derived from the value, which is how record fields are
//! usually matched:
//!
//! ```rust
//! use sifter::predicate::*;
//!
//! struct Car {
//!     make: &'static str,
//!     doors: u8,
//! }
//!
//! let is_toyota = by(|c: &Car| c.make, eq("Toyota"));
//! let is_coupe = by(|c: &Car| c.doors, eq(2));
//!
//! let car = Car { make: "Toyota", doors: 4 };
//! assert!(is_toyota.test(&car));
//! assert!(!is_toyota.and(is_coupe).test(&car));
//! ```

use super::combinators::Predicate;

/// Holds when the value equals the captured one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EqualTo<V>(pub V);

impl<V: PartialEq> Predicate<V> for EqualTo<V> {
    #[inline]
    fn test(&self, value: &V) -> bool {
        *value == self.0
    }
}

/// Create an [`EqualTo`] predicate.
pub fn eq<V: PartialEq>(value: V) -> EqualTo<V> {
    EqualTo(value)
}

/// Holds when the value differs from the captured one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotEqualTo<V>(pub V);

impl<V: PartialEq> Predicate<V> for NotEqualTo<V> {
    #[inline]
    fn test(&self, value: &V) -> bool {
        *value != self.0
    }
}

/// Create a [`NotEqualTo`] predicate.
pub fn ne<V: PartialEq>(value: V) -> NotEqualTo<V> {
    NotEqualTo(value)
}

/// Tests `predicate` against the key extracted by `key`.
///
/// The key function must return an owned (or `Copy`) value.
#[derive(Clone, Copy, Debug)]
pub struct By<F, P> {
    key: F,
    predicate: P,
}

impl<T: ?Sized, K, F, P> Predicate<T> for By<F, P>
where
    F: Fn(&T) -> K,
    P: Predicate<K>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.predicate.test(&(self.key)(value))
    }
}

/// Create a [`By`] predicate from a key function and a predicate on the key.
///
/// # Example
///
/// ```rust
/// use sifter::predicate::*;
///
/// let short = by(|s: &String| s.len(), |n: &usize| *n < 4);
/// assert!(short.test(&"abc".to_string()));
/// assert!(!short.test(&"abcd".to_string()));
/// ```
pub fn by<F, P>(key: F, predicate: P) -> By<F, P> {
    By { key, predicate }
}
