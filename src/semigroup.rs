//! Semigroup trait for associative merging
//!
//! A Semigroup is a type with an associative binary operation. Sequences use
//! it as their merge step: concatenating the results of two ordered halves
//! gives the same sequence however the halves were split.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use sifter::{Semigroup, Sequence};
//!
//! let left = Sequence::new([1, 2]);
//! let right = Sequence::new([3]);
//! assert_eq!(left.combine(right).into_vec(), vec![1, 2, 3]);
//!
//! assert_eq!("ab".to_string().combine("c".to_string()), "abc");
//! ```

use crate::Sequence;

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both operands by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<E> Semigroup for Sequence<E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<E> Sequence<E> {
    /// Append `other` after `self`, preserving both orders.
    ///
    /// # Example
    ///
    /// ```
    /// use sifter::Sequence;
    ///
    /// let joined = Sequence::new(["a"]).concat(Sequence::new(["b", "c"]));
    /// assert_eq!(joined.into_vec(), vec!["a", "b", "c"]);
    /// ```
    pub fn concat(self, other: Self) -> Self {
        Sequence::from(self.into_vec().combine(other.into_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_string_semigroup() {
        let s = String::from("Hello, ").combine(String::from("World!"));
        assert_eq!(s, "Hello, World!");
    }

    #[test]
    fn test_sequence_combine_is_associative() {
        let a = Sequence::new([1, 2]);
        let b = Sequence::new([3]);
        let c = Sequence::new([4, 5]);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
        assert_eq!(left.into_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_combine_with_empty() {
        let a = Sequence::new([1, 2]);
        assert_eq!(a.clone().combine(Sequence::empty()), a);
        assert_eq!(Sequence::empty().combine(a.clone()), a);
    }
}
