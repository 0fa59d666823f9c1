//! Eager, order-preserving sequence transformations
//!
//! A [`Sequence`] owns an ordered backing `Vec`. Every transformation walks the
//! current backing sequence once, start to finish, and returns a new
//! `Sequence` holding a freshly materialized result. Nothing is deferred: side
//! effects in the supplied functions happen during the call that receives
//! them, not when the result is later consumed.
//!
//! # Example
//!
//! ```rust
//! use sifter::Sequence;
//!
//! let numbers = Sequence::new(1..=3);
//!
//! assert_eq!(numbers.filter(|x: &i32| x % 2 == 0).into_vec(), vec![2]);
//! assert_eq!(numbers.map(|x| x * 2).into_vec(), vec![2, 4, 6]);
//! assert_eq!(
//!     numbers.flat_map(|x| [*x, x + 10]).into_vec(),
//!     vec![1, 11, 2, 12, 3, 13]
//! );
//!
//! // The source is untouched and can be traversed again.
//! let mut seen = Vec::new();
//! numbers.for_every(|x| seen.push(*x));
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

mod collect;
mod fallible;
#[cfg(feature = "serde")]
mod serde_impl;

use std::ops::Index;

use crate::predicate::Predicate;

/// An immutable, eagerly materialized wrapper over an ordered collection.
///
/// Cloning a `Sequence` clones its backing `Vec`; two sequences never share
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<E> {
    items: Vec<E>,
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_transform(op: &'static str, input_len: usize, output_len: usize) {
    tracing::trace!(op, input_len, output_len, "sequence transformed");
}

impl<E> Sequence<E> {
    /// Build a sequence from any finite ordered source.
    ///
    /// The source is drained into a private backing `Vec`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let letters = Sequence::new("abc".chars());
    /// assert_eq!(letters.len(), 3);
    /// ```
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            items: source.into_iter().collect(),
        }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a sequence holding clones of the borrowed elements.
    ///
    /// Later changes to `source` are not visible through the sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let mut origin = vec![String::from("a"), String::from("b")];
    /// let seq = Sequence::cloned_from(&origin);
    /// origin.push(String::from("c"));
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn cloned_from(source: &[E]) -> Self
    where
        E: Clone,
    {
        Self {
            items: source.to_vec(),
        }
    }

    /// Build a sequence holding copies of the borrowed elements.
    pub fn copied_from(source: &[E]) -> Self
    where
        E: Copy,
    {
        Self {
            items: source.to_vec(),
        }
    }

    /// Number of elements in the backing sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the backing sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the backing sequence.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&E> {
        self.items.first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&E> {
        self.items.last()
    }

    /// Consume the sequence, returning the backing `Vec`.
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }

    /// Iterate the backing sequence in order.
    ///
    /// Iteration borrows the sequence, so it can be restarted any number of
    /// times without re-running the transformation that produced it.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Keep the elements for which `predicate` holds, in their original order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::predicate::*;
    /// use sifter::Sequence;
    ///
    /// let seq = Sequence::new(1..=10);
    /// let picked = seq.filter((|x: &i32| *x > 3).and(|x: &i32| *x < 8));
    /// assert_eq!(picked.into_vec(), vec![4, 5, 6, 7]);
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Sequence<E>
    where
        E: Clone,
        P: Predicate<E>,
    {
        let items: Vec<E> = self
            .items
            .iter()
            .filter(|e| predicate.test(e))
            .cloned()
            .collect();

        #[cfg(feature = "tracing")]
        trace_transform("filter", self.items.len(), items.len());

        Sequence { items }
    }

    /// Apply `f` to every element, in order, exactly once each.
    ///
    /// The result always has the same length as `self`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let labels = Sequence::new(1..=3).map(|n| format!("Str-{}", n));
    /// assert_eq!(labels.into_vec(), vec!["Str-1", "Str-2", "Str-3"]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Sequence<U>
    where
        F: FnMut(&E) -> U,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for e in &self.items {
            items.push(f(e));
        }

        #[cfg(feature = "tracing")]
        trace_transform("map", self.items.len(), items.len());

        Sequence { items }
    }

    /// Map every element to an inner ordered source and concatenate the
    /// results, in outer order.
    ///
    /// Inner sources that yield nothing contribute nothing. Any
    /// `IntoIterator` works as the inner source, including `Sequence` itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let orders = Sequence::new([vec!["Laptop", "Mouse"], vec![], vec!["Headphones"]]);
    /// let items = orders.flat_map(|order| order.clone());
    /// assert_eq!(items.into_vec(), vec!["Laptop", "Mouse", "Headphones"]);
    /// ```
    pub fn flat_map<U, I, F>(&self, mut f: F) -> Sequence<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&E) -> I,
    {
        let mut items = Vec::new();
        for e in &self.items {
            items.extend(f(e));
        }

        #[cfg(feature = "tracing")]
        trace_transform("flat_map", self.items.len(), items.len());

        Sequence { items }
    }

    /// Invoke `action` on every element, in order, for its side effect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let mut total = 0;
    /// Sequence::new([1, 2, 3]).for_every(|x| total += x);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_every<F>(&self, mut action: F)
    where
        F: FnMut(&E),
    {
        for e in &self.items {
            action(e);
        }
    }

    /// Like [`filter`](Self::filter), but moves the kept elements out of
    /// `self` instead of cloning them.
    pub fn into_filter<P>(self, predicate: P) -> Sequence<E>
    where
        P: Predicate<E>,
    {
        #[cfg(feature = "tracing")]
        let input_len = self.items.len();

        let items: Vec<E> = self
            .items
            .into_iter()
            .filter(|e| predicate.test(e))
            .collect();

        #[cfg(feature = "tracing")]
        trace_transform("into_filter", input_len, items.len());

        Sequence { items }
    }

    /// Like [`map`](Self::map), but hands each element to `f` by value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let names = Sequence::new([String::from("ann"), String::from("bo")]);
    /// let upper = names.into_map(|s| s.to_uppercase());
    /// assert_eq!(upper.into_vec(), vec!["ANN", "BO"]);
    /// ```
    pub fn into_map<U, F>(self, f: F) -> Sequence<U>
    where
        F: FnMut(E) -> U,
    {
        let items: Vec<U> = self.items.into_iter().map(f).collect();

        #[cfg(feature = "tracing")]
        trace_transform("into_map", items.len(), items.len());

        Sequence { items }
    }

    /// Like [`flat_map`](Self::flat_map), but hands each element to `f` by value.
    pub fn into_flat_map<U, I, F>(self, f: F) -> Sequence<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(E) -> I,
    {
        #[cfg(feature = "tracing")]
        let input_len = self.items.len();

        let items: Vec<U> = self.items.into_iter().flat_map(f).collect();

        #[cfg(feature = "tracing")]
        trace_transform("into_flat_map", input_len, items.len());

        Sequence { items }
    }
}

impl<E> Default for Sequence<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<Vec<E>> for Sequence<E> {
    fn from(items: Vec<E>) -> Self {
        Self { items }
    }
}

impl<E, const N: usize> From<[E; N]> for Sequence<E> {
    fn from(items: [E; N]) -> Self {
        Self::new(items)
    }
}

impl<E> From<Sequence<E>> for Vec<E> {
    fn from(sequence: Sequence<E>) -> Self {
        sequence.items
    }
}

impl<E> FromIterator<E> for Sequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<E> IntoIterator for Sequence<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Sequence<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> AsRef<[E]> for Sequence<E> {
    fn as_ref(&self) -> &[E] {
        &self.items
    }
}

impl<E> Index<usize> for Sequence<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
