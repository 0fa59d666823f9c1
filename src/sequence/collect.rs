//! Terminal reductions over a sequence
//!
//! Grouping, counting, joining and sorting, plus the general mutable
//! reduction (`collect_with`) they can all be expressed with. Each walks the
//! backing sequence once, in order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;

use super::Sequence;
use crate::Semigroup;

impl<E> Sequence<E> {
    /// Mutable reduction: create a container with `supplier`, then feed it
    /// every element in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let words = Sequence::new(["apple", "banana", "cherry"]);
    /// let total = words.collect_with(|| 0usize, |acc, w| *acc += w.len());
    /// assert_eq!(total, 17);
    /// ```
    pub fn collect_with<C, S, A>(&self, supplier: S, mut accumulator: A) -> C
    where
        S: FnOnce() -> C,
        A: FnMut(&mut C, &E),
    {
        let mut container = supplier();
        for e in &self.items {
            accumulator(&mut container, e);
        }
        container
    }

    /// Mutable reduction in ordered chunks of `chunk_size` elements.
    ///
    /// Each chunk is reduced into its own container, and the partial
    /// containers are merged left to right with `combiner`. Because the merge
    /// order is the chunk order, the result does not depend on how the work is
    /// split as long as `combiner` is associative. A `chunk_size` of zero is
    /// treated as one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let words = Sequence::new(["apple", "banana", "cherry", "date"]);
    /// let csv = words.reduce_with_combiner(
    ///     String::new,
    ///     |sb, w| {
    ///         if !sb.is_empty() {
    ///             sb.push_str(", ");
    ///         }
    ///         sb.push_str(w);
    ///     },
    ///     |mut left, right| {
    ///         if !left.is_empty() && !right.is_empty() {
    ///             left.push_str(", ");
    ///         }
    ///         left.push_str(&right);
    ///         left
    ///     },
    ///     3,
    /// );
    /// assert_eq!(csv, "apple, banana, cherry, date");
    /// ```
    pub fn reduce_with_combiner<C, S, A, M>(
        &self,
        supplier: S,
        mut accumulator: A,
        mut combiner: M,
        chunk_size: usize,
    ) -> C
    where
        S: Fn() -> C,
        A: FnMut(&mut C, &E),
        M: FnMut(C, C) -> C,
    {
        let mut merged: Option<C> = None;
        for chunk in self.items.chunks(chunk_size.max(1)) {
            let mut partial = supplier();
            for e in chunk {
                accumulator(&mut partial, e);
            }
            merged = Some(match merged {
                Some(left) => combiner(left, partial),
                None => partial,
            });
        }
        merged.unwrap_or_else(supplier)
    }

    /// Combine all elements left to right, or `None` when empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let parts = Sequence::new([vec![1], vec![2, 3], vec![]]);
    /// assert_eq!(parts.fold_combine(), Some(vec![1, 2, 3]));
    /// ```
    pub fn fold_combine(&self) -> Option<E>
    where
        E: Semigroup + Clone,
    {
        self.items.iter().cloned().reduce(Semigroup::combine)
    }

    /// Partition the elements by key.
    ///
    /// Each group keeps the relative order of its elements; groups are
    /// ordered by key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let users = Sequence::new([("Alice", "London"), ("Charlie", "New York"), ("Bob", "London")]);
    /// let by_city = users.group_by(|(_, city)| *city);
    /// assert_eq!(by_city["London"].as_slice(), &[("Alice", "London"), ("Bob", "London")]);
    /// assert_eq!(by_city["New York"].len(), 1);
    /// ```
    pub fn group_by<K, F>(&self, mut key: F) -> BTreeMap<K, Sequence<E>>
    where
        E: Clone,
        K: Ord,
        F: FnMut(&E) -> K,
    {
        let mut groups: BTreeMap<K, Vec<E>> = BTreeMap::new();
        for e in &self.items {
            groups.entry(key(e)).or_default().push(e.clone());
        }
        groups
            .into_iter()
            .map(|(k, items)| (k, Sequence { items }))
            .collect()
    }

    /// Count the elements per key.
    pub fn count_by<K, F>(&self, mut key: F) -> BTreeMap<K, usize>
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        let mut counts = BTreeMap::new();
        for e in &self.items {
            *counts.entry(key(e)).or_insert(0) += 1;
        }
        counts
    }

    /// Render the elements separated by `separator`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let names = Sequence::new(["Alice", "Charlie", "Bob"]);
    /// assert_eq!(names.join(", "), "Alice, Charlie, Bob");
    /// assert_eq!(names.join_with(", ", "[", "]"), "[Alice, Charlie, Bob]");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        E: Display,
    {
        self.join_with(separator, "", "")
    }

    /// Render the elements separated by `separator`, wrapped in `prefix` and
    /// `suffix`.
    pub fn join_with(&self, separator: &str, prefix: &str, suffix: &str) -> String
    where
        E: Display,
    {
        let mut out = String::from(prefix);
        for (index, e) in self.items.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(&e.to_string());
        }
        out.push_str(suffix);
        out
    }

    /// A new sequence sorted by `compare`. The sort is stable.
    pub fn sorted_by<F>(&self, compare: F) -> Sequence<E>
    where
        E: Clone,
        F: FnMut(&E, &E) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(compare);

        #[cfg(feature = "tracing")]
        super::trace_transform("sorted_by", self.items.len(), items.len());

        Sequence { items }
    }

    /// A new sequence sorted by the key extracted by `key`. The sort is stable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let gas = Sequence::new([("civic", 0.4_f64), ("corolla", 0.9), ("golf", 0.1)]);
    /// let by_level = gas.sorted_by(|a, b| a.1.total_cmp(&b.1));
    /// assert_eq!(by_level.map(|c| c.0).into_vec(), vec!["golf", "civic", "corolla"]);
    ///
    /// let by_len = gas.sorted_by_key(|c| c.0.len());
    /// assert_eq!(by_len.first().map(|c| c.0), Some("golf"));
    /// ```
    pub fn sorted_by_key<K, F>(&self, key: F) -> Sequence<E>
    where
        E: Clone,
        K: Ord,
        F: FnMut(&E) -> K,
    {
        let mut items = self.items.clone();
        items.sort_by_key(key);

        #[cfg(feature = "tracing")]
        super::trace_transform("sorted_by_key", self.items.len(), items.len());

        Sequence { items }
    }
}
