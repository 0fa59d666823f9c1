//! Fallible transformations
//!
//! Each `try_*` operation mirrors its infallible counterpart, but the supplied
//! function returns a `Result`. The first `Err` stops the traversal and is
//! returned unchanged; the partially built backing sequence is dropped and
//! never exposed.

use super::Sequence;

#[cfg(feature = "tracing")]
fn trace_abort(op: &'static str, index: usize) {
    tracing::debug!(op, index, "sequence transformation aborted");
}

impl<E> Sequence<E> {
    /// Keep the elements for which `f` returns `Ok(true)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let seq = Sequence::new(["1", "22", "x", "4444"]);
    /// let short = seq.try_filter(|s| s.parse::<u32>().map(|n| n < 100));
    /// assert!(short.is_err());
    ///
    /// let seq = Sequence::new(["1", "22", "333"]);
    /// let short = seq.try_filter(|s| s.parse::<u32>().map(|n| n < 100));
    /// assert_eq!(short.unwrap().into_vec(), vec!["1", "22"]);
    /// ```
    pub fn try_filter<Err, F>(&self, mut f: F) -> Result<Sequence<E>, Err>
    where
        E: Clone,
        F: FnMut(&E) -> Result<bool, Err>,
    {
        let mut items = Vec::new();
        for (_index, e) in self.items.iter().enumerate() {
            let keep = f(e).inspect_err(|_| {
                #[cfg(feature = "tracing")]
                trace_abort("try_filter", _index);
            })?;
            if keep {
                items.push(e.clone());
            }
        }

        #[cfg(feature = "tracing")]
        super::trace_transform("try_filter", self.items.len(), items.len());

        Ok(Sequence { items })
    }

    /// Apply `f` to every element, stopping at the first error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::Sequence;
    ///
    /// let parsed = Sequence::new(["1", "2", "3"]).try_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed.unwrap().into_vec(), vec![1, 2, 3]);
    ///
    /// let parsed = Sequence::new(["1", "two", "3"]).try_map(|s| s.parse::<i32>());
    /// assert!(parsed.is_err());
    /// ```
    pub fn try_map<U, Err, F>(&self, mut f: F) -> Result<Sequence<U>, Err>
    where
        F: FnMut(&E) -> Result<U, Err>,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for (_index, e) in self.items.iter().enumerate() {
            let mapped = f(e).inspect_err(|_| {
                #[cfg(feature = "tracing")]
                trace_abort("try_map", _index);
            })?;
            items.push(mapped);
        }

        #[cfg(feature = "tracing")]
        super::trace_transform("try_map", self.items.len(), items.len());

        Ok(Sequence { items })
    }

    /// Flatten the inner sources produced by `f`, stopping at the first error.
    pub fn try_flat_map<U, I, Err, F>(&self, mut f: F) -> Result<Sequence<U>, Err>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&E) -> Result<I, Err>,
    {
        let mut items = Vec::new();
        for (_index, e) in self.items.iter().enumerate() {
            let inner = f(e).inspect_err(|_| {
                #[cfg(feature = "tracing")]
                trace_abort("try_flat_map", _index);
            })?;
            items.extend(inner);
        }

        #[cfg(feature = "tracing")]
        super::trace_transform("try_flat_map", self.items.len(), items.len());

        Ok(Sequence { items })
    }

    /// Invoke `action` on every element in order, stopping at the first error.
    ///
    /// Elements before the failing one have already been acted upon.
    pub fn try_for_every<Err, F>(&self, mut action: F) -> Result<(), Err>
    where
        F: FnMut(&E) -> Result<(), Err>,
    {
        for (_index, e) in self.items.iter().enumerate() {
            action(e).inspect_err(|_| {
                #[cfg(feature = "tracing")]
                trace_abort("try_for_every", _index);
            })?;
        }
        Ok(())
    }
}
