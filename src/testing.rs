//! Testing utilities for predicates and sequences
//!
//! Test doubles are passed in like any other function, so assertions never
//! depend on captured console output.
//!
//! # Examples
//!
//! ## Recording a traversal
//!
//! ```rust
//! use sifter::testing::Recorder;
//! use sifter::Sequence;
//!
//! let recorder = Recorder::new();
//! Sequence::new([1, 2, 3]).for_every(recorder.sink());
//! assert_eq!(recorder.recorded(), vec![1, 2, 3]);
//! ```
//!
//! ## Observing short-circuit evaluation
//!
//! ```rust
//! use sifter::predicate::*;
//! use sifter::testing::{counting, unreachable_predicate};
//!
//! let (right, calls) = counting(|x: &i32| *x > 0);
//! let p = (|x: &i32| x % 2 == 0).and(right);
//! p.test(&3);
//! assert_eq!(calls.get(), 0);
//!
//! // never evaluated, so never panics
//! let q = or_of(|x: &i32| *x == 3, unreachable_predicate());
//! assert!(q.test(&3));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::predicate::Predicate;

/// A cloneable sink that records the elements it is handed.
///
/// Every clone and every [`sink`](Recorder::sink) shares one buffer.
#[derive(Debug)]
pub struct Recorder<T> {
    seen: Rc<RefCell<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A callback that clones each element it receives into the recorder.
    pub fn sink(&self) -> impl FnMut(&T) + 'static
    where
        T: Clone + 'static,
    {
        let seen = Rc::clone(&self.seen);
        move |value: &T| seen.borrow_mut().push(value.clone())
    }

    /// A copy of everything recorded so far, in arrival order.
    pub fn recorded(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.seen.borrow().clone()
    }

    /// Drain the recorded elements, leaving the recorder empty.
    pub fn take(&self) -> Vec<T> {
        self.seen.take()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            seen: Rc::clone(&self.seen),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared invocation counter handed out by [`counting`].
#[derive(Clone, Debug, Default)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    /// Number of invocations so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// A predicate wrapper that counts how often it is evaluated.
#[derive(Clone, Debug)]
pub struct Counting<P> {
    inner: P,
    calls: CallCount,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Counting<P> {
    fn test(&self, value: &T) -> bool {
        let counter = &self.calls.0;
        counter.set(counter.get() + 1);
        self.inner.test(value)
    }
}

/// Wrap `predicate` so that its evaluations can be counted.
///
/// Returns the wrapped predicate and a handle to its counter.
pub fn counting<P>(predicate: P) -> (Counting<P>, CallCount) {
    let calls = CallCount::default();
    (
        Counting {
            inner: predicate,
            calls: calls.clone(),
        },
        calls,
    )
}

/// A predicate that panics whenever it is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct Unreachable;

impl<T: ?Sized> Predicate<T> for Unreachable {
    fn test(&self, _value: &T) -> bool {
        panic!("predicate evaluated where short-circuit should have skipped it")
    }
}

/// Create an [`Unreachable`] predicate.
pub fn unreachable_predicate() -> Unreachable {
    Unreachable
}

/// Assert that a sequence holds exactly the given elements, in order.
///
/// # Example
///
/// ```rust
/// use sifter::{assert_sequence, Sequence};
///
/// let seq = Sequence::new([1, 2, 3]).map(|x| x * 2);
/// assert_sequence!(seq, [2, 4, 6]);
/// ```
#[macro_export]
macro_rules! assert_sequence {
    ($sequence:expr, [$($element:expr),+ $(,)?]) => {
        assert_eq!($sequence.as_slice(), [$($element),+].as_slice());
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Sequence<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(any_with::<T>(args), 0..32)
            .prop_map(crate::Sequence::from)
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;
    use crate::Sequence;

    #[test]
    fn recorder_shares_buffer_across_clones() {
        let recorder = Recorder::new();
        let other = recorder.clone();
        let mut sink = other.sink();
        sink(&1);
        sink(&2);
        assert_eq!(recorder.recorded(), vec![1, 2]);
        assert_eq!(recorder.take(), vec![1, 2]);
        assert!(other.recorded().is_empty());
    }

    #[test]
    fn counting_counts_each_evaluation() {
        let (p, calls) = counting(|x: &i32| *x > 1);
        let seq = Sequence::new([1, 2, 3]).filter(p);
        assert_eq!(seq.len(), 2);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    #[should_panic(expected = "short-circuit")]
    fn unreachable_predicate_panics_when_evaluated() {
        let p = (|_: &i32| true).and(unreachable_predicate());
        p.test(&1);
    }

    #[test]
    fn assert_sequence_macro() {
        assert_sequence!(Sequence::new(["a", "b"]), ["a", "b"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn sequence_arbitrary_is_bounded(seq in any::<Sequence<i32>>()) {
                prop_assert!(seq.len() < 32);
            }
        }
    }
}
