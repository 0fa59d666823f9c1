//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the `PredicateExt`
//! method forms (`and`, `or`, `negate`) and their free-function equivalents.

use std::fmt;

/// A composable boolean test over values of type T.
///
/// Any `Fn(&T) -> bool` is a predicate, so closures and the named combinator
/// types below are interchangeable wherever a predicate is expected.
///
/// # Example
///
/// ```rust
/// use sifter::predicate::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// let is_small = |x: &i32| *x < 10;
///
/// let p = is_even.and(is_small);
/// assert!(p.test(&4));
/// assert!(!p.test(&12));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Evaluate the rule against `value`.
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Every method builds a new predicate without evaluating anything; the
/// returned types are concrete, so composition does not allocate.
///
/// # Example
///
/// ```rust
/// use sifter::predicate::*;
///
/// let p = eq(3).or(eq(7)).negate();
/// assert!(p.test(&5));
/// assert!(!p.test(&7));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// `other` is only evaluated when `self` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
    /// assert!(p.test(&50));
    /// assert!(!p.test(&0));
    /// assert!(!p.test(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// `other` is only evaluated when `self` does not hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::predicate::*;
    ///
    /// let p = (|x: &i32| *x < 0).or(|x: &i32| *x > 100);
    /// assert!(p.test(&-5));
    /// assert!(p.test(&150));
    /// assert!(!p.test(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::predicate::*;
    ///
    /// let odd = (|x: &i32| x % 2 == 0).negate();
    /// assert!(odd.test(&3));
    /// assert!(!odd.test(&4));
    /// ```
    fn negate(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type of this predicate.
    ///
    /// Useful for storing predicates of different shapes side by side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::predicate::*;
    ///
    /// let rules: Vec<BoxedPredicate<'_, i32>> = vec![
    ///     eq(1).boxed(),
    ///     (|x: &i32| *x > 10).boxed(),
    /// ];
    /// assert!(rules.iter().any(|p| p.test(&11)));
    /// ```
    fn boxed<'a>(self) -> BoxedPredicate<'a, T>
    where
        Self: 'a,
    {
        BoxedPredicate(Box::new(self))
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must hold, evaluated left to right.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

/// OR combinator - either predicate must hold, evaluated left to right.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

/// Combine two independent predicates with AND logic.
///
/// Same semantics as [`PredicateExt::and`], for call sites without a
/// receiver predicate.
///
/// # Example
///
/// ```rust
/// use sifter::predicate::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// let is_positive = |x: &i32| *x > 0;
///
/// let p = and_of(is_even, is_positive);
/// assert!(p.test(&2));
/// assert!(!p.test(&-2));
/// ```
pub fn and_of<P1, P2>(first: P1, second: P2) -> And<P1, P2> {
    And(first, second)
}

/// Combine two independent predicates with OR logic.
///
/// Same semantics as [`PredicateExt::or`].
///
/// # Example
///
/// ```rust
/// use sifter::predicate::*;
///
/// let p = or_of(eq(1), eq(2));
/// assert!(p.test(&2));
/// assert!(!p.test(&3));
/// ```
pub fn or_of<P1, P2>(first: P1, second: P2) -> Or<P1, P2> {
    Or(first, second)
}

/// Invert a predicate. Same semantics as [`PredicateExt::negate`].
pub fn negate<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// A predicate with a fixed answer.
///
/// `always()` is the identity of `and`, `never()` the identity of `or`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant(pub bool);

impl<T: ?Sized> Predicate<T> for Constant {
    #[inline]
    fn test(&self, _value: &T) -> bool {
        self.0
    }
}

/// A predicate that holds for every value.
pub fn always() -> Constant {
    Constant(true)
}

/// A predicate that holds for no value.
pub fn never() -> Constant {
    Constant(false)
}

/// A type-erased predicate.
///
/// Created by [`PredicateExt::boxed`].
pub struct BoxedPredicate<'a, T: ?Sized>(Box<dyn Predicate<T> + 'a>);

impl<T: ?Sized> Predicate<T> for BoxedPredicate<'_, T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedPredicate(..)")
    }
}

/// How many members of a [`Quantified`] group must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantifier {
    /// Every member holds; the first miss decides.
    All,
    /// At least one member holds; the first hit decides.
    Any,
    /// No member holds; the first hit decides.
    NoMember,
}

/// A fixed-size group of same-typed predicates joined by one [`Quantifier`].
///
/// Members are evaluated left to right and evaluation stops as soon as the
/// outcome is known, so `all_of([p, q])` behaves like `p.and(q)`. Members must
/// share one type; mix shapes with [`PredicateExt::boxed`].
///
/// # Example
///
/// ```rust
/// use sifter::predicate::*;
///
/// let small_primes = any_of([eq(2), eq(3), eq(5), eq(7)]);
/// assert!(small_primes.test(&5));
/// assert!(!small_primes.test(&4));
///
/// let unreserved = none_of([eq(0), eq(1)]);
/// assert!(unreserved.test(&2));
///
/// let in_window = all_of([ne(3), ne(4)]);
/// assert!(!in_window.test(&4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantified<P, const N: usize> {
    quantifier: Quantifier,
    members: [P; N],
}

impl<P, const N: usize> Quantified<P, N> {
    /// Group `members` under `quantifier`.
    pub fn new(quantifier: Quantifier, members: [P; N]) -> Self {
        Self {
            quantifier,
            members,
        }
    }

    /// The quantifier joining the members.
    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }
}

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for Quantified<P, N> {
    fn test(&self, value: &T) -> bool {
        // the member outcome that settles the group early
        let decisive = !matches!(self.quantifier, Quantifier::All);
        for member in &self.members {
            if member.test(value) == decisive {
                return self.quantifier == Quantifier::Any;
            }
        }
        self.quantifier != Quantifier::Any
    }
}

/// Holds when every member holds. An empty group always holds.
pub fn all_of<P, const N: usize>(members: [P; N]) -> Quantified<P, N> {
    Quantified::new(Quantifier::All, members)
}

/// Holds when at least one member holds. An empty group never holds.
pub fn any_of<P, const N: usize>(members: [P; N]) -> Quantified<P, N> {
    Quantified::new(Quantifier::Any, members)
}

/// Holds when no member holds. An empty group always holds.
pub fn none_of<P, const N: usize>(members: [P; N]) -> Quantified<P, N> {
    Quantified::new(Quantifier::NoMember, members)
}
