//! Predicate combinators
//!
//! A predicate is a boolean test over a value. Predicates compose with
//! `and`, `or` and `negate` into new predicates without evaluating anything;
//! evaluation happens only when [`Predicate::test`] is called, left to right,
//! with the usual short-circuit rules:
//!
//! - `p.and(q)` never evaluates `q` when `p` fails
//! - `p.or(q)` never evaluates `q` when `p` holds
//!
//! Both call shapes are available: the method form (`p.and(q)`) and the free
//! form (`and_of(p, q)`), with identical behavior.
//!
//! # Example
//!
//! ```rust
//! use sifter::predicate::*;
//!
//! let is_even = |x: &i32| x % 2 == 0;
//! let is_large = |x: &i32| *x > 100;
//!
//! let p = is_even.and(is_large.negate());
//! assert!(p.test(&4));
//! assert!(!p.test(&104));
//!
//! let q = or_of(is_even, eq(7));
//! assert!(q.test(&7));
//! ```
//!
//! # Laws
//!
//! For any predicates `p`, `q` and value `x`:
//!
//! ```text
//! p.negate().negate().test(x)  == p.test(x)
//! p.or(q).negate().test(x)     == p.negate().and(q.negate()).test(x)
//! p.and(q).negate().test(x)    == p.negate().or(q.negate()).test(x)
//! ```

mod combinators;
mod value;

pub mod prelude;

// Re-export core traits
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types and constructors
pub use combinators::{
    all_of, always, and_of, any_of, negate, never, none_of, or_of, And, BoxedPredicate, Constant,
    Not, Or, Quantified, Quantifier,
};

// Re-export value predicates
pub use value::{by, eq, ne, By, EqualTo, NotEqualTo};
