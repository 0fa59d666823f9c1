//! Predicate prelude for convenient imports
//!
//! ```rust
//! use sifter::predicate::prelude::*;
//!
//! let p = and_of(ne(0), |x: &i32| *x < 10);
//! assert!(p.test(&5));
//! ```

pub use super::combinators::{Predicate, PredicateExt};

pub use super::combinators::{always, and_of, negate, never, or_of, And, Not, Or};

pub use super::value::{by, eq, ne};
