//! # Sifter
//!
//! Composable predicates and eager, order-preserving sequence transformations.
//!
//! Two small pieces that work well together:
//!
//! - [`predicate`]: boolean tests over a value that compose with `and`, `or`
//!   and `negate`, with short-circuit evaluation
//! - [`Sequence`]: an owned, ordered collection whose `filter`, `map` and
//!   `flat_map` each build a brand new sequence immediately
//!
//! ## Quick Example
//!
//! ```rust
//! use sifter::predicate::*;
//! use sifter::Sequence;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Color {
//!     Red,
//!     Blue,
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Car {
//!     make: &'static str,
//!     color: Color,
//! }
//!
//! let cars = Sequence::new([
//!     Car { make: "Toyota", color: Color::Red },
//!     Car { make: "Honda", color: Color::Red },
//!     Car { make: "Toyota", color: Color::Blue },
//! ]);
//!
//! let is_red = by(|c: &Car| c.color.clone(), eq(Color::Red));
//! let is_toyota = by(|c: &Car| c.make, eq("Toyota"));
//!
//! let picked = cars.filter(is_red.and(is_toyota)).map(|c| c.make);
//! assert_eq!(picked.into_vec(), vec!["Toyota"]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;
pub mod semigroup;
pub mod sequence;
pub mod testing;

// Re-exports
pub use predicate::{Predicate, PredicateExt};
pub use semigroup::Semigroup;
pub use sequence::Sequence;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
    pub use crate::semigroup::Semigroup;
    pub use crate::sequence::Sequence;
}
