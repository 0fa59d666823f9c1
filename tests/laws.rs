//! Property-based tests for predicate algebra and sequence transformation laws.
//!
//! Predicates:
//! - **Double negation**: `p.negate().negate() == p`
//! - **And/Or truth tables**: `and_of(p, q) == p && q`, `or_of(p, q) == p || q`
//! - **De Morgan**: `!(p || q) == !p && !q`, `!(p && q) == !p || !q`
//! - **Short-circuit**: the right operand is skipped when the left decides
//!
//! The algebraic laws are checked both on fixed predicates and on predicates
//! built from generated thresholds and residues.
//!
//! Sequences:
//! - **Filter idempotence**: `s.filter(p).filter(p) == s.filter(p)`
//! - **Map identity**: `s.map(id) == s`
//! - **FlatMap unit**: `s.flat_map(|e| [e]) == s`
//! - **Length**: `len(map) == len(s)`, `len(filter) <= len(s)`

use proptest::prelude::*;
use sifter::predicate::*;
use sifter::testing::unreachable_predicate;
use sifter::Sequence;

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

fn divisible_by_three(x: &i32) -> bool {
    x % 3 == 0
}

fn is_positive(x: &i32) -> bool {
    *x > 0
}

// =============================================================================
// Predicate laws
// =============================================================================

proptest! {
    /// Negating twice gives back the original predicate
    #[test]
    fn prop_double_negation(x in any::<i32>()) {
        prop_assert_eq!(is_even.negate().negate().test(&x), is_even(&x));
        prop_assert_eq!(negate(negate(is_positive)).test(&x), is_positive(&x));
    }

    /// and/or follow the boolean truth tables, in both call shapes
    #[test]
    fn prop_truth_tables(x in any::<i32>()) {
        let (p, q) = (is_even(&x), divisible_by_three(&x));

        prop_assert_eq!(and_of(is_even, divisible_by_three).test(&x), p && q);
        prop_assert_eq!(or_of(is_even, divisible_by_three).test(&x), p || q);
        prop_assert_eq!(is_even.and(divisible_by_three).test(&x), p && q);
        prop_assert_eq!(is_even.or(divisible_by_three).test(&x), p || q);
    }

    /// !(p || q) == !p && !q
    #[test]
    fn prop_de_morgan_or(x in any::<i32>()) {
        let left = negate(or_of(is_even, is_positive));
        let right = and_of(negate(is_even), negate(is_positive));
        prop_assert_eq!(left.test(&x), right.test(&x));
    }

    /// !(p && q) == !p || !q
    #[test]
    fn prop_de_morgan_and(x in any::<i32>()) {
        let left = negate(and_of(is_even, is_positive));
        let right = or_of(negate(is_even), negate(is_positive));
        prop_assert_eq!(left.test(&x), right.test(&x));
    }

    /// Truth value does not depend on grouping or operand order
    #[test]
    fn prop_associative_and_commutative(x in any::<i32>()) {
        prop_assert_eq!(
            is_even.and(is_positive).and(divisible_by_three).test(&x),
            is_even.and(is_positive.and(divisible_by_three)).test(&x)
        );
        prop_assert_eq!(
            is_even.or(is_positive).or(divisible_by_three).test(&x),
            is_even.or(is_positive.or(divisible_by_three)).test(&x)
        );
        prop_assert_eq!(is_even.and(is_positive).test(&x), is_positive.and(is_even).test(&x));
        prop_assert_eq!(is_even.or(is_positive).test(&x), is_positive.or(is_even).test(&x));
    }

    /// The right operand never runs when the left one decides
    #[test]
    fn prop_short_circuit(x in any::<i32>()) {
        let and_never = and_of(|_: &i32| false, unreachable_predicate());
        let or_always = or_of(|_: &i32| true, unreachable_predicate());
        prop_assert!(!and_never.test(&x));
        prop_assert!(or_always.test(&x));
    }
}

// =============================================================================
// Laws over generated predicates
// =============================================================================

/// A threshold predicate chosen by the test input.
fn above(threshold: i32) -> impl Predicate<i32> + Copy {
    move |x: &i32| *x > threshold
}

/// A residue predicate chosen by the test input.
fn congruent(modulus: i32, residue: i32) -> impl Predicate<i32> + Copy {
    move |x: &i32| x.rem_euclid(modulus) == residue.rem_euclid(modulus)
}

proptest! {
    /// Double negation holds for any threshold
    #[test]
    fn prop_generated_double_negation(x in any::<i32>(), t in any::<i32>()) {
        let p = above(t);
        prop_assert_eq!(p.negate().negate().test(&x), p.test(&x));
        prop_assert_eq!(negate(negate(p)).test(&x), x > t);
    }

    /// and/or agree with the boolean operators on generated operands
    #[test]
    fn prop_generated_truth_tables(
        x in any::<i32>(),
        t in any::<i32>(),
        m in 1..16i32,
        r in any::<i32>(),
    ) {
        let (p, q) = (above(t), congruent(m, r));
        let (a, b) = (p.test(&x), q.test(&x));

        prop_assert_eq!(and_of(p, q).test(&x), a && b);
        prop_assert_eq!(or_of(p, q).test(&x), a || b);
        prop_assert_eq!(p.and(q).test(&x), a && b);
        prop_assert_eq!(p.or(q).test(&x), a || b);
    }

    /// De Morgan holds on generated operands, in both directions
    #[test]
    fn prop_generated_de_morgan(
        x in any::<i32>(),
        t in any::<i32>(),
        m in 1..16i32,
        r in any::<i32>(),
    ) {
        let (p, q) = (above(t), congruent(m, r));
        prop_assert_eq!(
            negate(or_of(p, q)).test(&x),
            and_of(negate(p), negate(q)).test(&x)
        );
        prop_assert_eq!(
            negate(and_of(p, q)).test(&x),
            or_of(negate(p), negate(q)).test(&x)
        );
    }

    /// Filtering with a generated threshold keeps exactly the elements above it
    #[test]
    fn prop_generated_filter(
        values in prop::collection::vec(any::<i32>(), 0..64),
        t in any::<i32>(),
    ) {
        let seq = Sequence::new(values.clone());
        let expected: Vec<i32> = values.into_iter().filter(|x| *x > t).collect();
        prop_assert_eq!(seq.filter(above(t)).into_vec(), expected);
        prop_assert_eq!(seq.filter(above(t)).filter(above(t)), seq.filter(above(t)));
    }
}

// =============================================================================
// Sequence laws
// =============================================================================

proptest! {
    /// Filtering twice with a stable predicate equals filtering once
    #[test]
    fn prop_filter_idempotent(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq = Sequence::new(values);
        prop_assert_eq!(seq.filter(is_even).filter(is_even), seq.filter(is_even));
    }

    /// Mapping the identity preserves content and order
    #[test]
    fn prop_map_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq = Sequence::new(values.clone());
        prop_assert_eq!(seq.map(|x| *x).into_vec(), values);
    }

    /// Flat-mapping each element to a singleton is the identity
    #[test]
    fn prop_flat_map_singleton_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq = Sequence::new(values);
        prop_assert_eq!(seq.flat_map(|x| [*x]), seq);
    }

    /// map keeps the length, filter never grows it
    #[test]
    fn prop_length_laws(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq = Sequence::new(values);
        prop_assert_eq!(seq.map(|x| x.wrapping_mul(2)).len(), seq.len());
        prop_assert!(seq.filter(is_positive).len() <= seq.len());
    }

    /// filter keeps exactly the matching elements in their original order
    #[test]
    fn prop_filter_matches_iterator_filter(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let expected: Vec<i32> = values.iter().copied().filter(is_even).collect();
        prop_assert_eq!(Sequence::new(values).filter(is_even).into_vec(), expected);
    }

    /// flat_map is the concatenation of the inner sequences, in outer order
    #[test]
    fn prop_flat_map_is_concatenation(
        values in prop::collection::vec(any::<i16>(), 0..32),
    ) {
        let seq = Sequence::new(values.clone());
        let inner = |x: &i16| -> Vec<i32> {
            let x = i32::from(*x);
            if x % 2 == 0 { vec![] } else { vec![x, x + 10] }
        };

        let expected: Vec<i32> = values.iter().flat_map(inner).collect();
        prop_assert_eq!(seq.flat_map(inner).into_vec(), expected);
    }

    /// Transformations never touch the source sequence
    #[test]
    fn prop_source_untouched(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq = Sequence::new(values.clone());
        let _ = seq.filter(is_even);
        let _ = seq.map(|x| x.wrapping_add(1));
        let _ = seq.flat_map(|x| vec![*x; 2]);
        prop_assert_eq!(seq.into_vec(), values);
    }
}
