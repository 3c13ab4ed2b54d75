//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

#![cfg(feature = "control")]

use functorial::control::{Either, Maybe};
use functorial::typeclass::{Identity, Monad};
use proptest::prelude::*;

fn arb_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn arb_either_i32() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,10}".prop_map(Either::Left),
    ]
}

fn halve_maybe(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::new(n / 2) } else { Maybe::empty() }
}

fn increment_maybe(n: i32) -> Maybe<i32> {
    n.checked_add(1).into()
}

fn halve_either(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Right(n / 2)
    } else {
        Either::Left(format!("odd: {n}"))
    }
}

fn increment_either(n: i32) -> Either<String, i32> {
    n.checked_add(1)
        .map_or_else(|| Either::Left("overflow".to_string()), Either::Right)
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity_law(value: i32) {
        let function = |n: i32| Identity::new(n.wrapping_mul(3));
        prop_assert_eq!(<Identity<()>>::pure(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_identity_right_identity_law(value: i32) {
        let wrapped = Identity::new(value);
        prop_assert_eq!(wrapped.flat_map(Identity::new), wrapped);
    }
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity_law(value: i32) {
        prop_assert_eq!(<Maybe<()>>::pure(value).flat_map(halve_maybe), halve_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity_law(value in arb_maybe_i32()) {
        prop_assert_eq!(value.flat_map(Maybe::new), value);
    }

    #[test]
    fn prop_maybe_associativity_law(value in arb_maybe_i32()) {
        let left = value.flat_map(halve_maybe).flat_map(increment_maybe);
        let right = value.flat_map(|x| halve_maybe(x).flat_map(increment_maybe));
        prop_assert_eq!(left, right);
    }

    /// `bind` is the same chaining as `flat_map`
    #[test]
    fn prop_maybe_bind_agrees_with_flat_map(value in arb_maybe_i32()) {
        prop_assert_eq!(value.bind(halve_maybe), value.flat_map(halve_maybe));
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity_law(value: i32) {
        let lifted = <Either<String, ()>>::pure(value);
        prop_assert_eq!(lifted.flat_map(halve_either), halve_either(value));
    }

    #[test]
    fn prop_either_right_identity_law(value in arb_either_i32()) {
        prop_assert_eq!(value.clone().flat_map(Either::Right), value);
    }

    #[test]
    fn prop_either_associativity_law(value in arb_either_i32()) {
        let left = value.clone().flat_map(halve_either).flat_map(increment_either);
        let right = value.flat_map(|x| halve_either(x).flat_map(increment_either));
        prop_assert_eq!(left, right);
    }

    /// A `Left` is returned unchanged no matter how many steps follow
    #[test]
    fn prop_either_left_short_circuits(message in "[a-z]{1,10}") {
        let start: Either<String, i32> = Either::Left(message.clone());
        let result = start
            .bind(halve_either)
            .bind(increment_either)
            .map(|n| n.wrapping_mul(2));
        prop_assert_eq!(result, Either::Left(message));
    }

    /// `flatten` of a nested value equals binding with the identity function
    #[test]
    fn prop_either_flatten_agrees_with_bind(value in arb_either_i32()) {
        let nested = value.clone().map(halve_either);
        prop_assert_eq!(nested.flatten(), value.bind(halve_either));
    }
}
