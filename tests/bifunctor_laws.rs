//! Property-based tests for Bifunctor laws on `Either`.
//!
//! - **Identity Law**: `bf.bimap(|x| x, |y| y) == bf`
//! - **Composition Law**: `bf.bimap(f1, g1).bimap(f2, g2) == bf.bimap(|x| f2(f1(x)), |y| g2(g1(y)))`
//! - **first/second Consistency**: `bimap(f, g) == first(f).second(g) == second(g).first(f)`

#![cfg(feature = "control")]

use functorial::control::Either;
use functorial::typeclass::{Bifunctor, Functor};
use proptest::prelude::*;

fn arb_either() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        "[a-z]{0,10}".prop_map(Either::Right),
    ]
}

proptest! {
    #[test]
    fn prop_either_bimap_identity_law(value in arb_either()) {
        let result = Bifunctor::bimap(value.clone(), |x| x, |y| y);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_either_bimap_composition_law(value in arb_either()) {
        let f1 = |n: i32| n.wrapping_add(1);
        let f2 = |n: i32| n.wrapping_mul(2);
        let g1 = |s: String| s.len();
        let g2 = |n: usize| n % 2 == 0;

        let left = value.clone().bimap(f1, g1).bimap(f2, g2);
        let right = value.bimap(|x| f2(f1(x)), |y| g2(g1(y)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_first_second_consistency(value in arb_either()) {
        let f = |n: i32| n.to_string();
        let g = |s: String| s.to_uppercase();

        let by_bimap = Bifunctor::bimap(value.clone(), f, g);
        let first_then_second = value.clone().first(f).second(g);
        let second_then_first = value.second(g).first(f);

        prop_assert_eq!(&by_bimap, &first_then_second);
        prop_assert_eq!(by_bimap, second_then_first);
    }

    /// `second` on a right-biased `Either` is the functor map
    #[test]
    fn prop_either_second_agrees_with_fmap(value in arb_either()) {
        let g = |s: String| s.len();
        prop_assert_eq!(value.clone().second(g), value.fmap(g));
    }

    /// `bimap_ref` borrows and matches the consuming `bimap`
    #[test]
    fn prop_either_bimap_ref_agrees_with_bimap(value in arb_either()) {
        let by_ref = value.bimap_ref(|n| i64::from(*n), String::len);
        let by_value = value.bimap(i64::from, |s| s.len());
        prop_assert_eq!(by_ref, by_value);
    }
}
