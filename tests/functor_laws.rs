//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(g).fmap(f) == fa.fmap(|x| f(g(x)))`
//!
//! `Tree` maps through `FunctorMut` and its own `select`; both are checked
//! against the same laws.

#![cfg(all(feature = "control", feature = "tree"))]

use functorial::control::{Either, Maybe};
use functorial::tree::Tree;
use functorial::typeclass::{Functor, FunctorMut, Identity};
use proptest::prelude::*;

fn arb_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn arb_maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from)
}

fn arb_either_i32() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,10}".prop_map(Either::Left),
    ]
}

fn arb_tree_i32() -> impl Strategy<Value = Tree<i32>> {
    any::<i32>()
        .prop_map(Tree::leaf)
        .prop_recursive(6, 64, 5, |inner| {
            (any::<i32>(), prop::collection::vec(inner, 0..5))
                .prop_map(|(item, children)| Tree::new(item, children))
        })
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_identity_law(value: i32) {
        let wrapped = Identity::new(value);
        prop_assert_eq!(wrapped.fmap(|x| x), wrapped);
    }

    /// Composition Law for Identity<i32>: render then reverse the digits
    #[test]
    fn prop_identity_composition_law(value: i32) {
        let render = |n: i32| n.to_string();
        let reverse = |s: String| s.chars().rev().collect::<String>();

        let left = Identity::new(value).fmap(render).fmap(reverse);
        let right = Identity::new(value).fmap(|x| reverse(render(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in arb_maybe_i32()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in arb_maybe_i32()) {
        let render = |n: i32| n.to_string();
        let even_length = |s: String| s.len() % 2 == 0;

        let left = value.fmap(render).fmap(even_length);
        let right = value.fmap(|x| even_length(render(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_string_composition_law(value in arb_maybe_string()) {
        let length = |s: String| s.len();
        let double = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(length).fmap(double);
        let right = value.fmap(|x| double(length(x)));

        prop_assert_eq!(left, right);
    }

    /// `select` is the same mapping as `fmap`
    #[test]
    fn prop_maybe_select_agrees_with_fmap(value in arb_maybe_i32()) {
        prop_assert_eq!(value.select(i64::from), value.fmap(i64::from));
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in arb_either_i32()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_either_composition_law(value in arb_either_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// The inherent `map` satisfies the same laws as `fmap`
    #[test]
    fn prop_either_map_composition_law(value in arb_either_i32()) {
        let render = |n: i32| n.to_string();
        let length = |s: String| s.len();

        let left = value.clone().map(render).map(length);
        let right = value.map(|x| length(render(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_fmap_mut_identity_law(value in arb_either_i32()) {
        prop_assert_eq!(value.clone().fmap_mut(|x| x), value);
    }
}

// =============================================================================
// Tree<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_tree_identity_law(tree in arb_tree_i32()) {
        prop_assert_eq!(tree.select(|x| *x), tree.clone());
        prop_assert_eq!(tree.fmap_ref_mut(|x| *x), tree);
    }

    #[test]
    fn prop_tree_composition_law(tree in arb_tree_i32()) {
        let render = |n: &i32| n.to_string();
        let even_length = |s: &String| s.len() % 2 == 0;

        let left = tree.select(render).select(even_length);
        let right = tree.select(|x| even_length(&render(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_tree_fmap_mut_composition_law(tree in arb_tree_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = tree.clone().fmap_mut(function1).fmap_mut(function2);
        let right = tree.fmap_mut(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Mapping never changes the number of nodes or the depth
    #[test]
    fn prop_tree_select_preserves_shape(tree in arb_tree_i32()) {
        let mapped = tree.select(|x| i64::from(*x));
        prop_assert_eq!(mapped.size(), tree.size());
        prop_assert_eq!(mapped.depth(), tree.depth());
    }
}
