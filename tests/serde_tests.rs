#![cfg(all(feature = "serde", feature = "control", feature = "tree"))]

//! Integration tests for serde support.
//!
//! These tests verify that every container serializes and deserializes
//! through JSON without loss.

use functorial::control::{Either, Maybe};
use functorial::tree::Tree;
use functorial::typeclass::Identity;
use rstest::rstest;

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_either_json_is_externally_tagged() {
    let right: Either<String, i32> = Either::Right(42);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":42}"#);
}

// =============================================================================
// Maybe Integration Tests
// =============================================================================

#[rstest]
#[case(Maybe::new("foo".to_string()), r#""foo""#)]
#[case(Maybe::empty(), "null")]
fn test_maybe_json_is_transparent(#[case] maybe: Maybe<String>, #[case] expected: &str) {
    let json = serde_json::to_string(&maybe).unwrap();
    assert_eq!(json, expected);

    let restored: Maybe<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, maybe);
}

// =============================================================================
// Identity Integration Tests
// =============================================================================

#[rstest]
fn test_identity_json_is_transparent() {
    let identity = Identity::new(1337);
    let json = serde_json::to_string(&identity).unwrap();
    assert_eq!(json, "1337");

    let restored: Identity<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, identity);
}

// =============================================================================
// Tree Integration Tests
// =============================================================================

#[rstest]
fn test_tree_json_roundtrip() {
    let tree = Tree::create(
        42,
        [
            Tree::create(1337, [Tree::leaf(-3)]),
            Tree::create(7, [Tree::leaf(-99), Tree::leaf(100), Tree::leaf(0)]),
        ],
    );
    let json = serde_json::to_string(&tree).unwrap();
    let restored: Tree<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, restored);
}

#[rstest]
fn test_tree_json_is_flat_preorder() {
    let tree = Tree::create(1, [Tree::create(2, [Tree::leaf(3)]), Tree::leaf(4)]);
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        "[[1,2],[2,1],[3,0],[4,0]]"
    );
}

#[rstest]
fn test_tree_deserializes_from_flat_preorder() {
    let tree: Tree<String> = serde_json::from_str(r#"[["foo",2],["bar",0],["corge",0]]"#).unwrap();
    assert_eq!(
        tree,
        Tree::create(
            "foo".to_string(),
            [Tree::leaf("bar".to_string()), Tree::leaf("corge".to_string())]
        )
    );
}

#[rstest]
#[case("[]")]
#[case("[[1,1]]")]
#[case("[[1,2],[2,0]]")]
#[case("[[1,0],[2,0]]")]
fn test_tree_rejects_malformed_sequence(#[case] json: &str) {
    assert!(serde_json::from_str::<Tree<i32>>(json).is_err());
}

#[rstest]
fn test_deep_tree_json_roundtrip() {
    let depth = 100_000;
    let mut tree = Tree::leaf(depth - 1);
    for item in (0..depth - 1).rev() {
        tree = Tree::create(item, [tree]);
    }

    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.starts_with("[[0,1],[1,1],"));

    let restored: Tree<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.depth(), 100_000);
    assert_eq!(restored, tree);
}
