//! Ordered rose trees.
//!
//! A [`Tree`] holds one item and an ordered list of child trees. Mapping
//! with [`Tree::select`] keeps the exact shape: the same number of children,
//! in the same order, at every level.
//!
//! Every traversal runs on an explicit stack rather than recursion: mapping,
//! equality, hashing, cloning, dropping, `Display` and `Debug` formatting,
//! [`Preorder`] iteration and, with the `serde` feature, serialization in
//! both directions. Tree depth is limited by memory, not by the call stack.
//!
//! # Examples
//!
//! ```rust
//! use functorial::tree::Tree;
//!
//! let tree = Tree::create(-32, [Tree::leaf(0)]);
//! assert_eq!(tree.select(|x| *x), tree);
//!
//! let g = |i: &i32| i.to_string();
//! let f = |s: &String| s.len() % 2 == 0;
//! assert_eq!(tree.select(g).select(f), tree.select(|i| f(&g(i))));
//! ```

mod iter;
mod rose;

pub use iter::Preorder;
pub use rose::Tree;

/// Number of traversal stack entries kept inline before spilling to the heap.
const TRAVERSAL_INLINE: usize = 16;
