//! Depth-first traversal over every item of a tree.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::TRAVERSAL_INLINE;
use super::rose::Tree;

/// Pre-order iterator over the items of a [`Tree`].
///
/// Created by [`Tree::preorder`]. Pending subtrees live on a heap-backed
/// stack, so the iterator handles trees of any depth.
pub struct Preorder<'a, T> {
    pending: SmallVec<[&'a Tree<T>; TRAVERSAL_INLINE]>,
}

impl<'a, T> Preorder<'a, T> {
    pub(super) fn new(root: &'a Tree<T>) -> Self {
        let mut pending = SmallVec::new();
        pending.push(root);
        Self { pending }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children().iter().rev());
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), None)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

impl<T> Clone for Preorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_preorder_of_leaf_yields_single_item() {
        let leaf = Tree::leaf(42);
        let items: Vec<&i32> = leaf.preorder().collect();
        assert_eq!(items, vec![&42]);
    }

    #[rstest]
    fn test_preorder_visits_parent_before_children() {
        let tree = Tree::create(1, [Tree::create(2, [Tree::leaf(3)]), Tree::leaf(4)]);
        let items: Vec<i32> = tree.preorder().copied().collect();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_preorder_is_fused() {
        let leaf = Tree::leaf(0);
        let mut iterator = leaf.preorder();
        assert_eq!(iterator.next(), Some(&0));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }
}
