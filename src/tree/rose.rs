//! The rose tree node type.

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use super::TRAVERSAL_INLINE;
use super::iter::Preorder;
use crate::error::ArgumentNullError;
use crate::typeclass::{FunctorMut, TypeConstructor};

/// An ordered rose tree: one item and any number of child trees.
///
/// A tree owns its children outright, so subtrees are never shared and
/// cycles cannot be built. Values are immutable once constructed; every
/// transformation returns a new tree.
///
/// Iterating a `&Tree<T>` yields its direct children only. Use
/// [`preorder`](Self::preorder) to visit every item.
///
/// With the `serde` feature a tree serializes as a flat pre-order sequence
/// of `[item, child_count]` pairs, so its depth never reaches the
/// serializer's recursion.
///
/// # Examples
///
/// ```rust
/// use functorial::tree::Tree;
///
/// let tree = Tree::create(99, [Tree::leaf(90), Tree::leaf(2)]);
/// assert_eq!(tree.len(), 2);
///
/// let children: Vec<i32> = tree.iter().map(|child| *child.item()).collect();
/// assert_eq!(children, vec![90, 2]);
/// ```
pub struct Tree<T> {
    item: T,
    children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a tree from an item and its children, in order.
    #[inline]
    pub const fn new(item: T, children: Vec<Self>) -> Self {
        Self { item, children }
    }

    /// Creates a tree with no children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::tree::Tree;
    ///
    /// let leaf = Tree::leaf(42);
    /// assert!(leaf.is_leaf());
    /// assert_eq!(leaf.item(), &42);
    /// ```
    #[inline]
    pub const fn leaf(item: T) -> Self {
        Self::new(item, Vec::new())
    }

    /// Creates a tree from an item and any iterable of children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::tree::Tree;
    ///
    /// let tree = Tree::create(99, [Tree::leaf(90), Tree::create(2, [Tree::leaf(-3)])]);
    /// assert_eq!(tree.size(), 4);
    /// ```
    pub fn create<I>(item: T, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::new(item, children.into_iter().collect())
    }

    /// Creates a tree, rejecting an absent item or child list.
    ///
    /// `item` is checked before `children`. An empty child list is accepted:
    /// it makes a leaf.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNullError` for parameter `item` or `children`,
    /// whichever is `None` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::tree::Tree;
    ///
    /// assert_eq!(Tree::try_new(Some(1), Some(vec![])), Ok(Tree::leaf(1)));
    ///
    /// let error = Tree::<i32>::try_new(Some(1), None).unwrap_err();
    /// assert_eq!(error.parameter_name, "children");
    /// ```
    pub fn try_new(item: Option<T>, children: Option<Vec<Self>>) -> Result<Self, ArgumentNullError> {
        let item = ArgumentNullError::require(item, "item")?;
        let children = ArgumentNullError::require(children, "children")?;
        Ok(Self::new(item, children))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the item stored at this node.
    #[inline]
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Returns the direct children, in order.
    #[inline]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the number of direct children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node has no children. Same as [`is_empty`](Self::is_empty).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_empty()
    }

    /// Iterates over the direct children.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Self> {
        self.children.iter()
    }

    /// Iterates over every item, parent before children, children in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::tree::Tree;
    ///
    /// let tree = Tree::create(
    ///     42,
    ///     [
    ///         Tree::create(1337, [Tree::leaf(-3)]),
    ///         Tree::create(7, [Tree::leaf(-99), Tree::leaf(100), Tree::leaf(0)]),
    ///     ],
    /// );
    /// let items: Vec<i32> = tree.preorder().copied().collect();
    /// assert_eq!(items, vec![42, 1337, -3, 7, -99, 100, 0]);
    /// ```
    #[inline]
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self)
    }

    /// Returns the total number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.preorder().count()
    }

    /// Returns the number of levels; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: SmallVec<[(&Self, usize); TRAVERSAL_INLINE]> = SmallVec::new();
        pending.push((self, 1));
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Builds a tree of the same shape with every item passed through `selector`.
    ///
    /// The source tree is only borrowed. `selector` runs once per node, in
    /// pre-order. Traversal uses an explicit stack, so arbitrarily deep trees
    /// do not exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::tree::Tree;
    ///
    /// let source = Tree::create(99, [Tree::leaf(90), Tree::leaf(2)]);
    /// let rendered = source.select(|x| x.to_string());
    /// assert_eq!(
    ///     rendered,
    ///     Tree::create("99".to_string(), [Tree::leaf("90".to_string()), Tree::leaf("2".to_string())])
    /// );
    /// ```
    pub fn select<U, F>(&self, mut selector: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut ancestors: SmallVec<[SelectFrame<'_, T, U>; TRAVERSAL_INLINE]> = SmallVec::new();
        let mut current = SelectFrame::enter(self, &mut selector);
        loop {
            if let Some(child) = current.next_child() {
                let parent = std::mem::replace(&mut current, SelectFrame::enter(child, &mut selector));
                ancestors.push(parent);
            } else {
                let node = current.finish();
                match ancestors.pop() {
                    Some(mut parent) => {
                        parent.children.push(node);
                        current = parent;
                    }
                    None => return node,
                }
            }
        }
    }
}

/// A node of the source tree whose mapped children are still being collected.
struct SelectFrame<'a, T, U> {
    source: &'a Tree<T>,
    item: U,
    children: Vec<Tree<U>>,
}

impl<'a, T, U> SelectFrame<'a, T, U> {
    fn enter<F>(source: &'a Tree<T>, selector: &mut F) -> Self
    where
        F: FnMut(&T) -> U,
    {
        Self {
            source,
            item: selector(&source.item),
            children: Vec::with_capacity(source.children.len()),
        }
    }

    fn next_child(&self) -> Option<&'a Tree<T>> {
        let source: &'a Tree<T> = self.source;
        source.children.get(self.children.len())
    }

    fn finish(self) -> Tree<U> {
        Tree::new(self.item, self.children)
    }
}

// =============================================================================
// Ownership
// =============================================================================

/// Unlinks descendants onto a heap stack so dropping a deep tree does not recurse.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        self.select(T::clone)
    }
}

// =============================================================================
// Structural Equality and Hashing
// =============================================================================

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: SmallVec<[(&Self, &Self); TRAVERSAL_INLINE]> = SmallVec::new();
        pending.push((self, other));
        while let Some((left, right)) = pending.pop() {
            if left.children.len() != right.children.len() || left.item != right.item {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Hashes every item in pre-order together with each node's child count,
/// so trees with the same items in different shapes hash differently.
impl<T: Hash> Hash for Tree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending: SmallVec<[&Self; TRAVERSAL_INLINE]> = SmallVec::new();
        pending.push(self);
        while let Some(node) = pending.pop() {
            node.item.hash(state);
            node.children.len().hash(state);
            pending.extend(node.children.iter().rev());
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// One pending action of an iterative rendering pass.
enum RenderStep<'a, T> {
    Node(&'a Tree<T>),
    Separator,
    Close,
}

/// Walks `root` in pre-order, calling `open` for every node and pushing the
/// separators and closing steps that bracket non-empty child lists.
fn render<'a, T>(
    root: &'a Tree<T>,
    formatter: &mut fmt::Formatter<'_>,
    mut open: impl FnMut(&'a Tree<T>, &mut fmt::Formatter<'_>) -> fmt::Result,
    close: &str,
) -> fmt::Result {
    let mut pending: SmallVec<[RenderStep<'a, T>; TRAVERSAL_INLINE]> = SmallVec::new();
    pending.push(RenderStep::Node(root));
    while let Some(step) = pending.pop() {
        match step {
            RenderStep::Node(node) => {
                open(node, formatter)?;
                if !node.children.is_empty() {
                    pending.push(RenderStep::Close);
                    for (index, child) in node.children.iter().enumerate().rev() {
                        pending.push(RenderStep::Node(child));
                        if index > 0 {
                            pending.push(RenderStep::Separator);
                        }
                    }
                }
            }
            RenderStep::Separator => formatter.write_str(", ")?,
            RenderStep::Close => formatter.write_str(close)?,
        }
    }
    Ok(())
}

/// Renders `item [child, child [grandchild]]`, omitting brackets for leaves.
///
/// # Examples
///
/// ```rust
/// use functorial::tree::Tree;
///
/// let tree = Tree::create(99, [Tree::leaf(90), Tree::create(2, [Tree::leaf(-3)])]);
/// assert_eq!(tree.to_string(), "99 [90, 2 [-3]]");
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            self,
            formatter,
            |node, formatter| {
                write!(formatter, "{}", node.item)?;
                if node.children.is_empty() {
                    Ok(())
                } else {
                    formatter.write_str(" [")
                }
            },
            "]",
        )
    }
}

/// Renders `Tree { item: .., children: [..] }` for every node.
///
/// # Examples
///
/// ```rust
/// use functorial::tree::Tree;
///
/// let tree = Tree::create(1, [Tree::leaf(2)]);
/// assert_eq!(
///     format!("{tree:?}"),
///     "Tree { item: 1, children: [Tree { item: 2, children: [] }] }"
/// );
/// ```
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            self,
            formatter,
            |node, formatter| {
                write!(formatter, "Tree {{ item: {:?}, children: [", node.item)?;
                if node.children.is_empty() {
                    formatter.write_str("] }")
                } else {
                    Ok(())
                }
            },
            "] }",
        )
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a Tree<T>;
    type IntoIter = std::slice::Iter<'a, Tree<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Tree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        let mut pending: SmallVec<[&Self; TRAVERSAL_INLINE]> = SmallVec::new();
        pending.push(self);
        while let Some(node) = pending.pop() {
            seq.serialize_element(&(&node.item, node.children.len()))?;
            pending.extend(node.children.iter().rev());
        }
        seq.end()
    }
}

/// A node being rebuilt from the flat encoding, still waiting for children.
#[cfg(feature = "serde")]
struct RebuildFrame<T> {
    item: T,
    child_count: usize,
    children: Vec<Tree<T>>,
}

#[cfg(feature = "serde")]
impl<T> RebuildFrame<T> {
    const fn new(item: T, child_count: usize) -> Self {
        Self {
            item,
            child_count,
            children: Vec::new(),
        }
    }

    fn is_complete(&self) -> bool {
        self.children.len() == self.child_count
    }

    fn finish(self) -> Tree<T> {
        Tree::new(self.item, self.children)
    }
}

#[cfg(feature = "serde")]
struct TreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> TreeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for TreeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Tree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-empty pre-order sequence of [item, child_count] pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;

        let Some((item, child_count)) = seq.next_element::<(T, usize)>()? else {
            return Err(A::Error::invalid_length(0, &self));
        };
        let mut ancestors: SmallVec<[RebuildFrame<T>; TRAVERSAL_INLINE]> = SmallVec::new();
        let mut current = RebuildFrame::new(item, child_count);
        loop {
            if current.is_complete() {
                let node = current.finish();
                match ancestors.pop() {
                    Some(mut parent) => {
                        parent.children.push(node);
                        current = parent;
                    }
                    None => {
                        if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                            return Err(A::Error::custom("trailing nodes after the root's last descendant"));
                        }
                        return Ok(node);
                    }
                }
            } else {
                let Some((item, child_count)) = seq.next_element::<(T, usize)>()? else {
                    return Err(A::Error::custom("sequence ended before every child was read"));
                };
                ancestors.push(std::mem::replace(&mut current, RebuildFrame::new(item, child_count)));
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Tree<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor::new())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Tree<T> {
    type Inner = T;
    type WithType<B> = Tree<B>;
}

/// Consuming `fmap_mut` clones each item: a `Tree` unlinks its children on
/// drop, so items cannot be moved out of it.
impl<T: Clone> FunctorMut for Tree<T> {
    fn fmap_mut<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(T) -> B,
    {
        self.select(|item| function(item.clone()))
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> Tree<B>
    where
        F: FnMut(&T) -> B,
    {
        self.select(function)
    }
}

static_assertions::assert_impl_all!(Tree<String>: Send, Sync);
