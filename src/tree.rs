//! An unbalanced Binary Search Tree storing a multiset of ordered values.
//!
//! Unlike a map, the tree stores bare values and keeps duplicates: adding a
//! value that is already present creates another node for it. Duplicates
//! descend into the left subtree, so every node's left subtree holds values
//! `<=` its own and its right subtree holds values strictly greater.
//!
//! The tree does no rebalancing. Operations cost `O(height)`, which is
//! `O(lg n)` on random input and degrades to `O(n)` when values arrive in
//! sorted order.
//!
//! # Examples
//!
//! ```
//! use treesort::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.min(), None);
//! assert!(!tree.contains(&3));
//!
//! tree.add(3);
//! tree.add(1);
//! tree.add(3);
//!
//! // Duplicates count as distinct elements.
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.values(), [&1, &3, &3]);
//!
//! // Removing takes out one occurrence at a time.
//! assert!(tree.remove(&3));
//! assert_eq!(tree.values(), [&1, &3]);
//! assert!(!tree.remove(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An ordered multiset backed by an unbalanced Binary Search Tree. Each node
/// exclusively owns its children; there are no parent pointers and no
/// sharing.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink nodes onto an explicit stack first. The derived drop would
        // recurse per level, which overflows the stack on a degenerate
        // (list-shaped) tree.
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of elements in the tree. This is a maintained
    /// counter, not recomputed by traversal, and it counts duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the smallest value in the tree, or `None` if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, or `None` if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Adds a value to the tree. The descent goes left when the new value is
    /// `<=` the current node's value, so duplicates accumulate in left
    /// subtrees as distinct nodes, and every `add` grows [`len`](Self::len)
    /// by one.
    ///
    /// The descent is an iterative loop, so a tree built from sorted input
    /// degrades to `O(n)` time per call but never to `O(n)` stack depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        self.len += 1;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(value)));
    }

    /// Removes one occurrence of the given value from the tree, returning
    /// whether anything was removed. Removing a value that is not present is
    /// a no-op and leaves [`len`](Self::len) unchanged.
    ///
    /// Deletion never relinks more than one pointer: a node with a left
    /// child takes over the value of its left subtree's maximum (that donor
    /// node, which has no right child, is spliced out); a node with only a
    /// right child takes its right subtree's minimum the same way; a leaf is
    /// simply dropped. Node identity is therefore not stable across
    /// deletions, but the ordering invariant always is.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 3, 1].iter().copied().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.values(), [&1, &3, &3, &8]);
    /// assert_eq!(tree.len(), 4);
    /// assert!(!tree.contains(&5));
    ///
    /// // Absent values are a no-op.
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, removed) = remove_from(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Determines whether a value is in the tree. Costs `O(height)`; the
    /// equality check at each node short-circuits the descent.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].iter().copied().collect();
    ///
    /// assert!(tree.contains(&8));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Equal => return true,
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        false
    }

    /// Returns every value in the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 3, 1].iter().copied().collect();
    ///
    /// assert_eq!(tree.values(), [&1, &3, &3, &5, &8]);
    /// ```
    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns an iterator over the values in ascending order. The traversal
    /// is lazy and carries an explicit stack of `O(height)` nodes rather
    /// than recursing.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    /// let doubled: Vec<_> = tree.iter().map(|v| v * 2).collect();
    ///
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Returns an iterator over the values in descending order, the mirror
    /// of [`iter`](Self::iter).
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    /// let descending: Vec<_> = tree.iter_rev().collect();
    ///
    /// assert_eq!(descending, [&3, &2, &1]);
    /// ```
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        let mut iter = IterRev {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_right_spine(self.root.as_deref());
        iter
    }
}

/// Removes one occurrence of `value` from the subtree hanging off `link`,
/// returning the replacement link and whether a node was removed.
///
/// The recursion follows a single root-to-target path; the donor extraction
/// in the `Equal` arm walks on down the same path, so the total stack depth
/// stays bounded by the tree height.
fn remove_from<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, bool) {
    let mut node = match link {
        Some(node) => node,
        None => return (None, false),
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove_from(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove_from(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => {
            if let Some(left) = node.left.take() {
                let (left, donor) = take_max(left);
                node.left = left;
                node.value = donor;
                (Some(node), true)
            } else if let Some(right) = node.right.take() {
                let (right, donor) = take_min(right);
                node.right = right;
                node.value = donor;
                (Some(node), true)
            } else {
                (None, true)
            }
        }
    }
}

/// Splices the maximum node out of the subtree rooted at `node`, returning
/// the remaining subtree and the maximum's value. The maximum has no right
/// child, so its left child (if any) takes its place.
fn take_max<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.right.take() {
        Some(right) => {
            let (right, max) = take_max(right);
            node.right = right;
            (Some(node), max)
        }
        None => {
            let Node { value, left, .. } = *node;
            (left, value)
        }
    }
}

/// Mirror of [`take_max`]: splices out the minimum node, whose right child
/// (if any) takes its place.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(node), min)
        }
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
    }
}

/// Ascending in-order iterator over a borrowed [`Tree`].
pub struct Iter<'a, T> {
    /// Nodes whose value (and right subtree) have not been yielded yet, with
    /// the in-order next node on top.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Descending in-order iterator over a borrowed [`Tree`].
pub struct IterRev<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> IterRev<'a, T> {
    fn push_right_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.right.as_deref();
        }
    }
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_right_spine(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for IterRev<'a, T> {}

/// Ascending in-order iterator that consumes a [`Tree`] and yields its
/// values by move.
pub struct IntoIter<T> {
    /// Nodes whose left subtree has already been detached and pushed, with
    /// the in-order next node on top.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
