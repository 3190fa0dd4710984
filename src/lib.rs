//! This crate exposes a teaching-grade ordered Binary Search Tree and a
//! family of sorting algorithms, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of the tree
//! in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    strictly greater than its own value.
//!
//! > Note that equal values land on the left, so the tree is a multiset:
//! > duplicates are kept as distinct nodes rather than deduplicated.
//!
//! These invariants make searching take `O(height)` (where `height` is the
//! longest path from the root to a leaf) and make sorted iteration natural:
//! visit the left subtree, then the subtree root, then the right subtree.
//! The tree in [`tree`] does no rebalancing, so its height is only `O(lg n)`
//! on well-shuffled input.
//!
//! ## Sorting
//!
//! The [`sort`] module holds one free function per algorithm: bubble,
//! selection, insertion, heap, quick, merge, and tree sort over any
//! `T: Ord`, plus counting and radix sort over integers. Each documents its
//! stability, in-place-ness, and complexity. Tree sort is where the two
//! halves of the crate meet: it sorts by routing the input through a
//! [`tree::Tree`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod sort;
pub mod tree;
