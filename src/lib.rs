//! This crate exposes a generic Binary Search Tree (BST) used as an
//! ordered set, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold
//!    elements less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold
//!    elements greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because this tree is a set, each element is stored at most once:
//! inserting an element that is already present is rejected rather than
//! overwriting anything. Searching takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`), and
//! sorted iteration falls out naturally by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! The tree here performs no rebalancing, so its shape is determined
//! entirely by insertion order. Inserting already-sorted input collapses it
//! into a linked-list-like chain with `O(N)` searches.

#![deny(missing_docs)]

pub mod recursive;
