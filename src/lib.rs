//! This crate exposes an in-memory Binary Search Tree (BST) along with a small
//! toolkit for walking, transforming, and serializing it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree never rebalances itself, so sorted input gives a height of `N`;
//! [`Tree::balance`][tree::Tree::balance] rebuilds it with a height of
//! `O(lg N)` on demand.
//!
//! ## Variants
//!
//! - [`tree::Tree`] holds payloads implementing [`order::Ordered`] and offers
//!   the full API: search, removal, balancing, merging, and subtree matching.
//! - [`chain::Chain`] holds any payload, even closures. Each insertion hangs
//!   off the rightmost node so the payloads stay in insertion order.
//!
//! Both implement [`traversal::Traverse`], which walks a tree in any of the
//! six orders of visiting a node (`K`), its left subtree (`L`), and its right
//! subtree (`P`), or in a custom [`format::Format`].
//!
//! ## Serialization
//!
//! Trees of numbers can be written to comma separated text and read back. See
//! [`codec`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod chain;
pub mod codec;
pub mod complex;
pub mod error;
pub mod format;
mod node;
pub mod order;
pub mod traversal;
pub mod tree;

pub use node::Node;
