//! An ordered BST. Every payload in a node's left subtree compares less than
//! the node's payload and every payload in its right subtree compares greater.
//! Inserting a payload that compares equal to one already in the tree does
//! nothing.
//!
//! The tree never rebalances itself. Inserting sorted input produces a chain;
//! call [`Tree::balance`] to rebuild it with minimal height.
//!
//! Transformations ([`map`][Tree::map], [`filter`][Tree::filter],
//! [`merge`][Tree::merge], [`extract_subtree`][Tree::extract_subtree]) return
//! new, independent trees and leave `self` untouched.
//!
//! # Examples
//!
//! ```
//! use bintree::traversal::Traverse;
//! use bintree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal payload again is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a payload hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.is_empty());
//!
//! // Sorted input makes a chain until it's balanced.
//! tree.extend(1..=5);
//! assert_eq!(tree.height(), 5);
//! tree.balance();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.traverse_pre_order(), [&3, &1, &2, &4, &5]);
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use crate::codec::{self, TextKey};
use crate::error::ParseError;
use crate::format::Format;
use crate::node::{self, Link, Node, Nodes};
use crate::order::Ordered;
use crate::traversal::Traverse;

/// An ordered Binary Search Tree. This can be used for inserting, finding, and
/// removing payloads, and for building new trees out of existing ones.
///
/// Cloning a `Tree` copies every node. Two trees are equal when they have the
/// same shape and equal payloads in the same positions.
///
/// Insertion, search, traversal, saving, loading, and dropping work at any
/// height. `clone`, `==`, [`remove`][Tree::remove], [`merge`][Tree::merge],
/// [`map`][Tree::map], and [`filter`][Tree::filter] recurse once per level, so
/// call [`balance`][Tree::balance] first on a tree built from sorted input
/// with very many payloads.
#[derive(Clone, Debug, PartialEq)]
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
        node::dismantle(self.root.take());
    }
}

impl<T> Traverse<T> for Tree<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub(crate) fn from_link(root: Link<T>) -> Self {
        let len = node::count(root.as_deref());
        Self { root, len }
    }

    /// The number of payloads in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no payloads.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a
    /// tree with a single node has a height of 1.
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Returns a new tree with the same shape as this one where every payload
    /// is replaced with `f(payload)`.
    ///
    /// The payloads are not re-inserted, so if `f` doesn't preserve order the
    /// new tree's in-order traversal won't be sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::traversal::Traverse;
    /// use bintree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let negated = tree.map(|x| -x);
    ///
    /// assert_eq!(negated.traverse_pre_order(), [&-2, &-1, &-3]);
    /// assert_eq!(negated.traverse_in_order(), [&-1, &-2, &-3]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        Tree {
            root: node::map(self.root.as_deref(), &mut f),
            len: self.len,
        }
    }

    /// Returns a new tree holding the payloads that match `predicate`, in the
    /// same relative positions.
    ///
    /// A node that doesn't match is still copied when one of its descendants
    /// matches, so that the matching descendant stays connected to the root.
    /// The result is a shape filter, not a sorted subset.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::traversal::Traverse;
    /// use bintree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    /// let evens = tree.filter(|x| x % 2 == 0);
    ///
    /// // 5, 3, and 7 connect the even leaves to the root.
    /// assert_eq!(evens.traverse_pre_order(), [&5, &3, &2, &4, &7, &6, &8]);
    ///
    /// let small = tree.filter(|x| *x < 3);
    /// assert_eq!(small.traverse_pre_order(), [&5, &3, &2]);
    /// ```
    #[doc(alias = "where")]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Self::from_link(node::filter(self.root.as_deref(), &mut predicate))
    }

    /// Returns a copy of the subtree rooted at the first node, searching node,
    /// then left, then right, whose payload equals `root_value`. If no payload
    /// equals it the returned tree is empty.
    pub fn extract_subtree(&self, root_value: &T) -> Self
    where
        T: PartialEq + Clone,
    {
        Nodes::new(self.root.as_deref())
            .find(|node| node.value == *root_value)
            .map_or_else(Self::new, |node| Self::from_link(Some(Box::new(node.clone()))))
    }

    /// Returns `true` if some node of this tree roots a subtree with exactly
    /// the shape and payloads of `candidate`. An empty candidate is contained
    /// in every tree.
    pub fn contains_subtree(&self, candidate: &Self) -> bool
    where
        T: PartialEq,
    {
        match candidate.root.as_deref() {
            None => true,
            Some(candidate) => Nodes::new(self.root.as_deref()).any(|node| node == candidate),
        }
    }

    /// Writes the tree as comma separated tokens in the order `format` visits
    /// them. See [`codec`][crate::codec] for the grammar.
    pub fn save_to_string(&self, format: &Format) -> String
    where
        T: TextKey,
    {
        codec::save(self.root.as_deref(), format)
    }

    /// Replaces this tree with one read from `text`, which must have been
    /// written with the same `format`.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]. The tree is left as it was when loading fails.
    pub fn load_from_str(&mut self, text: &str, format: &Format) -> Result<(), ParseError>
    where
        T: TextKey,
    {
        let loaded = Self::from_str_with(text, format)?;
        log::debug!("Loaded {} nodes with format {}", loaded.len, format);
        *self = loaded;

        Ok(())
    }

    /// Like [`load_from_str`][Self::load_from_str], with the format given as
    /// text such as `"LPK"`.
    ///
    /// # Errors
    ///
    /// [`ParseError::Format`] if `format` isn't a valid format, otherwise any
    /// [`ParseError`]. The tree is left as it was when loading fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::error::{FormatError, ParseError};
    /// use bintree::tree::Tree;
    ///
    /// let mut tree = Tree::<i32>::new();
    /// tree.load_from_str_fmt("null,null,1,null,2,", "LPK").unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert_eq!(
    ///     tree.load_from_str_fmt("null,", "LQK"),
    ///     Err(ParseError::Format(FormatError::InvalidStep { position: 1, found: 'Q' }))
    /// );
    /// ```
    pub fn load_from_str_fmt(&mut self, text: &str, format: &str) -> Result<(), ParseError>
    where
        T: TextKey,
    {
        let format: Format = format.parse()?;
        self.load_from_str(text, &format)
    }

    /// Reads a tree from `text`, which must have been written with `format`.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`].
    pub fn from_str_with(text: &str, format: &Format) -> Result<Self, ParseError>
    where
        T: TextKey,
    {
        codec::load(text, format).map(Self::from_link)
    }
}

impl<T: Ordered> Tree<T> {
    /// Inserts `value` into the tree, returning `true` if it was added. If the
    /// tree already holds a payload that compares equal to `value`, the tree is
    /// unchanged and `false` is returned.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.compare(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::leaf(value));
        self.len += 1;

        true
    }

    /// Potentially finds the payload that compares equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.compare(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(&node.value),
            };
        }

        None
    }

    /// Returns `true` if the tree holds a payload that compares equal to
    /// `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the payload that compares equal to `value` and returns it. If
    /// the tree holds no such payload, nothing happens.
    ///
    /// A node with two children takes the payload of its in-order successor,
    /// the leftmost node of its right subtree, which is removed in its place.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = remove(&mut self.root, value)?;
        self.len -= 1;

        Some(removed)
    }

    /// The smallest payload.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some(&node.value)
    }

    /// The largest payload.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some(&node.value)
    }

    /// Rebuilds the tree with minimal height. The payloads are collected in
    /// order and the middle one (rounding down) becomes the root, recursively.
    pub fn balance(&mut self) {
        let values = node::drain_in_order(self.root.take());
        self.root = node::build_balanced(values.len(), &mut values.into_iter());
        log::debug!(
            "Balanced {} nodes to a height of {}",
            self.len,
            self.height()
        );
    }

    /// Returns a copy of this tree with every payload of `other` inserted, in
    /// ascending order. Payloads already present are skipped.
    pub fn merge(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut merged = self.clone();
        merged.extend(other.traverse_in_order().into_iter().cloned());
        log::debug!(
            "Merged {} nodes into {} for a total of {}",
            other.len,
            self.len,
            merged.len
        );

        merged
    }
}

/// Removes the payload equal to `value` from the subtree at `link`.
fn remove<T: Ordered>(link: &mut Link<T>, value: &T) -> Option<T> {
    let node = link.as_mut()?;
    match value.compare(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            let mut removed = link.take()?;
            match (removed.left.take(), removed.right.take()) {
                (None, right) => {
                    *link = right;
                    Some(removed.value)
                }
                (left, None) => {
                    *link = left;
                    Some(removed.value)
                }
                (Some(left), Some(right)) => {
                    let mut right = Some(right);
                    let successor = take_leftmost(&mut right)?;
                    let value = std::mem::replace(&mut removed.value, successor);
                    removed.left = Some(left);
                    removed.right = right;
                    *link = Some(removed);

                    Some(value)
                }
            }
        }
    }
}

/// Unlinks the leftmost node of the subtree at `link`, splicing its right
/// child into its place, and returns its payload.
fn take_leftmost<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        return take_leftmost(&mut link.as_mut()?.left);
    }
    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;

    Some(value)
}

impl<T: Ordered> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ordered> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Reads a tree written with the default [`Format`] (`KLP`).
impl<T: TextKey> FromStr for Tree<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with(s, &Format::default())
    }
}
