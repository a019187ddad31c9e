//! An insertion-only tree for payloads that can't be ordered, such as closures.
//!
//! Every payload is attached as the rightmost descendant, so the tree is a
//! chain down the right-hand side and an in-order traversal yields payloads in
//! insertion order. There is no search, removal, or balancing: without an
//! order there is nothing to search by.
//!
//! # Examples
//!
//! ```
//! use bintree::chain::Chain;
//! use bintree::traversal::Traverse;
//!
//! let mut functions: Chain<Box<dyn Fn(f64) -> f64>> = Chain::new();
//! functions.push(Box::new(|x| x * x));
//! functions.push(Box::new(|x| x + 1.0));
//! functions.push(Box::new(f64::sqrt));
//!
//! let results: Vec<f64> = functions.traverse_in_order().iter().map(|f| f(4.0)).collect();
//! assert_eq!(results, [16.0, 5.0, 2.0]);
//! ```

use crate::node::{self, Link, Node, Nodes};
use crate::traversal::Traverse;

/// A right-leaning chain of payloads in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T> Traverse<T> for Chain<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Chain<T> {
    /// Generates a new, empty `Chain`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of payloads in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain has no payloads.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Attaches `value` as the new rightmost node and returns its position:
    /// 0 for the first payload pushed, 1 for the next, and so on.
    pub fn push(&mut self, value: T) -> usize {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = &mut node.right;
        }
        *link = Some(Node::leaf(value));

        let position = self.len;
        self.len += 1;
        position
    }

    /// The payload pushed at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        Nodes::new(self.root.as_deref())
            .nth(position)
            .map(Node::value)
    }

    /// Returns a new chain holding `f(payload)` for every payload, in the same
    /// order.
    pub fn map<U, F>(&self, mut f: F) -> Chain<U>
    where
        F: FnMut(&T) -> U,
    {
        Chain {
            root: node::map(self.root.as_deref(), &mut f),
            len: self.len,
        }
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type MathFunction = Box<dyn Fn(f64) -> f64>;

    fn functions() -> Chain<MathFunction> {
        let mut chain: Chain<MathFunction> = Chain::new();
        chain.push(Box::new(|x| 2.0 * x));
        chain.push(Box::new(|x| x - 3.0));
        chain.push(Box::new(|x| x * x));
        chain
    }

    #[test]
    fn push_returns_positions() {
        let mut chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.push('a'), 0);
        assert_eq!(chain.push('b'), 1);
        assert_eq!(chain.push('a'), 2);
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }

    #[test]
    fn in_order_is_insertion_order() {
        let chain: Chain<i32> = [3, 1, 2, 1].into_iter().collect();

        // Duplicates and out of order payloads are all kept.
        assert_eq!(chain.traverse_in_order(), [&3, &1, &2, &1]);
        assert_eq!(chain.traverse_pre_order(), [&3, &1, &2, &1]);
        assert_eq!(chain.traverse_post_order(), [&1, &2, &1, &3]);
        assert_eq!(chain.traverse_pkl(), [&1, &2, &1, &3]);
    }

    #[test]
    fn every_node_hangs_right() {
        let chain: Chain<i32> = (0..4).collect();
        let mut node = chain.root();
        let mut depth = 0;
        while let Some(n) = node {
            assert!(n.left().is_none());
            node = n.right();
            depth += 1;
        }
        assert_eq!(depth, 4);
    }

    #[test]
    fn closures_run_in_insertion_order() {
        let chain = functions();
        let results: Vec<f64> = chain.traverse_in_order().iter().map(|f| f(5.0)).collect();

        assert_eq!(results, [10.0, 2.0, 25.0]);
        assert_eq!(chain.get(2).map(|f| f(3.0)), Some(9.0));
        assert!(chain.get(3).is_none());
    }

    #[test]
    fn map_evaluates_closures() {
        let chain = functions();
        let at_one = chain.map(|f| f(1.0));

        assert_eq!(at_one.traverse_in_order(), [&2.0, &-2.0, &1.0]);
        assert_eq!(at_one.len(), 3);
    }

    #[test]
    fn clone_is_deep() {
        let chain: Chain<i32> = (0..3).collect();
        let mut copy = chain.clone();
        copy.push(3);

        assert_eq!(chain.len(), 3);
        assert_eq!(copy.traverse_in_order(), [&0, &1, &2, &3]);
        assert_ne!(chain, copy);
    }
}
