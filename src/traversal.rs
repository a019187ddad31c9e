//! Format-driven traversal.
//!
//! Every tree variant implements [`Traverse`], which turns a [`Format`] into a
//! materialized `Vec` of payload references. The six permutations of `K`, `L`,
//! and `P` each have a named method, as do the conventional in-order,
//! pre-order, and post-order walks.
//!
//! # Examples
//!
//! ```
//! use bintree::format::Format;
//! use bintree::traversal::Traverse;
//! use bintree::tree::Tree;
//!
//! let tree: Tree<i32> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//!
//! assert_eq!(tree.traverse_klp(), [&5, &3, &2, &4, &7, &6, &8]);
//! assert_eq!(tree.traverse_lkp(), [&2, &3, &4, &5, &6, &7, &8]);
//!
//! // Visit every key twice and never go right.
//! let format: Format = "KKL".parse().unwrap();
//! assert_eq!(tree.traverse_custom(&format), [&5, &5, &3, &3, &2, &2]);
//! ```

use crate::format::{Format, Step};
use crate::node::Node;

/// What the walker reports as it replays a format.
pub(crate) enum Visit<'a, T> {
    /// A `K` step at a present node.
    Key(&'a T),
    /// An `L` or `P` step into an absent child, or a walk of an empty tree.
    Empty,
}

/// Replays `format` at every node reachable from `root`, reporting each key and
/// each absent subtree in order.
///
/// Frames live on a heap-allocated stack, so the depth of the tree doesn't
/// bound the depth of the call stack.
pub(crate) fn walk<'a, T, F>(root: Option<&'a Node<T>>, format: &Format, mut visit: F)
where
    F: FnMut(Visit<'a, T>),
{
    let steps = format.steps();
    let mut frames: Vec<(&'a Node<T>, usize)> = match root {
        Some(root) => vec![(root, 0)],
        None => {
            visit(Visit::Empty);
            return;
        }
    };

    while let Some(frame) = frames.last_mut() {
        let node = frame.0;
        let Some(&step) = steps.get(frame.1) else {
            frames.pop();
            continue;
        };
        frame.1 += 1;

        let child = match step {
            Step::Key => {
                visit(Visit::Key(&node.value));
                continue;
            }
            Step::Left => node.left.as_deref(),
            Step::Right => node.right.as_deref(),
        };
        match child {
            Some(child) => frames.push((child, 0)),
            None => visit(Visit::Empty),
        }
    }
}

/// Traversals shared by every tree variant.
pub trait Traverse<T> {
    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Node<T>>;

    /// Collects the payloads visited by replaying `format` at every node.
    fn traverse_custom(&self, format: &Format) -> Vec<&T> {
        let mut values = Vec::new();
        walk(self.root(), format, |visit| {
            if let Visit::Key(value) = visit {
                values.push(value);
            }
        });

        values
    }

    /// Node, left, right.
    fn traverse_klp(&self) -> Vec<&T> {
        self.traverse_custom(&Format::KLP)
    }

    /// Node, right, left.
    fn traverse_kpl(&self) -> Vec<&T> {
        self.traverse_custom(&Format::KPL)
    }

    /// Left, right, node.
    fn traverse_lpk(&self) -> Vec<&T> {
        self.traverse_custom(&Format::LPK)
    }

    /// Left, node, right.
    fn traverse_lkp(&self) -> Vec<&T> {
        self.traverse_custom(&Format::LKP)
    }

    /// Right, left, node.
    fn traverse_plk(&self) -> Vec<&T> {
        self.traverse_custom(&Format::PLK)
    }

    /// Right, node, left.
    fn traverse_pkl(&self) -> Vec<&T> {
        self.traverse_custom(&Format::PKL)
    }

    /// In-order: the same as [`traverse_lkp`][Self::traverse_lkp]. For a
    /// [`Tree`][crate::tree::Tree] this is ascending order.
    fn traverse_in_order(&self) -> Vec<&T> {
        self.traverse_lkp()
    }

    /// Pre-order: the same as [`traverse_klp`][Self::traverse_klp].
    fn traverse_pre_order(&self) -> Vec<&T> {
        self.traverse_klp()
    }

    /// Post-order: the same as [`traverse_lpk`][Self::traverse_lpk].
    fn traverse_post_order(&self) -> Vec<&T> {
        self.traverse_lpk()
    }
}
