//! The owned node type every tree variant is built from, plus the shape-level
//! algorithms that don't care how the nodes were ordered: counting, measuring,
//! copying, mapping, filtering, and tearing down.

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a payload and exclusively owns its two (possibly empty)
/// children. There are no parent pointers; a node's only identity is its
/// position in the tree.
///
/// Equality compares shape and payloads: two nodes are equal when their
/// payloads are equal and their left and right subtrees are equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new boxed leaf holding `value`.
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The payload stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Pre-order (node, left, right) iterator over the nodes of a subtree.
pub(crate) struct Nodes<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(node)
    }
}

/// How many nodes are in the subtree.
pub(crate) fn count<T>(root: Option<&Node<T>>) -> usize {
    Nodes::new(root).count()
}

/// How many levels are in the subtree. An empty subtree has a height of 0
/// and a lone leaf has a height of 1.
pub(crate) fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = root.map(|n| (n, 1)).into_iter().collect();
    let mut tallest = 0;
    while let Some((node, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }

    tallest
}

/// Drops a subtree one node at a time so that the default recursive drop never
/// runs deeper than a single level, whatever the height of the subtree.
pub(crate) fn dismantle<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Consumes a subtree, returning its payloads in left, node, right order.
pub(crate) fn drain_in_order<T>(root: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut pending: Vec<Box<Node<T>>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            pending.push(node);
        }
        let Some(node) = pending.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        values.push(value);
        current = right;
    }

    values
}

/// Builds a minimal height subtree of `len` nodes whose in-order sequence is
/// the next `len` items of `values`. The root of every subtree is the middle
/// item, rounding towards the left when there are two middles.
pub(crate) fn build_balanced<T, I>(len: usize, values: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let mid = (len - 1) / 2;
    let left = build_balanced(mid, values);
    let value = values.next()?;
    let right = build_balanced(len - mid - 1, values);

    Some(Box::new(Node { value, left, right }))
}

/// Copies the subtree's shape, replacing each payload with `f(payload)`.
/// `f` sees nodes in node, left, right order.
pub(crate) fn map<T, U, F>(root: Option<&Node<T>>, f: &mut F) -> Link<U>
where
    F: FnMut(&T) -> U,
{
    let node = root?;
    let value = f(&node.value);
    let left = map(node.left.as_deref(), f);
    let right = map(node.right.as_deref(), f);

    Some(Box::new(Node { value, left, right }))
}

/// Copies the nodes that match `predicate` along with every ancestor needed to
/// connect them. Ancestors that don't match keep their original payload.
pub(crate) fn filter<T, F>(root: Option<&Node<T>>, predicate: &mut F) -> Link<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let node = root?;
    let matched = predicate(&node.value);
    let left = filter(node.left.as_deref(), predicate);
    let right = filter(node.right.as_deref(), predicate);

    if matched || left.is_some() || right.is_some() {
        Some(Box::new(Node {
            value: node.value.clone(),
            left,
            right,
        }))
    } else {
        None
    }
}
