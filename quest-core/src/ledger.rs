//! The clue ledger: collected clues kept in a binary search tree.
//!
//! Clues are ordered by plain byte-wise string comparison. No case
//! folding is done, so "Faca" and "faca" are two different clues.

use std::cmp::Ordering;

#[derive(Debug)]
struct Node {
    clue: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(clue: String) -> Self {
        Self {
            clue,
            left: None,
            right: None,
        }
    }
}

/// Ordered set of the clues collected so far.
#[derive(Debug, Default)]
pub struct ClueLedger {
    root: Option<Box<Node>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue.
    ///
    /// Returns `false` if the exact same text was already in the ledger, in
    /// which case nothing changes.
    pub fn insert(&mut self, clue: impl Into<String>) -> bool {
        let inserted = insert_into(&mut self.root, clue.into());
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Walk the clues in ascending order.
    ///
    /// The walk borrows the ledger, so it can be restarted any number of
    /// times and always yields the same sequence.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut walk = InOrder { stack: Vec::new() };
        walk.push_left_spine(self.root.as_deref());
        walk
    }

    /// Number of distinct clues.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 for an empty ledger).
    #[cfg(test)]
    fn depth(&self) -> usize {
        fn depth(node: Option<&Node>) -> usize {
            node.map_or(0, |n| 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())))
        }
        depth(self.root.as_deref())
    }
}

fn insert_into(slot: &mut Option<Box<Node>>, clue: String) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(Node::leaf(clue)));
            true
        }
        Some(node) => match clue.as_str().cmp(node.clue.as_str()) {
            Ordering::Less => insert_into(&mut node.left, clue),
            Ordering::Greater => insert_into(&mut node.right, clue),
            Ordering::Equal => false,
        },
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order iterator over a `ClueLedger`.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}
