//! Enumeration in bucket order, then chain order.

use crate::chain::{Node, NodeKey};
use core::iter::FusedIterator;
use slotmap::SlotMap;

/// Borrowing iterator over `(key, value)` pairs of a
/// [`ChainedHashMap`](crate::ChainedHashMap).
pub struct Iter<'a> {
    heads: core::slice::Iter<'a, Option<NodeKey>>,
    nodes: &'a SlotMap<NodeKey, Node>,
    cursor: Option<NodeKey>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(heads: &'a [Option<NodeKey>], nodes: &'a SlotMap<NodeKey, Node>) -> Self {
        Self {
            heads: heads.iter(),
            nodes,
            cursor: None,
            remaining: nodes.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let nodes = self.nodes;
                let node = &nodes[k];
                self.cursor = node.next;
                self.remaining -= 1;
                return Some((node.key, node.value.as_str()));
            }
            self.cursor = *self.heads.next()?;
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Owning iterator that drains the arena chain by chain. Resizing uses it
/// to move every entry into the grown table without cloning values.
pub struct IntoIter {
    heads: std::vec::IntoIter<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, Node>,
    cursor: Option<NodeKey>,
}

impl IntoIter {
    pub(crate) fn new(heads: Vec<Option<NodeKey>>, nodes: SlotMap<NodeKey, Node>) -> Self {
        Self {
            heads: heads.into_iter(),
            nodes,
            cursor: None,
        }
    }
}

impl Iterator for IntoIter {
    type Item = (i64, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.cursor.take().and_then(|k| self.nodes.remove(k)) {
                self.cursor = node.next;
                return Some((node.key, node.value));
            }
            self.cursor = self.heads.next()?;
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}
