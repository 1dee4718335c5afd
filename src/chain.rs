//! Chain storage: bucket heads over a slot arena of linked nodes.
//!
//! Every node lives in one `SlotMap`; a bucket is just the handle of its
//! first node. Unlinking rewrites the predecessor's `next` (or the bucket
//! head), so no node ever has to be copied over its neighbour.

use core::mem;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational handle of a chain node inside the arena.
    pub(crate) struct NodeKey;
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: i64,
    pub(crate) value: String,
    pub(crate) next: Option<NodeKey>,
}

#[derive(Debug)]
pub(crate) struct Chains {
    pub(crate) heads: Vec<Option<NodeKey>>,
    pub(crate) nodes: SlotMap<NodeKey, Node>,
}

impl Chains {
    pub(crate) fn with_buckets(bucket_count: usize) -> Self {
        Self {
            heads: vec![None; bucket_count],
            nodes: SlotMap::with_key(),
        }
    }

    #[inline]
    pub(crate) fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn find(&self, bucket: usize, key: i64) -> Option<&Node> {
        let mut cur = self.heads[bucket];
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if node.key == key {
                return Some(node);
            }
            cur = node.next;
        }
        None
    }

    /// Overwrite the value of `key` in `bucket`, or link a new node at the
    /// chain tail. Returns the replaced value on overwrite.
    pub(crate) fn upsert(&mut self, bucket: usize, key: i64, value: String) -> Option<String> {
        let mut cur = self.heads[bucket];
        let mut tail = None;
        while let Some(k) = cur {
            let node = &mut self.nodes[k];
            if node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
            tail = Some(k);
            cur = node.next;
        }

        let fresh = self.nodes.insert(Node {
            key,
            value,
            next: None,
        });
        match tail {
            Some(t) => self.nodes[t].next = Some(fresh),
            None => self.heads[bucket] = Some(fresh),
        }
        None
    }

    /// Splice the node holding `key` out of `bucket` and free it.
    pub(crate) fn unlink(&mut self, bucket: usize, key: i64) -> Option<Node> {
        let mut prev: Option<NodeKey> = None;
        let mut cur = self.heads[bucket];
        while let Some(k) = cur {
            let next = self.nodes[k].next;
            if self.nodes[k].key == key {
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.heads[bucket] = next,
                }
                return self.nodes.remove(k);
            }
            prev = Some(k);
            cur = next;
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn chain_keys(&self, bucket: usize) -> Vec<i64> {
        let mut out = Vec::new();
        let mut cur = self.heads[bucket];
        while let Some(k) = cur {
            out.push(self.nodes[k].key);
            cur = self.nodes[k].next;
        }
        out
    }
}
