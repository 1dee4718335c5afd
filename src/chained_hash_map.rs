//! ChainedHashMap: bucket table with separate chaining and load-factor growth.

use crate::chain::Chains;
use crate::error::RemoveError;
use crate::fnv::{key_digest, Fnv64BuildHasher};
use crate::iter::{IntoIter, Iter};
use core::fmt;
use core::hash::BuildHasher;
use log::{debug, trace};

/// Bucket count of a map built with [`ChainedHashMap::new`].
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Maximum entries per bucket before the table doubles.
pub const LOAD_FACTOR: usize = 2;

/// Map from `i64` keys to `String` values.
///
/// Keys hash to `digest % bucket_count`; colliding keys share a chain in
/// insertion order. `insert` doubles the bucket count first whenever the
/// map already holds `bucket_count * LOAD_FACTOR` entries.
pub struct ChainedHashMap<S = Fnv64BuildHasher> {
    hasher: S,
    pub(crate) chains: Chains,
    entries: usize,
}

impl ChainedHashMap {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKET_COUNT)
    }

    /// Create a map with `bucket_count` buckets (at least one).
    pub fn with_capacity(bucket_count: usize) -> Self {
        Self::with_capacity_and_hasher(bucket_count, Fnv64BuildHasher)
    }
}

impl Default for ChainedHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ChainedHashMap<S>
where
    S: BuildHasher + Clone,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_BUCKET_COUNT, hasher)
    }

    pub fn with_capacity_and_hasher(bucket_count: usize, hasher: S) -> Self {
        Self {
            hasher,
            chains: Chains::with_buckets(bucket_count.max(1)),
            entries: 0,
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries
    }
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.chains.bucket_count()
    }

    #[inline]
    fn bucket_of(&self, key: i64) -> usize {
        (key_digest(&self.hasher, key) % self.chains.bucket_count() as u64) as usize
    }

    /// Store `value` under `key`, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: i64, value: impl Into<String>) -> Option<String> {
        if self.bucket_count() * LOAD_FACTOR <= self.entries {
            self.grow();
        }
        let bucket = self.bucket_of(key);
        let prev = self.chains.upsert(bucket, key, value.into());
        if prev.is_none() {
            self.entries += 1;
        }
        debug_assert_eq!(self.entries, self.chains.node_count());
        prev
    }

    pub fn get(&self, key: i64) -> Option<&str> {
        let bucket = self.bucket_of(key);
        self.chains.find(bucket, key).map(|n| n.value.as_str())
    }

    /// Value and presence flag for `key`; the value is empty when absent.
    pub fn lookup(&self, key: i64) -> (&str, bool) {
        match self.get(key) {
            Some(v) => (v, true),
            None => ("", false),
        }
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: i64) -> Result<String, RemoveError> {
        let bucket = self.bucket_of(key);
        let node = self
            .chains
            .unlink(bucket, key)
            .ok_or(RemoveError::KeyNotFound { key })?;
        self.entries -= 1;
        trace!("removed key {} from bucket {}", key, bucket);
        debug_assert_eq!(self.entries, self.chains.node_count());
        Ok(node.value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.chains.heads, &self.chains.nodes)
    }

    /// `{k1: "v1", k2: "v2"}` in bucket/chain order.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Double the bucket count and move every entry into the new table.
    fn grow(&mut self) {
        let old_buckets = self.bucket_count();
        let grown = Self::with_capacity_and_hasher(old_buckets * 2, self.hasher.clone());
        let old = core::mem::replace(self, grown);
        let moved = old.entries;
        for (key, value) in old {
            let bucket = self.bucket_of(key);
            self.chains.upsert(bucket, key, value);
            self.entries += 1;
        }
        debug_assert_eq!(self.entries, moved);
        debug!(
            "resized table from {} to {} buckets ({} entries)",
            old_buckets,
            self.bucket_count(),
            moved
        );
    }
}

impl<S> IntoIterator for ChainedHashMap<S> {
    type Item = (i64, String);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self.chains.heads, self.chains.nodes)
    }
}

impl<'a, S> IntoIterator for &'a ChainedHashMap<S>
where
    S: BuildHasher + Clone,
{
    type Item = (i64, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S, V> Extend<(i64, V)> for ChainedHashMap<S>
where
    S: BuildHasher + Clone,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V: Into<String>> FromIterator<(i64, V)> for ChainedHashMap {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<S> fmt::Display for ChainedHashMap<S>
where
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: \"{}\"", k, v)?;
        }
        f.write_str("}")
    }
}

impl<S> fmt::Debug for ChainedHashMap<S>
where
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
