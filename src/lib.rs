//! chain-hashmap: an `i64 -> String` hash map built from an array of
//! buckets with separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully inspectable chained hash table whose chain
//!   surgery is done with handles instead of pointers.
//! - Layers:
//!   - `fnv`: unsalted FNV-64 digest over the key's little-endian bytes;
//!     bucket index is `digest % bucket_count`.
//!   - `chain::Chains`: bucket heads (`Option<NodeKey>`) plus a
//!     `SlotMap` arena of `(key, value, next)` nodes. Inserts append at
//!     the chain tail; removals splice the predecessor's `next`.
//!   - `ChainedHashMap<S>`: owns the chains, tracks the number of
//!     distinct keys, and grows the table.
//!   - `iter`: `Iter` (borrowing) and `IntoIter` (draining) walk buckets
//!     in index order, then each chain front to back.
//!
//! Growth
//! - Before every `insert`, if `len >= bucket_count * LOAD_FACTOR` the
//!   table is rebuilt with twice the buckets. The old table is moved out
//!   with `mem::replace` and drained into the new one while `&mut self`
//!   is held, so callers only ever see the table before or after a
//!   resize.
//! - Overwrites do not count as new entries and never pull a resize
//!   forward.
//!
//! Emptiness
//! - A bucket is empty when its head is `None`. No key value doubles as
//!   a marker, so `0` is an ordinary key.
//!
//! Notes and non-goals
//! - Fixed key and value types; the hasher is the only type parameter.
//! - Single-threaded: mutation requires `&mut self`; there is no
//!   internal locking.
//! - Logging goes through the `log` facade (`debug!` on resize, `trace!`
//!   on removal). The crate never installs a logger.

mod chain;
pub mod chained_hash_map;
mod chained_hash_map_proptest;
pub mod error;
pub mod fnv;
pub mod iter;

// Public surface
pub use chained_hash_map::{ChainedHashMap, DEFAULT_BUCKET_COUNT, LOAD_FACTOR};
pub use error::RemoveError;
pub use fnv::{Fnv64BuildHasher, Fnv64Hasher};
pub use iter::{IntoIter, Iter};
