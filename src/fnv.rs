//! FNV-64 digest used to place keys into buckets.
//!
//! The digest is unsalted: the same key maps to the same bucket in every
//! process, which keeps enumeration order reproducible across runs.

use core::hash::{BuildHasher, Hasher};

/// Offset basis for the 64-bit FNV variants.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// 64-bit FNV prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Streaming FNV-64 hasher (xor, then multiply per byte).
#[derive(Debug, Copy, Clone)]
pub struct Fnv64Hasher {
    state: u64,
}

impl Fnv64Hasher {
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for Fnv64Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv64Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= u64::from(b);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// `BuildHasher` producing fresh [`Fnv64Hasher`]s. This is the default
/// hasher of [`ChainedHashMap`](crate::ChainedHashMap).
#[derive(Debug, Copy, Clone, Default)]
pub struct Fnv64BuildHasher;

impl BuildHasher for Fnv64BuildHasher {
    type Hasher = Fnv64Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Fnv64Hasher::new()
    }
}

/// Digest of `key` under hasher `S`, computed over the key's 8-byte
/// little-endian encoding.
#[inline]
pub(crate) fn key_digest<S: BuildHasher>(hasher: &S, key: i64) -> u64 {
    let mut h = hasher.build_hasher();
    h.write(&key.to_le_bytes());
    h.finish()
}

/// FNV-64 digest of `key`.
pub fn digest(key: i64) -> u64 {
    key_digest(&Fnv64BuildHasher, key)
}
