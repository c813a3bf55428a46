//! FNV-1a helpers for content fingerprints.
//!
//! Fast and deterministic across runs and platforms. Not cryptographic:
//! fingerprints key in-memory lookups, and callers that need exact
//! equality must still compare the underlying data.

use std::hash::{BuildHasherDefault, Hasher};

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
pub fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
pub fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for b in v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// A [`Hasher`] running FNV-1a over every written byte.
///
/// Keys of in-memory sets built from small integers hash faster through
/// it than through SipHash.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher(u64);

impl Default for FnvHasher {
    fn default() -> Self {
        Self(FNV_OFFSET)
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = fnv1a_byte(self.0, b);
        }
    }
}

/// `BuildHasher` for `HashMap`/`HashSet` keyed with [`FnvHasher`].
pub type FnvBuildHasher = BuildHasherDefault<FnvHasher>;
