use std::hash::{Hash, Hasher};

use rapidhash::fast::RapidHasher;

use crate::{LabelValue, LabelValues};

/// A type that can hash itself.
///
/// In high-performance use cases, an object can pre-hash itself, or memoize its hash value, when it
/// is anticipated that an object will be hashed multiple times.  Rather than the standard library
/// `Hash` trait, `Hashable` exposes an interface that forces objects to hash themselves entirely,
/// providing only the resulting 8-byte hash.
///
/// [`LabelValues`] memoizes its hash at construction time, which lets the series store look up
/// a borrowed slice of label values without first building an owned key.
pub trait Hashable: Hash {
    /// The hasher implementation used internally.
    type Hasher: Hasher + Default;

    /// Generate the hash of this object.
    #[inline]
    fn hashable(&self) -> u64 {
        let mut hasher = Self::Hasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Hashable for [LabelValue] {
    type Hasher = RapidHasher<'static>;
}

impl Hashable for LabelValues {
    type Hasher = KeyHasher;

    #[inline]
    fn hashable(&self) -> u64 {
        self.get_hash()
    }
}

/// A no-op hasher for pre-hashed [`LabelValues`].
///
/// `LabelValues` writes its pre-computed hash via `write_u64()` when hashed, and `finish()` simply
/// returns that value.  This keeps rehashing the series map cheap, and guarantees that the hash
/// used when growing the map matches the one used for lookups.
///
/// # Panics
///
/// Panics if `finish()` is called without first calling `write_u64()`, or if any write method
/// other than `write_u64()` is called.  This hasher is specifically for pre-hashed keys only.
#[derive(Debug, Default)]
pub struct KeyHasher {
    hash: Option<u64>,
}

impl Hasher for KeyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.hash.expect("KeyHasher::finish() called without write_u64(); KeyHasher is only for pre-hashed LabelValues")
    }

    fn write(&mut self, _bytes: &[u8]) {
        panic!("KeyHasher::write() called; KeyHasher only supports write_u64() for pre-hashed LabelValues");
    }

    #[inline(always)]
    fn write_u64(&mut self, i: u64) {
        self.hash = Some(i);
    }
}
