//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is based on the `foldhash` crate and
//! gives stable hash results through a fixed seed.
//!
//! `NoOpHasher` uses the written `u64` directly as the hash value.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] with a fixed seed, so the same key always
/// produces the same hash in every run.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use refpath_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("name");
/// let b = FixedHashState.hash_one("name");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that returns the last written `u64`.
///
/// Only suitable for keys that are already uniformly distributed,
/// such as [`TypeId`](core::any::TypeId).
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // rotate left so that `write_u32(10)` equals `write_u64(10)`.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// The [`BuildHasher`] of [`NoOpHasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FixedHashState, NoOpHashState};
    use core::hash::{BuildHasher, Hasher};

    #[test]
    fn noop_passes_u64_through() {
        let mut hasher = NoOpHashState.build_hasher();
        hasher.write_u64(0xDEAD_BEEF);
        assert_eq!(hasher.finish(), 0xDEAD_BEEF);
    }

    #[test]
    fn noop_bytes_match_u64() {
        let mut a = NoOpHashState.build_hasher();
        a.write_u32(10);
        let mut b = NoOpHashState.build_hasher();
        b.write_u64(10);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn fixed_state_is_stable() {
        assert_eq!(
            FixedHashState.hash_one("Departments"),
            FixedHashState.hash_one("Departments"),
        );
        assert_ne!(
            FixedHashState.hash_one("Departments"),
            FixedHashState.hash_one("departments"),
        );
    }
}
