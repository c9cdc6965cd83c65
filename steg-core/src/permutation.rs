//! Keyed pseudo-random traversal order over pixel positions.
//!
//! Both embed and extract must derive the identical seed and permutation
//! from the same passphrase, or decoding is impossible. The PRNG family
//! (`Pcg64Mcg`) is part of this crate's wire contract: the seed
//! derivation is fixed, but cross-implementation interop additionally
//! requires agreeing on the PRNG itself.

use rand::{seq::index::sample, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::hash::sha256;

/// `seed = first 8 bytes of SHA-256(passphrase), interpreted big-endian`.
pub fn seed_from_passphrase(passphrase: &str) -> u64 {
    let digest = sha256(passphrase.as_bytes());
    u64::from_be_bytes(digest[..8].try_into().unwrap())
}

/// A permutation of `[0, pixel_count)`, i.e. a Fisher-Yates shuffle of the
/// pixel indices, seeded deterministically from `seed`.
pub fn pixel_order(seed: u64, pixel_count: usize) -> Vec<usize> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    // amount == length produces a full permutation, equivalent to a
    // Fisher-Yates shuffle of 0..pixel_count.
    sample(&mut rng, pixel_count, pixel_count).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_passphrase_same_size_gives_identical_order() {
        let seed = seed_from_passphrase("hunter2");
        let a = pixel_order(seed, 1000);
        let b = pixel_order(seed, 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn different_passphrase_gives_different_order() {
        let a = pixel_order(seed_from_passphrase("abc"), 1000);
        let b = pixel_order(seed_from_passphrase("abd"), 1000);
        assert_ne!(a, b);
    }

    #[test]
    fn order_is_a_permutation() {
        let order = pixel_order(seed_from_passphrase("k"), 256);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..256).collect::<Vec<_>>());
    }
}
