//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the synthesis core flows through this module to ensure
//! deterministic output. Seeds are derived using BLAKE3 hashing so that each
//! asset and each component within an asset gets an independent stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
///
/// # Arguments
/// * `seed` - A 32-bit seed value
///
/// # Returns
/// A deterministically initialized PCG32 generator
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific component from a base seed using a string key.
///
/// Uses BLAKE3 to hash the base seed concatenated with the key, producing an
/// independent seed per component (e.g. "snare", "hat") or per catalog asset.
///
/// # Arguments
/// * `base_seed` - The base seed (u32)
/// * `key` - A string identifier for the component or asset
///
/// # Returns
/// A derived u32 seed
pub fn derive_seed(base_seed: u32, key: &str) -> u32 {
    // Concatenate base_seed (as little-endian bytes) and key (as UTF-8)
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4]
        .try_into()
        .expect("hash is at least 4 bytes");
    u32::from_le_bytes(bytes)
}

/// A seeded stream of uniform noise in `[-1.0, 1.0]`.
///
/// Every voice owns its stream, constructed from an explicit seed, so that
/// re-running the catalog is bit-reproducible regardless of generation order.
#[derive(Debug, Clone)]
pub struct NoiseStream {
    rng: Pcg32,
}

impl NoiseStream {
    /// Creates a noise stream from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: create_rng(seed),
        }
    }

    /// Draws the next uniform value in `[-1.0, 1.0]`.
    pub fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
