//! Engine state
//!
//! `RandomKit` is the single mutable object of the engine: the twister's
//! word array and cursor plus the cached companion Gaussian. Every sampler
//! in [`crate::sampling`] is a method on this type that reads and advances
//! the same instance.
//!
//! # Duplication
//!
//! `Clone` is a full deep copy. The original and the copy share no storage
//! and produce identical futures until either is advanced.

use crate::twister::{Twister, STATE_LEN};
use log::debug;
use serde::{Deserialize, Serialize};

/// Deterministic random engine compatible with numpy's `RandomState`
///
/// # Example
/// ```
/// use randomkit::RandomKit;
///
/// let mut rng = RandomKit::new(7);
/// let x = rng.next_f64();
/// assert!((x - 0.07630829).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "crate::checkpoint::StateSnapshot",
    into = "crate::checkpoint::StateSnapshot"
)]
pub struct RandomKit {
    pub(crate) twister: Twister,
    pub(crate) cached_gaussian: Option<f64>,
}

impl RandomKit {
    /// Create an engine seeded with the low 32 bits of `seed`
    pub fn new(seed: u64) -> Self {
        let seed = mask_seed(seed);
        debug!("seeding randomkit engine with {}", seed);
        Self {
            twister: Twister::new(seed),
            cached_gaussian: None,
        }
    }

    /// Re-initialize in place; also drops any cached Gaussian
    pub fn seed(&mut self, seed: u64) {
        let seed = mask_seed(seed);
        debug!("reseeding randomkit engine with {}", seed);
        self.twister.reseed(seed);
        self.cached_gaussian = None;
    }

    /// Next tempered 32-bit word
    pub fn next_u32(&mut self) -> u32 {
        self.twister.next_u32()
    }

    /// Independent deep copy with the same future sequence
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Read cursor in `[0, 624]`
    pub fn position(&self) -> usize {
        self.twister.cursor()
    }

    pub fn has_cached_gaussian(&self) -> bool {
        self.cached_gaussian.is_some()
    }

    pub fn cached_gaussian(&self) -> Option<f64> {
        self.cached_gaussian
    }

    /// Raw (untempered) state words
    pub fn words(&self) -> &[u32; STATE_LEN] {
        self.twister.words()
    }

    pub(crate) fn from_parts(
        words: [u32; STATE_LEN],
        cursor: usize,
        cached_gaussian: Option<f64>,
    ) -> Self {
        Self {
            twister: Twister::from_parts(words, cursor),
            cached_gaussian,
        }
    }
}

/// Seeds are taken modulo 2^32, like the reference.
fn mask_seed(seed: u64) -> u32 {
    (seed & 0xffff_ffff) as u32
}
