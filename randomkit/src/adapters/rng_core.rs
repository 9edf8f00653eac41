//! `rand_core` adapter

use super::{share, SharedState};
use crate::RandomKit;
use rand_core::{impls, Error, RngCore, SeedableRng};
use std::rc::Rc;

/// [`RngCore`] view of a shared engine
///
/// `next_u32` is the tempered twister word and `next_u64` joins two words
/// high-first, so integer streams match numpy's. Seeding through
/// [`SeedableRng::seed_from_u64`] masks to 32 bits instead of the default
/// PCG expansion.
///
/// # Example
/// ```
/// use rand_core::{RngCore, SeedableRng};
/// use randomkit::adapters::CoreRng;
///
/// let mut rng = CoreRng::seed_from_u64(7);
/// assert_eq!(rng.next_u64(), 1407639518939636932);
/// ```
#[derive(Debug, Clone)]
pub struct CoreRng {
    state: SharedState,
}

impl CoreRng {
    pub fn from_shared(state: SharedState) -> Self {
        Self { state }
    }

    /// Another handle to the same engine
    pub fn handle(&self) -> SharedState {
        Rc::clone(&self.state)
    }
}

impl RngCore for CoreRng {
    fn next_u32(&mut self) -> u32 {
        self.state.borrow_mut().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.state.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for CoreRng {
    /// Little-endian 32-bit seed
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed_from_u64(u32::from_le_bytes(seed) as u64)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_shared(share(RandomKit::new(state)))
    }
}
