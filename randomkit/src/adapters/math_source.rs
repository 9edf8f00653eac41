//! Narrow `{seed, int63, uint64}` source

use super::{share, SharedState};
use crate::RandomKit;
use std::rc::Rc;

/// Minimal integer source contract
///
/// A 63-bit non-negative stream, a full 64-bit stream and re-seeding.
pub trait Source64 {
    fn seed(&mut self, seed: i64);

    fn int63(&mut self) -> i64;

    fn uint64(&mut self) -> u64;

    /// Snapshot the source into an independent copy
    fn duplicate(&self) -> Self
    where
        Self: Sized;
}

/// [`Source64`] view of a shared engine
///
/// `Clone` hands out a second adapter over the same engine; use
/// [`Source64::duplicate`] for an independent copy.
///
/// # Example
/// ```
/// use randomkit::adapters::{MathSource, Source64};
///
/// let mut source = MathSource::new(7);
/// assert_eq!(source.int63(), 1407639518939636932);
/// ```
#[derive(Debug, Clone)]
pub struct MathSource {
    state: SharedState,
}

impl MathSource {
    /// Fresh engine seeded with `seed` (low 32 bits)
    pub fn new(seed: i64) -> Self {
        Self::from_shared(share(RandomKit::new(seed as u64)))
    }

    /// Adapter over an existing handle
    pub fn from_shared(state: SharedState) -> Self {
        Self { state }
    }

    /// Another handle to the same engine
    pub fn handle(&self) -> SharedState {
        Rc::clone(&self.state)
    }
}

impl Source64 for MathSource {
    fn seed(&mut self, seed: i64) {
        self.state.borrow_mut().seed(seed as u64);
    }

    fn int63(&mut self) -> i64 {
        self.state.borrow_mut().next_i63()
    }

    fn uint64(&mut self) -> u64 {
        self.state.borrow_mut().next_u64()
    }

    /// Deep-copies the engine; the copy does not share the handle
    fn duplicate(&self) -> Self {
        let copy = self.state.borrow().duplicate();
        Self::from_shared(share(copy))
    }
}
