//! Host interface adapters
//!
//! Thin wrappers that expose one engine through a generic "randomness
//! source" shape without coupling [`RandomKit`] to any of them. Each
//! adapter holds a [`SharedState`] handle, so several adapters (and the
//! caller) can drive the same engine.
//!
//! Only the engine's own methods reproduce numpy's doubles and normals
//! bit for bit. Distributions derived generically on top of an adapter
//! (for example through `rand`) follow their own algorithms.

mod math_source;
mod rng_core;

pub use math_source::{MathSource, Source64};
pub use rng_core::CoreRng;

use crate::RandomKit;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared, single-threaded handle to one engine
pub type SharedState = Rc<RefCell<RandomKit>>;

/// Wrap an engine in a new shared handle
pub fn share(rng: RandomKit) -> SharedState {
    Rc::new(RefCell::new(rng))
}
