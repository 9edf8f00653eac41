//! Randomkit - Rust Engine
//!
//! Bit-exact reimplementation of numpy's legacy `randomkit` generator: a
//! 32-bit Mersenne Twister plus the polar Box-Muller normal sampler.
//!
//! # Architecture
//!
//! - **twister**: MT19937 state array, seeding, twist and tempering
//! - **state**: The engine (`RandomKit`): twister + cached Gaussian
//! - **sampling**: Uniform, Gaussian, bounded and shuffle samplers
//! - **checkpoint**: numpy-compatible state snapshots
//! - **adapters**: `Source64` and `rand_core` views of a shared engine
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. Every formula matches the reference bit for bit
//! 3. Failed calls never consume draws
//!
//! The engine is not cryptographically secure.

// Module declarations
pub mod adapters;
pub mod checkpoint;
pub mod error;
pub mod sampling;
pub mod state;
pub mod twister;

// Re-exports for convenience
pub use adapters::{CoreRng, MathSource, SharedState, Source64};
pub use checkpoint::{state_digest, validate_snapshot, StateSnapshot};
pub use error::RandomError;
pub use state::RandomKit;
pub use twister::{Twister, STATE_LEN};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn randomkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random_state::PyRandomState>()?;
    Ok(())
}
