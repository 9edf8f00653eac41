//! Samplers layered over the engine state
//!
//! Each submodule adds methods to [`crate::RandomKit`]; none keeps state of
//! its own.
//!
//! - **uniform**: 64-bit integers, 63-bit integers, 53-bit doubles
//! - **gaussian**: polar Box-Muller with one-value caching
//! - **bounded**: masked rejection sampling over integer ranges
//! - **shuffle**: Fisher-Yates shuffle and permutations

mod bounded;
mod gaussian;
mod shuffle;
mod uniform;

pub use bounded::bit_mask;
