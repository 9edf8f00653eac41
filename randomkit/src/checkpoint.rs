//! Checkpoint - Save/Load Engine State
//!
//! Serializes the complete engine state in the same shape as numpy's
//! `RandomState.get_state()` tuple, so a state can be moved between this
//! engine and numpy without loss.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored engine continues the exact sequence
//! - **Key Length**: exactly 624 words
//! - **Cursor Range**: `pos` in `[0, 624]`
//! - **Gaussian Cache**: a present cache holds a finite value

use crate::twister::STATE_LEN;
use crate::{RandomError, RandomKit};
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Algorithm tag numpy writes as the first tuple element
pub const ALGORITHM: &str = "MT19937";

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete engine state snapshot
///
/// Binomial scratch fields of the reference layout are not carried; numpy
/// does not export them either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Always `"MT19937"`
    pub algorithm: String,

    /// Untempered state words
    pub key: Vec<u32>,

    /// Read cursor
    pub pos: usize,

    /// Whether `cached_gaussian` holds a pending companion variate
    pub has_gauss: bool,

    /// Pending Gaussian, `0.0` when `has_gauss` is false
    pub cached_gaussian: f64,
}

impl From<&RandomKit> for StateSnapshot {
    fn from(rng: &RandomKit) -> Self {
        StateSnapshot {
            algorithm: ALGORITHM.to_string(),
            key: rng.words().to_vec(),
            pos: rng.position(),
            has_gauss: rng.has_cached_gaussian(),
            cached_gaussian: rng.cached_gaussian().unwrap_or(0.0),
        }
    }
}

impl From<RandomKit> for StateSnapshot {
    fn from(rng: RandomKit) -> Self {
        StateSnapshot::from(&rng)
    }
}

impl TryFrom<StateSnapshot> for RandomKit {
    type Error = RandomError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        RandomKit::restore(&snapshot)
    }
}

impl RandomKit {
    /// Capture the current state
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(self)
    }

    /// Rebuild an engine from a validated snapshot
    ///
    /// # Errors
    /// `InvalidState` if the snapshot breaks any invariant listed in the
    /// module docs.
    pub fn restore(snapshot: &StateSnapshot) -> Result<Self, RandomError> {
        validate_snapshot(snapshot)?;

        let mut words = [0u32; STATE_LEN];
        words.copy_from_slice(&snapshot.key);
        let cached = snapshot.has_gauss.then_some(snapshot.cached_gaussian);

        debug!(
            "restoring randomkit engine at position {} (cached gaussian: {})",
            snapshot.pos, snapshot.has_gauss
        );
        Ok(RandomKit::from_parts(words, snapshot.pos, cached))
    }

    /// Replace this engine's state with a snapshot
    ///
    /// On error the engine is left unchanged.
    pub fn set_state(&mut self, snapshot: &StateSnapshot) -> Result<(), RandomError> {
        *self = RandomKit::restore(snapshot)?;
        Ok(())
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate snapshot integrity
///
/// Checks:
/// - Algorithm tag
/// - Key length
/// - Cursor range
/// - Cached Gaussian is finite when present
pub fn validate_snapshot(snapshot: &StateSnapshot) -> Result<(), RandomError> {
    if snapshot.algorithm != ALGORITHM {
        return Err(RandomError::InvalidState(format!(
            "Unsupported algorithm: expected {}, got {}",
            ALGORITHM, snapshot.algorithm
        )));
    }

    if snapshot.key.len() != STATE_LEN {
        return Err(RandomError::InvalidState(format!(
            "Key length mismatch: expected {}, got {}",
            STATE_LEN,
            snapshot.key.len()
        )));
    }

    if snapshot.pos > STATE_LEN {
        return Err(RandomError::InvalidState(format!(
            "Position {} out of range [0, {}]",
            snapshot.pos, STATE_LEN
        )));
    }

    if snapshot.has_gauss && !snapshot.cached_gaussian.is_finite() {
        return Err(RandomError::InvalidState(format!(
            "Cached gaussian is not finite: {}",
            snapshot.cached_gaussian
        )));
    }

    Ok(())
}

// ============================================================================
// JSON Helpers
// ============================================================================

/// Serialize an engine to JSON
pub fn to_json(rng: &RandomKit) -> Result<String, RandomError> {
    Ok(serde_json::to_string(&rng.snapshot())?)
}

/// Restore an engine from JSON produced by [`to_json`]
pub fn from_json(json: &str) -> Result<RandomKit, RandomError> {
    let snapshot: StateSnapshot = serde_json::from_str(json)?;
    RandomKit::restore(&snapshot)
}

/// SHA-256 of the canonical JSON snapshot, as lowercase hex
///
/// Equal engines hash equal, which makes this handy for comparing states
/// across processes.
pub fn state_digest(rng: &RandomKit) -> Result<String, RandomError> {
    let json = to_json(rng)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_fresh_engine() {
        let rng = RandomKit::new(7);
        let snapshot = rng.snapshot();

        assert_eq!(snapshot.algorithm, "MT19937");
        assert_eq!(snapshot.key.len(), STATE_LEN);
        assert_eq!(snapshot.key[0], 7);
        assert_eq!(snapshot.pos, STATE_LEN);
        assert!(!snapshot.has_gauss);
        assert_eq!(snapshot.cached_gaussian, 0.0);
    }

    #[test]
    fn test_validate_rejects_short_key() {
        let mut snapshot = RandomKit::new(7).snapshot();
        snapshot.key.pop();

        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, RandomError::InvalidState(_)));
    }

    #[test]
    fn test_validate_rejects_cursor_past_end() {
        let mut snapshot = RandomKit::new(7).snapshot();
        snapshot.pos = STATE_LEN + 1;
        assert!(validate_snapshot(&snapshot).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_algorithm() {
        let mut snapshot = RandomKit::new(7).snapshot();
        snapshot.algorithm = "PCG64".to_string();
        assert!(validate_snapshot(&snapshot).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_cache() {
        let mut snapshot = RandomKit::new(7).snapshot();
        snapshot.has_gauss = true;
        snapshot.cached_gaussian = f64::INFINITY;
        assert!(validate_snapshot(&snapshot).is_err());

        // Ignored when no cache is flagged
        snapshot.has_gauss = false;
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn test_set_state_failure_leaves_engine_unchanged() {
        let mut rng = RandomKit::new(7);
        rng.next_u32();
        let before = rng.clone();

        let mut bad = rng.snapshot();
        bad.key.clear();

        assert!(rng.set_state(&bad).is_err());
        assert_eq!(rng, before);
    }

    #[test]
    fn test_state_digest_tracks_position() {
        let mut a = RandomKit::new(7);
        let b = RandomKit::new(7);
        assert_eq!(state_digest(&a).unwrap(), state_digest(&b).unwrap());

        a.next_u32();
        assert_ne!(state_digest(&a).unwrap(), state_digest(&b).unwrap());
    }
}
