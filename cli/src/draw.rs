//! Executes a resolved request against a fresh engine

use crate::error::CliError;
use crate::request::{DrawKind, DrawRequest};
use log::info;
use randomkit::{state_digest, RandomKit};
use serde::Serialize;

/// Drawn values, kept in their natural numeric type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Unsigned(Vec<u64>),
    Signed(Vec<i64>),
    Float(Vec<f64>),
    Indices(Vec<usize>),
}

/// JSON document printed on stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawOutput {
    pub seed: u64,
    pub kind: DrawKind,
    pub values: Values,
    /// Digest of the engine state after drawing
    pub state_digest: String,
}

pub fn execute(request: &DrawRequest) -> Result<DrawOutput, CliError> {
    info!(
        "drawing {} {} with seed {}",
        request.count, request.kind, request.seed
    );

    let mut rng = RandomKit::new(request.seed);
    let n = request.count;

    let values = match request.kind {
        DrawKind::Words => Values::Unsigned((0..n).map(|_| rng.next_u32() as u64).collect()),
        DrawKind::Uint64 => Values::Unsigned((0..n).map(|_| rng.next_u64()).collect()),
        DrawKind::Int63 => Values::Signed((0..n).map(|_| rng.next_i63()).collect()),
        DrawKind::Doubles => Values::Float((0..n).map(|_| rng.next_f64()).collect()),
        DrawKind::Gaussians => Values::Float((0..n).map(|_| rng.next_gaussian()).collect()),
        DrawKind::Bounded => Values::Unsigned(rng.next_in_range(request.low, request.span, n)),
        DrawKind::Index => Values::Unsigned(
            (0..n)
                .map(|_| rng.next_index(request.bound))
                .collect::<Result<_, _>>()?,
        ),
        DrawKind::Permutation => Values::Indices(rng.permutation(n)),
    };

    Ok(DrawOutput {
        seed: request.seed,
        kind: request.kind,
        values,
        state_digest: state_digest(&rng)?,
    })
}
