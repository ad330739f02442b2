//! Engine construction
//!
//! Builds an engine of a requested kind from a seed source or from a
//! previously exported state snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::{
    EngineError, MersenneTwisterEngine, Mulberry32Engine, RngEngine, XorShift128PlusEngine,
};
use crate::seed::derive_seed;

/// The supported engine kinds.
///
/// Serializes with the same tags accepted by [`FromStr`], so the kind can
/// sit directly inside serde-backed configuration:
///
/// ```
/// use seeded_rng_core_rs::EngineKind;
///
/// let kind: EngineKind = serde_json::from_str("\"mersenne-twister\"").unwrap();
/// assert_eq!(kind, EngineKind::MersenneTwister);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    #[serde(rename = "mulberry32")]
    Mulberry32,
    #[serde(rename = "xorshift128plus")]
    XorShift128Plus,
    #[serde(rename = "mersenne-twister")]
    MersenneTwister,
}

impl EngineKind {
    /// The canonical tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Mulberry32 => "mulberry32",
            EngineKind::XorShift128Plus => "xorshift128plus",
            EngineKind::MersenneTwister => "mersenne-twister",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "mulberry32" => Ok(EngineKind::Mulberry32),
            "xorshift128plus" => Ok(EngineKind::XorShift128Plus),
            "mersenne-twister" => Ok(EngineKind::MersenneTwister),
            other => Err(EngineError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Placeholder seed for the restore path. The snapshot applied right after
/// construction discards everything this seed produced.
const RESTORE_SEED: u32 = 100;

/// Create an engine of the requested kind.
///
/// The seed is derived from `seed_source` via [`derive_seed`]: deterministic
/// for a given string, drawn from entropy when `None`.
///
/// # Errors
///
/// Returns [`EngineError::ZeroSeed`] when the derived seed is 0 and the
/// requested kind is [`EngineKind::XorShift128Plus`] (the empty string
/// hashes to 0).
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{create_engine, EngineKind, RngEngine};
///
/// let mut a = create_engine(EngineKind::Mulberry32, Some("run-17")).unwrap();
/// let mut b = create_engine(EngineKind::Mulberry32, Some("run-17")).unwrap();
/// assert_eq!(a.next(), b.next());
/// ```
pub fn create_engine(
    kind: EngineKind,
    seed_source: Option<&str>,
) -> Result<Box<dyn RngEngine>, EngineError> {
    build(kind, derive_seed(seed_source))
}

/// Create an engine of the requested kind and restore a saved state into it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidState`] when the snapshot does not match
/// the requested kind's state shape.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{create_engine, create_engine_with_state, EngineKind, RngEngine};
///
/// let mut original = create_engine(EngineKind::Mulberry32, Some("run-17")).unwrap();
/// original.next();
///
/// let snapshot = original.get_state();
/// let mut resumed = create_engine_with_state(EngineKind::Mulberry32, &snapshot).unwrap();
/// assert_eq!(original.next(), resumed.next());
/// ```
pub fn create_engine_with_state(
    kind: EngineKind,
    state: &str,
) -> Result<Box<dyn RngEngine>, EngineError> {
    let mut engine = build(kind, RESTORE_SEED)?;
    engine.set_state(state)?;
    Ok(engine)
}

fn build(kind: EngineKind, seed: u32) -> Result<Box<dyn RngEngine>, EngineError> {
    Ok(match kind {
        EngineKind::Mulberry32 => Box::new(Mulberry32Engine::new(seed)),
        EngineKind::XorShift128Plus => Box::new(XorShift128PlusEngine::new(u64::from(seed))?),
        EngineKind::MersenneTwister => Box::new(MersenneTwisterEngine::new(seed)),
    })
}
