//! Deterministic random number generation
//!
//! The [`RngEngine`] contract and its three implementations. All randomness
//! consumed by the sampling utilities MUST go through this module.

mod mersenne_twister;
mod mulberry32;
mod xorshift128plus;

pub use mersenne_twister::MersenneTwisterEngine;
pub use mulberry32::Mulberry32Engine;
pub use xorshift128plus::XorShift128PlusEngine;

use thiserror::Error;

/// Errors that can occur during engine construction and state restore
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("seed value cannot be zero")]
    ZeroSeed,

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("unsupported engine kind: {0}")]
    UnsupportedKind(String),
}

/// A deterministic generator of values in `[0.0, 1.0)`.
///
/// Implementations advance their internal state on every [`next`] call and
/// can export that state as an opaque string snapshot, which makes any
/// sequence reproducible and resumable.
///
/// # Determinism
///
/// `next()` is a pure function of the current state: two engines of the same
/// kind holding identical state produce identical future sequences. No
/// external randomness is consulted mid-sequence.
///
/// An engine is owned by a single caller. Sharing one across threads
/// requires external synchronization; use one engine per thread instead.
///
/// [`next`]: RngEngine::next
pub trait RngEngine {
    /// Generate the next value in `[0.0, 1.0)`, advancing the state.
    fn next(&mut self) -> f64;

    /// Export the current state as an opaque string snapshot.
    ///
    /// Taking a snapshot does not perturb the sequence.
    fn get_state(&self) -> String;

    /// Restore a state previously exported by [`get_state`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if the snapshot is malformed or
    /// has the wrong shape for this engine kind.
    ///
    /// [`get_state`]: RngEngine::get_state
    fn set_state(&mut self, state: &str) -> Result<(), EngineError>;
}
