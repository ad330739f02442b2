//! Mulberry32 random number generator
//!
//! Single-word 32-bit mixing generator. Tiny state, fast, and statistically
//! solid enough for simulations and games.
//!
//! # Algorithm
//!
//! Each step adds an odd constant into the state word, then scrambles the
//! result through two multiply/xorshift rounds before scaling to `[0, 1)`.
//! All arithmetic wraps at 32 bits.

use super::{EngineError, RngEngine};

const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// Deterministic 32-bit generator with a single word of state.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{Mulberry32Engine, RngEngine};
///
/// let mut rng = Mulberry32Engine::new(12345);
/// let value = rng.next();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mulberry32Engine {
    seed: u32,
}

impl Mulberry32Engine {
    /// Create a new engine from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl RngEngine for Mulberry32Engine {
    fn next(&mut self) -> f64 {
        self.seed = self.seed.wrapping_add(STATE_INCREMENT);
        let mut t = self.seed;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    fn get_state(&self) -> String {
        self.seed.to_string()
    }

    fn set_state(&mut self, state: &str) -> Result<(), EngineError> {
        let parsed = state
            .trim()
            .parse::<i64>()
            .map_err(|_| EngineError::InvalidState(format!("not an integer: {state:?}")))?;
        // Any integer text is accepted; the value wraps to 32 bits.
        self.seed = parsed as u32;
        Ok(())
    }
}
