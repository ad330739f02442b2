//! Mersenne Twister (MT19937) random number generator
//!
//! 624-word generator with the classic twist/temper split: the whole word
//! array is regenerated once every 624 outputs, and each extracted word is
//! tempered before scaling to `[0, 1)`.
//!
//! # Determinism
//!
//! Same seed → same sequence. The word array plus the read index is the
//! complete state, so snapshots taken mid-block resume exactly, including
//! across the twist boundary.

use serde::{Deserialize, Serialize};

use super::{EngineError, RngEngine};

const WORD_COUNT: usize = 624;
const TWIST_OFFSET: usize = 397;
const SEED_MULTIPLIER: u32 = 1_812_433_253;
const TWIST_CONSTANT: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Deterministic MT19937 generator (624 words of state plus a read index).
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{MersenneTwisterEngine, RngEngine};
///
/// let mut rng = MersenneTwisterEngine::new(12345);
/// let value = rng.next();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MersenneTwisterEngine {
    mt: [u32; WORD_COUNT],
    index: usize,
}

/// Serialized form of the engine state.
#[derive(Serialize, Deserialize)]
struct MersenneSnapshot {
    #[serde(rename = "MT")]
    mt: Vec<u32>,
    index: usize,
}

impl MersenneTwisterEngine {
    /// Create a new engine from a 32-bit seed.
    ///
    /// The word array is filled from the seed with the standard linear
    /// recurrence `MT[i] = 1812433253 * (MT[i-1] ^ (MT[i-1] >> 30)) + i`
    /// in wrapping 32-bit arithmetic.
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; WORD_COUNT];
        mt[0] = seed;
        for i in 1..WORD_COUNT {
            let prev = mt[i - 1];
            mt[i] = SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { mt, index: 0 }
    }

    /// Regenerate the full word array.
    ///
    /// Runs whenever the read index wraps to 0, i.e. once every 624 outputs
    /// (including before the very first one).
    fn twist(&mut self) {
        for i in 0..WORD_COUNT {
            let y = (self.mt[i] & UPPER_MASK) + (self.mt[(i + 1) % WORD_COUNT] & LOWER_MASK);
            self.mt[i] = self.mt[(i + TWIST_OFFSET) % WORD_COUNT] ^ (y >> 1);
            if (y & 1) == 1 {
                self.mt[i] ^= TWIST_CONSTANT;
            }
        }
    }
}

impl RngEngine for MersenneTwisterEngine {
    fn next(&mut self) -> f64 {
        if self.index == 0 {
            self.twist();
        }

        let mut y = self.mt[self.index];
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;

        self.index = (self.index + 1) % WORD_COUNT;

        f64::from(y) / 4_294_967_296.0
    }

    fn get_state(&self) -> String {
        let snapshot = MersenneSnapshot {
            mt: self.mt.to_vec(),
            index: self.index,
        };
        serde_json::to_string(&snapshot).expect("word array always serializes")
    }

    fn set_state(&mut self, state: &str) -> Result<(), EngineError> {
        let snapshot: MersenneSnapshot = serde_json::from_str(state)
            .map_err(|e| EngineError::InvalidState(format!("failed to parse state: {e}")))?;
        if snapshot.mt.len() != WORD_COUNT {
            return Err(EngineError::InvalidState(format!(
                "expected {WORD_COUNT} state words, got {}",
                snapshot.mt.len()
            )));
        }
        if snapshot.index >= WORD_COUNT {
            return Err(EngineError::InvalidState(format!(
                "index {} out of range",
                snapshot.index
            )));
        }
        self.mt.copy_from_slice(&snapshot.mt);
        self.index = snapshot.index;
        Ok(())
    }
}
