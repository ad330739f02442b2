//! xorshift128+ random number generator
//!
//! Two 64-bit words of state combined with shift/xor updates and an additive
//! output. Fast, long period, passes the common statistical batteries.
//!
//! # Determinism
//!
//! Same seed → same sequence. The second state word is derived from the
//! first with a fixed odd constant, so a single nonzero seed never produces
//! the degenerate all-zero state.

use super::{EngineError, RngEngine};

const WORD_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Deterministic 128-bit generator (two 64-bit words of state).
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{RngEngine, XorShift128PlusEngine};
///
/// let mut rng = XorShift128PlusEngine::new(12345).unwrap();
/// let value = rng.next();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct XorShift128PlusEngine {
    state: [u64; 2],
}

impl XorShift128PlusEngine {
    /// Create a new engine from a nonzero 64-bit seed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ZeroSeed`] when `seed` is 0.
    pub fn new(seed: u64) -> Result<Self, EngineError> {
        if seed == 0 {
            return Err(EngineError::ZeroSeed);
        }
        Ok(Self {
            state: [seed, seed ^ WORD_SEED_MIX],
        })
    }

    fn next_word(&mut self) -> u64 {
        // Word order matters here: the previous second word becomes the new
        // first word every step. Reordering silently diverges the sequence.
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1].wrapping_add(s0)
    }
}

impl RngEngine for XorShift128PlusEngine {
    fn next(&mut self) -> f64 {
        self.next_word() as f64 / TWO_POW_64
    }

    fn get_state(&self) -> String {
        let words = [self.state[0].to_string(), self.state[1].to_string()];
        serde_json::to_string(&words).expect("string pair always serializes")
    }

    fn set_state(&mut self, state: &str) -> Result<(), EngineError> {
        let words: Vec<String> = serde_json::from_str(state)
            .map_err(|e| EngineError::InvalidState(format!("failed to parse state: {e}")))?;
        if words.len() != 2 {
            return Err(EngineError::InvalidState(format!(
                "expected 2 state words, got {}",
                words.len()
            )));
        }
        self.state = [parse_word(&words[0])?, parse_word(&words[1])?];
        Ok(())
    }
}

/// Parse a decimal state word, masking the restored value to 64 bits.
fn parse_word(text: &str) -> Result<u64, EngineError> {
    let value = text
        .parse::<u128>()
        .map_err(|_| EngineError::InvalidState(format!("not a 64-bit value: {text:?}")))?;
    Ok(value as u64)
}
