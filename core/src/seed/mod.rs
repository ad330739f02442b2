//! Seed derivation
//!
//! Maps an optional seed-source string onto a 32-bit seed: a stable
//! polynomial hash when a string is given, a bounded random draw otherwise.

use rand::Rng;

/// Derive a 32-bit seed from an optional source string.
///
/// A given string always derives the same seed, so human-readable labels
/// ("run-17", a scenario name) can pin an entire generated sequence.
/// Without a source the seed comes from the thread-local entropy source,
/// uniform in `[0, 100000)`.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::derive_seed;
///
/// assert_eq!(derive_seed(Some("run-17")), derive_seed(Some("run-17")));
/// assert!(derive_seed(None) < 100_000);
/// ```
pub fn derive_seed(source: Option<&str>) -> u32 {
    match source {
        Some(text) => hash_source(text),
        None => rand::thread_rng().gen_range(0u32..100_000),
    }
}

/// Fold each character's code point through `hash = hash * 31 + cp` in
/// wrapping 32-bit arithmetic. The empty string hashes to 0.
fn hash_source(text: &str) -> u32 {
    let mut hash: u32 = 0;
    for ch in text.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as u32);
    }
    hash
}
