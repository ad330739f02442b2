//! Seeded RNG Core - Rust Engine
//!
//! Deterministic, seedable random number generation with sampling utilities
//! for reproducible simulations, games, and tests.
//!
//! # Architecture
//!
//! - **engine**: the [`RngEngine`] contract and the three generators
//!   (Mulberry32, xorshift128+, Mersenne Twister)
//! - **seed**: seed derivation from optional source strings
//! - **factory**: engine construction from a seed or a saved state snapshot
//! - **sampling**: range, item, weighted, and shuffle utilities
//!
//! # Critical Invariants
//!
//! 1. All generation is deterministic (same seed → same sequence, bit-exact)
//! 2. `next()` is a pure function of engine state
//! 3. A restored state snapshot reproduces the exact continuation sequence
//!
//! Not in scope: cryptographic unpredictability. These generators are
//! predictable by design; never use them for secrets.

// Module declarations
pub mod engine;
pub mod factory;
pub mod sampling;
pub mod seed;

// Re-exports for convenience
pub use engine::{
    EngineError, MersenneTwisterEngine, Mulberry32Engine, RngEngine, XorShift128PlusEngine,
};
pub use factory::{create_engine, create_engine_with_state, EngineKind};
pub use sampling::{
    random_in_range, random_item_from_array, random_items_from_array, random_with_weights,
    shuffle, SampleError,
};
pub use seed::derive_seed;
