//! Sampling utilities over the engine contract
//!
//! Range, item, weighted, and shuffle helpers. Every function is generic
//! over [`RngEngine`] and never touches an engine beyond calling `next()`,
//! so any engine kind (or a test double) can drive them.

use std::collections::HashSet;

use thiserror::Error;

use crate::engine::RngEngine;

/// Errors that can occur during sampling operations
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("can't select an item from an empty array")]
    EmptyInput,

    #[error("must request at least 1 item")]
    NoItemsRequested,

    #[error("requested {requested} items but only {available} are available")]
    TooManyRequested { requested: usize, available: usize },

    #[error("min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

/// Generate a random integer in the inclusive range `[min, max]`.
///
/// A draw of exactly 0.0 yields `min`; draws approaching 1.0 yield `max`.
///
/// # Errors
///
/// Returns [`SampleError::InvalidRange`] when `min > max`.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{random_in_range, Mulberry32Engine};
///
/// let mut rng = Mulberry32Engine::new(12345);
/// let roll = random_in_range(&mut rng, 1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn random_in_range<E>(engine: &mut E, min: i64, max: i64) -> Result<i64, SampleError>
where
    E: RngEngine + ?Sized,
{
    if min > max {
        return Err(SampleError::InvalidRange { min, max });
    }
    let span = (max - min + 1) as f64;
    Ok((engine.next() * span).floor() as i64 + min)
}

/// Select one random item from a slice.
///
/// # Errors
///
/// Returns [`SampleError::EmptyInput`] when the slice is empty.
pub fn random_item_from_array<T, E>(engine: &mut E, items: &[T]) -> Result<T, SampleError>
where
    T: Clone,
    E: RngEngine + ?Sized,
{
    if items.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    let index = (engine.next() * items.len() as f64).floor() as usize;
    Ok(items[index].clone())
}

/// Select `count` distinct random items from a slice, in draw order.
///
/// Requesting exactly `items.len()` returns an order-preserving copy and
/// consumes no randomness. Anything less rejection-samples indices: a
/// duplicate draw is discarded and another draw is taken, so the engine may
/// be consulted more than `count` times.
///
/// # Errors
///
/// Returns [`SampleError::NoItemsRequested`] for a zero count and
/// [`SampleError::TooManyRequested`] when `count` exceeds the slice length.
pub fn random_items_from_array<T, E>(
    engine: &mut E,
    items: &[T],
    count: usize,
) -> Result<Vec<T>, SampleError>
where
    T: Clone,
    E: RngEngine + ?Sized,
{
    if count == 0 {
        return Err(SampleError::NoItemsRequested);
    }
    if count > items.len() {
        return Err(SampleError::TooManyRequested {
            requested: count,
            available: items.len(),
        });
    }
    if count == items.len() {
        return Ok(items.to_vec());
    }

    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(count);
    while result.len() < count {
        let index = random_in_range(engine, 0, items.len() as i64 - 1)? as usize;
        if seen.insert(index) {
            result.push(items[index].clone());
        }
    }
    Ok(result)
}

/// Select one item from a slice with probability proportional to its weight.
///
/// Draws `r = next() * total_weight`, then scans the slice accumulating
/// weights and returns the first item whose running sum exceeds `r`. When no
/// item qualifies (all weights zero, or rounding leaves `r` at or past the
/// total) the last item is returned; that fallback is defined behavior, not
/// an error.
///
/// # Errors
///
/// Returns [`SampleError::EmptyInput`] when the slice is empty.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{random_with_weights, Mulberry32Engine};
///
/// let mut rng = Mulberry32Engine::new(12345);
/// let loot = [("common", 80.0), ("rare", 19.0), ("epic", 1.0)];
/// let drop = random_with_weights(&mut rng, &loot, |item| item.1).unwrap();
/// assert!(loot.contains(&drop));
/// ```
pub fn random_with_weights<T, E, F>(
    engine: &mut E,
    items: &[T],
    weight: F,
) -> Result<T, SampleError>
where
    T: Clone,
    E: RngEngine + ?Sized,
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    let total: f64 = items.iter().map(&weight).sum();
    let target = engine.next() * total;

    let mut cumulative = 0.0;
    for item in items {
        cumulative += weight(item);
        if target < cumulative {
            return Ok(item.clone());
        }
    }
    Ok(items[items.len() - 1].clone())
}

/// Shuffle a slice into a new `Vec` without mutating the input.
///
/// Fisher–Yates over a copy: for `i` from `len - 1` down to 1, draw
/// `j = floor(next() * (i + 1))` and swap positions `i` and `j`. Empty and
/// single-element inputs come back as an independent copy, unchanged.
pub fn shuffle<T, E>(engine: &mut E, items: &[T]) -> Vec<T>
where
    T: Clone,
    E: RngEngine + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = (engine.next() * (i as f64 + 1.0)).floor() as usize;
        shuffled.swap(i, j);
    }
    shuffled
}
