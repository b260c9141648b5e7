//! # Random Sources
//!
//! The single randomness capability generation depends on.

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// Source of uniformly distributed integers.
///
/// Every `rand` generator implements this, so a seeded
/// [`StdRng`](rand::rngs::StdRng) gives reproducible layouts.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each scripted value is clamped into the requested interval; once the
/// script runs out every draw returns the interval's lower bound. Useful
/// for building layouts whose every room is chosen by hand.
///
/// # Examples
///
/// ```
/// use delve::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([3, 9]);
/// assert_eq!(source.next_in_range(1, 5), 3);
/// assert_eq!(source.next_in_range(1, 5), 5);
/// assert_eq!(source.next_in_range(1, 5), 1);
/// assert!(source.is_exhausted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<i32>,
    draws: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Whether every scripted value has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        self.draws += 1;
        match self.values.pop_front() {
            Some(value) => value.clamp(low, high),
            None => low,
        }
    }
}
