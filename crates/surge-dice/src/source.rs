//! The randomness capability.
//!
//! Everything that needs randomness receives a [`RandomSource`] explicitly.
//! Production code uses [`SeededSource`]; tests can pin outcomes with
//! [`FixedSource`].

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform integer generator shared by every roll of a dispatch.
///
/// Implementations must be safe to call from concurrent dispatches.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly distributed integer in `[1, n]`.
    ///
    /// `n == 0` is treated as `n == 1`.
    fn roll(&self, n: u32) -> u32;

    /// Returns a uniformly distributed index in `[0, len)`.
    ///
    /// `len == 0` yields `0`; callers only draw from non-empty pools.
    fn pick(&self, len: usize) -> usize {
        let n = u32::try_from(len).unwrap_or(u32::MAX);
        self.roll(n).saturating_sub(1) as usize
    }
}

/// A [`StdRng`] serialized behind a mutex.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a deterministic source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Seeded when a seed is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn roll(&self, n: u32) -> u32 {
        // A panic elsewhere cannot leave the generator half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(1..=n.max(1))
    }
}

/// A source that replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into the requested range.
#[derive(Debug)]
pub struct FixedSource {
    values: Vec<u32>,
    index: AtomicUsize,
}

impl FixedSource {
    /// Replay the given sequence.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// Always return the same value.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSource {
    fn roll(&self, n: u32) -> u32 {
        if self.values.is_empty() {
            return 1;
        }
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()].clamp(1, n.max(1))
    }
}
