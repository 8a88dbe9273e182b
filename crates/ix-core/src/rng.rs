//! Random sources for vehicle generation.
//!
//! # Determinism strategy
//!
//! Every random decision in a run (batch sizes, directions, lanes) goes
//! through a single [`RandomSource`] owned by the run controller.  The draw
//! order is fixed, so:
//!
//! - a [`SimRng`] seeded with the same value always reproduces the same run;
//! - a [`ScriptedSource`] replays an exact sequence of choices, which lets
//!   tests force vehicles into specific queues.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The only randomness primitive the simulation needs.
pub trait RandomSource {
    /// A value uniformly distributed in `0..bound`.
    ///
    /// `bound` is always at least 1.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Uniformly choose one element of a non-empty slice.
    fn pick<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.next_below(items.len() as u32) as usize]
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound.max(1))
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays a fixed sequence of draws.
///
/// Each scripted value is reduced modulo the requested bound, so a script can
/// be written in terms of the enum order used by the caller (e.g. `1` for
/// `Direction::East`).  Once the script is exhausted every draw returns 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
    drawn:  usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            drawn:  0,
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Total number of draws served so far (scripted or defaulted).
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.drawn += 1;
        match self.values.pop_front() {
            Some(v) => v % bound.max(1),
            None    => 0,
        }
    }
}
