//! Run configuration.
//!
//! `Default` reproduces the standard intersection: a 120-vehicle cap, 3 s
//! rounds, two north/south rounds and three east/west rounds per light
//! change.  Applications may load overrides from JSON with the `serde`
//! feature; missing fields fall back to the defaults.

use crate::{IxError, IxResult};

/// Largest accepted `vehicle_cap`.
pub const MAX_VEHICLE_CAP: u32 = 1_000_000;

/// Largest accepted `round_secs`.
pub const MAX_ROUND_SECS: u64 = 3_600;

/// Largest accepted `ns_rounds` or `ew_rounds`.
pub const MAX_ROUNDS: u32 = 1_000;

// ── BatchRange ────────────────────────────────────────────────────────────────

/// Half-open range `[min, max)` from which an arrival batch size is drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchRange {
    pub min: u32,
    pub max: u32,
}

impl BatchRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `n`.
    pub const fn exactly(n: u32) -> Self {
        Self { min: n, max: n.saturating_add(1) }
    }

    /// Number of distinct sizes in the range.
    #[inline]
    pub fn span(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    pub fn is_empty(&self) -> bool {
        self.span() == 0
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces an identical run.
    pub seed: u64,

    /// Total vehicles admitted over the whole run (inclusive).
    pub vehicle_cap: u32,

    /// Seconds the clock advances per round.
    pub round_secs: u64,

    /// Rounds per north/south phase.
    pub ns_rounds: u32,

    /// Rounds per east/west phase.
    pub ew_rounds: u32,

    /// Batch admitted once before the first phase.
    pub initial_batch: BatchRange,

    /// Batch admitted after every north/south phase.
    pub after_ns_batch: BatchRange,

    /// Batch admitted after every east/west phase.
    pub after_ew_batch: BatchRange,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:           0,
            vehicle_cap:    120,
            round_secs:     3,
            ns_rounds:      2,
            ew_rounds:      3,
            initial_batch:  BatchRange::new(7, 13),
            after_ns_batch: BatchRange::new(8, 16),
            after_ew_batch: BatchRange::new(3, 16),
        }
    }
}

impl SimConfig {
    /// Reject configurations the run controller cannot execute.
    ///
    /// The upper bounds keep every clock and vehicle-number computation of a
    /// run inside its integer type.
    pub fn validate(&self) -> IxResult<()> {
        if self.vehicle_cap > MAX_VEHICLE_CAP {
            return Err(IxError::Config(format!(
                "vehicle_cap {} exceeds {MAX_VEHICLE_CAP}",
                self.vehicle_cap
            )));
        }
        if !(1..=MAX_ROUND_SECS).contains(&self.round_secs) {
            return Err(IxError::Config(format!(
                "round_secs must be in 1..={MAX_ROUND_SECS}, got {}",
                self.round_secs
            )));
        }
        for (name, rounds) in [("ns_rounds", self.ns_rounds), ("ew_rounds", self.ew_rounds)] {
            if !(1..=MAX_ROUNDS).contains(&rounds) {
                return Err(IxError::Config(format!(
                    "{name} must be in 1..={MAX_ROUNDS}, got {rounds}"
                )));
            }
        }
        for (name, range) in [
            ("initial_batch", self.initial_batch),
            ("after_ns_batch", self.after_ns_batch),
            ("after_ew_batch", self.after_ew_batch),
        ] {
            if range.is_empty() {
                return Err(IxError::Config(format!(
                    "{name} is empty: [{}, {})",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Clock advance of one north/south phase.
    #[inline]
    pub fn ns_phase_secs(&self) -> u64 {
        self.round_secs.saturating_mul(u64::from(self.ns_rounds))
    }

    /// Clock advance of one east/west phase.
    #[inline]
    pub fn ew_phase_secs(&self) -> u64 {
        self.round_secs.saturating_mul(u64::from(self.ew_rounds))
    }
}
