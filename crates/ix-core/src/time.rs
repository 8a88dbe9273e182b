//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing `Tick` counter where one tick is
//! one simulated second.  Only the phase scheduler advances the clock; the
//! arrival generator and the scheduler read it to stamp arrival and departure
//! times.  Integer ticks keep all wait-time arithmetic exact.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time in seconds since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// Saturates at zero if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single simulation clock of a run.
///
/// `SimClock` is cheap to copy and holds no heap data.  It is owned by the
/// run controller; nothing else mutates it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick.
    pub current_tick: Tick,
}

impl SimClock {
    /// A clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Advance the clock by `secs` seconds and return the new tick.
    #[inline]
    pub fn advance(&mut self, secs: u64) -> Tick {
        self.current_tick = self.current_tick + secs;
        self.current_tick
    }

    /// Break elapsed time into (minute, second) components.
    pub fn elapsed_ms(&self) -> (u64, u64) {
        (self.current_tick.0 / 60, self.current_tick.0 % 60)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({}m {:02}s)", self.current_tick, m, s)
    }
}
