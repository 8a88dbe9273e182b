//! Aggregate statistics for one run.

use ix_core::{LaneQueueId, Tick};
use ix_traffic::Vehicle;

use crate::{Phase, PhaseOutcome};

/// Totals accumulated by the run controller and returned from
/// [`Sim::run`][crate::Sim::run].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Vehicles created by the arrival generator.
    pub admitted:        u32,
    /// Vehicles released by the scheduler.
    pub departed:        u32,
    /// Clock value when the run finished.
    pub final_tick:      Tick,
    pub ns_phases:       u32,
    pub ew_phases:       u32,
    pub total_wait_secs: u64,
    pub max_wait_secs:   u64,
    /// Departures per queue, indexed by `LaneQueueId::index()`.
    pub departures_by_queue: [u32; LaneQueueId::COUNT],
}

impl RunSummary {
    pub(crate) fn record_departure(&mut self, vehicle: &Vehicle) {
        let wait = vehicle.wait_secs();
        self.departed += 1;
        self.total_wait_secs += wait;
        self.max_wait_secs = self.max_wait_secs.max(wait);
        self.departures_by_queue[vehicle.queue().index()] += 1;
    }

    pub(crate) fn record_phase(&mut self, outcome: &PhaseOutcome) {
        match outcome.phase {
            Phase::NorthSouth => self.ns_phases += 1,
            Phase::EastWest => self.ew_phases += 1,
        }
        self.final_tick = outcome.ended;
    }

    /// Mean wait over all departed vehicles; 0 if none departed.
    pub fn mean_wait_secs(&self) -> f64 {
        if self.departed == 0 {
            0.0
        } else {
            self.total_wait_secs as f64 / self.departed as f64
        }
    }

    /// Departures recorded for `lane`.
    pub fn departures(&self, lane: LaneQueueId) -> u32 {
        self.departures_by_queue[lane.index()]
    }
}
