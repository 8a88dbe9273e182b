//! The light phases and the round-robin release rule.
//!
//! A phase runs a fixed number of rounds.  Each round first advances the
//! clock by `round_secs`, then visits the phase's four queues in a fixed
//! order and releases at most one vehicle from each.  Every vehicle released
//! in a round is stamped with that round's clock value, so departures come in
//! batches that share a timestamp.  Empty queues are skipped; a phase whose
//! queues are all empty still runs every round and still advances the clock.

use std::fmt;

use ix_core::{BatchRange, LaneQueueId, SimClock, SimConfig, Tick};
use ix_traffic::{LaneQueueSet, Vehicle};

/// Which direction group has the green light.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    NorthSouth,
    EastWest,
}

impl Phase {
    /// Phases in the order the run controller alternates them.
    pub const CYCLE: [Phase; 2] = [Phase::NorthSouth, Phase::EastWest];

    /// Queues released by this phase, in service order.
    pub fn lanes(self) -> [LaneQueueId; 4] {
        match self {
            Phase::NorthSouth => [
                LaneQueueId::NorthR,
                LaneQueueId::NorthL,
                LaneQueueId::SouthR,
                LaneQueueId::SouthL,
            ],
            Phase::EastWest => [
                LaneQueueId::EastR,
                LaneQueueId::EastL,
                LaneQueueId::WestR,
                LaneQueueId::WestL,
            ],
        }
    }

    /// Rounds per invocation under `config`.
    pub fn rounds(self, config: &SimConfig) -> u32 {
        match self {
            Phase::NorthSouth => config.ns_rounds,
            Phase::EastWest => config.ew_rounds,
        }
    }

    /// Arrival batch admitted right after this phase.
    pub fn arrivals_after(self, config: &SimConfig) -> BatchRange {
        match self {
            Phase::NorthSouth => config.after_ns_batch,
            Phase::EastWest => config.after_ew_batch,
        }
    }

}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::NorthSouth => "north/south",
            Phase::EastWest => "east/west",
        })
    }
}

/// What one phase invocation did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PhaseOutcome {
    pub phase:    Phase,
    /// Clock value when the phase began.
    pub started:  Tick,
    /// Clock value when the phase ended.
    pub ended:    Tick,
    pub departed: usize,
}

/// Run one invocation of `phase`.
///
/// `on_departure` receives each released vehicle, already stamped, in
/// release order.  The vehicle is not stored anywhere else afterwards.
pub fn run_rounds<F>(
    phase:        Phase,
    config:       &SimConfig,
    clock:        &mut SimClock,
    queues:       &mut LaneQueueSet,
    mut on_departure: F,
) -> PhaseOutcome
where
    F: FnMut(Vehicle),
{
    let started = clock.now();
    let mut departed = 0;

    for _ in 0..phase.rounds(config) {
        let now = clock.advance(config.round_secs);
        for lane in phase.lanes() {
            if let Some(mut vehicle) = queues.try_dequeue(lane) {
                vehicle.stamp_departure(now);
                departed += 1;
                on_departure(vehicle);
            }
        }
    }

    PhaseOutcome {
        phase,
        started,
        ended: clock.now(),
        departed,
    }
}
