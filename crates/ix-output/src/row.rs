//! Plain data row written by output backends.

use std::fmt;

use ix_core::{Direction, Lane, LaneQueueId, Street, Tick, VehicleId};
use ix_sim::Phase;
use ix_traffic::Vehicle;

/// One vehicle leaving the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureRow {
    pub vehicle:   VehicleId,
    pub direction: Direction,
    pub street:    Street,
    pub lane:      Lane,
    pub queue:     LaneQueueId,
    pub phase:     Phase,
    pub arrival:   Tick,
    pub departure: Tick,
}

impl DepartureRow {
    pub fn new(phase: Phase, vehicle: &Vehicle) -> Self {
        Self {
            vehicle:   vehicle.id,
            direction: vehicle.direction,
            street:    vehicle.street,
            lane:      vehicle.lane,
            queue:     vehicle.queue(),
            phase,
            arrival:   vehicle.arrival,
            departure: vehicle.departure,
        }
    }

    /// Seconds spent queued.
    #[inline]
    pub fn wait_secs(&self) -> u64 {
        self.departure.since(self.arrival)
    }
}

/// The departure line of the text report.
impl fmt::Display for DepartureRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Time {:02}] Vehicle {} ({}) {}. Total wait time {:02} seconds.",
            self.departure.0,
            self.vehicle,
            self.direction.bound_name(),
            self.direction.turn_description(self.lane),
            self.wait_secs(),
        )
    }
}
