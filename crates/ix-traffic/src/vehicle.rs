//! A single vehicle passing through the intersection.

use ix_core::{Direction, Lane, LaneQueueId, RandomSource, Street, Tick, VehicleId};

/// Identity, route and timing of one vehicle.
///
/// Route fields never change after construction.  `departure` starts equal to
/// `arrival` and is overwritten once, by [`stamp_departure`](Self::stamp_departure),
/// when the vehicle leaves its queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub id:        VehicleId,
    pub arrival:   Tick,
    pub departure: Tick,
    pub direction: Direction,
    pub street:    Street,
    pub lane:      Lane,
}

impl Vehicle {
    /// Create a vehicle arriving at `now` with an explicit route.
    pub fn new(id: VehicleId, now: Tick, direction: Direction, lane: Lane) -> Self {
        Self {
            id,
            arrival: now,
            departure: now,
            direction,
            street: direction.street(),
            lane,
        }
    }

    /// Create a vehicle arriving at `now` with a random route.
    ///
    /// Draws the direction first, then the lane.
    pub fn random<R: RandomSource>(id: VehicleId, now: Tick, rng: &mut R) -> Self {
        let direction = rng.pick(&Direction::ALL);
        let lane = rng.pick(&Lane::ALL);
        Self::new(id, now, direction, lane)
    }

    /// The queue this vehicle waits in.
    #[inline]
    pub fn queue(&self) -> LaneQueueId {
        LaneQueueId::route(self.direction, self.lane)
    }

    /// Record the time the vehicle left the intersection.
    pub fn stamp_departure(&mut self, at: Tick) {
        debug_assert!(at >= self.arrival, "vehicle {} departs before it arrives", self.id);
        self.departure = at;
    }

    /// Seconds between arrival and departure.
    #[inline]
    pub fn wait_secs(&self) -> u64 {
        self.departure.since(self.arrival)
    }
}
