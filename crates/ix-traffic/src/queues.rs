//! `LaneQueueSet` — the eight waiting queues of the intersection.
//!
//! Each queue is a strict FIFO.  Vehicles enter only through
//! [`enqueue`](LaneQueueSet::enqueue), which routes by the vehicle's own
//! direction and lane, and leave only through
//! [`try_dequeue`](LaneQueueSet::try_dequeue).  An empty queue yields `None`;
//! that is the normal outcome for an idle lane, not an error.

use std::collections::VecDeque;

use ix_core::LaneQueueId;

use crate::Vehicle;

/// Eight FIFO queues in a fixed array indexed by [`LaneQueueId`].
#[derive(Default, Debug, Clone)]
pub struct LaneQueueSet {
    queues: [VecDeque<Vehicle>; LaneQueueId::COUNT],
    /// Cached total vehicle count for O(1) `len()`.
    total:  usize,
}

impl LaneQueueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `vehicle` to the back of its routed queue and return that queue.
    pub fn enqueue(&mut self, vehicle: Vehicle) -> LaneQueueId {
        let lane = vehicle.queue();
        self.queues[lane.index()].push_back(vehicle);
        self.total += 1;
        lane
    }

    /// Remove the vehicle at the front of `lane`, if any.
    pub fn try_dequeue(&mut self, lane: LaneQueueId) -> Option<Vehicle> {
        let vehicle = self.queues[lane.index()].pop_front()?;
        self.total -= 1;
        Some(vehicle)
    }

    /// Number of vehicles waiting in `lane`.
    pub fn lane_len(&self, lane: LaneQueueId) -> usize {
        self.queues[lane.index()].len()
    }

    /// Total number of vehicles waiting across all eight queues.
    pub fn len(&self) -> usize {
        self.total
    }

    /// `true` when all eight queues are simultaneously empty.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

}
