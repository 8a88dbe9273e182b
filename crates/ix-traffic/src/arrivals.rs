//! `ArrivalGenerator` — admits new vehicles into the lane queues.
//!
//! The generator owns the run's vehicle counter.  Numbers are handed out from
//! [`VehicleId::FIRST`] upwards and creation stops for good once the cap is
//! reached, even in the middle of a batch.

use ix_core::{BatchRange, RandomSource, Tick, VehicleId};
use log::trace;

use crate::{LaneQueueSet, Vehicle};

/// Creates randomly routed vehicles up to a fixed lifetime cap.
#[derive(Clone, Debug)]
pub struct ArrivalGenerator {
    next_id: VehicleId,
    cap:     u32,
}

impl ArrivalGenerator {
    /// A generator that will create at most `cap` vehicles over its lifetime.
    pub fn new(cap: u32) -> Self {
        Self {
            next_id: VehicleId::FIRST,
            cap,
        }
    }

    /// The lifetime vehicle cap.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Vehicles created so far.
    pub fn created(&self) -> u32 {
        self.next_id.get() - VehicleId::FIRST.get()
    }

    /// Vehicles that may still be created.
    pub fn remaining(&self) -> u32 {
        self.cap.saturating_sub(self.created())
    }

    /// `true` once the cap has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Create up to `count` vehicles arriving at `now` and enqueue each one.
    ///
    /// Stops early when the cap is reached.  Returns the number admitted.
    pub fn admit<R: RandomSource>(
        &mut self,
        count:  u32,
        now:    Tick,
        rng:    &mut R,
        queues: &mut LaneQueueSet,
    ) -> u32 {
        let admitted = count.min(self.remaining());
        for _ in 0..admitted {
            let id = self.next_id;
            self.next_id = id.next();
            let lane = queues.enqueue(Vehicle::random(id, now, rng));
            trace!("vehicle {id} queued in {lane} at {now}");
        }
        admitted
    }

    /// Draw a batch size uniformly from `range`, then [`admit`](Self::admit)
    /// that many vehicles.
    ///
    /// The batch size is drawn even when the cap is already reached so that
    /// the draw sequence does not depend on how many vehicles remain.
    pub fn admit_batch<R: RandomSource>(
        &mut self,
        range:  BatchRange,
        now:    Tick,
        rng:    &mut R,
        queues: &mut LaneQueueSet,
    ) -> u32 {
        let count = range.min + rng.next_below(range.span());
        self.admit(count, now, rng, queues)
    }
}
