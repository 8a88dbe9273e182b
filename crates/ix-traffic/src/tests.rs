//! Unit tests for ix-traffic.

use ix_core::{Direction, Lane, LaneQueueId, ScriptedSource, SimRng, Street, Tick, VehicleId};

use crate::{ArrivalGenerator, LaneQueueSet, Vehicle};

/// Script values for one vehicle: direction index then lane index.
fn route(direction: Direction, lane: Lane) -> [u32; 2] {
    let d = Direction::ALL.iter().position(|&x| x == direction).unwrap() as u32;
    let l = Lane::ALL.iter().position(|&x| x == lane).unwrap() as u32;
    [d, l]
}

/// Empty every queue, lane by lane in `LaneQueueId::ALL` order.
fn drain(queues: &mut LaneQueueSet) -> Vec<Vehicle> {
    let mut out = Vec::new();
    for lane in LaneQueueId::ALL {
        while let Some(v) = queues.try_dequeue(lane) {
            out.push(v);
        }
    }
    out
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicle {
    use super::*;

    #[test]
    fn departure_starts_at_arrival() {
        let v = Vehicle::new(VehicleId(1), Tick(9), Direction::West, Lane::Right);
        assert_eq!(v.arrival, Tick(9));
        assert_eq!(v.departure, Tick(9));
        assert_eq!(v.wait_secs(), 0);
        assert_eq!(v.street, Street::Main);
    }

    #[test]
    fn stamp_departure_sets_wait() {
        let mut v = Vehicle::new(VehicleId(4), Tick(6), Direction::North, Lane::Left);
        v.stamp_departure(Tick(15));
        assert_eq!(v.departure, Tick(15));
        assert_eq!(v.wait_secs(), 9);
    }

    #[test]
    fn random_draws_direction_then_lane() {
        let mut rng = ScriptedSource::new(route(Direction::South, Lane::Right));
        let v = Vehicle::random(VehicleId(2), Tick::ZERO, &mut rng);
        assert_eq!(v.direction, Direction::South);
        assert_eq!(v.lane, Lane::Right);
        assert_eq!(v.street, Street::Church);
        assert_eq!(v.queue(), LaneQueueId::SouthL);
    }

    #[test]
    fn random_street_follows_direction() {
        let mut rng = SimRng::new(7);
        for n in 1..=500 {
            let v = Vehicle::random(VehicleId(n), Tick::ZERO, &mut rng);
            let church = matches!(v.direction, Direction::North | Direction::South);
            assert_eq!(v.street == Street::Church, church);
        }
    }
}

// ── LaneQueueSet ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queues {
    use super::*;

    fn vehicle(n: u32, direction: Direction, lane: Lane) -> Vehicle {
        Vehicle::new(VehicleId(n), Tick::ZERO, direction, lane)
    }

    #[test]
    fn new_set_is_empty() {
        let q = LaneQueueSet::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(LaneQueueId::ALL.iter().all(|&l| q.lane_len(l) == 0));
    }

    #[test]
    fn enqueue_routes_by_table() {
        let mut q = LaneQueueSet::new();
        assert_eq!(q.enqueue(vehicle(1, Direction::East, Lane::Left)), LaneQueueId::EastR);
        assert_eq!(q.enqueue(vehicle(2, Direction::East, Lane::Right)), LaneQueueId::EastL);
        assert_eq!(q.enqueue(vehicle(3, Direction::North, Lane::Left)), LaneQueueId::NorthR);
        assert_eq!(q.len(), 3);
        assert_eq!(q.lane_len(LaneQueueId::EastR), 1);
        assert_eq!(q.lane_len(LaneQueueId::WestL), 0);
    }

    #[test]
    fn fifo_within_a_queue() {
        let mut q = LaneQueueSet::new();
        for n in 1..=5 {
            q.enqueue(vehicle(n, Direction::West, Lane::Right));
        }
        let order: Vec<u32> = std::iter::from_fn(|| q.try_dequeue(LaneQueueId::WestL))
            .map(|v| v.id.get())
            .collect();
        assert_eq!(order, [1, 2, 3, 4, 5]);
        assert!(q.is_empty());
    }

    #[test]
    fn try_dequeue_empty_is_none() {
        let mut q = LaneQueueSet::new();
        assert!(q.try_dequeue(LaneQueueId::SouthR).is_none());
        q.enqueue(vehicle(1, Direction::North, Lane::Left));
        assert!(q.try_dequeue(LaneQueueId::SouthR).is_none());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn len_tracks_enqueue_and_dequeue() {
        let mut q = LaneQueueSet::new();
        q.enqueue(vehicle(1, Direction::South, Lane::Left));
        q.enqueue(vehicle(2, Direction::South, Lane::Left));
        q.enqueue(vehicle(3, Direction::West, Lane::Left));
        assert_eq!(q.lane_len(LaneQueueId::SouthR), 2);
        assert_eq!(q.len(), 3);
        assert_eq!(q.try_dequeue(LaneQueueId::SouthR).map(|v| v.id), Some(VehicleId(1)));
        assert_eq!(q.lane_len(LaneQueueId::SouthR), 1);
        assert_eq!(q.len(), 2);
    }
}

// ── ArrivalGenerator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod arrivals {
    use ix_core::BatchRange;

    use super::*;

    #[test]
    fn admit_numbers_from_one() {
        let mut generator = ArrivalGenerator::new(120);
        let mut queues = LaneQueueSet::new();
        let mut rng = SimRng::new(1);
        assert_eq!(generator.admit(3, Tick(0), &mut rng, &mut queues), 3);
        assert_eq!(generator.created(), 3);

        let mut ids: Vec<u32> = drain(&mut queues).iter().map(|v| v.id.get()).collect();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn arrival_and_departure_stamped_with_now() {
        let mut generator = ArrivalGenerator::new(120);
        let mut queues = LaneQueueSet::new();
        let mut rng = ScriptedSource::new(route(Direction::East, Lane::Left));
        generator.admit(1, Tick(21), &mut rng, &mut queues);
        let v = queues.try_dequeue(LaneQueueId::EastR).unwrap();
        assert_eq!(v.arrival, Tick(21));
        assert_eq!(v.departure, Tick(21));
    }

    #[test]
    fn cap_stops_mid_batch() {
        let mut generator = ArrivalGenerator::new(5);
        let mut queues = LaneQueueSet::new();
        let mut rng = SimRng::new(3);
        assert_eq!(generator.admit(3, Tick(0), &mut rng, &mut queues), 3);
        assert_eq!(generator.admit(3, Tick(6), &mut rng, &mut queues), 2);
        assert!(generator.is_exhausted());
        assert_eq!(generator.admit(10, Tick(15), &mut rng, &mut queues), 0);
        assert_eq!(queues.len(), 5);
    }

    #[test]
    fn never_creates_past_default_cap() {
        let mut generator = ArrivalGenerator::new(120);
        let mut queues = LaneQueueSet::new();
        let mut rng = SimRng::new(99);
        let mut total = 0;
        for i in 0..40 {
            total += generator.admit_batch(BatchRange::new(3, 16), Tick(i * 15), &mut rng, &mut queues);
        }
        assert_eq!(total, 120);
        assert_eq!(generator.created(), 120);
        let max_id = drain(&mut queues).iter().map(|v| v.id).max();
        assert_eq!(max_id, Some(VehicleId(120)));
    }

    #[test]
    fn admit_batch_draws_size_from_range() {
        let mut generator = ArrivalGenerator::new(120);
        let mut queues = LaneQueueSet::new();
        // size draw 2 → 7 + 2 = 9 vehicles; routes default to (North, Left).
        let mut rng = ScriptedSource::new([2]);
        let n = generator.admit_batch(BatchRange::new(7, 13), Tick(0), &mut rng, &mut queues);
        assert_eq!(n, 9);
        assert_eq!(queues.lane_len(LaneQueueId::NorthR), 9);
    }

    #[test]
    fn forced_routes_land_in_one_queue() {
        let mut generator = ArrivalGenerator::new(120);
        let mut queues = LaneQueueSet::new();
        let script: Vec<u32> = (0..4).flat_map(|_| route(Direction::West, Lane::Left)).collect();
        let mut rng = ScriptedSource::new(script);
        generator.admit(4, Tick(0), &mut rng, &mut queues);
        assert_eq!(queues.lane_len(LaneQueueId::WestR), 4);
        assert_eq!(queues.len(), 4);
    }
}
