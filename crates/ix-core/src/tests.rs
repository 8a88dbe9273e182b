//! Unit tests for ix-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn first_is_one() {
        assert_eq!(VehicleId::FIRST.get(), 1);
        assert_eq!(VehicleId::FIRST.next(), VehicleId(2));
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(1) < VehicleId(2));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(9)), 0);
    }

    #[test]
    fn clock_advances_by_secs() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), Tick::ZERO);
        assert_eq!(clock.advance(3), Tick(3));
        assert_eq!(clock.advance(3), Tick(6));
        assert_eq!(clock.now(), Tick(6));
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        clock.advance(75);
        assert_eq!(clock.to_string(), "T75 (1m 15s)");
    }
}

#[cfg(test)]
mod road {
    use crate::{Direction, Lane, LaneQueueId, Street};

    #[test]
    fn street_is_a_function_of_direction() {
        for d in Direction::ALL {
            let church = matches!(d, Direction::North | Direction::South);
            assert_eq!(d.street() == Street::Church, church, "{d:?}");
        }
    }

    #[test]
    fn right_turn_is_clockwise() {
        assert_eq!(Direction::South.right_turn(), Direction::West);
        assert_eq!(Direction::North.right_turn(), Direction::East);
        assert_eq!(Direction::West.right_turn(), Direction::North);
        assert_eq!(Direction::East.right_turn(), Direction::South);
    }

    #[test]
    fn turn_descriptions() {
        assert_eq!(
            Direction::South.turn_description(Lane::Right),
            "turned right and headed westbound"
        );
        assert_eq!(
            Direction::North.turn_description(Lane::Right),
            "turned right and headed eastbound"
        );
        assert_eq!(
            Direction::West.turn_description(Lane::Right),
            "turned right and headed northbound"
        );
        assert_eq!(
            Direction::East.turn_description(Lane::Right),
            "turned right and headed southbound"
        );
        for d in Direction::ALL {
            assert_eq!(d.turn_description(Lane::Left), "continued straight");
        }
    }

    #[test]
    fn bound_names() {
        assert_eq!(Direction::North.bound_name(), "northbound");
        assert_eq!(Direction::East.bound_name(), "eastbound");
        assert_eq!(Direction::South.bound_name(), "southbound");
        assert_eq!(Direction::West.bound_name(), "westbound");
    }

    #[test]
    fn routing_table_verbatim() {
        use Direction::*;
        use Lane::*;
        let table = [
            (North, Left, 1),
            (North, Right, 2),
            (East, Left, 3),
            (East, Right, 4),
            (South, Left, 5),
            (South, Right, 6),
            (West, Left, 7),
            (West, Right, 8),
        ];
        for (d, l, n) in table {
            let q = LaneQueueId::route(d, l);
            assert_eq!(q.number(), n, "{d:?} {l:?}");
            assert_eq!(q.direction(), d);
            assert_eq!(q.street(), d.street());
        }
    }

    #[test]
    fn queue_index_matches_all_order() {
        for (i, q) in LaneQueueId::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
        assert_eq!(LaneQueueId::EastR.to_string(), "Lane3EastR");
    }
}

#[cfg(test)]
mod rng {
    use crate::{Direction, RandomSource, ScriptedSource, SimRng};

    #[test]
    fn sim_rng_reproducible() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let xs: Vec<u32> = (0..32).map(|_| a.next_below(100)).collect();
        let ys: Vec<u32> = (0..32).map(|_| b.next_below(100)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 100));
    }

    #[test]
    fn scripted_values_reduced_modulo_bound() {
        let mut s = ScriptedSource::new([5, 1, 3]);
        assert_eq!(s.next_below(4), 1);
        assert_eq!(s.next_below(4), 1);
        assert_eq!(s.next_below(2), 1);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn scripted_exhausted_yields_zero() {
        let mut s = ScriptedSource::default();
        assert_eq!(s.next_below(10), 0);
        assert_eq!(s.drawn(), 1);
    }

    #[test]
    fn pick_uses_enum_order() {
        let mut s = ScriptedSource::new([1, 3]);
        assert_eq!(s.pick(&Direction::ALL), Direction::East);
        assert_eq!(s.pick(&Direction::ALL), Direction::West);
    }
}

#[cfg(test)]
mod config {
    use crate::config::{MAX_ROUND_SECS, MAX_ROUNDS, MAX_VEHICLE_CAP};
    use crate::{BatchRange, SimConfig};

    #[test]
    fn defaults_match_standard_intersection() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.vehicle_cap, 120);
        assert_eq!(cfg.ns_phase_secs(), 6);
        assert_eq!(cfg.ew_phase_secs(), 9);
        assert_eq!(cfg.initial_batch, BatchRange::new(7, 13));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_batch_range_rejected() {
        let cfg = SimConfig {
            after_ns_batch: BatchRange::new(5, 5),
            ..SimConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("after_ns_batch"), "{err}");
    }

    #[test]
    fn zero_rounds_rejected() {
        let cfg = SimConfig { ew_rounds: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { round_secs: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn oversized_values_rejected() {
        let cfg = SimConfig { round_secs: u64::MAX, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("round_secs"), "{err}");
        assert_eq!(cfg.ns_phase_secs(), u64::MAX);

        let cfg = SimConfig { vehicle_cap: u32::MAX, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("vehicle_cap"), "{err}");

        let cfg = SimConfig { ns_rounds: MAX_ROUNDS + 1, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("ns_rounds"), "{err}");
    }

    #[test]
    fn largest_values_accepted() {
        let cfg = SimConfig {
            vehicle_cap: MAX_VEHICLE_CAP,
            round_secs:  MAX_ROUND_SECS,
            ns_rounds:   MAX_ROUNDS,
            ew_rounds:   MAX_ROUNDS,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.ew_phase_secs(), 3_600_000);
    }

    #[test]
    fn exactly_has_span_one() {
        assert_eq!(BatchRange::exactly(4).span(), 1);
        assert!(!BatchRange::exactly(0).is_empty());
    }
}
