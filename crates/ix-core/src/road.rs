//! Fixed road layout of the intersection.
//!
//! Two streets cross: Church street carries north/south traffic and Main
//! street carries east/west traffic.  Each direction has two lanes, the left
//! lane for through traffic and the right lane for right turns, and every
//! (direction, lane) pair feeds exactly one of eight queues.
//!
//! # Routing table
//!
//! | Queue | `LaneQueueId` | Street | Direction | Lane  |
//! |-------|---------------|--------|-----------|-------|
//! | 1     | `NorthR`      | Church | North     | Left  |
//! | 2     | `NorthL`      | Church | North     | Right |
//! | 3     | `EastR`       | Main   | East      | Left  |
//! | 4     | `EastL`       | Main   | East      | Right |
//! | 5     | `SouthR`      | Church | South     | Left  |
//! | 6     | `SouthL`      | Church | South     | Right |
//! | 7     | `WestR`       | Main   | West      | Left  |
//! | 8     | `WestL`       | Main   | West      | Right |
//!
//! The queue suffixes follow the historical queue names and do not match the
//! lane that feeds them; only the table above is authoritative.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Heading of a vehicle as it enters the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in draw order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The street a vehicle heading this way travels on.
    #[inline]
    pub fn street(self) -> Street {
        match self {
            Direction::North | Direction::South => Street::Church,
            Direction::East | Direction::West => Street::Main,
        }
    }

    /// Heading after a 90° clockwise (right) turn.
    #[inline]
    pub fn right_turn(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// `"northbound"`, `"eastbound"`, …
    pub fn bound_name(self) -> &'static str {
        match self {
            Direction::North => "northbound",
            Direction::East => "eastbound",
            Direction::South => "southbound",
            Direction::West => "westbound",
        }
    }

    /// What a vehicle heading this way in `lane` does at the intersection.
    pub fn turn_description(self, lane: Lane) -> &'static str {
        match (lane, self.right_turn()) {
            (Lane::Left, _) => "continued straight",
            (Lane::Right, Direction::North) => "turned right and headed northbound",
            (Lane::Right, Direction::East) => "turned right and headed eastbound",
            (Lane::Right, Direction::South) => "turned right and headed southbound",
            (Lane::Right, Direction::West) => "turned right and headed westbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        f.write_str(s)
    }
}

// ── Street ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    /// Runs east/west.
    Main,
    /// Runs north/south.
    Church,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::Main => "Main",
            Street::Church => "Church",
        })
    }
}

// ── Lane ──────────────────────────────────────────────────────────────────────

/// Lane within one direction of a street.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lane {
    /// Through traffic.
    Left,
    /// Right-turning traffic.
    Right,
}

impl Lane {
    /// All lanes in draw order.
    pub const ALL: [Lane; 2] = [Lane::Left, Lane::Right];
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lane::Left => "Left",
            Lane::Right => "Right",
        })
    }
}

// ── LaneQueueId ───────────────────────────────────────────────────────────────

/// One of the eight waiting queues.  See the module docs for the routing table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneQueueId {
    NorthR,
    NorthL,
    EastR,
    EastL,
    SouthR,
    SouthL,
    WestR,
    WestL,
}

impl LaneQueueId {
    /// All queues in queue-number order (1..=8).
    pub const ALL: [LaneQueueId; 8] = [
        LaneQueueId::NorthR,
        LaneQueueId::NorthL,
        LaneQueueId::EastR,
        LaneQueueId::EastL,
        LaneQueueId::SouthR,
        LaneQueueId::SouthL,
        LaneQueueId::WestR,
        LaneQueueId::WestL,
    ];

    pub const COUNT: usize = 8;

    /// The queue a vehicle heading `direction` in `lane` joins.
    ///
    /// Street is implied by direction, so every reachable (street, direction,
    /// lane) triple maps to exactly one queue.
    pub fn route(direction: Direction, lane: Lane) -> LaneQueueId {
        match (direction, lane) {
            (Direction::North, Lane::Left) => LaneQueueId::NorthR,
            (Direction::North, Lane::Right) => LaneQueueId::NorthL,
            (Direction::East, Lane::Left) => LaneQueueId::EastR,
            (Direction::East, Lane::Right) => LaneQueueId::EastL,
            (Direction::South, Lane::Left) => LaneQueueId::SouthR,
            (Direction::South, Lane::Right) => LaneQueueId::SouthL,
            (Direction::West, Lane::Left) => LaneQueueId::WestR,
            (Direction::West, Lane::Right) => LaneQueueId::WestL,
        }
    }

    /// Slot in an 8-element array.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The 1-based queue number.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Direction of the traffic this queue holds.
    pub fn direction(self) -> Direction {
        match self {
            LaneQueueId::NorthR | LaneQueueId::NorthL => Direction::North,
            LaneQueueId::EastR | LaneQueueId::EastL => Direction::East,
            LaneQueueId::SouthR | LaneQueueId::SouthL => Direction::South,
            LaneQueueId::WestR | LaneQueueId::WestL => Direction::West,
        }
    }

    #[inline]
    pub fn street(self) -> Street {
        self.direction().street()
    }
}

impl fmt::Display for LaneQueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lane{}{:?}", self.number(), self)
    }
}
