//! `ix-core` — foundational types for the `rust_ix` intersection simulator.
//!
//! This crate is a dependency of every other `ix-*` crate.  It has no `ix-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `VehicleId`                                                |
//! | [`time`]        | `Tick`, `SimClock`                                         |
//! | [`road`]        | `Direction`, `Street`, `Lane`, `LaneQueueId`, routing rule |
//! | [`rng`]         | `RandomSource`, `SimRng`, `ScriptedSource`                 |
//! | [`config`]      | `SimConfig`, `BatchRange`                                  |
//! | [`error`]       | `IxError`, `IxResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (required to load a `SimConfig` from JSON). |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod road;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BatchRange, SimConfig};
pub use error::{IxError, IxResult};
pub use ids::VehicleId;
pub use rng::{RandomSource, ScriptedSource, SimRng};
pub use road::{Direction, Lane, LaneQueueId, Street};
pub use time::{SimClock, Tick};
