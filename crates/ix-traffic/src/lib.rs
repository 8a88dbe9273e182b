//! `ix-traffic` — vehicles and waiting queues for the `rust_ix` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`vehicle`]     | `Vehicle` (identity, route, arrival/departure stamps)     |
//! | [`queues`]      | `LaneQueueSet` (eight FIFO queues indexed by `LaneQueueId`) |
//! | [`arrivals`]    | `ArrivalGenerator` (vehicle counter, cap, routing)        |
//!
//! Nothing here owns the clock.  Callers pass the current `Tick` in, which
//! keeps every operation a plain function of its inputs.

pub mod arrivals;
pub mod queues;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use arrivals::ArrivalGenerator;
pub use queues::LaneQueueSet;
pub use vehicle::Vehicle;
