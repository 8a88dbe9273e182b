//! `ix-sim` — phase scheduler and run controller for the rust_ix simulator.
//!
//! # Cycle
//!
//! ```text
//! header; admit initial batch
//! loop:
//!   ① Check  — all eight queues empty?  → Done, finalise the sink.
//!   ② NS     — 2 rounds × (clock += 3, release ≤1 vehicle from each of
//!               NorthR, NorthL, SouthR, SouthL)
//!   ③ Admit  — batch drawn from after_ns_batch
//!   ④ EW     — 3 rounds × (clock += 3, release ≤1 vehicle from each of
//!               EastR, EastL, WestR, WestL)
//!   ⑤ Admit  — batch drawn from after_ew_batch
//! ```
//!
//! Round counts, round length and batch ranges come from `SimConfig`; the
//! figures above are the defaults.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_core::SimConfig;
//! use ix_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! assert_eq!(summary.departed, 120);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod phase;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use phase::{Phase, PhaseOutcome};
pub use sim::{RunState, Sim};
pub use summary::RunSummary;
