//! Fluent builder for constructing a [`Sim`].

use ix_core::{RandomSource, SimClock, SimConfig, SimRng};
use ix_traffic::{ArrivalGenerator, LaneQueueSet};

use crate::sim::RunState;
use crate::{RunSummary, Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: vehicle cap, phase rounds, batch ranges, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                          |
/// |---------------------|----------------------------------|
/// | `.rng(r)`           | `SimRng::new(config.seed)`       |
/// | `.vehicle_cap(n)`   | `config.vehicle_cap`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .rng(ScriptedSource::new([0, 1, 0]))
///     .vehicle_cap(4)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: RandomSource = SimRng> {
    config: SimConfig,
    rng:    R,
}

impl SimBuilder<SimRng> {
    /// Create a builder whose random source is seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng }
    }
}

impl<R: RandomSource> SimBuilder<R> {
    /// Replace the random source, e.g. with a
    /// [`ScriptedSource`][ix_core::ScriptedSource] for deterministic scenarios.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> SimBuilder<R2> {
        SimBuilder {
            config: self.config,
            rng,
        }
    }

    /// Override the lifetime vehicle cap.
    pub fn vehicle_cap(mut self, cap: u32) -> Self {
        self.config.vehicle_cap = cap;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        Ok(Sim {
            clock:    SimClock::new(),
            queues:   LaneQueueSet::new(),
            arrivals: ArrivalGenerator::new(self.config.vehicle_cap),
            config:   self.config,
            rng:      self.rng,
            summary:  RunSummary::default(),
            state:    RunState::Running,
            started:  false,
        })
    }
}
