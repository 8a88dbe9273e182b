//! The `Sim` struct and its run loop.

use ix_core::{BatchRange, RandomSource, SimClock, SimConfig, Tick};
use ix_traffic::{ArrivalGenerator, LaneQueueSet};
use log::{debug, info, warn};

use crate::phase::{self, Phase, PhaseOutcome};
use crate::{RunSummary, SimError, SimObserver, SimResult};

/// Run controller state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    /// More cycles to go (or not yet started).
    Running,
    /// Every queue emptied; the sink has been finalised.
    Done,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` owns all run state (clock, vehicle counter, queues, random
/// source) and drives the cycle:
///
/// 1. **Start** (once): header, then the initial arrival batch.
/// 2. **Check**: if all eight queues are empty the run is `Done`.
/// 3. **North/south** phase, then an arrival batch.
/// 4. **East/west** phase, then an arrival batch; back to 2.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource> {
    /// Phase lengths, batch ranges, vehicle cap, seed.
    pub config: SimConfig,

    /// The run's only clock.  Advanced exclusively by the phase scheduler.
    pub clock: SimClock,

    /// The eight waiting queues.
    pub queues: LaneQueueSet,

    /// Vehicle counter and cap.
    pub arrivals: ArrivalGenerator,

    /// Source of every random draw in the run.
    pub rng: R,

    /// Totals so far.
    pub summary: RunSummary,

    pub(crate) state:   RunState,
    pub(crate) started: bool,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run until every queue is empty, then finalise the observer.
    ///
    /// Returns the run totals.  Fails only if the observer reports a broken
    /// sink, in which case the run stops after the current phase, or right
    /// after finalising if the final flush is what failed.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while self.step(observer)? == RunState::Running {}
        Ok(self.summary.clone())
    }

    /// Run a single cycle: termination check, north/south phase, arrivals,
    /// east/west phase, arrivals.
    ///
    /// The first call also emits the start of the run and admits the initial
    /// batch.  Once the run is `Done` further calls do nothing.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunState> {
        if self.state == RunState::Done {
            return Ok(RunState::Done);
        }

        if !self.started {
            self.start(observer)?;
        }

        self.check_sink(observer)?;
        if self.queues.is_empty() {
            self.finish(observer);
            // The sink's final flush happens in `on_sim_end`.
            self.check_sink(observer)?;
            return Ok(RunState::Done);
        }

        for phase in Phase::CYCLE {
            self.run_phase(phase, observer);
            self.check_sink(observer)?;
            self.admit(phase.arrivals_after(&self.config), observer);
        }

        Ok(RunState::Running)
    }

    /// Run one invocation of `phase` against the current queues.
    ///
    /// Marker, departures and phase end all go to `observer`.
    pub fn run_phase<O: SimObserver>(&mut self, phase: Phase, observer: &mut O) -> PhaseOutcome {
        observer.on_phase_start(phase, self.clock.now());

        let summary = &mut self.summary;
        let outcome = phase::run_rounds(
            phase,
            &self.config,
            &mut self.clock,
            &mut self.queues,
            |vehicle| {
                summary.record_departure(&vehicle);
                observer.on_departure(phase, &vehicle);
            },
        );

        self.summary.record_phase(&outcome);
        observer.on_phase_end(&outcome);
        debug!(
            "{phase} phase {} → {}: {} departed, {} waiting",
            outcome.started,
            outcome.ended,
            outcome.departed,
            self.queues.len(),
        );
        outcome
    }

    // ── Run lifecycle ─────────────────────────────────────────────────────

    fn start<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.started = true;
        observer.on_sim_start(self.clock.now());
        self.check_sink(observer)?;
        self.admit(self.config.initial_batch, observer);
        Ok(())
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        self.state = RunState::Done;
        self.summary.final_tick = self.clock.now();
        observer.on_sim_end(self.clock.now());
        info!(
            "run complete at {}: {} vehicles through, mean wait {:.1}s, max wait {}s",
            self.clock,
            self.summary.departed,
            self.summary.mean_wait_secs(),
            self.summary.max_wait_secs,
        );
    }

    fn admit<O: SimObserver>(&mut self, range: BatchRange, observer: &mut O) {
        let now = self.clock.now();
        let admitted = self.arrivals.admit_batch(range, now, &mut self.rng, &mut self.queues);
        self.summary.admitted += admitted;
        observer.on_arrivals(now, admitted);
        if admitted > 0 {
            debug!("admitted {admitted} vehicles at {now} ({} left)", self.arrivals.remaining());
        }
    }

    fn check_sink<O: SimObserver>(&mut self, observer: &O) -> SimResult<()> {
        if observer.is_failed() {
            let tick: Tick = self.clock.now();
            warn!("report sink failed at {tick}; aborting run");
            self.state = RunState::Done;
            return Err(SimError::SinkFailed { tick });
        }
        Ok(())
    }
}
