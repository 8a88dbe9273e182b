//! Simulation observer trait — the report sink seen from the run controller.

use ix_core::Tick;
use ix_traffic::Vehicle;

use crate::{Phase, PhaseOutcome};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the run progresses.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Hooks are called in emission order:
///
/// ```text
/// on_sim_start
/// on_arrivals                       (initial batch)
/// repeat until every queue is empty:
///   on_phase_start(NorthSouth)  on_departure*  on_phase_end
///   on_arrivals
///   on_phase_start(EastWest)    on_departure*  on_phase_end
///   on_arrivals
/// on_sim_end
/// ```
pub trait SimObserver {
    /// Called once, before the initial arrival batch.
    fn on_sim_start(&mut self, _tick: Tick) {}

    /// Called after every arrival batch with the number of vehicles admitted
    /// (zero once the vehicle cap is reached).
    fn on_arrivals(&mut self, _tick: Tick, _admitted: u32) {}

    /// Called when the light changes, before the phase's first round.
    fn on_phase_start(&mut self, _phase: Phase, _tick: Tick) {}

    /// Called for every released vehicle, with its departure time stamped.
    fn on_departure(&mut self, _phase: Phase, _vehicle: &Vehicle) {}

    /// Called after the phase's last round.
    fn on_phase_end(&mut self, _outcome: &PhaseOutcome) {}

    /// Called once when the run reaches `Done`.
    fn on_sim_end(&mut self, _final_tick: Tick) {}

    /// `true` once the observer can no longer record events.
    ///
    /// The run controller checks this between steps and aborts the run with
    /// [`SimError::SinkFailed`][crate::SimError::SinkFailed].
    fn is_failed(&self) -> bool {
        false
    }
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want a report.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forward every hook to both observers, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_sim_start(&mut self, tick: Tick) {
        self.0.on_sim_start(tick);
        self.1.on_sim_start(tick);
    }

    fn on_arrivals(&mut self, tick: Tick, admitted: u32) {
        self.0.on_arrivals(tick, admitted);
        self.1.on_arrivals(tick, admitted);
    }

    fn on_phase_start(&mut self, phase: Phase, tick: Tick) {
        self.0.on_phase_start(phase, tick);
        self.1.on_phase_start(phase, tick);
    }

    fn on_departure(&mut self, phase: Phase, vehicle: &Vehicle) {
        self.0.on_departure(phase, vehicle);
        self.1.on_departure(phase, vehicle);
    }

    fn on_phase_end(&mut self, outcome: &PhaseOutcome) {
        self.0.on_phase_end(outcome);
        self.1.on_phase_end(outcome);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }

    fn is_failed(&self) -> bool {
        self.0.is_failed() || self.1.is_failed()
    }
}
