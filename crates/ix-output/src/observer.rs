//! `ReportObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ix_core::Tick;
use ix_sim::{Phase, PhaseOutcome, SimObserver};
use ix_traffic::Vehicle;
use log::warn;

use crate::writer::OutputWriter;
use crate::{DepartureRow, OutputError, OutputResult};

/// A [`SimObserver`] that writes the run to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Once an error is stored the observer reports
/// itself failed, the controller aborts, and further writes are skipped.
/// After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: OutputWriter> {
    writer:     W,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Departure rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_with(&mut self, f: impl FnOnce(&mut W) -> OutputResult<()>) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = f(&mut self.writer) {
            warn!("report write failed: {e}");
            self.last_error = Some(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for ReportObserver<W> {
    fn on_sim_start(&mut self, _tick: Tick) {
        self.write_with(|w| w.write_header());
    }

    fn on_phase_start(&mut self, phase: Phase, _tick: Tick) {
        self.write_with(|w| w.write_phase_marker(phase));
    }

    fn on_departure(&mut self, phase: Phase, vehicle: &Vehicle) {
        let row = DepartureRow::new(phase, vehicle);
        self.write_with(|w| w.write_departure(&row));
        if self.last_error.is_none() {
            self.written += 1;
        }
    }

    fn on_phase_end(&mut self, outcome: &PhaseOutcome) {
        let phase = outcome.phase;
        self.write_with(|w| w.end_phase(phase));
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        self.write_with(|w| w.finish());
    }

    fn is_failed(&self) -> bool {
        self.last_error.is_some()
    }
}
