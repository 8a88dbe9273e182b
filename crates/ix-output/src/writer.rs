//! The `OutputWriter` trait implemented by all report backends.

use ix_sim::Phase;

use crate::{DepartureRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Backends ignore the events they have no representation for; the default
/// bodies do nothing.  Errors are stored by [`ReportObserver`][crate::ReportObserver]
/// and retrieved with `take_error`.
pub trait OutputWriter {
    /// Start-of-simulation banner.
    fn write_header(&mut self) -> OutputResult<()> {
        Ok(())
    }

    /// Light changed to `phase`.
    fn write_phase_marker(&mut self, _phase: Phase) -> OutputResult<()> {
        Ok(())
    }

    /// One departure.
    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()>;

    /// All departures of `phase` have been written.
    fn end_phase(&mut self, _phase: Phase) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
