//! Plain-text traffic log.
//!
//! ```text
//! ---Start of simulation, time set to 0.---
//! ---Light changed. Now processing north/south-bound traffic---
//! [Time 03] Vehicle #4 (northbound) continued straight. Total wait time 03 seconds.
//! ...
//!
//! ---Light changed. Now processing east/west-bound traffic---
//! ...
//! ```
//!
//! The header and north/south marker carry a trailing space; the east/west
//! marker does not.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ix_sim::Phase;

use crate::writer::OutputWriter;
use crate::{DepartureRow, OutputResult};

pub const HEADER: &str = "---Start of simulation, time set to 0.--- ";
pub const NORTH_SOUTH_MARKER: &str = "---Light changed. Now processing north/south-bound traffic--- ";
pub const EAST_WEST_MARKER: &str = "---Light changed. Now processing east/west-bound traffic---";

/// Writes the traffic log to any [`Write`] sink.
pub struct TextReportWriter<W: Write = BufWriter<File>> {
    out:      W,
    finished: bool,
}

impl TextReportWriter<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: impl AsRef<Path>) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextReportWriter<W> {
    fn write_header(&mut self) -> OutputResult<()> {
        writeln!(self.out, "{HEADER}")?;
        Ok(())
    }

    fn write_phase_marker(&mut self, phase: Phase) -> OutputResult<()> {
        let marker = match phase {
            Phase::NorthSouth => NORTH_SOUTH_MARKER,
            Phase::EastWest => EAST_WEST_MARKER,
        };
        writeln!(self.out, "{marker}")?;
        Ok(())
    }

    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()> {
        writeln!(self.out, "{row}")?;
        Ok(())
    }

    fn end_phase(&mut self, _phase: Phase) -> OutputResult<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
