//! CSV departure table.
//!
//! Columns: `vehicle,direction,street,lane,queue,phase,arrival,departure,wait`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DepartureRow, OutputResult};

pub const COLUMNS: [&str; 9] = [
    "vehicle", "direction", "street", "lane", "queue", "phase", "arrival", "departure", "wait",
];

/// Writes one CSV row per departure.
pub struct CsvWriter {
    departures: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut departures = Writer::from_path(path)?;
        departures.write_record(COLUMNS)?;
        Ok(Self { departures, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()> {
        self.departures.write_record(&[
            row.vehicle.get().to_string(),
            row.direction.to_string(),
            row.street.to_string(),
            row.lane.to_string(),
            row.queue.number().to_string(),
            row.phase.to_string(),
            row.arrival.0.to_string(),
            row.departure.0.to_string(),
            row.wait_secs().to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.departures.flush()?;
        Ok(())
    }
}
