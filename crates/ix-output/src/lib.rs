//! `ix-output` — report sinks for the rust_ix intersection simulator.
//!
//! Two backends are provided:
//!
//! | Backend              | File                 | Contents                                   |
//! |----------------------|----------------------|--------------------------------------------|
//! | [`TextReportWriter`] | `output.txt`         | header, light-change markers, one line per departure |
//! | [`CsvWriter`]        | user-chosen `.csv`   | one row per departure                      |
//!
//! Both implement [`OutputWriter`] and are driven by [`ReportObserver`],
//! which implements `ix_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ix_output::{ReportObserver, TextReportWriter};
//!
//! let writer = TextReportWriter::create("output.txt")?;
//! let mut obs = ReportObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::DepartureRow;
pub use text::TextReportWriter;
pub use writer::OutputWriter;
