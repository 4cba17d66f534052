//! `rw-output` — result writers for the rust_rw framework.
//!
//! | Type             | Purpose                                                  |
//! |------------------|----------------------------------------------------------|
//! | [`OutputWriter`] | Backend trait: batches of [`ReportRow`]s, then `finish`  |
//! | [`CsvWriter`]    | `walk_rows.csv` in a directory, or any `io::Write`       |
//! | [`CsvObserver`]  | `ModelObserver` streaming each tick's rows to a writer   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rw_output::{CsvObserver, CsvWriter};
//!
//! // Streaming, during the run:
//! let mut obs = CsvObserver::new(CsvWriter::new(Path::new("./output"))?);
//! model.run_with(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//!
//! // Or after the run, from the exported table:
//! let mut w = CsvWriter::new(Path::new("./output"))?;
//! w.write_table(&model.export()?)?;
//! w.finish()?;
//! ```
//!
//! [`ReportRow`]: rw_sim::ReportRow

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{CsvWriter, ROWS_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::CsvObserver;
pub use writer::OutputWriter;
