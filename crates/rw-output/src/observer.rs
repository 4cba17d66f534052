//! `CsvObserver<W>` — bridges `ModelObserver` to an `OutputWriter`.

use rw_sim::{ModelObserver, ReportRow};
use tracing::warn;

use crate::writer::OutputWriter;
use crate::{CsvWriter, OutputError, OutputResult};

/// A [`ModelObserver`] that streams every tick's rows to an [`OutputWriter`]
/// and finishes it when the run ends.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `model.run_with()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CsvObserver<W: OutputWriter = CsvWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> CsvObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; later errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ModelObserver for CsvObserver<W> {
    fn on_tick_end(&mut self, _time: f64, rows: &[ReportRow]) {
        if rows.is_empty() {
            return;
        }
        let result = self.writer.write_rows(rows);
        if result.is_ok() {
            self.rows += rows.len();
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_time: f64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
