//! CSV output backend.
//!
//! One row per agent per tick.  The header is fixed by the first batch
//! written: `time`, the core report fields, then the policy extras of that
//! batch in first-seen order.  Cells a row does not report are left empty.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use rw_agent::Field;
use rw_sim::{ReportRow, column_names};
use tracing::warn;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// File name used by [`CsvWriter::new`].
pub const ROWS_FILE: &str = "walk_rows.csv";

/// Writes report rows as CSV.
pub struct CsvWriter<W: Write = File> {
    out:      Writer<W>,
    columns:  Option<Vec<&'static str>>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) `walk_rows.csv` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(dir.join(ROWS_FILE))?))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(out: W) -> Self {
        Self { out: Writer::from_writer(out), columns: None, finished: false }
    }

    /// The header, once the first batch has fixed it.
    pub fn columns(&self) -> Option<&[&'static str]> {
        self.columns.as_deref()
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }

    fn write_header(&mut self, columns: Vec<&'static str>) -> OutputResult<()> {
        self.out.write_record(&columns)?;
        self.columns = Some(columns);
        Ok(())
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> OutputResult<()> {
        if self.columns.is_none() {
            self.write_header(column_names(rows))?;
        }
        let Some(columns) = self.columns.as_ref() else {
            return Ok(());
        };

        for row in rows {
            for &(name, _) in &row.report.extras {
                if !columns.contains(&name) {
                    warn!(column = name, agent = %row.report.agent_id, "extra not in CSV header; dropped");
                }
            }
            let record: Vec<String> = columns
                .iter()
                .map(|c| row.get(c).unwrap_or(Field::Null).to_string())
                .collect();
            self.out.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        if self.columns.is_none() {
            self.write_header(column_names(&[]))?;
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
