//! The `OutputWriter` trait implemented by all backend writers.

use rw_sim::{ReportRow, ResultTable};

use crate::OutputResult;

/// A sink for collected rows.
pub trait OutputWriter {
    /// Write a batch of rows.  Batches arrive in collection order.
    fn write_rows(&mut self, rows: &[ReportRow]) -> OutputResult<()>;

    /// Write every row of an exported table.
    fn write_table(&mut self, table: &ResultTable) -> OutputResult<()> {
        self.write_rows(table.rows())
    }

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
