//! Collected rows and the exported result table.

use rw_agent::{AgentReport, Field};

/// Name of the column carrying the tick's model time.
pub const TIME_COLUMN: &str = "time";

/// One agent's report for one tick, tagged with the tick's model time.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub time:   f64,
    pub report: AgentReport,
}

impl ReportRow {
    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<Field> {
        if column == TIME_COLUMN {
            Some(Field::Float(self.time))
        } else {
            self.report.get(column)
        }
    }
}

/// The column set for `rows`: `time`, the core report fields, then every
/// policy extra in first-seen order.
pub fn column_names(rows: &[ReportRow]) -> Vec<&'static str> {
    let mut columns = Vec::with_capacity(1 + AgentReport::CORE_FIELDS.len());
    columns.push(TIME_COLUMN);
    columns.extend(AgentReport::CORE_FIELDS);
    for row in rows {
        for &(name, _) in &row.report.extras {
            if !columns.contains(&name) {
                columns.push(name);
            }
        }
    }
    columns
}

/// Every row a completed run collected, in collection order (tick-major,
/// then agent insertion order).
///
/// Cells for an extra a row's policy does not report are empty: `cell`
/// returns `Some(Field::Null)` for a known column the row lacks and `None`
/// only for unknown columns or out-of-range rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    columns: Vec<&'static str>,
    rows:    Vec<ReportRow>,
}

impl ResultTable {
    pub fn from_rows(rows: Vec<ReportRow>) -> Self {
        Self { columns: column_names(&rows), rows }
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<Field> {
        if !self.has_column(column) {
            return None;
        }
        let row = self.rows.get(row)?;
        Some(row.get(column).unwrap_or(Field::Null))
    }

    /// Every cell of one column, top to bottom.  `None` for unknown columns.
    pub fn column(&self, column: &str) -> Option<Vec<Field>> {
        if !self.has_column(column) {
            return None;
        }
        Some(self.rows.iter().map(|r| r.get(column).unwrap_or(Field::Null)).collect())
    }

    pub fn into_rows(self) -> Vec<ReportRow> {
        self.rows
    }
}
