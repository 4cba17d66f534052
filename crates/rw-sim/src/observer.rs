//! Run observer trait for progress reporting and streaming output.

use crate::ReportRow;

/// Callbacks invoked by [`Model::run_with`][crate::Model::run_with] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ModelObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, time: f64, rows: &[ReportRow]) {
///         println!("t = {time}: {} rows", rows.len());
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called before any agent is updated in the tick at `time`.
    fn on_tick_start(&mut self, _time: f64) {}

    /// Called after every agent has been updated.  `rows` are this tick's
    /// rows in agent order.
    fn on_tick_end(&mut self, _time: f64, _rows: &[ReportRow]) {}

    /// Called once after the last tick, with the model's final time.
    fn on_run_end(&mut self, _final_time: f64) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
