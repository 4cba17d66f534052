//! `rw-sim` — the discrete-time scheduler for the `rust_rw` framework.
//!
//! # Tick loop
//!
//! ```text
//! while time < max_time:
//!   run_state = RUNNING
//!   for agent in insertion order:
//!     agent.update(rng[slot])
//!     collector.push(ReportRow { time, report: agent.report() })
//!   time = init_time + (tick + 1) · time_step
//! run_state = DONE
//! ```
//!
//! Updates within a tick are sequential: an agent sees the already-updated
//! state of agents earlier in the list.  Agents never observe each other, so
//! this only matters for custom `Agent` implementations that share state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs per-tick agent updates on Rayon's thread pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rw_core::{ModelConfig, Point};
//! use rw_policy::PolicySpec;
//! use rw_sim::Model;
//!
//! let mut model = Model::new(ModelConfig::default())?;
//! let spec = PolicySpec::default();
//! model.populate(100, |id, rng| spec.spawn(id, Point::ORIGIN, 1.0, rng))?;
//! model.run()?;
//! let table = model.export()?;
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod scenario;
pub mod table;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::{Model, RunState};
pub use observer::{ModelObserver, NoopObserver};
pub use scenario::{PopulationSpec, Scenario};
pub use table::{ReportRow, ResultTable, TIME_COLUMN, column_names};
