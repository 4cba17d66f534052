//! `rw-agent` — agent bodies for the `rust_rw` framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`kinematics`] | `Kinematics` — position, lifetime and trip odometers, moves    |
//! | [`targeting`]  | `Targeting` — optional target point, azimuth/distance queries  |
//! | [`state`]      | `AgentState` — `Halted` / `Moving` / `Waiting`                 |
//! | [`mover`]      | `Mover` — kinematics + targeting + velocity + state            |
//! | [`report`]     | `AgentReport`, `Field` — one agent's row for one tick          |
//! | [`agent`]      | `Agent` trait driven by the model's tick loop                  |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                                 |
//!
//! # Design notes
//!
//! Capabilities are composed, not inherited: a `Mover` owns a `Kinematics`
//! and a `Targeting` and exposes their operations.  Fields are private and
//! there are no setters for position, odometers or state; every mutation
//! goes through a movement primitive, a target setter, `advance` or `wait`.

pub mod agent;
pub mod error;
pub mod kinematics;
pub mod mover;
pub mod report;
pub mod state;
pub mod targeting;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use kinematics::Kinematics;
pub use mover::Mover;
pub use report::{AgentReport, Field};
pub use state::AgentState;
pub use targeting::{DEFAULT_EPSILON, Targeting};
