//! `rw-core` — foundational types for the `rust_rw` random-walk framework.
//!
//! This crate is a dependency of every other `rw-*` crate.  It has no `rw-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `serde`, `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                  |
//! | [`geo`]         | `Point`, `distance`, `bearing`, `normalize_azimuth`        |
//! | [`time`]        | `Tick`, `ModelClock`, `ModelConfig`                        |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (model-level)             |
//! | [`sampler`]     | `Sampler` trait, distribution adapters, `DistributionSpec` |
//! | [`error`]       | `CoreError`, `CoreResult`                                  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod sampler;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Point, bearing, distance, normalize_azimuth};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use sampler::{
    ConstantSampler, DistributionSpec, ExponentialSampler, GammaSampler, LevySampler,
    LogNormalSampler, NormalSampler, Sampler, UniformSampler,
};
pub use time::{ModelClock, ModelConfig, Tick};
