//! Serde scenario files: a model configuration plus agent populations.

use rw_core::{ModelConfig, Point};
use rw_policy::PolicySpec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Model, SimResult};

/// One homogeneous group of walkers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationSpec {
    pub count:    usize,
    /// Every walker of the group starts here.
    #[serde(default)]
    pub start:    Point,
    #[serde(default = "unit_velocity")]
    pub velocity: f64,
    #[serde(default)]
    pub policy:   PolicySpec,
}

fn unit_velocity() -> f64 {
    1.0
}

/// A complete run description:
///
/// ```json
/// {
///   "model": { "max_time": 500, "seed": 7 },
///   "populations": [
///     { "count": 50, "policy": { "kind": "levy" } },
///     { "count": 50, "start": { "x": 10, "y": 0 },
///       "policy": { "kind": "homesick_levy", "alpha": 0.05 } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub model:       ModelConfig,
    #[serde(default)]
    pub populations: Vec<PopulationSpec>,
}

impl Scenario {
    /// Total number of agents across all populations.
    pub fn agent_count(&self) -> usize {
        self.populations.iter().map(|p| p.count).sum()
    }

    /// Build a not-yet-run model.  Populations are added in order, with ids
    /// assigned sequentially from 0.
    pub fn build(&self) -> SimResult<Model> {
        let mut model = Model::new(self.model.clone())?;
        for pop in &self.populations {
            debug!(count = pop.count, kind = pop.policy.kind(), "adding population");
            model.populate(pop.count, |id, rng| pop.policy.spawn(id, pop.start, pop.velocity, rng))?;
        }
        Ok(model)
    }
}
