//! Serde-configurable policy selection.

use rand::RngCore;
use rw_agent::Agent;
use rw_core::{AgentId, DistributionSpec, LevySampler, Point, Sampler};
use serde::{Deserialize, Serialize};

use crate::energy::{DEFAULT_ENERGY_MEAN, DEFAULT_ENERGY_SD, DEFAULT_REPLENISHMENT_RATE};
use crate::levy::{DEFAULT_BOUND_MEAN, DEFAULT_BOUND_SD};
use crate::{
    BoundedLevyWalk, BoundedWaitingLevyWalk, EnergyBudgetWalk, HomesickLevyWalk, LevyWalk,
    PolicyResult, RapidHomesickLevyWalk, UniformWalk, VariableVelocityWalk, WaitingUniformWalk,
    WalkPolicy, Walker,
};

/// A walk policy and its parameters, as written in scenario files:
///
/// ```json
/// { "kind": "homesick_levy", "alpha": 0.1 }
/// ```
///
/// Omitted parameters take their usual defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicySpec {
    Uniform {
        #[serde(default = "r_min")]
        r_min: u32,
        #[serde(default = "r_max")]
        r_max: u32,
    },
    WaitingUniform {
        #[serde(default = "r_min")]
        r_min: u32,
        #[serde(default = "r_max")]
        r_max: u32,
        wait_transition_probability: f64,
    },
    Levy {
        #[serde(default)]
        loc:   f64,
        #[serde(default = "unit")]
        scale: f64,
    },
    BoundedLevy {
        #[serde(default = "trip_bound")]
        bounding: DistributionSpec,
    },
    BoundedWaitingLevy {
        #[serde(default = "trip_bound")]
        bounding: DistributionSpec,
        #[serde(default = "rest_probability")]
        rest_transition_probability: f64,
    },
    HomesickLevy {
        alpha: f64,
        /// Defaults to the walker's starting point.
        #[serde(default)]
        home:  Option<Point>,
    },
    RapidHomesickLevy {
        alpha: f64,
        #[serde(default)]
        home:  Option<Point>,
    },
    VariableVelocity {
        velocity: DistributionSpec,
        #[serde(default)]
        reflect:  bool,
        #[serde(default = "r_min")]
        r_min:    u32,
        #[serde(default = "r_max")]
        r_max:    u32,
    },
    EnergyBudget {
        #[serde(default = "trip_bound")]
        bounding:           DistributionSpec,
        #[serde(default = "energy_capacity")]
        capacity:           DistributionSpec,
        #[serde(default = "replenishment_rate")]
        replenishment_rate: f64,
    },
}

fn r_min() -> u32 {
    1
}

fn r_max() -> u32 {
    100
}

fn unit() -> f64 {
    1.0
}

fn rest_probability() -> f64 {
    BoundedWaitingLevyWalk::DEFAULT_REST_PROBABILITY
}

fn replenishment_rate() -> f64 {
    DEFAULT_REPLENISHMENT_RATE
}

fn trip_bound() -> DistributionSpec {
    DistributionSpec::Normal { mean: DEFAULT_BOUND_MEAN, sd: DEFAULT_BOUND_SD }
}

fn energy_capacity() -> DistributionSpec {
    DistributionSpec::Normal { mean: DEFAULT_ENERGY_MEAN, sd: DEFAULT_ENERGY_SD }
}

fn boxed<P: WalkPolicy + 'static>(
    id:       AgentId,
    start:    Point,
    velocity: f64,
    policy:   P,
) -> PolicyResult<Box<dyn Agent>> {
    Ok(Box::new(Walker::new(id, start, policy).with_velocity(velocity)?))
}

impl PolicySpec {
    /// Build a halted, untargeted walker at `start`.
    ///
    /// `rng` is consulted only by policies with per-agent draws at
    /// construction (the energy capacity).
    pub fn spawn(
        &self,
        id:       AgentId,
        start:    Point,
        velocity: f64,
        rng:      &mut dyn RngCore,
    ) -> PolicyResult<Box<dyn Agent>> {
        match self {
            PolicySpec::Uniform { r_min, r_max } => {
                boxed(id, start, velocity, UniformWalk::new(*r_min, *r_max)?)
            }
            PolicySpec::WaitingUniform { r_min, r_max, wait_transition_probability } => {
                let walk = UniformWalk::new(*r_min, *r_max)?;
                boxed(id, start, velocity, WaitingUniformWalk::with_range(walk, *wait_transition_probability)?)
            }
            PolicySpec::Levy { loc, scale } => {
                boxed(id, start, velocity, LevyWalk::new(LevySampler::new(*loc, *scale)?))
            }
            PolicySpec::BoundedLevy { bounding } => {
                boxed(id, start, velocity, BoundedLevyWalk::new(bounding.build()?))
            }
            PolicySpec::BoundedWaitingLevy { bounding, rest_transition_probability } => {
                let policy = BoundedWaitingLevyWalk::new(bounding.build()?, *rest_transition_probability)?;
                boxed(id, start, velocity, policy)
            }
            PolicySpec::HomesickLevy { alpha, home } => {
                let policy = HomesickLevyWalk::new(home.unwrap_or(start), *alpha)?;
                boxed(id, start, velocity, policy)
            }
            PolicySpec::RapidHomesickLevy { alpha, home } => {
                let policy = RapidHomesickLevyWalk::new(home.unwrap_or(start), *alpha)?;
                boxed(id, start, velocity, policy)
            }
            PolicySpec::VariableVelocity { velocity: speed, reflect, r_min, r_max } => {
                let policy = VariableVelocityWalk::new(speed.build()?, *reflect)
                    .with_range(UniformWalk::new(*r_min, *r_max)?);
                boxed(id, start, velocity, policy)
            }
            PolicySpec::EnergyBudget { bounding, capacity, replenishment_rate } => {
                let capacity: Box<dyn Sampler> = capacity.build()?;
                let policy = EnergyBudgetWalk::sampled(capacity.as_ref(), rng)?
                    .with_bounding(bounding.build()?)
                    .with_replenishment_rate(*replenishment_rate)?;
                boxed(id, start, velocity, policy)
            }
        }
    }

    /// The `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            PolicySpec::Uniform { .. }            => "uniform",
            PolicySpec::WaitingUniform { .. }     => "waiting_uniform",
            PolicySpec::Levy { .. }               => "levy",
            PolicySpec::BoundedLevy { .. }        => "bounded_levy",
            PolicySpec::BoundedWaitingLevy { .. } => "bounded_waiting_levy",
            PolicySpec::HomesickLevy { .. }       => "homesick_levy",
            PolicySpec::RapidHomesickLevy { .. }  => "rapid_homesick_levy",
            PolicySpec::VariableVelocity { .. }   => "variable_velocity",
            PolicySpec::EnergyBudget { .. }       => "energy_budget",
        }
    }
}

impl Default for PolicySpec {
    fn default() -> Self {
        PolicySpec::Uniform { r_min: r_min(), r_max: r_max() }
    }
}
