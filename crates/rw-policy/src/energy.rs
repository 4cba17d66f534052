//! Lévy walks limited by an energy budget.

use rand::RngCore;
use rw_agent::{AgentError, AgentReport, AgentResult, AgentState, Mover};
use rw_core::{AgentRng, LevySampler, NormalSampler, Sampler};

use crate::levy::{default_bounding, retarget_levy};
use crate::walker::{Leg, WalkPolicy, leg};

/// Mean and standard deviation of the sampled energy capacity.
pub const DEFAULT_ENERGY_MEAN: f64 = 100.0;
pub const DEFAULT_ENERGY_SD: f64 = 20.0;

/// Number of rest ticks needed to refill an empty budget.
pub const DEFAULT_REPLENISHMENT_RATE: f64 = 10.0;

/// Draws of non-positive capacity are retried this many times.
const MAX_ENERGY_DRAWS: usize = 1_000;

/// A trip-bounded Lévy walk that spends one unit of energy per unit of
/// distance and rests to recover.
///
/// | Situation                       | Action                                   |
/// |---------------------------------|------------------------------------------|
/// | no target                       | retarget                                 |
/// | on target                       | rest; retarget once `energy ≥ 0.4·max`   |
/// | trip bound exceeded             | reset trip odometer, rest, retarget      |
/// | waiting and `energy ≤ 0.8·max`  | rest                                     |
/// | exhausted (`energy ≤ 0`)        | rest                                     |
/// | otherwise                       | move, spending the distance covered      |
///
/// Resting adds `max_energy / replenishment_rate`, capped at `max_energy`.
#[derive(Debug)]
pub struct EnergyBudgetWalk {
    step:               LevySampler,
    bounding:           Box<dyn Sampler>,
    max_energy:         f64,
    energy:             f64,
    replenishment_rate: f64,
}

impl EnergyBudgetWalk {
    pub const RESUME_FRACTION: f64 = 0.4;
    pub const RESTED_FRACTION: f64 = 0.8;

    /// A full budget of `max_energy`.
    pub fn new(max_energy: f64) -> AgentResult<Self> {
        if !(max_energy.is_finite() && max_energy > 0.0) {
            return Err(AgentError::Invariant(format!(
                "max_energy must be finite and positive (got {max_energy})"
            )));
        }
        Ok(Self {
            step: LevySampler::standard(),
            bounding: default_bounding(),
            max_energy,
            energy: max_energy,
            replenishment_rate: DEFAULT_REPLENISHMENT_RATE,
        })
    }

    /// A full budget whose capacity is drawn from `capacity`, redrawing
    /// non-positive values.
    pub fn sampled(capacity: &dyn Sampler, rng: &mut dyn RngCore) -> AgentResult<Self> {
        for _ in 0..MAX_ENERGY_DRAWS {
            let e = capacity.sample(&mut *rng);
            if e.is_finite() && e > 0.0 {
                return Self::new(e);
            }
        }
        Err(AgentError::Invariant(
            "energy capacity distribution produced no positive draw".into(),
        ))
    }

    /// Capacity drawn from Normal(100, 20).
    pub fn with_default_capacity(rng: &mut dyn RngCore) -> AgentResult<Self> {
        let capacity = NormalSampler::new_unchecked(DEFAULT_ENERGY_MEAN, DEFAULT_ENERGY_SD);
        Self::sampled(&capacity, rng)
    }

    pub fn with_bounding(mut self, bounding: Box<dyn Sampler>) -> Self {
        self.bounding = bounding;
        self
    }

    pub fn with_replenishment_rate(mut self, rate: f64) -> AgentResult<Self> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(AgentError::Invariant(format!(
                "replenishment_rate must be finite and positive (got {rate})"
            )));
        }
        self.replenishment_rate = rate;
        Ok(self)
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }

    pub fn energy_fraction(&self) -> f64 {
        self.energy / self.max_energy
    }

    fn rest(&mut self, body: &mut Mover) {
        body.wait();
        self.energy = (self.energy + self.max_energy / self.replenishment_rate).min(self.max_energy);
    }

    fn travel(&mut self, body: &mut Mover) -> AgentResult<()> {
        let before = body.distance_traveled();
        body.advance()?;
        self.energy -= body.distance_traveled() - before;
        Ok(())
    }
}

impl WalkPolicy for EnergyBudgetWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        retarget_levy(&self.step, body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        match leg(body) {
            Leg::Untargeted => self.retarget(body, rng),
            Leg::Arrived => {
                self.rest(body);
                if self.energy >= Self::RESUME_FRACTION * self.max_energy {
                    self.retarget(body, rng)?;
                }
                Ok(())
            }
            Leg::EnRoute => {
                if body.trip_distance() >= self.bounding.sample(rng) {
                    body.reset_trip_odometer();
                    self.rest(body);
                    self.retarget(body, rng)
                } else if body.state() == AgentState::Waiting
                    && self.energy <= Self::RESTED_FRACTION * self.max_energy
                {
                    self.rest(body);
                    Ok(())
                } else if self.energy <= 0.0 {
                    self.rest(body);
                    Ok(())
                } else {
                    self.travel(body)
                }
            }
        }
    }

    fn extend_report(&self, body: &Mover, report: &mut AgentReport) {
        report.push("energy", self.energy);
        report.push("efrac", self.energy_fraction());
        report.push("trip_length", body.trip_distance());
    }

    fn name(&self) -> &'static str {
        "energy_budget"
    }
}
