//! Lévy walks and their trip-bounded variants.

use rw_agent::{AgentReport, AgentResult, Mover};
use rw_core::{AgentRng, LevySampler, NormalSampler, Sampler};

use crate::walker::{Leg, WalkPolicy, leg, probability, pursue, retarget_polar};

/// Mean and standard deviation of the default trip bound.
pub const DEFAULT_BOUND_MEAN: f64 = 100.0;
pub const DEFAULT_BOUND_SD: f64 = 12.5;

pub(crate) fn default_bounding() -> Box<dyn Sampler> {
    Box::new(NormalSampler::new_unchecked(DEFAULT_BOUND_MEAN, DEFAULT_BOUND_SD))
}

pub(crate) fn retarget_levy(
    step: &LevySampler,
    body: &mut Mover,
    rng:  &mut AgentRng,
) -> AgentResult<()> {
    let r = step.sample(rng);
    retarget_polar(body, rng, r)
}

// ── LevyWalk ──────────────────────────────────────────────────────────────────

/// Heading uniform on `[0, 2π)`, trip length Lévy-distributed.
#[derive(Clone, Copy, Debug)]
pub struct LevyWalk {
    step: LevySampler,
}

impl Default for LevyWalk {
    fn default() -> Self {
        Self { step: LevySampler::standard() }
    }
}

impl LevyWalk {
    pub fn new(step: LevySampler) -> Self {
        Self { step }
    }
}

impl WalkPolicy for LevyWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        retarget_levy(&self.step, body, rng)
    }

    fn name(&self) -> &'static str {
        "levy"
    }
}

// ── BoundedLevyWalk ───────────────────────────────────────────────────────────

/// A Lévy walk whose legs are cut short once the trip odometer reaches a
/// bound drawn afresh every tick from `bounding`.
///
/// Cutting a leg retargets and zeroes the trip odometer in the same tick,
/// without moving.
#[derive(Debug)]
pub struct BoundedLevyWalk {
    step:     LevySampler,
    bounding: Box<dyn Sampler>,
}

impl Default for BoundedLevyWalk {
    fn default() -> Self {
        Self::new(default_bounding())
    }
}

impl BoundedLevyWalk {
    pub fn new(bounding: Box<dyn Sampler>) -> Self {
        Self { step: LevySampler::standard(), bounding }
    }

    pub fn with_step(mut self, step: LevySampler) -> Self {
        self.step = step;
        self
    }
}

impl WalkPolicy for BoundedLevyWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        retarget_levy(&self.step, body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        if leg(body) != Leg::EnRoute {
            return pursue(self, body, rng);
        }
        if body.trip_distance() >= self.bounding.sample(rng) {
            self.retarget(body, rng)?;
            body.reset_trip_odometer();
            Ok(())
        } else {
            body.advance()
        }
    }

    fn extend_report(&self, body: &Mover, report: &mut AgentReport) {
        report.push("trip_length", body.trip_distance());
    }

    fn name(&self) -> &'static str {
        "bounded_levy"
    }
}

// ── BoundedWaitingLevyWalk ────────────────────────────────────────────────────

/// A trip-bounded Lévy walk with rest stops.
///
/// * On arrival the walker rests with probability
///   `rest_transition_probability`, otherwise retargets.
/// * When the trip bound is exceeded it stops where it stands (its target
///   becomes its current position), zeroes the trip odometer and rests.
#[derive(Debug)]
pub struct BoundedWaitingLevyWalk {
    step:                        LevySampler,
    bounding:                    Box<dyn Sampler>,
    rest_transition_probability: f64,
}

impl BoundedWaitingLevyWalk {
    pub const DEFAULT_REST_PROBABILITY: f64 = 0.8;

    pub fn new(bounding: Box<dyn Sampler>, rest_transition_probability: f64) -> AgentResult<Self> {
        Ok(Self {
            step: LevySampler::standard(),
            bounding,
            rest_transition_probability: probability(
                "rest_transition_probability",
                rest_transition_probability,
            )?,
        })
    }
}

impl Default for BoundedWaitingLevyWalk {
    fn default() -> Self {
        Self {
            step:                        LevySampler::standard(),
            bounding:                    default_bounding(),
            rest_transition_probability: Self::DEFAULT_REST_PROBABILITY,
        }
    }
}

impl WalkPolicy for BoundedWaitingLevyWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        retarget_levy(&self.step, body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        match leg(body) {
            Leg::Untargeted => self.retarget(body, rng),
            Leg::Arrived => {
                if rng.gen_bool(self.rest_transition_probability) {
                    body.wait();
                    Ok(())
                } else {
                    self.retarget(body, rng)
                }
            }
            Leg::EnRoute => {
                if body.trip_distance() >= self.bounding.sample(rng) {
                    body.set_target(body.position())?;
                    body.reset_trip_odometer();
                    body.wait();
                    Ok(())
                } else {
                    body.advance()
                }
            }
        }
    }

    fn extend_report(&self, body: &Mover, report: &mut AgentReport) {
        report.push("trip_length", body.trip_distance());
    }

    fn name(&self) -> &'static str {
        "bounded_waiting_levy"
    }
}
