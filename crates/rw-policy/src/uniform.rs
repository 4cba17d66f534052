//! Uniform random walks.

use rw_agent::{AgentError, AgentReport, AgentResult, Mover};
use rw_core::AgentRng;

use crate::walker::{Leg, WalkPolicy, leg, probability, retarget_polar};

/// Heading uniform on `[0, 2π)`, trip length an integer uniform on
/// `[r_min, r_max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformWalk {
    r_min: u32,
    r_max: u32,
}

impl Default for UniformWalk {
    fn default() -> Self {
        Self { r_min: 1, r_max: 100 }
    }
}

impl UniformWalk {
    pub fn new(r_min: u32, r_max: u32) -> AgentResult<Self> {
        if r_min >= r_max {
            return Err(AgentError::Invariant(format!(
                "uniform trip range [{r_min}, {r_max}) is empty"
            )));
        }
        Ok(Self { r_min, r_max })
    }

    pub fn range(&self) -> (u32, u32) {
        (self.r_min, self.r_max)
    }
}

impl WalkPolicy for UniformWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        let r = rng.gen_range(self.r_min..self.r_max);
        retarget_polar(body, rng, f64::from(r))
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// A uniform walk that may linger at each target.
///
/// On arrival the walker waits with probability `wait_transition_probability`
/// (keeping its target, so the choice is re-rolled next tick) and otherwise
/// retargets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaitingUniformWalk {
    walk:                        UniformWalk,
    wait_transition_probability: f64,
}

impl WaitingUniformWalk {
    pub fn new(wait_transition_probability: f64) -> AgentResult<Self> {
        Self::with_range(UniformWalk::default(), wait_transition_probability)
    }

    pub fn with_range(walk: UniformWalk, wait_transition_probability: f64) -> AgentResult<Self> {
        Ok(Self {
            walk,
            wait_transition_probability: probability(
                "wait_transition_probability",
                wait_transition_probability,
            )?,
        })
    }

    pub fn wait_transition_probability(&self) -> f64 {
        self.wait_transition_probability
    }
}

impl WalkPolicy for WaitingUniformWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        self.walk.retarget(body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        match leg(body) {
            Leg::Untargeted => self.retarget(body, rng),
            Leg::Arrived => {
                if rng.gen_bool(self.wait_transition_probability) {
                    body.wait();
                    Ok(())
                } else {
                    self.retarget(body, rng)
                }
            }
            Leg::EnRoute => body.advance(),
        }
    }

    fn extend_report(&self, _body: &Mover, report: &mut AgentReport) {
        report.push("wait_p", self.wait_transition_probability);
    }

    fn name(&self) -> &'static str {
        "waiting_uniform"
    }
}
