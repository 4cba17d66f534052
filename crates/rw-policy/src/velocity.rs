//! Walks whose speed is redrawn every tick.

use rw_agent::{AgentReport, AgentResult, Mover};
use rw_core::{AgentRng, Sampler};

use crate::uniform::UniformWalk;
use crate::walker::{WalkPolicy, pursue};

/// A [`UniformWalk`] whose velocity is resampled from `velocity` at the start
/// of every tick.
///
/// Negative draws become `|v|` when `reflect` is set and `0` otherwise.
#[derive(Debug)]
pub struct VariableVelocityWalk {
    walk:     UniformWalk,
    velocity: Box<dyn Sampler>,
    reflect:  bool,
}

impl VariableVelocityWalk {
    pub fn new(velocity: Box<dyn Sampler>, reflect: bool) -> Self {
        Self { walk: UniformWalk::default(), velocity, reflect }
    }

    pub fn with_range(mut self, walk: UniformWalk) -> Self {
        self.walk = walk;
        self
    }

    pub fn reflects(&self) -> bool {
        self.reflect
    }

    fn draw(&self, rng: &mut AgentRng) -> f64 {
        let v = self.velocity.sample(rng);
        match (v < 0.0, self.reflect) {
            (true, true) => v.abs(),
            (true, false) => 0.0,
            (false, _) => v,
        }
    }
}

impl WalkPolicy for VariableVelocityWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        self.walk.retarget(body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        let v = self.draw(rng);
        body.set_velocity(v)?;
        pursue(self, body, rng)
    }

    fn extend_report(&self, body: &Mover, report: &mut AgentReport) {
        report.push("v", body.velocity());
    }

    fn name(&self) -> &'static str {
        "variable_velocity"
    }
}
