//! The `WalkPolicy` strategy trait and the `Walker<P>` agent.

use std::fmt;

use rw_agent::{Agent, AgentError, AgentReport, AgentResult, Mover};
use rw_core::{AgentId, AgentRng, Point};

/// Where a walker stands relative to its target at the start of a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leg {
    /// No target set (always the case for a fresh walker).
    Untargeted,
    /// Within tolerance of the target.
    Arrived,
    /// Targeted but not there yet.
    EnRoute,
}

/// Classify `body`'s current leg.
pub fn leg(body: &Mover) -> Leg {
    match body.is_on_target() {
        Err(_)    => Leg::Untargeted,
        Ok(true)  => Leg::Arrived,
        Ok(false) => Leg::EnRoute,
    }
}

/// A retargeting / movement strategy driving one [`Mover`].
///
/// Only [`retarget`][Self::retarget] and [`name`][Self::name] are required.
/// The default [`update`][Self::update] is the plain pursue rule (see
/// [`pursue`]).
pub trait WalkPolicy: Send + fmt::Debug {
    /// Pick a fresh target for `body`.
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()>;

    /// Advance `body` by one tick.
    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        pursue(self, body, rng)
    }

    /// Append policy-specific fields to the body's report.
    fn extend_report(&self, _body: &Mover, _report: &mut AgentReport) {}

    fn name(&self) -> &'static str;
}

/// The shared pursue rule: retarget when untargeted or arrived, otherwise
/// take one step toward the target.
pub fn pursue<P: WalkPolicy + ?Sized>(
    policy: &mut P,
    body:   &mut Mover,
    rng:    &mut AgentRng,
) -> AgentResult<()> {
    match leg(body) {
        Leg::Untargeted | Leg::Arrived => policy.retarget(body, rng),
        Leg::EnRoute => body.advance(),
    }
}

/// Target a random heading at distance `r` from `body`.
pub(crate) fn retarget_polar(body: &mut Mover, rng: &mut AgentRng, r: f64) -> AgentResult<()> {
    let theta = rng.azimuth();
    body.set_polar_target(theta, r)
}

/// Validate a probability parameter.
pub(crate) fn probability(name: &str, p: f64) -> AgentResult<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(AgentError::Invariant(format!("{name} must lie in [0, 1] (got {p})")))
    }
}

// ── Walker ────────────────────────────────────────────────────────────────────

/// A [`Mover`] driven by a [`WalkPolicy`].
#[derive(Debug)]
pub struct Walker<P: WalkPolicy> {
    body:   Mover,
    policy: P,
}

impl<P: WalkPolicy> Walker<P> {
    /// A halted, untargeted walker at `start` with unit velocity.
    pub fn new(id: AgentId, start: Point, policy: P) -> Self {
        Self { body: Mover::new(id, start), policy }
    }

    /// Wrap an existing body.
    pub fn from_body(body: Mover, policy: P) -> Self {
        Self { body, policy }
    }

    pub fn with_velocity(mut self, velocity: f64) -> AgentResult<Self> {
        self.body.set_velocity(velocity)?;
        Ok(self)
    }

    pub fn with_epsilon(self, epsilon: f64) -> AgentResult<Self> {
        let Self { body, policy } = self;
        Ok(Self { body: body.with_epsilon(epsilon)?, policy })
    }

    #[inline]
    pub fn body(&self) -> &Mover {
        &self.body
    }

    /// Mutable access to the body.  Only the body's own checked operations
    /// (movement primitives, target setters, …) are reachable through it.
    #[inline]
    pub fn body_mut(&mut self) -> &mut Mover {
        &mut self.body
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Force a retarget outside the normal update cycle.
    pub fn retarget(&mut self, rng: &mut AgentRng) -> AgentResult<()> {
        self.policy.retarget(&mut self.body, rng)
    }
}

impl<P: WalkPolicy> Agent for Walker<P> {
    fn id(&self) -> AgentId {
        self.body.id()
    }

    fn update(&mut self, rng: &mut AgentRng) -> AgentResult<()> {
        self.policy.update(&mut self.body, rng)
    }

    fn report(&self) -> AgentReport {
        let mut report = self.body.report();
        self.policy.extend_report(&self.body, &mut report);
        report
    }

    fn kind(&self) -> &'static str {
        self.policy.name()
    }
}
