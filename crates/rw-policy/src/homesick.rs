//! Lévy walks that drift back to their starting point.

use rw_agent::{AgentReport, AgentResult, Mover};
use rw_core::{AgentRng, LevySampler, Point};

use crate::levy::retarget_levy;
use crate::walker::{Leg, WalkPolicy, leg, probability};

/// A Lévy walk anchored at `home`.
///
/// Each time a trip completes the walker heads home with probability `alpha`
/// and otherwise picks a fresh Lévy target.  Trips in progress are never
/// interrupted.
#[derive(Clone, Copy, Debug)]
pub struct HomesickLevyWalk {
    step:  LevySampler,
    home:  Point,
    alpha: f64,
}

impl HomesickLevyWalk {
    pub fn new(home: Point, alpha: f64) -> AgentResult<Self> {
        Ok(Self {
            step:  LevySampler::standard(),
            home,
            alpha: probability("alpha", alpha)?,
        })
    }

    pub fn with_step(mut self, step: LevySampler) -> Self {
        self.step = step;
        self
    }

    pub fn home(&self) -> Point {
        self.home
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Home or away, decided by one Bernoulli(`alpha`) draw.  Returns whether
    /// the new target is home.
    fn choose_leg(&self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<bool> {
        if rng.gen_bool(self.alpha) {
            body.set_target(self.home)?;
            Ok(true)
        } else {
            retarget_levy(&self.step, body, rng)?;
            Ok(false)
        }
    }
}

impl WalkPolicy for HomesickLevyWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        retarget_levy(&self.step, body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        match leg(body) {
            Leg::Untargeted => self.retarget(body, rng),
            Leg::Arrived => self.choose_leg(body, rng).map(|_| ()),
            Leg::EnRoute => body.advance(),
        }
    }

    fn extend_report(&self, body: &Mover, report: &mut AgentReport) {
        report.push("homebound", body.target() == Some(self.home));
    }

    fn name(&self) -> &'static str {
        "homesick_levy"
    }
}

// ── RapidHomesickLevyWalk ─────────────────────────────────────────────────────

/// A homesick walk that may abandon an outbound trip.
///
/// Arrival behaves as [`HomesickLevyWalk`].  While en route to a non-home
/// target, every tick redirects home with probability `alpha` before moving.
/// Once homebound the walker continues unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct RapidHomesickLevyWalk {
    inner:     HomesickLevyWalk,
    homebound: bool,
}

impl RapidHomesickLevyWalk {
    pub fn new(home: Point, alpha: f64) -> AgentResult<Self> {
        Ok(Self { inner: HomesickLevyWalk::new(home, alpha)?, homebound: false })
    }

    pub fn with_step(mut self, step: LevySampler) -> Self {
        self.inner = self.inner.with_step(step);
        self
    }

    pub fn home(&self) -> Point {
        self.inner.home
    }

    pub fn is_homebound(&self) -> bool {
        self.homebound
    }
}

impl WalkPolicy for RapidHomesickLevyWalk {
    fn retarget(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        self.homebound = false;
        self.inner.retarget(body, rng)
    }

    fn update(&mut self, body: &mut Mover, rng: &mut AgentRng) -> AgentResult<()> {
        match leg(body) {
            Leg::Untargeted => self.retarget(body, rng),
            Leg::Arrived => {
                self.homebound = self.inner.choose_leg(body, rng)?;
                Ok(())
            }
            Leg::EnRoute => {
                if !self.homebound && rng.gen_bool(self.inner.alpha) {
                    body.set_target(self.inner.home)?;
                    self.homebound = true;
                }
                body.advance()
            }
        }
    }

    fn extend_report(&self, _body: &Mover, report: &mut AgentReport) {
        report.push("homebound", self.homebound);
    }

    fn name(&self) -> &'static str {
        "rapid_homesick_levy"
    }
}
