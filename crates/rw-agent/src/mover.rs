//! `Mover` — a kinematic body that pursues an optional target.

use rw_core::{AgentId, AgentRng, Point};

use crate::{
    Agent, AgentError, AgentReport, AgentResult, AgentState, Kinematics, Targeting,
};

/// A point agent with odometry, an optional target, a scalar velocity and a
/// three-state activity flag.
///
/// `Mover` carries no decision logic of its own: its [`Agent::update`] is a
/// no-op.  Walk policies in `rw-policy` wrap a `Mover` and call
/// [`advance`][Self::advance], [`wait`][Self::wait] and the target setters.
#[derive(Clone, Debug, PartialEq)]
pub struct Mover {
    id:         AgentId,
    kinematics: Kinematics,
    targeting:  Targeting,
    velocity:   f64,
    state:      AgentState,
}

impl Mover {
    pub const DEFAULT_VELOCITY: f64 = 1.0;

    /// A halted, untargeted mover at `start` with unit velocity.
    pub fn new(id: AgentId, start: Point) -> Self {
        Self {
            id,
            kinematics: Kinematics::new(start),
            targeting:  Targeting::default(),
            velocity:   Self::DEFAULT_VELOCITY,
            state:      AgentState::Halted,
        }
    }

    pub fn with_velocity(mut self, velocity: f64) -> AgentResult<Self> {
        self.set_velocity(velocity)?;
        Ok(self)
    }

    /// Override the on-target tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> AgentResult<Self> {
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(AgentError::Invariant(format!(
                "on-target tolerance must be finite and non-negative (got {epsilon})"
            )));
        }
        self.targeting = Targeting::new(epsilon);
        Ok(self)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.kinematics.position()
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position().x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position().y
    }

    #[inline]
    pub fn distance_traveled(&self) -> f64 {
        self.kinematics.distance_traveled()
    }

    #[inline]
    pub fn trip_distance(&self) -> f64 {
        self.kinematics.trip_distance()
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.targeting.target()
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.targeting.epsilon()
    }

    #[inline]
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn distance_from(&self, p: Point) -> f64 {
        self.kinematics.distance_from(p)
    }

    pub fn vector_to(&self, p: Point) -> (f64, f64) {
        self.kinematics.vector_to(p)
    }

    // ── Velocity ──────────────────────────────────────────────────────────

    /// Set the per-tick step length.  Negative or non-finite values are
    /// rejected.
    pub fn set_velocity(&mut self, velocity: f64) -> AgentResult<()> {
        if !(velocity.is_finite() && velocity >= 0.0) {
            return Err(AgentError::Invariant(format!(
                "velocity must be finite and non-negative (got {velocity})"
            )));
        }
        self.velocity = velocity;
        Ok(())
    }

    // ── Movement primitives ───────────────────────────────────────────────

    pub fn move_to(&mut self, p: Point) {
        self.kinematics.move_to(p);
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.kinematics.move_by(dx, dy);
    }

    pub fn move_polar(&mut self, theta: f64, r: f64) {
        self.kinematics.move_polar(theta, r);
    }

    pub fn reset_trip_odometer(&mut self) {
        self.kinematics.reset_trip_odometer();
    }

    // ── Targeting ─────────────────────────────────────────────────────────

    pub fn set_target(&mut self, p: Point) -> AgentResult<()> {
        self.targeting.set(p)
    }

    pub fn set_absolute_target(&mut self, x: f64, y: f64) -> AgentResult<()> {
        self.targeting.set(Point::new(x, y))
    }

    /// Target the point `(dx, dy)` away from the current position.
    pub fn set_relative_target(&mut self, dx: f64, dy: f64) -> AgentResult<()> {
        self.targeting.set(self.position().offset(dx, dy))
    }

    /// Target the point at polar offset `(theta, r)` from the current position.
    pub fn set_polar_target(&mut self, theta: f64, r: f64) -> AgentResult<()> {
        self.targeting.set(self.position().offset_polar(theta, r))
    }

    pub fn clear_target(&mut self) {
        self.targeting.clear();
    }

    pub fn target_distance(&self) -> AgentResult<f64> {
        self.targeting.distance_from(self.position())
    }

    /// Bearing to the target, normalized into `[0, 2π)`.
    pub fn target_azimuth(&self) -> AgentResult<f64> {
        self.targeting.azimuth_from(self.position())
    }

    pub fn is_on_target(&self) -> AgentResult<bool> {
        self.targeting.is_reached_from(self.position())
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Take one velocity-length step toward the target.
    ///
    /// When the target is closer than one step the mover lands exactly on it
    /// and only the remaining distance is credited to the odometers.
    pub fn advance(&mut self) -> AgentResult<()> {
        let target = self.targeting.target().ok_or(AgentError::NoTarget)?;
        let remaining = self.target_distance()?;
        self.state = AgentState::Moving;
        if remaining < self.velocity {
            self.kinematics.move_to(target);
        } else {
            let azimuth = self.target_azimuth()?;
            self.kinematics.move_polar(azimuth, self.velocity);
        }
        Ok(())
    }

    /// Spend the tick standing still.
    pub fn wait(&mut self) {
        self.state = AgentState::Waiting;
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    pub fn report(&self) -> AgentReport {
        let target = self.target();
        AgentReport {
            agent_id: self.id,
            x:        self.x(),
            y:        self.y(),
            tx:       target.map(|t| t.x),
            ty:       target.map(|t| t.y),
            ta:       self.target_azimuth().ok(),
            tr:       self.target_distance().ok(),
            d:        self.distance_traveled(),
            st:       self.state,
            extras:   Vec::new(),
        }
    }
}

impl Agent for Mover {
    fn id(&self) -> AgentId {
        self.id
    }

    fn update(&mut self, _rng: &mut AgentRng) -> AgentResult<()> {
        Ok(())
    }

    fn report(&self) -> AgentReport {
        Mover::report(self)
    }

    fn kind(&self) -> &'static str {
        "mover"
    }
}
