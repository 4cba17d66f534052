//! Optional target point and the queries that depend on it.

use rw_core::{Point, bearing, distance, normalize_azimuth};

use crate::{AgentError, AgentResult};

/// Default on-target tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// An optional target plus the tolerance used to decide arrival.
///
/// The target is a single `Option<Point>`, so it is either fully set or
/// fully absent.  Queries take the observer's position as an argument; the
/// owning [`Mover`][crate::Mover] passes its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Targeting {
    target:  Option<Point>,
    epsilon: f64,
}

impl Default for Targeting {
    fn default() -> Self {
        Self { target: None, epsilon: DEFAULT_EPSILON }
    }
}

impl Targeting {
    pub fn new(epsilon: f64) -> Self {
        Self { target: None, epsilon }
    }

    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn is_targeted(&self) -> bool {
        self.target.is_some()
    }

    pub fn set(&mut self, p: Point) -> AgentResult<()> {
        if !p.is_finite() {
            return Err(AgentError::Invariant(format!("target {p} is not finite")));
        }
        self.target = Some(p);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Distance from `from` to the target.
    pub fn distance_from(&self, from: Point) -> AgentResult<f64> {
        self.target.map(|t| distance(from, t)).ok_or(AgentError::NoTarget)
    }

    /// Bearing from `from` to the target, in `[0, 2π)`.
    pub fn azimuth_from(&self, from: Point) -> AgentResult<f64> {
        self.target
            .map(|t| normalize_azimuth(bearing(from, t)))
            .ok_or(AgentError::NoTarget)
    }

    /// `true` if `from` lies within `epsilon` of the target.
    pub fn is_reached_from(&self, from: Point) -> AgentResult<bool> {
        Ok(self.distance_from(from)? <= self.epsilon)
    }
}
