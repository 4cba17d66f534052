//! Simulation time model.
//!
//! # Design
//!
//! Model time is continuous (`f64`) but advances in fixed steps.  The clock
//! stores an integer `Tick` counter and derives the time from it:
//!
//!   time = init_time + tick * time_step
//!
//! Deriving rather than accumulating keeps `time` free of floating-point
//! drift for long runs with fractional steps, and is exact for integer steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of completed steps since the start of a run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── ModelClock ────────────────────────────────────────────────────────────────

/// Maps tick counts to model time.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelClock {
    init_time:    f64,
    time_step:    f64,
    current_tick: Tick,
}

impl ModelClock {
    pub fn new(init_time: f64, time_step: f64) -> Self {
        Self { init_time, time_step, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Model time at the current tick.
    #[inline]
    pub fn time(&self) -> f64 {
        self.init_time + self.current_tick.0 as f64 * self.time_step
    }

    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}

impl fmt::Display for ModelClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {})", self.current_tick, self.time())
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically deserialized from a scenario file; every field has a default so
/// partial files are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Time of the first tick.
    pub init_time: f64,

    /// The run loop stops once `time >= max_time` (exclusive bound).
    pub max_time: f64,

    /// Time added per tick.  Must be strictly positive.
    pub time_step: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            init_time: 0.0,
            max_time:  100.0,
            time_step: 1.0,
            seed:      0,
        }
    }
}

impl ModelConfig {
    /// Reject configurations whose run loop would not terminate or is
    /// meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.init_time.is_finite() || !self.max_time.is_finite() {
            return Err(CoreError::Config(format!(
                "init_time and max_time must be finite (got {} and {})",
                self.init_time, self.max_time
            )));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(CoreError::Config(format!(
                "time_step must be finite and positive (got {})",
                self.time_step
            )));
        }
        if self.max_time < self.init_time {
            return Err(CoreError::Config(format!(
                "max_time {} precedes init_time {}",
                self.max_time, self.init_time
            )));
        }
        Ok(())
    }

    /// Number of ticks a run will execute.  Used to pre-size the collector.
    pub fn expected_ticks(&self) -> usize {
        let span = (self.max_time - self.init_time) / self.time_step;
        if span.is_finite() && span > 0.0 { span.ceil() as usize } else { 0 }
    }

    /// Construct a `ModelClock` positioned at `init_time`.
    pub fn make_clock(&self) -> ModelClock {
        ModelClock::new(self.init_time, self.time_step)
    }
}
