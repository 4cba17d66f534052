//! Scalar distribution samplers.
//!
//! Walk policies hold their stochastic parameters (trip bounds, velocity
//! distributions, step lengths) as owned `Box<dyn Sampler>` values, injected
//! at construction.  [`DistributionSpec`] is the configuration-side entry
//! point: a distribution family plus its named parameters, validated once by
//! [`DistributionSpec::build`].
//!
//! | Family        | Parameters       | Notes                                 |
//! |---------------|------------------|---------------------------------------|
//! | `uniform`     | `low`, `high`    | half-open `[low, high)`               |
//! | `normal`      | `mean`, `sd`     |                                       |
//! | `levy`        | `loc`, `scale`   | `loc + scale / Z²`, `Z ~ N(0, 1)`     |
//! | `exponential` | `rate`           |                                       |
//! | `gamma`       | `shape`, `scale` |                                       |
//! | `log_normal`  | `mu`, `sigma`    | parameters of the underlying normal   |
//! | `constant`    | `value`          | degenerate; handy for tests           |

use std::fmt;

use rand::RngCore;
use rand_distr::{Distribution, Exp, Gamma, LogNormal, StandardNormal, Uniform};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// A source of `f64` draws.
///
/// Object safe: the RNG is passed as `&mut dyn RngCore`, so both
/// [`AgentRng`][crate::AgentRng] and [`SimRng`][crate::SimRng] (or any `rand`
/// generator) can drive it.
pub trait Sampler: Send + Sync + fmt::Debug {
    fn sample(&self, rng: &mut dyn RngCore) -> f64;
}

impl Sampler for Box<dyn Sampler> {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        (**self).sample(rng)
    }
}

fn require(ok: bool, what: impl FnOnce() -> String) -> CoreResult<()> {
    if ok { Ok(()) } else { Err(CoreError::Config(what())) }
}

fn finite(name: &str, v: f64) -> CoreResult<()> {
    require(v.is_finite(), || format!("{name} must be finite (got {v})"))
}

fn positive(name: &str, v: f64) -> CoreResult<()> {
    require(v.is_finite() && v > 0.0, || format!("{name} must be finite and positive (got {v})"))
}

// ── Adapters ──────────────────────────────────────────────────────────────────

/// Uniform on `[low, high)`.
#[derive(Clone, Copy, Debug)]
pub struct UniformSampler(Uniform<f64>);

impl UniformSampler {
    pub fn new(low: f64, high: f64) -> CoreResult<Self> {
        finite("uniform low", low)?;
        finite("uniform high", high)?;
        require(low < high && (high - low).is_finite(), || {
            format!("uniform requires low < high with a finite span (got {low}, {high})")
        })?;
        Ok(Self(Uniform::new(low, high)))
    }
}

impl Sampler for UniformSampler {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.0.sample(rng)
    }
}

/// Normal with mean `mean` and standard deviation `sd`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalSampler {
    mean: f64,
    sd:   f64,
}

impl NormalSampler {
    pub fn new(mean: f64, sd: f64) -> CoreResult<Self> {
        finite("normal mean", mean)?;
        require(sd.is_finite() && sd >= 0.0, || {
            format!("normal sd must be finite and non-negative (got {sd})")
        })?;
        Ok(Self { mean, sd })
    }

    /// Skip validation.  For compile-time defaults whose parameters are known
    /// to be finite with `sd >= 0`.
    pub const fn new_unchecked(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sd(&self) -> f64 {
        self.sd
    }
}

impl Sampler for NormalSampler {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let z: f64 = StandardNormal.sample(&mut *rng);
        self.mean + self.sd * z
    }
}

/// Lévy distribution with location `loc` and scale `scale`.
///
/// Drawn as `loc + scale / Z²` for standard normal `Z`.  Draws that overflow
/// (a `Z` at or extremely near zero) are redrawn, so the result is always
/// finite.
#[derive(Clone, Copy, Debug)]
pub struct LevySampler {
    loc:   f64,
    scale: f64,
}

impl LevySampler {
    pub fn new(loc: f64, scale: f64) -> CoreResult<Self> {
        finite("levy loc", loc)?;
        positive("levy scale", scale)?;
        Ok(Self { loc, scale })
    }

    /// The standard Lévy distribution, `loc = 0`, `scale = 1`.
    pub fn standard() -> Self {
        Self { loc: 0.0, scale: 1.0 }
    }
}

impl Sampler for LevySampler {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        loop {
            let z: f64 = StandardNormal.sample(&mut *rng);
            let v = self.loc + self.scale / (z * z);
            if v.is_finite() {
                return v;
            }
        }
    }
}

/// Exponential with rate `rate`.
#[derive(Clone, Copy, Debug)]
pub struct ExponentialSampler(Exp<f64>);

impl ExponentialSampler {
    pub fn new(rate: f64) -> CoreResult<Self> {
        positive("exponential rate", rate)?;
        Exp::new(rate)
            .map(Self)
            .map_err(|e| CoreError::Config(format!("exponential({rate}): {e}")))
    }
}

impl Sampler for ExponentialSampler {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.0.sample(rng)
    }
}

/// Gamma with shape `shape` and scale `scale`.
#[derive(Clone, Copy, Debug)]
pub struct GammaSampler(Gamma<f64>);

impl GammaSampler {
    pub fn new(shape: f64, scale: f64) -> CoreResult<Self> {
        positive("gamma shape", shape)?;
        positive("gamma scale", scale)?;
        Gamma::new(shape, scale)
            .map(Self)
            .map_err(|e| CoreError::Config(format!("gamma({shape}, {scale}): {e}")))
    }
}

impl Sampler for GammaSampler {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.0.sample(rng)
    }
}

/// Log-normal whose logarithm is `N(mu, sigma)`.
#[derive(Clone, Copy, Debug)]
pub struct LogNormalSampler(LogNormal<f64>);

impl LogNormalSampler {
    pub fn new(mu: f64, sigma: f64) -> CoreResult<Self> {
        finite("log_normal mu", mu)?;
        require(sigma.is_finite() && sigma >= 0.0, || {
            format!("log_normal sigma must be finite and non-negative (got {sigma})")
        })?;
        LogNormal::new(mu, sigma)
            .map(Self)
            .map_err(|e| CoreError::Config(format!("log_normal({mu}, {sigma}): {e}")))
    }
}

impl Sampler for LogNormalSampler {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.0.sample(rng)
    }
}

/// Always returns the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSampler(pub f64);

impl Sampler for ConstantSampler {
    fn sample(&self, _rng: &mut dyn RngCore) -> f64 {
        self.0
    }
}

// ── DistributionSpec ──────────────────────────────────────────────────────────

/// A distribution family with its named parameters, as written in scenario
/// files:
///
/// ```json
/// { "family": "normal", "mean": 100.0, "sd": 12.5 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionSpec {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, sd: f64 },
    Levy {
        #[serde(default)]
        loc:   f64,
        #[serde(default = "unit_scale")]
        scale: f64,
    },
    Exponential { rate: f64 },
    Gamma { shape: f64, scale: f64 },
    LogNormal { mu: f64, sigma: f64 },
    Constant { value: f64 },
}

fn unit_scale() -> f64 {
    1.0
}

impl DistributionSpec {
    /// Validate the parameters and construct the matching sampler.
    pub fn build(&self) -> CoreResult<Box<dyn Sampler>> {
        Ok(match *self {
            DistributionSpec::Uniform { low, high } => Box::new(UniformSampler::new(low, high)?),
            DistributionSpec::Normal { mean, sd } => Box::new(NormalSampler::new(mean, sd)?),
            DistributionSpec::Levy { loc, scale } => Box::new(LevySampler::new(loc, scale)?),
            DistributionSpec::Exponential { rate } => Box::new(ExponentialSampler::new(rate)?),
            DistributionSpec::Gamma { shape, scale } => Box::new(GammaSampler::new(shape, scale)?),
            DistributionSpec::LogNormal { mu, sigma } => Box::new(LogNormalSampler::new(mu, sigma)?),
            DistributionSpec::Constant { value } => {
                finite("constant value", value)?;
                Box::new(ConstantSampler(value))
            }
        })
    }

    /// Short family name, used in log lines.
    pub fn family(&self) -> &'static str {
        match self {
            DistributionSpec::Uniform { .. }     => "uniform",
            DistributionSpec::Normal { .. }      => "normal",
            DistributionSpec::Levy { .. }        => "levy",
            DistributionSpec::Exponential { .. } => "exponential",
            DistributionSpec::Gamma { .. }       => "gamma",
            DistributionSpec::LogNormal { .. }   => "log_normal",
            DistributionSpec::Constant { .. }    => "constant",
        }
    }
}
