//! Fluent builder for constructing a [`Model`].

use rw_agent::Agent;
use rw_core::ModelConfig;

use crate::{Model, SimResult};

/// Fluent builder for [`Model`].
///
/// | Method           | Default |
/// |------------------|---------|
/// | `.init_time(t)`  | `0`     |
/// | `.max_time(t)`   | `100`   |
/// | `.time_step(dt)` | `1`     |
/// | `.seed(s)`       | `0`     |
/// | `.agent(a)`      | none    |
///
/// The configuration is validated in [`build`][Self::build].
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new()
///     .max_time(500.0)
///     .seed(7)
///     .agent(BaseWalker::new(AgentId(0), Point::ORIGIN, UniformWalk::default()))
///     .build()?;
/// model.run()?;
/// ```
#[derive(Default)]
pub struct ModelBuilder {
    config: ModelConfig,
    agents: Vec<Box<dyn Agent>>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ModelConfig) -> Self {
        Self { config, agents: Vec::new() }
    }

    pub fn init_time(mut self, t: f64) -> Self {
        self.config.init_time = t;
        self
    }

    pub fn max_time(mut self, t: f64) -> Self {
        self.config.max_time = t;
        self
    }

    pub fn time_step(mut self, dt: f64) -> Self {
        self.config.time_step = dt;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Queue an agent; agents are added in call order.
    pub fn agent<A: Agent + 'static>(mut self, agent: A) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    /// Validate the configuration and return a ready-to-run [`Model`].
    pub fn build(self) -> SimResult<Model> {
        let mut model = Model::new(self.config)?;
        model.add_agents(self.agents);
        Ok(model)
    }
}
