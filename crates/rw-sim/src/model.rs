//! The `Model` scheduler and its run loop.

use std::fmt;

use rw_agent::Agent;
use rw_core::{AgentId, AgentRng, ModelClock, ModelConfig, SimRng, Tick};
use tracing::{debug, trace, warn};

use crate::{ModelObserver, NoopObserver, ReportRow, ResultTable, SimError, SimResult};

// ── RunState ──────────────────────────────────────────────────────────────────

/// Lifecycle of a [`Model`].  Only the run loop advances it, and only
/// forward: `NotRun → Running → Done`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RunState {
    #[default]
    NotRun,
    Running,
    Done,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::NotRun  => "NOT_RUN",
            RunState::Running => "RUNNING",
            RunState::Done    => "DONE",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// Owns the agents, steps model time and collects one [`ReportRow`] per agent
/// per tick.
///
/// Agents are updated in insertion order.  Each agent draws from its own
/// [`AgentRng`] seeded from `(config.seed, slot)`, so a run is fully
/// determined by the seed and the order agents were added.
///
/// A model runs once.  [`export`][Self::export] is available after the run
/// completes.
pub struct Model {
    config:    ModelConfig,
    clock:     ModelClock,
    run_state: RunState,
    agents:    Vec<Box<dyn Agent>>,
    rngs:      Vec<AgentRng>,
    sim_rng:   SimRng,
    next_id:   AgentId,
    collector: Vec<ReportRow>,
}

impl Model {
    /// An empty model.  Fails with [`SimError::Config`] if `config` is
    /// invalid (see [`ModelConfig::validate`]).
    pub fn new(config: ModelConfig) -> SimResult<Self> {
        config.validate().map_err(|rw_core::CoreError::Config(msg)| SimError::Config(msg))?;
        Ok(Self {
            clock:     config.make_clock(),
            sim_rng:   SimRng::new(config.seed),
            config,
            run_state: RunState::NotRun,
            agents:    Vec::new(),
            rngs:      Vec::new(),
            next_id:   AgentId(0),
            collector: Vec::new(),
        })
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Append one agent.  No validation beyond the type system: any
    /// [`Agent`] is accepted, including ones with duplicate ids.
    pub fn add_agent<A: Agent + 'static>(&mut self, agent: A) -> AgentId {
        self.add_boxed(Box::new(agent))
    }

    pub fn add_boxed(&mut self, agent: Box<dyn Agent>) -> AgentId {
        let id = agent.id();
        let slot = self.agents.len() as u64;
        self.rngs.push(AgentRng::new(self.config.seed, slot));
        self.agents.push(agent);
        if id >= self.next_id {
            self.next_id = id.next();
        }
        id
    }

    pub fn add_agents<I>(&mut self, agents: I) -> usize
    where
        I: IntoIterator<Item = Box<dyn Agent>>,
    {
        let before = self.agents.len();
        for agent in agents {
            self.add_boxed(agent);
        }
        self.agents.len() - before
    }

    /// Create `n` agents with `factory`, which receives a fresh sequential
    /// [`AgentId`] and the model's RNG.  Returns the assigned ids.
    ///
    /// Stops at the first factory error; agents created before it stay in
    /// the model.
    pub fn populate<F, E>(&mut self, n: usize, mut factory: F) -> SimResult<Vec<AgentId>>
    where
        F: FnMut(AgentId, &mut SimRng) -> Result<Box<dyn Agent>, E>,
        SimError: From<E>,
    {
        let mut ids = Vec::with_capacity(n);
        for _ in 0..n {
            let id = self.next_id;
            let agent = factory(id, &mut self.sim_rng)?;
            ids.push(self.add_boxed(agent));
        }
        debug!(added = n, total = self.agents.len(), "population added");
        Ok(ids)
    }

    // ── Run ───────────────────────────────────────────────────────────────

    /// Run to completion without an observer.
    pub fn run(&mut self) -> SimResult<()> {
        self.run_with(&mut NoopObserver)
    }

    /// Run from `init_time` while `time < max_time`, calling `observer` at
    /// every tick boundary.
    ///
    /// Fails with [`SimError::AlreadyRun`] unless the model is `NotRun`.  An
    /// agent error aborts the run and leaves the model `Running`.
    pub fn run_with<O: ModelObserver + ?Sized>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.run_state != RunState::NotRun {
            return Err(SimError::AlreadyRun(self.run_state));
        }
        debug!(
            agents    = self.agents.len(),
            init_time = self.config.init_time,
            max_time  = self.config.max_time,
            time_step = self.config.time_step,
            seed      = self.config.seed,
            "model run starting",
        );
        self.collector
            .reserve(self.config.expected_ticks().saturating_mul(self.agents.len()));

        while self.clock.time() < self.config.max_time {
            self.run_state = RunState::Running;
            let time = self.clock.time();
            observer.on_tick_start(time);

            let first = self.collector.len();
            self.step(time)?;
            observer.on_tick_end(time, &self.collector[first..]);

            trace!(tick = %self.clock.current_tick(), time, rows = self.collector.len() - first, "tick complete");
            self.clock.advance();
        }

        self.run_state = RunState::Done;
        observer.on_run_end(self.clock.time());
        debug!(
            ticks = self.clock.current_tick().0,
            rows  = self.collector.len(),
            time  = self.clock.time(),
            "model run finished",
        );
        Ok(())
    }

    /// Update every agent once and collect its report.
    fn step(&mut self, time: f64) -> SimResult<()> {
        #[cfg(not(feature = "parallel"))]
        {
            for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
                if let Err(e) = agent.update(rng) {
                    warn!(agent = %agent.id(), kind = agent.kind(), time, error = %e, "agent update failed");
                    return Err(e.into());
                }
                self.collector.push(ReportRow { time, report: agent.report() });
            }
            Ok(())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let reports: Vec<_> = self
                .agents
                .par_iter_mut()
                .zip(self.rngs.par_iter_mut())
                .map(|(agent, rng)| {
                    agent
                        .update(rng)
                        .map(|()| agent.report())
                        .map_err(|e| (agent.id(), e))
                })
                .collect();

            for result in reports {
                match result {
                    Ok(report) => self.collector.push(ReportRow { time, report }),
                    Err((id, e)) => {
                        warn!(agent = %id, time, error = %e, "agent update failed");
                        return Err(e.into());
                    }
                }
            }
            Ok(())
        }
    }

    // ── Results ───────────────────────────────────────────────────────────

    /// The collected rows as a [`ResultTable`].  Fails with
    /// [`SimError::RunNotCompleted`] unless the run is `Done`.
    pub fn export(&self) -> SimResult<ResultTable> {
        self.ensure_done()?;
        Ok(ResultTable::from_rows(self.collector.clone()))
    }

    /// As [`export`][Self::export], consuming the model to avoid the copy.
    pub fn into_table(self) -> SimResult<ResultTable> {
        self.ensure_done()?;
        Ok(ResultTable::from_rows(self.collector))
    }

    fn ensure_done(&self) -> SimResult<()> {
        if self.run_state == RunState::Done {
            Ok(())
        } else {
            Err(SimError::RunNotCompleted(self.run_state))
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Rows collected so far, in any run state.
    pub fn rows(&self) -> &[ReportRow] {
        &self.collector
    }

    /// Current model time.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn tick(&self) -> Tick {
        self.clock.current_tick()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("run_state", &self.run_state)
            .field("agents", &self.agents.len())
            .field("rows", &self.collector.len())
            .finish()
    }
}
