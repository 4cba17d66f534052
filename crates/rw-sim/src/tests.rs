//! Integration tests for rw-sim.

use rw_agent::{Agent, AgentError, AgentReport, AgentResult, Mover};
use rw_core::{AgentId, AgentRng, ModelConfig, Point};
use rw_policy::{PolicySpec, UniformWalk, Walker};

use crate::{Model, ReportRow, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(max_time: f64) -> ModelConfig {
    ModelConfig { max_time, seed: 42, ..ModelConfig::default() }
}

fn uniform(id: AgentId) -> Box<dyn Agent> {
    Box::new(Walker::new(id, Point::ORIGIN, UniformWalk::default()))
}

fn walkers(model: &mut Model, n: usize) {
    model
        .populate(n, |id, _rng| Ok::<_, SimError>(uniform(id)))
        .unwrap();
}

/// An agent whose update fails on its `fail_at`-th call.
struct Faulty {
    body:    Mover,
    calls:   u32,
    fail_at: u32,
}

impl Agent for Faulty {
    fn id(&self) -> AgentId {
        self.body.id()
    }

    fn update(&mut self, _rng: &mut AgentRng) -> AgentResult<()> {
        self.calls += 1;
        if self.calls == self.fail_at {
            Err(AgentError::Invariant("boom".into()))
        } else {
            Ok(())
        }
    }

    fn report(&self) -> AgentReport {
        self.body.report()
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use super::*;
    use crate::RunState;

    #[test]
    fn default_model_runs_to_max_time() {
        let mut model = Model::new(ModelConfig::default()).unwrap();
        assert_eq!(model.run_state(), RunState::NotRun);
        assert_eq!(model.time(), 0.0);
        model.run().unwrap();
        assert_eq!(model.time(), 100.0);
        assert_eq!(model.run_state(), RunState::Done);
        assert!(model.export().unwrap().is_empty());
    }

    #[test]
    fn export_before_run_fails() {
        let model = Model::new(config(10.0)).unwrap();
        assert!(matches!(model.export(), Err(SimError::RunNotCompleted(RunState::NotRun))));
    }

    #[test]
    fn second_run_is_rejected() {
        let mut model = Model::new(config(5.0)).unwrap();
        walkers(&mut model, 2);
        model.run().unwrap();
        let rows = model.rows().len();
        assert!(matches!(model.run(), Err(SimError::AlreadyRun(RunState::Done))));
        assert_eq!(model.rows().len(), rows);
        assert_eq!(model.time(), 5.0);
    }

    #[test]
    fn empty_time_span_completes_without_ticks() {
        let cfg = ModelConfig { init_time: 3.0, max_time: 3.0, ..ModelConfig::default() };
        let mut model = Model::new(cfg).unwrap();
        walkers(&mut model, 4);
        model.run().unwrap();
        assert_eq!(model.run_state(), RunState::Done);
        assert!(model.rows().is_empty());
        assert_eq!(model.time(), 3.0);
    }

    #[test]
    fn agent_error_aborts_run() {
        let mut model = Model::new(config(10.0)).unwrap();
        walkers(&mut model, 1);
        model.add_agent(Faulty { body: Mover::new(AgentId(1), Point::ORIGIN), calls: 0, fail_at: 3 });
        let err = model.run().unwrap_err();
        assert!(matches!(err, SimError::Agent(AgentError::Invariant(_))));
        assert_eq!(model.run_state(), RunState::Running);
        // Two full ticks plus the healthy agent's row from the third.
        assert_eq!(model.rows().len(), 5);
        assert!(model.export().is_err());
        assert!(matches!(model.run(), Err(SimError::AlreadyRun(RunState::Running))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use rw_agent::AgentState;

    use super::*;

    #[test]
    fn one_row_per_agent_per_tick_in_order() {
        let mut model = Model::new(config(10.0)).unwrap();
        walkers(&mut model, 3);
        model.run().unwrap();
        let rows = model.rows();
        assert_eq!(rows.len(), 30);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.time, (i / 3) as f64);
            assert_eq!(row.report.agent_id, AgentId((i % 3) as u32));
        }
    }

    #[test]
    fn first_tick_only_retargets() {
        let mut model = Model::new(config(1.0)).unwrap();
        walkers(&mut model, 5);
        model.run().unwrap();
        for row in model.rows() {
            assert_eq!(row.report.st, AgentState::Halted);
            assert_eq!((row.report.x, row.report.y), (0.0, 0.0));
            assert!(row.report.tx.is_some());
        }
    }

    #[test]
    fn fractional_step_uses_exact_tick_times() {
        let cfg = ModelConfig { init_time: 0.0, max_time: 1.0, time_step: 0.1, seed: 1 };
        let mut model = Model::new(cfg).unwrap();
        walkers(&mut model, 1);
        model.run().unwrap();
        let times: Vec<f64> = model.rows().iter().map(|r| r.time).collect();
        assert_eq!(times.len(), 10);
        assert_eq!(times[3], 3.0 * 0.1);
        assert_eq!(model.time(), 1.0);
    }

    #[test]
    fn same_seed_same_rows() {
        let run = |seed| {
            let mut model = Model::new(ModelConfig { seed, ..config(50.0) }).unwrap();
            walkers(&mut model, 4);
            model.run().unwrap();
            model.rows().to_vec()
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9), run(10));
    }

    #[test]
    fn odometer_never_decreases() {
        let mut model = Model::new(config(200.0)).unwrap();
        walkers(&mut model, 3);
        model.run().unwrap();
        for id in 0..3 {
            let d: Vec<f64> = model
                .rows()
                .iter()
                .filter(|r| r.report.agent_id == AgentId(id))
                .map(|r| r.report.d)
                .collect();
            assert!(d.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn populate_assigns_sequential_ids_after_manual_agents() {
        let mut model = Model::new(config(1.0)).unwrap();
        model.add_agent(Mover::new(AgentId(4), Point::ORIGIN));
        let ids = model.populate(2, |id, _| Ok::<_, SimError>(uniform(id))).unwrap();
        assert_eq!(ids, vec![AgentId(5), AgentId(6)]);
        assert_eq!(model.agent_count(), 3);
        assert_eq!(model.agents()[0].kind(), "mover");
    }

    #[test]
    fn populate_propagates_factory_errors() {
        let mut model = Model::new(config(1.0)).unwrap();
        let spec = PolicySpec::WaitingUniform { r_min: 1, r_max: 100, wait_transition_probability: 2.0 };
        let err = model
            .populate(3, |id, rng| spec.spawn(id, Point::ORIGIN, 1.0, rng))
            .unwrap_err();
        assert!(matches!(err, SimError::Policy(_)));
        assert_eq!(model.agent_count(), 0);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::ModelObserver;

    #[derive(Default)]
    struct Recorder {
        starts:     Vec<f64>,
        row_counts: Vec<usize>,
        end:        Option<f64>,
    }

    impl ModelObserver for Recorder {
        fn on_tick_start(&mut self, time: f64) {
            self.starts.push(time);
        }

        fn on_tick_end(&mut self, time: f64, rows: &[ReportRow]) {
            assert!(rows.iter().all(|r| r.time == time));
            self.row_counts.push(rows.len());
        }

        fn on_run_end(&mut self, final_time: f64) {
            self.end = Some(final_time);
        }
    }

    #[test]
    fn hooks_fire_per_tick() {
        let mut model = Model::new(config(4.0)).unwrap();
        walkers(&mut model, 2);
        let mut rec = Recorder::default();
        model.run_with(&mut rec).unwrap();
        assert_eq!(rec.starts, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(rec.row_counts, vec![2; 4]);
        assert_eq!(rec.end, Some(4.0));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::ModelBuilder;

    #[test]
    fn builds_with_queued_agents() {
        let mut model = ModelBuilder::new()
            .max_time(3.0)
            .seed(5)
            .agent(Walker::new(AgentId(0), Point::ORIGIN, UniformWalk::default()))
            .agent(Mover::new(AgentId(1), Point::new(1.0, 1.0)))
            .build()
            .unwrap();
        assert_eq!(model.agent_count(), 2);
        assert_eq!(model.config().seed, 5);
        model.run().unwrap();
        assert_eq!(model.rows().len(), 6);
    }

    #[test]
    fn invalid_configs_rejected() {
        for builder in [
            ModelBuilder::new().time_step(0.0),
            ModelBuilder::new().time_step(-1.0),
            ModelBuilder::new().time_step(f64::NAN),
            ModelBuilder::new().init_time(10.0).max_time(5.0),
            ModelBuilder::new().max_time(f64::INFINITY),
        ] {
            assert!(matches!(builder.build(), Err(SimError::Config(_))));
        }
    }
}

// ── Result table ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use rw_agent::Field;
    use rw_policy::{EnergyBudgetWalk, HomesickLevyWalk};

    use super::*;

    fn mixed_model() -> Model {
        let mut model = Model::new(config(3.0)).unwrap();
        model.add_agent(Mover::new(AgentId(0), Point::new(2.0, 3.0)));
        model.add_agent(Walker::new(
            AgentId(1),
            Point::ORIGIN,
            HomesickLevyWalk::new(Point::ORIGIN, 0.5).unwrap(),
        ));
        model.add_agent(Walker::new(AgentId(2), Point::ORIGIN, EnergyBudgetWalk::new(50.0).unwrap()));
        model.run().unwrap();
        model
    }

    #[test]
    fn columns_are_core_then_extras_first_seen() {
        let table = mixed_model().export().unwrap();
        assert_eq!(
            table.columns(),
            &[
                "time", "agent_id", "x", "y", "tx", "ty", "ta", "tr", "d", "st",
                "homebound", "energy", "efrac", "trip_length",
            ],
        );
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn cells_resolve_by_name() {
        let table = mixed_model().export().unwrap();
        assert_eq!(table.cell(0, "time"), Some(Field::Float(0.0)));
        assert_eq!(table.cell(0, "x"), Some(Field::Float(2.0)));
        assert_eq!(table.cell(0, "tx"), Some(Field::Null));
        assert_eq!(table.cell(0, "st"), Some(Field::Text("HALTED")));
        assert_eq!(table.cell(0, "energy"), Some(Field::Null));
        assert_eq!(table.cell(2, "energy"), Some(Field::Float(50.0)));
        assert_eq!(table.cell(0, "nonsense"), None);
        assert_eq!(table.cell(99, "x"), None);
    }

    #[test]
    fn column_extraction() {
        let table = mixed_model().export().unwrap();
        let times = table.column("time").unwrap();
        assert_eq!(times.len(), 9);
        assert_eq!(times[8], Field::Float(2.0));
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn into_table_matches_export() {
        let model = mixed_model();
        let exported = model.export().unwrap();
        assert_eq!(model.into_table().unwrap(), exported);
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use crate::Scenario;

    const JSON: &str = r#"{
        "model": { "max_time": 20, "seed": 3 },
        "populations": [
            { "count": 2, "policy": { "kind": "levy" } },
            { "count": 3, "start": { "x": 5.0, "y": -5.0 }, "velocity": 2.0,
              "policy": { "kind": "rapid_homesick_levy", "alpha": 0.1 } }
        ]
    }"#;

    #[test]
    fn parses_with_defaults() {
        let scenario: Scenario = serde_json::from_str(JSON).unwrap();
        assert_eq!(scenario.model.max_time, 20.0);
        assert_eq!(scenario.model.time_step, 1.0);
        assert_eq!(scenario.populations[0].velocity, 1.0);
        assert_eq!(scenario.populations[0].start, Point::ORIGIN);
        assert_eq!(scenario.agent_count(), 5);
    }

    #[test]
    fn builds_and_runs() {
        let scenario: Scenario = serde_json::from_str(JSON).unwrap();
        let mut model = scenario.build().unwrap();
        assert_eq!(model.agent_count(), 5);
        assert_eq!(model.agents()[4].id(), AgentId(4));
        assert_eq!(model.agents()[4].kind(), "rapid_homesick_levy");
        model.run().unwrap();
        let table = model.export().unwrap();
        assert_eq!(table.len(), 100);
        assert!(table.has_column("homebound"));
        assert_eq!(table.cell(2, "x"), Some(rw_agent::Field::Float(5.0)));
    }

    #[test]
    fn empty_scenario_is_default_model() {
        let scenario: Scenario = serde_json::from_str("{}").unwrap();
        assert_eq!(scenario, Scenario::default());
        assert_eq!(scenario.build().unwrap().agent_count(), 0);
    }

    #[test]
    fn invalid_model_config_rejected() {
        let scenario: Scenario =
            serde_json::from_str(r#"{ "model": { "time_step": 0 } }"#).unwrap();
        assert!(matches!(scenario.build(), Err(SimError::Config(_))));
    }
}
