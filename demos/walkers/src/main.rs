//! walkers — runs a random-walk scenario and writes one CSV row per agent per
//! tick.
//!
//! ```text
//! cargo run -p walkers                      # built-in mixed scenario
//! cargo run -p walkers -- scenario.json     # scenario file
//! RUST_LOG=debug cargo run -p walkers       # run-loop logging
//! ```
//!
//! Output lands in `output/walkers/walk_rows.csv`.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rw_agent::{Agent, Field};
use rw_core::AgentId;
use rw_output::{CsvObserver, CsvWriter, ROWS_FILE};
use rw_sim::{ResultTable, Scenario};

const OUTPUT_DIR: &str = "output/walkers";

// ── Built-in scenario ─────────────────────────────────────────────────────────

// One population per walk family, all starting at the origin.
const BUILTIN_SCENARIO: &str = r#"{
  "model": { "init_time": 0, "max_time": 500, "time_step": 1, "seed": 42 },
  "populations": [
    { "count": 10, "policy": { "kind": "uniform" } },
    { "count": 10, "policy": { "kind": "waiting_uniform", "wait_transition_probability": 0.3 } },
    { "count": 10, "policy": { "kind": "levy" } },
    { "count": 10, "policy": { "kind": "bounded_levy" } },
    { "count": 10, "policy": { "kind": "bounded_waiting_levy" } },
    { "count": 10, "policy": { "kind": "homesick_levy", "alpha": 0.1 } },
    { "count": 10, "policy": { "kind": "rapid_homesick_levy", "alpha": 0.01 } },
    { "count": 10, "policy": { "kind": "variable_velocity",
                               "velocity": { "family": "normal", "mean": 1.0, "sd": 0.5 },
                               "reflect": true } },
    { "count": 10, "policy": { "kind": "energy_budget" } }
  ]
}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_scenario() -> Result<Scenario> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading scenario {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing scenario {path}"))
        }
        None => serde_json::from_str(BUILTIN_SCENARIO).context("parsing built-in scenario"),
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// One agent's first and last position and final odometer.
struct Track {
    kind:  &'static str,
    start: (f64, f64),
    last:  (f64, f64),
    d:     f64,
}

fn float(table: &ResultTable, row: usize, column: &str) -> f64 {
    table.cell(row, column).and_then(Field::as_f64).unwrap_or(f64::NAN)
}

fn summarize(table: &ResultTable, kinds: &BTreeMap<AgentId, &'static str>) {
    let mut tracks: BTreeMap<AgentId, Track> = BTreeMap::new();
    for (i, row) in table.rows().iter().enumerate() {
        let id = row.report.agent_id;
        let pos = (float(table, i, "x"), float(table, i, "y"));
        let d = float(table, i, "d");
        tracks
            .entry(id)
            .and_modify(|t| {
                t.last = pos;
                t.d = d;
            })
            .or_insert(Track { kind: kinds.get(&id).copied().unwrap_or("?"), start: pos, last: pos, d });
    }

    let mut by_kind: BTreeMap<&'static str, (usize, f64, f64)> = BTreeMap::new();
    for t in tracks.values() {
        let net = ((t.last.0 - t.start.0).powi(2) + (t.last.1 - t.start.1).powi(2)).sqrt();
        let e = by_kind.entry(t.kind).or_insert((0, 0.0, 0.0));
        e.0 += 1;
        e.1 += net;
        e.2 += t.d;
    }

    println!("{:<22} {:>6} {:>14} {:>14}", "Policy", "Agents", "Mean net disp", "Mean distance");
    println!("{}", "-".repeat(59));
    for (kind, (n, net, d)) in by_kind {
        let n_f = n as f64;
        println!("{:<22} {:>6} {:>14.2} {:>14.2}", kind, n, net / n_f, d / n_f);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let scenario = load_scenario()?;
    println!("=== walkers — rust_rw random walks ===");
    println!(
        "Agents: {}  |  Time: [{}, {})  step {}  |  Seed: {}",
        scenario.agent_count(),
        scenario.model.init_time,
        scenario.model.max_time,
        scenario.model.time_step,
        scenario.model.seed,
    );
    println!();

    let mut model = scenario.build()?;
    let kinds: BTreeMap<AgentId, &'static str> =
        model.agents().iter().map(|a| (a.id(), a.kind())).collect();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = CsvObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);

    let t0 = Instant::now();
    model.run_with(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    info!(rows = obs.rows_written(), secs = elapsed.as_secs_f64(), "run complete");

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {ROWS_FILE} : {} rows", obs.rows_written());
    println!();

    let table = model.into_table()?;
    summarize(&table, &kinds);
    Ok(())
}
