//! Integration tests for rw-output.

use rw_core::{AgentId, ModelConfig, Point};
use rw_policy::{HomesickLevyWalk, UniformWalk, Walker};
use rw_sim::Model;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Two walkers (one with a `homebound` extra) and a passive mover, run for
/// `ticks` unit steps.
fn finished_model(ticks: f64) -> Model {
    let mut model = Model::new(ModelConfig { max_time: ticks, seed: 11, ..ModelConfig::default() }).unwrap();
    model.add_agent(Walker::new(AgentId(0), Point::ORIGIN, UniformWalk::default()));
    model.add_agent(Walker::new(
        AgentId(1),
        Point::new(1.0, 1.0),
        HomesickLevyWalk::new(Point::new(1.0, 1.0), 0.2).unwrap(),
    ));
    model.add_agent(rw_agent::Mover::new(AgentId(2), Point::new(-4.0, 0.5)));
    model
}

fn read(bytes: &[u8]) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_reader(bytes);
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::{CsvWriter, OutputWriter, ROWS_FILE};

    #[test]
    fn file_created_in_directory() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join(ROWS_FILE).exists());

        let mut rdr = csv::Reader::from_path(dir.path().join(ROWS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "agent_id", "x", "y", "tx", "ty", "ta", "tr", "d", "st"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn table_export_round_trip() {
        let mut model = finished_model(4.0);
        model.run().unwrap();
        let table = model.export().unwrap();

        let mut w = CsvWriter::from_writer(Vec::new());
        w.write_table(&table).unwrap();
        let bytes = w.into_inner().unwrap();
        let (headers, rows) = read(&bytes);

        assert_eq!(headers, table.columns());
        assert_eq!(headers.last().map(String::as_str), Some("homebound"));
        assert_eq!(rows.len(), 12);

        // Passive mover: untargeted, so target cells and the extra are empty.
        let mover = &rows[2];
        assert_eq!(&mover[0], "0");
        assert_eq!(&mover[1], "2");
        assert_eq!(&mover[2], "-4");
        assert_eq!(&mover[3], "0.5");
        assert_eq!(&mover[4], "");
        assert_eq!(&mover[7], "");
        assert_eq!(&mover[9], "HALTED");
        assert_eq!(&mover[10], "");

        // Walkers are targeted after their first update.
        assert_ne!(&rows[0][4], "");
        assert!(matches!(&rows[4][10], "true" | "false"));
        assert_eq!(&rows[11][0], "3");
    }

    #[test]
    fn header_fixed_by_first_batch() {
        let mut model = finished_model(2.0);
        model.run().unwrap();
        let rows = model.rows();

        let mut w = CsvWriter::from_writer(Vec::new());
        // The mover alone carries no extras.
        w.write_rows(&rows[2..3]).unwrap();
        w.write_rows(&rows[3..]).unwrap();
        assert_eq!(w.columns().map(<[_]>::len), Some(10));
        let (headers, records) = read(&w.into_inner().unwrap());
        assert_eq!(headers.len(), 10);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = CsvWriter::from_writer(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
        let (headers, rows) = read(&w.into_inner().unwrap());
        assert_eq!(headers.len(), 10);
        assert!(rows.is_empty());
    }
}

// ── CsvObserver ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use rw_sim::ReportRow;

    use super::*;
    use crate::{CsvObserver, CsvWriter, OutputError, OutputResult, OutputWriter, ROWS_FILE};

    #[test]
    fn streams_same_rows_as_export() {
        let dir = tmp();
        let mut model = finished_model(5.0);
        let mut obs = CsvObserver::new(CsvWriter::new(dir.path()).unwrap());
        model.run_with(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 15);

        let table = model.export().unwrap();
        let mut rdr = csv::Reader::from_path(dir.path().join(ROWS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, table.columns());
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), table.len());
        for (i, rec) in records.iter().enumerate() {
            let x = table.cell(i, "x").unwrap().to_string();
            assert_eq!(&rec[2], x);
        }
    }

    /// Fails every write.
    struct Broken {
        finishes: usize,
    }

    impl OutputWriter for Broken {
        fn write_rows(&mut self, _rows: &[ReportRow]) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("disk full")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_stored_and_run_completes() {
        let mut model = finished_model(3.0);
        let mut obs = CsvObserver::new(Broken { finishes: 0 });
        model.run_with(&mut obs).unwrap();
        assert_eq!(model.run_state(), rw_sim::RunState::Done);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 0);
        assert_eq!(obs.into_writer().finishes, 1);
    }
}
