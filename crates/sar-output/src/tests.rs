//! Integration tests for sar-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EventRow, MetricsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn metrics_row(tick: u64, rescued: u32) -> MetricsRow {
        MetricsRow {
            tick,
            coverage: 0.25,
            found: rescued + 1,
            rescued,
            active_drones: 6,
        }
    }

    fn event_row(kind: &str, tick: u64) -> EventRow {
        EventRow { kind: kind.to_owned(), drone: 9, victim: 4, tick }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_metrics.csv").exists());
        assert!(dir.path().join("rescue_events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "coverage", "found", "rescued", "active_drones"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("rescue_events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["kind", "drone", "victim", "tick"]);
    }

    #[test]
    fn csv_metrics_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_metrics(&metrics_row(0, 0)).unwrap();
        w.write_metrics(&metrics_row(1, 2)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0"); // tick
        assert_eq!(&rows[0][1], "0.25"); // coverage
        assert_eq!(&rows[1][3], "2"); // rescued
        assert_eq!(&rows[1][4], "6"); // active_drones
    }

    #[test]
    fn csv_events_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[event_row("found", 3), event_row("rescued", 8)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("rescue_events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "found");
        assert_eq!(&rows[0][1], "9"); // drone
        assert_eq!(&rows[1][0], "rescued");
        assert_eq!(&rows[1][3], "8"); // tick
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_event_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use sar_core::SwarmConfig;
    use sar_sim::World;

    use crate::{CsvWriter, MetricsOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn full_run_streams_one_metrics_row_per_tick() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = MetricsOutputObserver::new(writer);

        let config = SwarmConfig { seed: Some(11), ..SwarmConfig::default() };
        let mut world = World::new(config).unwrap();
        world.run_ticks(25, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 25);
        // Tick column counts 0..25 in order.
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(&row[0], &i.to_string());
        }
    }

    #[test]
    fn event_log_dumped_at_run_end() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = MetricsOutputObserver::new(writer);

        // A dense little world so discoveries actually happen.
        let config = SwarmConfig {
            width: 8,
            height: 8,
            n_drones: 6,
            n_victims: 10,
            n_obstacles: 4,
            sensor_prob: 1.0,
            seed: Some(21),
            ..SwarmConfig::default()
        };
        let mut world = World::new(config).unwrap();
        world.run_ticks(120, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let expected = world.log().len();
        assert!(expected > 0, "this scenario should produce discoveries");

        let mut rdr = csv::Reader::from_path(dir.path().join("rescue_events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), expected);
        assert!(rows.iter().all(|r| &r[0] == "found" || &r[0] == "rescued"));
    }
}
