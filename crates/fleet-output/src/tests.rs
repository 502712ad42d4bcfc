//! Integration tests for fleet-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PositionRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn position_row(vehicle_id: u32, tick: u64) -> PositionRow {
        PositionRow {
            vehicle_id,
            tick,
            unix_time_secs: tick as i64 * 5,
            lat: 12.97,
            lng: 77.59,
            progress: 0.5,
            direction: 1,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, unix_time_secs: tick as i64 * 5, vehicles_updated: 3 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_positions.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_positions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["vehicle_id", "tick", "unix_time_secs", "lat", "lng", "progress", "direction"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "unix_time_secs", "vehicles_updated"]);
    }

    #[test]
    fn csv_position_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![position_row(0, 5), position_row(1, 5), position_row(2, 5)];
        w.write_positions(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_positions.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // vehicle_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][6], "1"); // direction sign
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(4)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "4");  // tick
        assert_eq!(&read_rows[0][1], "20"); // 4 * 5 s
        assert_eq!(&read_rows[0][2], "3");  // vehicles_updated
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(&[]).unwrap(); // should return Ok(())
    }
}

#[cfg(test)]
mod observer_tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use fleet_core::SimConfig;
    use fleet_route::Waypoint;
    use fleet_sim::{SchedulerBuilder, TickDriver};
    use fleet_store::{MemoryRouteStore, MemoryVehicleStore, RouteDefinition};

    use crate::csv::CsvWriter;
    use crate::observer::TickOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn integration_positions_stream_to_csv() {
        let mut routes = MemoryRouteStore::new();
        routes.insert(RouteDefinition {
            name: "loop".to_string(),
            waypoints: vec![
                Waypoint::new("a", 0.0, 0.0, 0),
                Waypoint::new("b", 0.0, 1.0, 1),
            ],
        });
        let mut vehicles = MemoryVehicleStore::new();
        vehicles.add_vehicle(fleet_core::VehicleId(0), "loop");
        vehicles.add_vehicle(fleet_core::VehicleId(1), "loop");

        let config = SimConfig { seed: 7, ..SimConfig::default() };
        let scheduler = SchedulerBuilder::new(config, routes, vehicles).build().unwrap();
        let mut driver = TickDriver::with_period(scheduler, Duration::from_millis(1));

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TickOutputObserver::new(writer);
        driver.run_for(4, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // 4 ticks × 2 vehicles = 8 position rows.
        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_positions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8, "expected 4 ticks × 2 vehicles, got {}", rows.len());

        // Progress column stays inside [0, 1].
        for row in &rows {
            let progress: f64 = row[5].parse().unwrap();
            assert!((0.0..=1.0).contains(&progress));
        }

        // 4 summary rows, one per tick.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 4);
        assert_eq!(&summaries[0][2], "2"); // vehicles_updated
    }

    #[test]
    fn writer_recoverable_after_run() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TickOutputObserver::new(writer);
        assert!(obs.take_error().is_none());
        let _writer = obs.into_writer();
    }
}
