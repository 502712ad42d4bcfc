//! CSV fleet seeding.
//!
//! # CSV formats
//!
//! Routes — one row per waypoint; rows for the same route are grouped by
//! name, ordering comes from the `order` column (rows may arrive shuffled):
//!
//! ```csv
//! route_name,waypoint_name,lat,lng,order
//! airport-express,Majestic,12.9766,77.5713,0
//! airport-express,Hebbal,13.0358,77.5970,1
//! airport-express,Airport,13.1986,77.7066,2
//! ```
//!
//! Vehicles — one row per vehicle:
//!
//! ```csv
//! vehicle_id,route_name
//! 0,airport-express
//! 1,airport-express
//! 2,ring-road
//! ```
//!
//! A vehicle may reference a route name with no routes-CSV row; it then runs
//! on the scheduler's fallback route until the route appears in the store.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fleet_core::VehicleId;
use fleet_route::Waypoint;

use crate::traits::{RouteDefinition, VehicleRecord};
use crate::{StoreError, StoreResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRow {
    route_name: String,
    waypoint_name: String,
    lat: f64,
    lng: f64,
    order: u32,
}

#[derive(Deserialize)]
struct VehicleRow {
    vehicle_id: u32,
    route_name: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load route definitions from a CSV file.
pub fn load_routes_csv(path: &Path) -> StoreResult<Vec<RouteDefinition>> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.  Waypoint ordering within a route is left to the `order` column;
/// definitions are returned sorted by route name for reproducibility.
pub fn load_routes_reader<R: Read>(reader: R) -> StoreResult<Vec<RouteDefinition>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: HashMap<String, Vec<Waypoint>> = HashMap::new();

    for result in csv_reader.deserialize::<RouteRow>() {
        let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
        by_route
            .entry(row.route_name)
            .or_default()
            .push(Waypoint::new(row.waypoint_name, row.lat, row.lng, row.order));
    }

    let mut definitions: Vec<RouteDefinition> = by_route
        .into_iter()
        .map(|(name, waypoints)| RouteDefinition { name, waypoints })
        .collect();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(definitions)
}

/// Load vehicle records (no persisted motion) from a CSV file.
pub fn load_vehicles_csv(path: &Path) -> StoreResult<Vec<VehicleRecord>> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_vehicles_reader(file)
}

/// Like [`load_vehicles_csv`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> StoreResult<Vec<VehicleRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize::<VehicleRow>() {
        let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
        records.push(VehicleRecord {
            vehicle: VehicleId(row.vehicle_id),
            route_name: row.route_name,
            motion: None,
            history: None,
        });
    }

    records.sort_by_key(|r| r.vehicle);
    Ok(records)
}
