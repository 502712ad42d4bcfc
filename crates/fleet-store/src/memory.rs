//! In-memory store implementations for tests and embedded setups.

use std::collections::{BTreeMap, HashMap};

use fleet_core::VehicleId;
use fleet_motion::VehicleUpdate;

use crate::traits::{RouteDefinition, RouteStore, VehicleRecord, VehicleStore};
use crate::StoreResult;

// ── MemoryRouteStore ──────────────────────────────────────────────────────────

/// Route definitions held in a `HashMap` keyed by route name.
#[derive(Default)]
pub struct MemoryRouteStore {
    routes: HashMap<String, RouteDefinition>,
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a route definition.
    pub fn insert(&mut self, definition: RouteDefinition) {
        self.routes.insert(definition.name.clone(), definition);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteStore for MemoryRouteStore {
    fn route_by_name(&self, name: &str) -> StoreResult<Option<RouteDefinition>> {
        Ok(self.routes.get(name).cloned())
    }
}

// ── MemoryVehicleStore ────────────────────────────────────────────────────────

/// Vehicle records held in a `BTreeMap` so `list_vehicles` returns them in
/// ascending `VehicleId` order, which keeps runs reproducible.
#[derive(Default)]
pub struct MemoryVehicleStore {
    vehicles: BTreeMap<VehicleId, VehicleRecord>,
}

impl MemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle with no persisted state yet.
    pub fn add_vehicle(&mut self, vehicle: VehicleId, route_name: impl Into<String>) {
        self.vehicles.insert(
            vehicle,
            VehicleRecord {
                vehicle,
                route_name: route_name.into(),
                motion: None,
                history: None,
            },
        );
    }

    /// Register a vehicle with a persisted snapshot (restart seeding).
    pub fn add_record(&mut self, record: VehicleRecord) {
        self.vehicles.insert(record.vehicle, record);
    }

    /// The persisted record for `vehicle`, if any.
    pub fn record(&self, vehicle: VehicleId) -> Option<&VehicleRecord> {
        self.vehicles.get(&vehicle)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl VehicleStore for MemoryVehicleStore {
    fn list_vehicles(&self) -> StoreResult<Vec<VehicleRecord>> {
        Ok(self.vehicles.values().cloned().collect())
    }

    fn save_update(&mut self, update: &VehicleUpdate) -> StoreResult<()> {
        if let Some(record) = self.vehicles.get_mut(&update.vehicle) {
            record.motion = Some(update.state.clone());
            record.history = Some(update.history.clone());
        }
        Ok(())
    }
}
