//! The `Scheduler` and its three-phase tick.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use fleet_core::{SimConfig, Timestamp, VehicleId, VehicleRng};
use fleet_motion::{step_vehicle, MotionState, PositionHistory, TrackPoint, VehicleUpdate};
use fleet_route::RouteGeometry;
use fleet_store::{RouteStore, StoreError, VehicleStore};

use crate::resolve::RouteResolution;
use crate::SimResult;

// ── Per-vehicle inputs assembled before the advance phase ─────────────────────

/// Data pre-collected for one vehicle before the (potentially parallel)
/// advance phase.  Building this sequentially keeps the advance phase free
/// of store access and shared mutation.
struct TickItem {
    vehicle: VehicleId,
    /// Geometry version captured at tick start; a concurrent route edit
    /// produces a new `Arc` for the *next* tick, never this one.
    geometry: Arc<RouteGeometry>,
    state: MotionState,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Drives the position simulation across the whole fleet.
///
/// Owns the authoritative in-memory motion state per vehicle (an explicit
/// `VehicleId → MotionState` map) and a cache of bound route geometries.
/// The stores are collaborators: `VehicleStore` supplies the fleet and
/// receives every update; `RouteStore` supplies route definitions on cache
/// misses.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
///
/// # Tick serialization
///
/// `run_tick` takes `&mut self`: two ticks cannot overlap, so no vehicle's
/// state is ever mutated concurrently.  Pacing (and the decision to drop
/// missed ticks) belongs to the driver.
pub struct Scheduler<RS: RouteStore, VS: VehicleStore> {
    pub config: SimConfig,

    route_store: RS,
    vehicle_store: VS,

    /// Authoritative motion state, keyed by vehicle.  Entries are created on
    /// first observation and never removed — vehicle deletion is an external
    /// administrative action.
    states: HashMap<VehicleId, MotionState>,

    /// Bounded position trails, same keying and lifetime as `states`.
    histories: HashMap<VehicleId, PositionHistory>,

    /// Bound geometries keyed by route name.  Fallback resolutions are never
    /// cached, so a missing route is re-queried each tick.
    route_cache: HashMap<String, Arc<RouteGeometry>>,

    /// Shared geometry for vehicles whose route name resolves to nothing.
    fallback_route: Arc<RouteGeometry>,
}

impl<RS: RouteStore, VS: VehicleStore> Scheduler<RS, VS> {
    pub(crate) fn assemble(
        config: SimConfig,
        route_store: RS,
        vehicle_store: VS,
        route_cache: HashMap<String, Arc<RouteGeometry>>,
        fallback_route: Arc<RouteGeometry>,
    ) -> Self {
        Self {
            config,
            route_store,
            vehicle_store,
            states: HashMap::new(),
            histories: HashMap::new(),
            route_cache,
            fallback_route,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance every known vehicle by one step and hand the results to the
    /// persistence store.
    ///
    /// Returns the per-vehicle updates for the caller to display or forward.
    /// Per-vehicle failures (route lookup error, unroutable route, failed
    /// save) are logged and isolated; the only error returned is a failed
    /// vehicle listing, in which case no vehicle moved this tick.
    pub fn run_tick(&mut self, now: Timestamp) -> SimResult<Vec<VehicleUpdate>> {
        // ── Phase 1: list vehicles and resolve routes (sequential) ────────
        let mut records = self.vehicle_store.list_vehicles()?;
        records.sort_by_key(|r| r.vehicle);

        let mut items: Vec<TickItem> = Vec::with_capacity(records.len());
        for record in records {
            let geometry = match self.resolve_route(&record.route_name) {
                Ok(RouteResolution::Bound(g)) => g,
                Ok(RouteResolution::Fallback(g)) => {
                    warn!(
                        vehicle = %record.vehicle,
                        route = %record.route_name,
                        "route not found; vehicle running on fallback route"
                    );
                    g
                }
                Ok(RouteResolution::Unroutable) => {
                    warn!(
                        vehicle = %record.vehicle,
                        route = %record.route_name,
                        "route has fewer than 2 waypoints; skipping vehicle this tick"
                    );
                    continue;
                }
                Err(e) => {
                    warn!(
                        vehicle = %record.vehicle,
                        route = %record.route_name,
                        error = %e,
                        "route lookup failed; skipping vehicle this tick"
                    );
                    continue;
                }
            };

            // In-memory state is authoritative once a vehicle is known; the
            // persisted snapshot only seeds the first observation.
            let state = match self.states.get(&record.vehicle) {
                Some(state) => state.clone(),
                None => match record.motion {
                    Some(persisted) => persisted,
                    None => {
                        let mut rng = VehicleRng::new(self.config.seed, record.vehicle);
                        MotionState::seeded(&mut rng, &geometry, now)
                    }
                },
            };

            if !self.histories.contains_key(&record.vehicle) {
                // Rebuild persisted trails against the configured capacity in
                // case it changed between runs.
                let history = match record.history {
                    Some(h) => PositionHistory::from_entries(
                        h.iter().copied().collect(),
                        self.config.history_capacity,
                    ),
                    None => PositionHistory::with_capacity(self.config.history_capacity),
                };
                self.histories.insert(record.vehicle, history);
            }

            items.push(TickItem {
                vehicle: record.vehicle,
                geometry,
                state,
            });
        }

        // ── Phase 2: advance motion (pure; parallel when enabled) ─────────
        let step = self.config.progress_step;

        #[cfg(not(feature = "parallel"))]
        let advanced: Vec<MotionState> = items
            .iter()
            .map(|item| step_vehicle(&item.state, &item.geometry, step, now))
            .collect();

        #[cfg(feature = "parallel")]
        let advanced: Vec<MotionState> = {
            use rayon::prelude::*;
            items
                .par_iter()
                .map(|item| step_vehicle(&item.state, &item.geometry, step, now))
                .collect()
        };

        // ── Phase 3: persist (sequential, ascending VehicleId) ────────────
        let capacity = self.config.history_capacity;
        let mut updates: Vec<VehicleUpdate> = Vec::with_capacity(items.len());
        for (item, state) in items.into_iter().zip(advanced) {
            let history = self
                .histories
                .entry(item.vehicle)
                .or_insert_with(|| PositionHistory::with_capacity(capacity));
            history.push(TrackPoint {
                point: state.position,
                timestamp: now,
            });

            let update = VehicleUpdate {
                vehicle: item.vehicle,
                state: state.clone(),
                history: history.clone(),
            };
            self.states.insert(item.vehicle, state);

            // Persistence is best-effort per vehicle: the in-memory state
            // above is already committed, so motion continues and the next
            // tick's save retries the store path.
            if let Err(e) = self.vehicle_store.save_update(&update) {
                warn!(vehicle = %update.vehicle, error = %e, "failed to persist vehicle update");
            }
            updates.push(update);
        }

        Ok(updates)
    }

    /// Drop a cached geometry so the next tick re-reads the route from the
    /// store.  Call after an external route edit.
    pub fn invalidate_route(&mut self, name: &str) {
        self.route_cache.remove(name);
    }

    /// The current motion state for `vehicle`, if it has ever been ticked.
    pub fn motion_state(&self, vehicle: VehicleId) -> Option<&MotionState> {
        self.states.get(&vehicle)
    }

    /// The current trail for `vehicle`, if it has ever been ticked.
    pub fn history(&self, vehicle: VehicleId) -> Option<&PositionHistory> {
        self.histories.get(&vehicle)
    }

    /// Number of route geometries currently bound in the cache.
    pub fn cached_route_count(&self) -> usize {
        self.route_cache.len()
    }

    /// The persistence collaborator.
    pub fn vehicle_store(&self) -> &VS {
        &self.vehicle_store
    }

    /// Mutable access to the persistence collaborator, e.g. to register
    /// vehicles after construction.
    pub fn vehicle_store_mut(&mut self) -> &mut VS {
        &mut self.vehicle_store
    }

    /// Mutable access to the route collaborator, e.g. to publish an edited
    /// route (pair with [`invalidate_route`][Self::invalidate_route]).
    pub fn route_store_mut(&mut self) -> &mut RS {
        &mut self.route_store
    }

    // ── Route resolution ──────────────────────────────────────────────────

    /// Resolve `name` to a geometry: cache hit → `Bound`; store hit →
    /// validate, cache, `Bound`; store miss → `Fallback`; invalid waypoints
    /// → `Unroutable`.  A store failure propagates for the caller to log.
    fn resolve_route(&mut self, name: &str) -> Result<RouteResolution, StoreError> {
        if let Some(geometry) = self.route_cache.get(name) {
            return Ok(RouteResolution::Bound(Arc::clone(geometry)));
        }

        match self.route_store.route_by_name(name)? {
            Some(definition) => {
                match RouteGeometry::new(definition.name, definition.waypoints) {
                    Ok(geometry) => {
                        let geometry = Arc::new(geometry);
                        self.route_cache
                            .insert(name.to_string(), Arc::clone(&geometry));
                        Ok(RouteResolution::Bound(geometry))
                    }
                    Err(_) => Ok(RouteResolution::Unroutable),
                }
            }
            None => Ok(RouteResolution::Fallback(Arc::clone(&self.fallback_route))),
        }
    }
}
