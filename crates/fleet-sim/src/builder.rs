//! Fluent builder for constructing a [`Scheduler`].

use std::collections::HashMap;
use std::sync::Arc;

use fleet_core::SimConfig;
use fleet_route::RouteGeometry;
use fleet_store::{RouteStore, VehicleStore};

use crate::resolve::default_route;
use crate::{Scheduler, SimError, SimResult};

/// Fluent builder for [`Scheduler<RS, VS>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step, period, history capacity, seed
/// - `RS: RouteStore`, `VS: VehicleStore` — the external collaborators
///
/// # Optional inputs
///
/// | Method               | Default                                  |
/// |----------------------|------------------------------------------|
/// | `.fallback_route(g)` | The built-in two-waypoint default route  |
/// | `.preload_route(g)`  | Nothing pre-cached                       |
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = SchedulerBuilder::new(config, route_store, vehicle_store)
///     .preload_route(known_geometry)
///     .build()?;
/// ```
pub struct SchedulerBuilder<RS: RouteStore, VS: VehicleStore> {
    config: SimConfig,
    route_store: RS,
    vehicle_store: VS,
    fallback: Option<RouteGeometry>,
    preloaded: Vec<RouteGeometry>,
}

impl<RS: RouteStore, VS: VehicleStore> SchedulerBuilder<RS, VS> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, route_store: RS, vehicle_store: VS) -> Self {
        Self {
            config,
            route_store,
            vehicle_store,
            fallback: None,
            preloaded: Vec::new(),
        }
    }

    /// Replace the built-in fallback geometry used when a vehicle's route
    /// name has no store entry.
    pub fn fallback_route(mut self, geometry: RouteGeometry) -> Self {
        self.fallback = Some(geometry);
        self
    }

    /// Pre-bind a geometry into the route cache, keyed by its name.  The
    /// store will not be queried for it until it is invalidated.
    pub fn preload_route(mut self, geometry: RouteGeometry) -> Self {
        self.preloaded.push(geometry);
        self
    }

    /// Validate the configuration and return a ready-to-tick [`Scheduler`].
    pub fn build(self) -> SimResult<Scheduler<RS, VS>> {
        let cfg = &self.config;
        if !cfg.progress_step.is_finite() || cfg.progress_step <= 0.0 || cfg.progress_step > 1.0 {
            return Err(SimError::Config(format!(
                "progress_step must be in (0, 1], got {}",
                cfg.progress_step
            )));
        }
        if cfg.tick_period_secs == 0 {
            return Err(SimError::Config("tick_period_secs must be at least 1".into()));
        }
        if cfg.history_capacity == 0 {
            return Err(SimError::Config("history_capacity must be at least 1".into()));
        }

        let fallback = match self.fallback {
            Some(geometry) => geometry,
            None => default_route().map_err(|e| SimError::Config(e.to_string()))?,
        };

        let mut route_cache = HashMap::with_capacity(self.preloaded.len());
        for geometry in self.preloaded {
            route_cache.insert(geometry.name().to_string(), Arc::new(geometry));
        }

        Ok(Scheduler::assemble(
            self.config,
            self.route_store,
            self.vehicle_store,
            route_cache,
            Arc::new(fallback),
        ))
    }
}
