//! Top-level simulation configuration.

use std::time::Duration;

/// Tuning knobs for the position simulation.
///
/// The step and period defaults are inherited from the system this simulator
/// models, where they are fixed constants.  They are not derived from vehicle
/// speed or route length — a vehicle covers `progress_step` of its route's
/// total length per tick regardless of how long the route is.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Progress advanced per tick, in route-length fractions.  Default: 0.005
    /// (a full one-way traversal every 200 ticks).
    pub progress_step: f64,

    /// Wall-clock seconds between ticks.  Default: 5.
    pub tick_period_secs: u32,

    /// Maximum retained trail entries per vehicle.  Default: 20.
    pub history_capacity: usize,

    /// Master RNG seed.  The same seed always produces the same initial
    /// placement for a freshly observed fleet.
    pub seed: u64,
}

impl SimConfig {
    /// The tick period as a `Duration` for the driver loop.
    #[inline]
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(self.tick_period_secs as u64)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            progress_step:    0.005,
            tick_period_secs: 5,
            history_capacity: 20,
            seed:             0,
        }
    }
}
