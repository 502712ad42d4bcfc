//! Simulation time model.
//!
//! Two integer clocks, no floating point:
//!
//! - [`Timestamp`] — Unix wall-clock seconds.  Every position update and
//!   history entry carries one; `Scheduler::run_tick(now)` receives one from
//!   the driver.
//! - [`Tick`] — a monotonically increasing tick counter used by the driver
//!   loop and observers.  The wall-clock period of one tick lives in
//!   `SimConfig`, not here.

use std::fmt;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Unix timestamp in whole seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The timestamp `secs` seconds after `self`.
    #[inline]
    pub fn offset_secs(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is
    /// in the future).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

/// An absolute tick counter.
///
/// Stored as `u64`: at the default 5-second period a u64 outlasts any
/// conceivable deployment.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
