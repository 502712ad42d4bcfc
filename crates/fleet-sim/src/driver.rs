//! Wall-clock tick driver.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::warn;

use fleet_core::{Tick, Timestamp};
use fleet_store::{RouteStore, VehicleStore};

use crate::{Scheduler, TickObserver};

/// Runs a [`Scheduler`] on a fixed wall-clock period.
///
/// # Pacing model
///
/// Deadline-based: each tick's deadline is the previous deadline plus the
/// period, so steady-state ticks do not drift with per-tick work time.  When
/// a tick overruns its period, the missed deadlines are **dropped** (with a
/// warning) rather than fired back-to-back — the fleet then simply moves one
/// step over a longer real interval, which degrades smoothness but never
/// interleaves two ticks.
///
/// Overlap cannot occur structurally: `step` borrows the scheduler mutably
/// and the loop never starts a tick before the previous call returns.
pub struct TickDriver<RS: RouteStore, VS: VehicleStore> {
    scheduler: Scheduler<RS, VS>,
    period: Duration,
    tick: Tick,
}

impl<RS: RouteStore, VS: VehicleStore> TickDriver<RS, VS> {
    /// Drive `scheduler` at the period from its own configuration.
    pub fn new(scheduler: Scheduler<RS, VS>) -> Self {
        let period = scheduler.config.tick_period();
        Self::with_period(scheduler, period)
    }

    /// Drive `scheduler` at an explicit period (sub-second periods are
    /// useful in tests and demos).
    pub fn with_period(scheduler: Scheduler<RS, VS>, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            tick: Tick::ZERO,
        }
    }

    /// The tick the next `step` call will run.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn scheduler(&self) -> &Scheduler<RS, VS> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler<RS, VS> {
        &mut self.scheduler
    }

    pub fn into_scheduler(self) -> Scheduler<RS, VS> {
        self.scheduler
    }

    /// Run exactly one tick now, without pacing.
    pub fn step<O: TickObserver>(&mut self, observer: &mut O) {
        let now = wall_now();
        observer.on_tick_start(self.tick, now);
        match self.scheduler.run_tick(now) {
            Ok(updates) => observer.on_tick_end(self.tick, now, &updates),
            Err(e) => {
                warn!(tick = %self.tick, error = %e, "tick failed; retrying next period");
                observer.on_tick_end(self.tick, now, &[]);
            }
        }
        self.tick = self.tick + 1;
    }

    /// Run `ticks` paced ticks, then call the observer's stop hook.
    ///
    /// The first tick fires immediately; each subsequent tick waits for its
    /// deadline.
    pub fn run_for<O: TickObserver>(&mut self, ticks: u64, observer: &mut O) {
        let mut deadline = Instant::now();
        for remaining in (0..ticks).rev() {
            self.step(observer);
            if remaining == 0 {
                break;
            }

            deadline += self.period;
            let now = Instant::now();
            if now < deadline {
                std::thread::sleep(deadline - now);
            } else {
                // Slow tick: drop the deadlines we sailed past.
                let mut dropped = 0u32;
                while deadline <= now {
                    deadline += self.period;
                    dropped += 1;
                }
                warn!(
                    tick = %self.tick,
                    dropped,
                    "tick overran its period; dropping missed deadlines"
                );
                let now = Instant::now();
                if now < deadline {
                    std::thread::sleep(deadline - now);
                }
            }
        }
        observer.on_stop(self.tick);
    }
}

/// Current wall-clock time in Unix seconds.
fn wall_now() -> Timestamp {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();
    Timestamp(secs)
}
