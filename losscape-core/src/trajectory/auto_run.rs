use std::time::{Duration, Instant};

use log::debug;

use super::driver::{StepOutcome, TrajectoryDriver};
use crate::surface::LossSurface;

/// Default delay between two automatic steps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Steps a `TrajectoryDriver` at a fixed wall-clock interval.
///
/// The runner never sleeps or spawns: the caller feeds it the current time
/// through [`AutoRunner::tick`], typically from its frame or event loop. Each
/// tick performs at most one step, even if several intervals have elapsed
/// since the previous one.
#[derive(Debug, Clone)]
pub struct AutoRunner {
    interval: Duration,
    running: bool,
    last_tick: Option<Instant>,
    run_id: u64,
}

impl Default for AutoRunner {
    fn default() -> Self {
        AutoRunner::new(DEFAULT_INTERVAL)
    }
}

impl AutoRunner {
    pub fn new(interval: Duration) -> Self {
        AutoRunner {
            interval,
            running: false,
            last_tick: None,
            run_id: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts (or resumes) automatic stepping of the driver's current run.
    ///
    /// The next tick is due immediately. Once the driver is reset or
    /// re-initialized, the runner stops instead of stepping the new run.
    pub fn start(&mut self, driver: &TrajectoryDriver) {
        self.running = true;
        self.last_tick = None;
        self.run_id = driver.run_id();
    }

    /// Pauses automatic stepping and marks the driver as stopped.
    pub fn pause(&mut self, driver: &mut TrajectoryDriver) {
        self.running = false;
        driver.stop();
    }

    /// Returns `true` if a tick at `now` would perform a step.
    pub fn is_due(&self, now: Instant) -> bool {
        self.running
            && self
                .last_tick
                .map_or(true, |last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Performs one step if the runner is running and the interval has elapsed.
    ///
    /// Returns the step outcome, or `None` if no step was due. The runner
    /// stops itself once the driver no longer appends steps, or when the run
    /// it was started on has been reset.
    pub fn tick<S>(
        &mut self,
        now: Instant,
        driver: &mut TrajectoryDriver,
        surface: &S,
    ) -> Option<StepOutcome>
    where
        S: LossSurface + ?Sized,
    {
        if self.running && driver.run_id() != self.run_id {
            debug!("AutoRunner: driver was reset, stopping");
            self.running = false;
        }
        if !self.is_due(now) {
            return None;
        }
        self.last_tick = Some(now);

        let outcome = driver.step(surface);
        if !matches!(outcome, StepOutcome::Appended(_)) {
            debug!("AutoRunner: stopping after {:?}", outcome);
            self.running = false;
        }
        Some(outcome)
    }
}

#[cfg(test)]
#[path = "auto_run_test.rs"]
mod tests;
