use log::{debug, info, warn};

use super::step::Trajectory;
use super::{CONVERGENCE_THRESHOLD, DIVERGENCE_BOUND};
use crate::config::RunConfig;
use crate::error::LosscapeError;
use crate::gradient::numerical_gradient;
use crate::optim::{AlgorithmKind, OptimizerParams, OptimizerState};
use crate::surface::LossSurface;

/// Observable state of a `TrajectoryDriver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// No trajectory and no live optimizer state.
    #[default]
    Idle,
    /// Step 0 recorded, no update applied yet.
    Initialized,
    /// At least one update committed.
    Stepping,
    /// Automatic stepping paused; a manual step resumes.
    Stopped,
    /// Gradient norm fell below the threshold or became non-finite.
    Converged,
    /// The next position left the bounded region or became non-finite.
    Diverged,
}

impl DriverState {
    /// Returns `true` for `Converged` and `Diverged`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DriverState::Converged | DriverState::Diverged)
    }

    /// Returns `true` if `step` may append to the trajectory.
    pub fn can_step(&self) -> bool {
        matches!(
            self,
            DriverState::Initialized | DriverState::Stepping | DriverState::Stopped
        )
    }
}

/// Result of a single call to [`TrajectoryDriver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new step was appended at this index.
    Appended(usize),
    Converged,
    Diverged,
    /// The driver was idle or already terminal; nothing happened.
    Ignored,
}

/// What `set_algorithm` does with the recorded trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrajectoryPolicy {
    /// Reset the driver completely.
    #[default]
    Clear,
    /// Keep the recorded steps and continue from the last committed position.
    Retain,
}

/// Drives one optimizer over a loss surface and records its trajectory.
///
/// The driver owns exactly one live `OptimizerState` at a time and replaces it
/// wholesale on every committed step. Numerical trouble is never reported as
/// an error: it moves the driver into `Converged` or `Diverged`.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryDriver {
    algorithm: AlgorithmKind,
    params: OptimizerParams,
    state: DriverState,
    live: Option<OptimizerState>,
    trajectory: Trajectory,
    // Bumped by `initialize` and `reset`; an `AutoRunner` only drives the run it was started on.
    run_id: u64,
}

impl TrajectoryDriver {
    /// Creates an idle driver.
    ///
    /// # Errors
    ///
    /// Returns `LosscapeError::ConfigurationError` if `params` is invalid.
    pub fn new(algorithm: AlgorithmKind, params: OptimizerParams) -> Result<Self, LosscapeError> {
        params.validate()?;
        Ok(TrajectoryDriver {
            algorithm,
            params,
            state: DriverState::Idle,
            live: None,
            trajectory: Trajectory::new(),
            run_id: 0,
        })
    }

    /// Creates an idle driver with the algorithm and hyperparameters of `config`.
    pub fn from_config(config: &RunConfig) -> Result<Self, LosscapeError> {
        config.validate()?;
        Self::new(config.algorithm_type, config.algorithm_params)
    }

    /// Creates a driver from `config` and initializes it at the configured
    /// start point, reproducing the Step 0 of the exported run.
    pub fn rehydrate<S>(config: &RunConfig, surface: &S) -> Result<Self, LosscapeError>
    where
        S: LossSurface + ?Sized,
    {
        let mut driver = Self::from_config(config)?;
        driver.initialize(surface, config.start_x, config.start_y);
        Ok(driver)
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn live_state(&self) -> Option<&OptimizerState> {
        self.live.as_ref()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Identifier of the current run. Changes on every `initialize` and `reset`.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Starts a new trajectory at `(start_x, start_y)`.
    ///
    /// Any previous trajectory and live state are discarded. Step 0 records
    /// the loss and gradient at the start point.
    pub fn initialize<S>(&mut self, surface: &S, start_x: f64, start_y: f64) -> &Trajectory
    where
        S: LossSurface + ?Sized,
    {
        self.trajectory.clear();
        let raw_loss = surface.evaluate(start_x, start_y);
        let grad = numerical_gradient(surface, start_x, start_y);
        self.trajectory.push(start_x, start_y, raw_loss, &grad);
        self.live = Some(OptimizerState::at(start_x, start_y));
        self.state = DriverState::Initialized;
        self.run_id = self.run_id.wrapping_add(1);
        info!(
            "{}: initialized at ({}, {}), loss {}, gradient norm {}",
            self.algorithm,
            start_x,
            start_y,
            raw_loss,
            grad.norm()
        );
        &self.trajectory
    }

    /// Performs one optimizer step.
    ///
    /// Appends at most one step. A gradient norm below the convergence
    /// threshold (or non-finite) moves the driver to `Converged`; a candidate
    /// position outside the divergence bound (or non-finite) moves it to
    /// `Diverged`. In both cases nothing is appended and the live state is kept.
    pub fn step<S>(&mut self, surface: &S) -> StepOutcome
    where
        S: LossSurface + ?Sized,
    {
        let live = match self.live {
            Some(live) if self.state.can_step() => live,
            _ => {
                warn!("step() called while driver is {:?}. Ignoring.", self.state);
                return StepOutcome::Ignored;
            }
        };

        let grad = numerical_gradient(surface, live.x, live.y);
        let grad_norm = grad.norm();
        if !grad_norm.is_finite() || grad_norm < CONVERGENCE_THRESHOLD {
            self.state = DriverState::Converged;
            info!(
                "{}: converged after {} steps at ({}, {}), gradient norm {}",
                self.algorithm,
                self.trajectory.len().saturating_sub(1),
                live.x,
                live.y,
                grad_norm
            );
            return StepOutcome::Converged;
        }

        let candidate = self.algorithm.step(&live, &grad, &self.params);
        if !candidate.is_finite()
            || candidate.x.abs() > DIVERGENCE_BOUND
            || candidate.y.abs() > DIVERGENCE_BOUND
        {
            self.state = DriverState::Diverged;
            info!(
                "{}: diverged after {} steps, rejected candidate ({}, {})",
                self.algorithm,
                self.trajectory.len().saturating_sub(1),
                candidate.x,
                candidate.y
            );
            return StepOutcome::Diverged;
        }

        self.live = Some(candidate);
        let raw_loss = surface.evaluate(candidate.x, candidate.y);
        let next_grad = numerical_gradient(surface, candidate.x, candidate.y);
        let index = self
            .trajectory
            .push(candidate.x, candidate.y, raw_loss, &next_grad);
        self.state = DriverState::Stepping;
        debug!(
            "{}: step {} -> ({}, {}), loss {}, gradient norm {}",
            self.algorithm,
            index,
            candidate.x,
            candidate.y,
            raw_loss,
            next_grad.norm()
        );
        StepOutcome::Appended(index)
    }

    /// Steps until the driver stops appending or `max_steps` steps were taken.
    ///
    /// Returns the last outcome, `Ignored` if no step could be attempted.
    pub fn run<S>(&mut self, surface: &S, max_steps: usize) -> StepOutcome
    where
        S: LossSurface + ?Sized,
    {
        let mut outcome = StepOutcome::Ignored;
        for _ in 0..max_steps {
            outcome = self.step(surface);
            if !matches!(outcome, StepOutcome::Appended(_)) {
                break;
            }
        }
        outcome
    }

    /// Pauses automatic stepping. Has no effect unless the driver can step.
    pub fn stop(&mut self) {
        if self.state.can_step() {
            self.state = DriverState::Stopped;
        }
    }

    /// Clears the trajectory and the live state and returns to `Idle`.
    ///
    /// Any `AutoRunner` started on the previous run stops at its next tick.
    pub fn reset(&mut self) {
        if self.state != DriverState::Idle {
            info!("{}: reset", self.algorithm);
        }
        self.trajectory.clear();
        self.live = None;
        self.state = DriverState::Idle;
        self.run_id = self.run_id.wrapping_add(1);
    }

    /// Switches the update rule.
    ///
    /// The live state always loses its algorithm-specific fields. With
    /// `TrajectoryPolicy::Clear` the driver is reset; with
    /// `TrajectoryPolicy::Retain` the recorded steps are kept and the driver
    /// continues from its last committed position. Dropping the old
    /// algorithm's state is itself a reset of the live optimizer, so a
    /// `Converged` or `Diverged` driver is re-armed to `Initialized`.
    ///
    /// # Errors
    ///
    /// Returns `LosscapeError::ConfigurationError` if `params` is invalid, in
    /// which case the driver is left untouched.
    pub fn set_algorithm(
        &mut self,
        algorithm: AlgorithmKind,
        params: OptimizerParams,
        policy: TrajectoryPolicy,
    ) -> Result<(), LosscapeError> {
        params.validate()?;
        debug!("Switching algorithm {} -> {} ({:?})", self.algorithm, algorithm, policy);
        self.algorithm = algorithm;
        self.params = params;

        match policy {
            TrajectoryPolicy::Clear => self.reset(),
            TrajectoryPolicy::Retain => {
                self.live = self.live.map(|live| OptimizerState::at(live.x, live.y));
                self.state = if self.live.is_some() {
                    DriverState::Initialized
                } else {
                    DriverState::Idle
                };
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
