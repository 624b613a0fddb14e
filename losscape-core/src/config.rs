// losscape-core/src/config.rs

//! Serializable records exchanged with the surrounding tooling.
//!
//! `RunConfig` is the save/restore record of a run and `StepRecord` the
//! tabular export row of a single step. Both only convert to and from
//! strings; reading or writing files is left to the caller.

use serde::{Deserialize, Serialize};

use crate::error::LosscapeError;
use crate::optim::{AlgorithmKind, OptimizerParams};
use crate::trajectory::{Step, TrajectoryDriver};

/// Everything needed to restart an equivalent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub preset_name: String,
    pub expression_text: String,
    #[serde(default)]
    pub algorithm_type: AlgorithmKind,
    #[serde(default)]
    pub algorithm_params: OptimizerParams,
    pub start_x: f64,
    pub start_y: f64,
}

impl RunConfig {
    /// Exports the configuration of the driver's current run.
    ///
    /// The start point is the position of Step 0. Returns `None` if the
    /// driver has no trajectory.
    pub fn capture(
        driver: &TrajectoryDriver,
        preset_name: impl Into<String>,
        expression_text: impl Into<String>,
    ) -> Option<Self> {
        let start = driver.trajectory().first()?;
        Some(RunConfig {
            preset_name: preset_name.into(),
            expression_text: expression_text.into(),
            algorithm_type: driver.algorithm(),
            algorithm_params: *driver.params(),
            start_x: start.x,
            start_y: start.y,
        })
    }

    /// Checks the hyperparameters and the start point.
    pub fn validate(&self) -> Result<(), LosscapeError> {
        self.algorithm_params.validate()?;
        if !(self.start_x.is_finite() && self.start_y.is_finite()) {
            return Err(LosscapeError::ConfigurationError(format!(
                "Start point must be finite, got ({}, {})",
                self.start_x, self.start_y
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, LosscapeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a configuration record.
    pub fn from_json(json: &str) -> Result<Self, LosscapeError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Tabular export row `(step, x, y, loss, gradX, gradY, gradNorm)`.
///
/// `loss` is the recorded display value of the step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub step: usize,
    pub x: f64,
    pub y: f64,
    pub loss: f64,
    pub grad_x: f64,
    pub grad_y: f64,
    pub grad_norm: f64,
}

impl StepRecord {
    pub const CSV_HEADER: &'static str = "step,x,y,loss,gradX,gradY,gradNorm";

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.step, self.x, self.y, self.loss, self.grad_x, self.grad_y, self.grad_norm
        )
    }
}

impl From<&Step> for StepRecord {
    fn from(step: &Step) -> Self {
        StepRecord {
            step: step.step,
            x: step.x,
            y: step.y,
            loss: step.z,
            grad_x: step.grad_x,
            grad_y: step.grad_y,
            grad_norm: step.grad_norm,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
