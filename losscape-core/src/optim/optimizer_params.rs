use serde::{Deserialize, Serialize};

use crate::error::LosscapeError;

/// Hyperparameters shared by all update rules.
///
/// Each rule reads only the fields it needs: `learning_rate` is used by all of
/// them, `momentum` by Momentum, `rho` by RMSProp, `beta1`/`beta2` by Adam, and
/// `epsilon` by RMSProp and Adam. Missing fields in a serialized record take
/// the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerParams {
    pub learning_rate: f64,
    pub momentum: f64,
    pub rho: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        OptimizerParams {
            learning_rate: 0.1,
            momentum: 0.9,
            rho: 0.9,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
        }
    }
}

impl OptimizerParams {
    /// Default hyperparameters with the given learning rate.
    pub fn with_learning_rate(learning_rate: f64) -> Self {
        OptimizerParams {
            learning_rate,
            ..Self::default()
        }
    }

    /// Checks that every hyperparameter is in its valid range.
    ///
    /// # Errors
    ///
    /// Returns `LosscapeError::ConfigurationError` if the learning rate or
    /// epsilon is not a positive finite number, or if `momentum`, `rho`,
    /// `beta1` or `beta2` lies outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), LosscapeError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(LosscapeError::ConfigurationError(format!(
                "Learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LosscapeError::ConfigurationError(format!(
                "Epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        for (name, value) in [
            ("momentum", self.momentum),
            ("rho", self.rho),
            ("beta1", self.beta1),
            ("beta2", self.beta2),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(LosscapeError::ConfigurationError(format!(
                    "{} must be in [0, 1), got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "optimizer_params_test.rs"]
mod tests;
