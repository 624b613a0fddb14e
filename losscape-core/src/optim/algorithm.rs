use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{Adam, GradientDescent, Momentum, OptimizerParams, OptimizerState, RmsProp, UpdateRule};
use crate::gradient::Gradient;

/// Tag selecting one of the four update rules.
///
/// Serialized as its canonical tag (see [`AlgorithmKind::tag`]). Parsing never
/// fails: unknown tags resolve to plain gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlgorithmKind {
    #[default]
    GradientDescent,
    Momentum,
    RmsProp,
    Adam,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::GradientDescent,
        AlgorithmKind::Momentum,
        AlgorithmKind::RmsProp,
        AlgorithmKind::Adam,
    ];

    /// Canonical tag used in configuration records.
    pub fn tag(&self) -> &'static str {
        match self {
            AlgorithmKind::GradientDescent => "gd",
            AlgorithmKind::Momentum => "momentum",
            AlgorithmKind::RmsProp => "rmsprop",
            AlgorithmKind::Adam => "adam",
        }
    }

    /// Resolves a tag, case-insensitively.
    ///
    /// Unrecognized tags fall back to `GradientDescent`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "gd" | "sgd" | "gradient_descent" | "gradient descent" => {
                AlgorithmKind::GradientDescent
            }
            "momentum" => AlgorithmKind::Momentum,
            "rmsprop" | "rms_prop" => AlgorithmKind::RmsProp,
            "adam" => AlgorithmKind::Adam,
            other => {
                warn!(
                    "Unrecognized algorithm tag '{}', falling back to gradient descent.",
                    other
                );
                AlgorithmKind::GradientDescent
            }
        }
    }

    /// The update rule implementing this algorithm.
    pub fn rule(&self) -> &'static dyn UpdateRule {
        match self {
            AlgorithmKind::GradientDescent => &GradientDescent,
            AlgorithmKind::Momentum => &Momentum,
            AlgorithmKind::RmsProp => &RmsProp,
            AlgorithmKind::Adam => &Adam,
        }
    }

    /// Dispatches one update to the matching rule.
    pub fn step(
        &self,
        state: &OptimizerState,
        grad: &Gradient,
        params: &OptimizerParams,
    ) -> OptimizerState {
        let rule = self.rule();
        debug!(
            "{}: step from ({}, {}) with gradient ({}, {})",
            rule.name(),
            state.x,
            state.y,
            grad.grad_x,
            grad.grad_y
        );
        rule.step(state, grad, params)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule().name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AlgorithmKind::from_tag(s))
    }
}

impl From<String> for AlgorithmKind {
    fn from(tag: String) -> Self {
        AlgorithmKind::from_tag(&tag)
    }
}

impl From<AlgorithmKind> for String {
    fn from(kind: AlgorithmKind) -> Self {
        kind.tag().to_string()
    }
}

#[cfg(test)]
#[path = "algorithm_test.rs"]
mod tests;
