use super::{OptimizerParams, OptimizerState, UpdateRule};
use crate::gradient::Gradient;

/// RMSProp.
///
/// Keeps a per-axis running average of squared gradients
/// `s' = rho * s + (1 - rho) * grad^2` and scales each step by
/// `1 / (sqrt(s') + epsilon)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RmsProp;

impl UpdateRule for RmsProp {
    fn name(&self) -> &'static str {
        "RMSProp"
    }

    fn step(
        &self,
        state: &OptimizerState,
        grad: &Gradient,
        params: &OptimizerParams,
    ) -> OptimizerState {
        let rho = params.rho;
        let (sx, sy) = state.square_avg.unwrap_or((0.0, 0.0));
        let sx = rho * sx + (1.0 - rho) * grad.grad_x * grad.grad_x;
        let sy = rho * sy + (1.0 - rho) * grad.grad_y * grad.grad_y;

        let x = state.x - params.learning_rate * grad.grad_x / (sx.sqrt() + params.epsilon);
        let y = state.y - params.learning_rate * grad.grad_y / (sy.sqrt() + params.epsilon);

        OptimizerState {
            square_avg: Some((sx, sy)),
            ..OptimizerState::at(x, y)
        }
    }
}

#[cfg(test)]
#[path = "rmsprop_test.rs"]
mod tests;
