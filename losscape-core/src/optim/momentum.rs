use super::{OptimizerParams, OptimizerState, UpdateRule};
use crate::gradient::Gradient;

/// Gradient descent with a momentum buffer.
///
/// `v' = momentum * v + lr * grad`, then `p' = p - v'`. The buffer starts at
/// zero when absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Momentum;

impl UpdateRule for Momentum {
    fn name(&self) -> &'static str {
        "Momentum"
    }

    fn step(
        &self,
        state: &OptimizerState,
        grad: &Gradient,
        params: &OptimizerParams,
    ) -> OptimizerState {
        let (vx, vy) = state.velocity.unwrap_or((0.0, 0.0));
        let vx = params.momentum * vx + params.learning_rate * grad.grad_x;
        let vy = params.momentum * vy + params.learning_rate * grad.grad_y;

        OptimizerState {
            velocity: Some((vx, vy)),
            ..OptimizerState::at(state.x - vx, state.y - vy)
        }
    }
}

#[cfg(test)]
#[path = "momentum_test.rs"]
mod tests;
