use super::{OptimizerParams, OptimizerState, UpdateRule};
use crate::gradient::Gradient;

/// Plain gradient descent: `p' = p - lr * grad`.
///
/// Stateless beyond the position.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientDescent;

impl UpdateRule for GradientDescent {
    fn name(&self) -> &'static str {
        "Gradient Descent"
    }

    fn step(
        &self,
        state: &OptimizerState,
        grad: &Gradient,
        params: &OptimizerParams,
    ) -> OptimizerState {
        let lr = params.learning_rate;
        OptimizerState::at(state.x - lr * grad.grad_x, state.y - lr * grad.grad_y)
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
