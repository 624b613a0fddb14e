use super::{OptimizerParams, OptimizerState, UpdateRule};
use crate::gradient::Gradient;

/// Adam.
///
/// Maintains a first moment estimate (stored in `velocity`), a second moment
/// estimate (stored in `square_avg`) and the update counter `t`. Both moment
/// estimates are bias-corrected with the same incremented `t` on both axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adam;

impl UpdateRule for Adam {
    fn name(&self) -> &'static str {
        "Adam"
    }

    fn step(
        &self,
        state: &OptimizerState,
        grad: &Gradient,
        params: &OptimizerParams,
    ) -> OptimizerState {
        let (beta1, beta2) = (params.beta1, params.beta2);
        let t = state.timestep() + 1;

        let (mx, my) = state.velocity.unwrap_or((0.0, 0.0));
        let mx = beta1 * mx + (1.0 - beta1) * grad.grad_x;
        let my = beta1 * my + (1.0 - beta1) * grad.grad_y;

        let (vx, vy) = state.square_avg.unwrap_or((0.0, 0.0));
        let vx = beta2 * vx + (1.0 - beta2) * grad.grad_x * grad.grad_x;
        let vy = beta2 * vy + (1.0 - beta2) * grad.grad_y * grad.grad_y;

        let bias_correction1 = 1.0 - beta1.powf(t as f64);
        let bias_correction2 = 1.0 - beta2.powf(t as f64);
        let (mx_hat, my_hat) = (mx / bias_correction1, my / bias_correction1);
        let (vx_hat, vy_hat) = (vx / bias_correction2, vy / bias_correction2);

        let x = state.x - params.learning_rate * mx_hat / (vx_hat.sqrt() + params.epsilon);
        let y = state.y - params.learning_rate * my_hat / (vy_hat.sqrt() + params.epsilon);

        OptimizerState {
            x,
            y,
            velocity: Some((mx, my)),
            square_avg: Some((vx, vy)),
            t: Some(t),
        }
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
