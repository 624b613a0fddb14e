use std::fmt::Debug;

use super::optimizer_params::OptimizerParams;
use super::optimizer_state::OptimizerState;
use crate::gradient::Gradient;

/// Trait defining the common interface for all update rules.
///
/// An update rule is a pure state transition: given the current state, the
/// gradient at its position and the hyperparameters, it returns the next
/// state. Non-finite inputs are not rejected; they produce non-finite outputs
/// which the trajectory driver detects.
pub trait UpdateRule: Debug + Send + Sync {
    /// Short human readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Computes the next state.
    ///
    /// The returned state only carries the algorithm-specific fields this
    /// rule owns; fields belonging to other rules are left `None`.
    fn step(
        &self,
        state: &OptimizerState,
        grad: &Gradient,
        params: &OptimizerParams,
    ) -> OptimizerState;
}
