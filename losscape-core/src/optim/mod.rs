// losscape-core/src/optim/mod.rs

//! Optimizer update rules for a single 2D point.
//!
//! This module provides the `UpdateRule` trait, the `OptimizerState` and
//! `OptimizerParams` structures it operates on, and the four update rules
//! (plain gradient descent, momentum, RMSProp and Adam) selected through
//! `AlgorithmKind`.

pub mod algorithm;
pub mod optimizer_params;
pub mod optimizer_state;
pub mod optimizer_trait;

pub mod adam;
pub mod momentum;
pub mod rmsprop;
pub mod sgd;

// Re-export key items for easier access
pub use algorithm::AlgorithmKind;
pub use optimizer_params::OptimizerParams;
pub use optimizer_state::OptimizerState;
pub use optimizer_trait::UpdateRule;

pub use adam::Adam;
pub use momentum::Momentum;
pub use rmsprop::RmsProp;
pub use sgd::GradientDescent;
