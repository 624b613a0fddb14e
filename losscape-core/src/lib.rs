// Declare the main modules of the crate
pub mod config;
pub mod error;
pub mod gradient;
pub mod optim;
pub mod surface;
pub mod trajectory;

// Re-export the types most callers need so they are reachable as `losscape_core::X`
pub use config::{RunConfig, StepRecord};
pub use error::LosscapeError;
pub use gradient::{numerical_gradient, Gradient};
pub use optim::{AlgorithmKind, OptimizerParams, OptimizerState};
pub use surface::LossSurface;
pub use trajectory::{
    AutoRunner, DriverState, Step, StepOutcome, Trajectory, TrajectoryDriver, TrajectoryPolicy,
};
// Re-export traits required by public functions
pub use num_traits;
