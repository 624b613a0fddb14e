// losscape-core/src/trajectory/mod.rs

//! Trajectory recording and driving.
//!
//! `TrajectoryDriver` owns the live optimizer state and an append-only
//! `Trajectory` of `Step`s. `AutoRunner` repeatedly steps a driver at a fixed
//! wall-clock interval.

pub mod auto_run;
pub mod driver;
pub mod step;

pub use auto_run::AutoRunner;
pub use driver::{DriverState, StepOutcome, TrajectoryDriver, TrajectoryPolicy};
pub use step::{Step, Trajectory};

/// Gradient norm below which a run is considered converged.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-6;

/// Coordinate magnitude above which a run is considered diverged.
pub const DIVERGENCE_BOUND: f64 = 100.0;

/// Recorded losses are clamped to `[-DISPLAY_LOSS_LIMIT, DISPLAY_LOSS_LIMIT]`.
pub const DISPLAY_LOSS_LIMIT: f64 = 50.0;
