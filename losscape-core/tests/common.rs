use losscape_core::{AlgorithmKind, OptimizerParams, TrajectoryDriver};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn quadratic_bowl(x: f64, y: f64) -> f64 {
    x * x + y * y
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn bowl_driver(kind: AlgorithmKind, lr: f64, start: (f64, f64)) -> TrajectoryDriver {
    init_logger();
    let mut driver = TrajectoryDriver::new(kind, OptimizerParams::with_learning_rate(lr))
        .expect("Test driver creation failed");
    driver.initialize(&quadratic_bowl, start.0, start.1);
    driver
}
