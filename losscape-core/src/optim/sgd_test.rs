use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sgd_basic_step() {
    let state = OptimizerState::at(2.5, 2.5);
    let grad = Gradient::new(5.0, 5.0);
    let params = OptimizerParams::with_learning_rate(0.1);

    let next = GradientDescent.step(&state, &grad, &params);

    assert_relative_eq!(next.x, 2.0);
    assert_relative_eq!(next.y, 2.0);
    assert!(next.is_fresh(), "Plain descent must not set algorithm-specific fields");
}

#[test]
fn test_sgd_drops_foreign_fields() {
    let state = OptimizerState {
        velocity: Some((1.0, 1.0)),
        square_avg: Some((2.0, 2.0)),
        t: Some(7),
        ..OptimizerState::at(1.0, -1.0)
    };
    let next = GradientDescent.step(&state, &Gradient::new(1.0, -1.0), &OptimizerParams::default());

    assert_relative_eq!(next.x, 0.9);
    assert_relative_eq!(next.y, -0.9);
    assert!(next.is_fresh());
}

#[test]
fn test_sgd_propagates_non_finite_gradient() {
    let state = OptimizerState::at(0.0, 0.0);
    let next = GradientDescent.step(
        &state,
        &Gradient::new(f64::NAN, 1.0),
        &OptimizerParams::default(),
    );
    assert!(next.x.is_nan());
    assert!(!next.is_finite());
}
