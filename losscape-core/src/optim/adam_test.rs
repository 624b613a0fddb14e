use super::*;
use approx::assert_relative_eq;

#[test]
fn test_adam_first_step_moves_by_learning_rate() {
    let params = OptimizerParams::with_learning_rate(0.1);
    let next = Adam.step(&OptimizerState::at(2.5, 2.5), &Gradient::new(5.0, -3.0), &params);

    // After bias correction m_hat = g and v_hat = g^2, so each axis moves by ~lr.
    assert_relative_eq!(next.x, 2.4, epsilon = 1e-6);
    assert_relative_eq!(next.y, 2.6, epsilon = 1e-6);
    assert_eq!(next.t, Some(1));
    assert!(next.velocity.is_some());
    assert!(next.square_avg.is_some());
}

#[test]
fn test_adam_timestep_increments_by_one() {
    let params = OptimizerParams::default();
    let grad = Gradient::new(1.0, 1.0);
    let mut state = OptimizerState::at(1.0, 1.0);
    assert_eq!(state.timestep(), 0);

    for expected in 1..=5u64 {
        state = Adam.step(&state, &grad, &params);
        assert_eq!(state.timestep(), expected);
        assert!(state.is_finite());
    }
}

#[test]
fn test_adam_moment_estimates() {
    let params = OptimizerParams::default();
    let first = Adam.step(&OptimizerState::at(0.0, 0.0), &Gradient::new(2.0, 4.0), &params);

    let (mx, my) = first.velocity.unwrap();
    let (vx, vy) = first.square_avg.unwrap();
    assert_relative_eq!(mx, 0.2, epsilon = 1e-12);
    assert_relative_eq!(my, 0.4, epsilon = 1e-12);
    assert_relative_eq!(vx, 0.004, epsilon = 1e-12);
    assert_relative_eq!(vy, 0.016, epsilon = 1e-12);
}

#[test]
fn test_adam_second_step_uses_shared_timestep() {
    let params = OptimizerParams::default();
    let grad = Gradient::new(2.0, 4.0);
    let first = Adam.step(&OptimizerState::at(0.0, 0.0), &grad, &params);
    let second = Adam.step(&first, &grad, &params);

    // A constant gradient keeps m_hat = g and v_hat = g^2 on both axes at t = 2.
    assert_eq!(second.t, Some(2));
    assert_relative_eq!(second.x - first.x, -0.1, epsilon = 1e-6);
    assert_relative_eq!(second.y - first.y, -0.1, epsilon = 1e-6);
}
