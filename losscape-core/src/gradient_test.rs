use super::*;
use approx::assert_relative_eq;

fn bowl(x: f64, y: f64) -> f64 {
    x * x + y * y
}

#[test]
fn test_gradient_of_quadratic_bowl() {
    for &(x, y) in &[(2.5, 2.5), (-1.0, 3.0), (0.3, -0.7), (10.0, -20.0)] {
        let grad = numerical_gradient(&bowl, x, y);
        assert_relative_eq!(grad.grad_x, 2.0 * x, max_relative = 1e-4);
        assert_relative_eq!(grad.grad_y, 2.0 * y, max_relative = 1e-4);
    }
}

#[test]
fn test_gradient_at_minimum_is_near_zero() {
    let grad = numerical_gradient(&bowl, 0.0, 0.0);
    assert!(grad.norm() < 1e-9, "norm was {}", grad.norm());
}

#[test]
fn test_gradient_of_mixed_term() {
    // f = x * y  =>  grad = (y, x)
    let grad = numerical_gradient(&|x: f64, y: f64| x * y, 1.5, -4.0);
    assert_relative_eq!(grad.grad_x, -4.0, max_relative = 1e-6);
    assert_relative_eq!(grad.grad_y, 1.5, max_relative = 1e-6);
}

#[test]
fn test_gradient_norm() {
    let grad = Gradient::new(3.0, 4.0);
    assert_relative_eq!(grad.norm(), 5.0);
    assert!(grad.is_finite());
}

#[test]
fn test_non_finite_samples_propagate() {
    let grad = numerical_gradient(&|x: f64, _y: f64| if x > 0.0 { f64::NAN } else { x }, 0.0, 0.0);
    assert!(grad.grad_x.is_nan());
    assert!(!grad.is_finite());
    assert!(grad.norm().is_nan());
}

#[test]
fn test_central_difference_is_generic_over_float() {
    let (gx, gy) = central_difference(|x: f32, y: f32| x * x + 3.0 * y, 1.0f32, 2.0f32, 1e-2f32);
    assert_relative_eq!(gx, 2.0f32, epsilon = 1e-3);
    assert_relative_eq!(gy, 3.0f32, epsilon = 1e-3);
}
