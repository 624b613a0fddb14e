// losscape-core/src/gradient.rs

use num_traits::Float;

use crate::surface::LossSurface;

/// Step size used by [`numerical_gradient`].
pub const FINITE_DIFFERENCE_STEP: f64 = 1e-5;

/// Partial derivatives of the loss at a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gradient {
    pub grad_x: f64,
    pub grad_y: f64,
}

impl Gradient {
    pub fn new(grad_x: f64, grad_y: f64) -> Self {
        Gradient { grad_x, grad_y }
    }

    /// Euclidean norm `sqrt(grad_x^2 + grad_y^2)`, computed without intermediate overflow.
    pub fn norm(&self) -> f64 {
        self.grad_x.hypot(self.grad_y)
    }

    pub fn is_finite(&self) -> bool {
        self.grad_x.is_finite() && self.grad_y.is_finite()
    }
}

/// Central finite-difference approximation of the gradient of `f` at `(x, y)`.
///
/// `grad_x = (f(x + h, y) - f(x - h, y)) / 2h` and likewise for `y`.
/// Non-finite samples are not guarded against: they simply propagate into the
/// returned components.
///
/// # Arguments
///
/// * `f`: The function to differentiate.
/// * `x`, `y`: The point at which to differentiate.
/// * `h`: The perturbation applied on each axis.
pub fn central_difference<T, F>(f: F, x: T, y: T, h: T) -> (T, T)
where
    T: Float,
    F: Fn(T, T) -> T,
{
    let two_h = (T::one() + T::one()) * h;
    let grad_x = (f(x + h, y) - f(x - h, y)) / two_h;
    let grad_y = (f(x, y + h) - f(x, y - h)) / two_h;
    (grad_x, grad_y)
}

/// Numeric gradient of a loss surface at `(x, y)` using [`FINITE_DIFFERENCE_STEP`].
pub fn numerical_gradient<S>(surface: &S, x: f64, y: f64) -> Gradient
where
    S: LossSurface + ?Sized,
{
    let (grad_x, grad_y) =
        central_difference(|a, b| surface.evaluate(a, b), x, y, FINITE_DIFFERENCE_STEP);
    Gradient { grad_x, grad_y }
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod tests;
