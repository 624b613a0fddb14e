/// A scalar loss surface `f(x, y)`.
///
/// Implementations signal an invalid or undefined point by returning a
/// non-finite value (NaN or infinite); they never panic or return errors.
pub trait LossSurface {
    /// Evaluates the loss at `(x, y)`.
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

impl<F> LossSurface for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
