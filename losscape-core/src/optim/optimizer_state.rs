/// The live state carried between optimizer steps.
///
/// Only the position is shared by every algorithm. The remaining fields are
/// owned by specific update rules and stay `None` until that rule runs:
///
/// * `velocity`: momentum buffer (Momentum) or first moment estimate (Adam).
/// * `square_avg`: running average of squared gradients (RMSProp, or the
///   second moment estimate for Adam).
/// * `t`: number of Adam updates applied so far, used for bias correction.
///
/// Update rules never mutate a state in place; they build the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptimizerState {
    pub x: f64,
    pub y: f64,
    pub velocity: Option<(f64, f64)>,
    pub square_avg: Option<(f64, f64)>,
    pub t: Option<u64>,
}

impl OptimizerState {
    /// Creates a fresh state at `(x, y)` with no algorithm-specific fields.
    pub fn at(x: f64, y: f64) -> Self {
        OptimizerState {
            x,
            y,
            velocity: None,
            square_avg: None,
            t: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Adam timestep, `0` when no Adam update has been applied.
    pub fn timestep(&self) -> u64 {
        self.t.unwrap_or(0)
    }

    /// Returns `true` if no algorithm-specific field is set.
    pub fn is_fresh(&self) -> bool {
        self.velocity.is_none() && self.square_avg.is_none() && self.t.is_none()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
