// losscape-surfaces/src/preset.rs

use losscape_core::LossSurface;
use rand::Rng;
use std::fmt;

/// A named, closed-form loss surface.
#[derive(Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    /// Human readable formula, as stored in `RunConfig::expression_text`.
    pub expression: &'static str,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub default_start: (f64, f64),
    eval: fn(f64, f64) -> f64,
}

impl Preset {
    pub(crate) const fn new(
        name: &'static str,
        expression: &'static str,
        x_range: (f64, f64),
        y_range: (f64, f64),
        default_start: (f64, f64),
        eval: fn(f64, f64) -> f64,
    ) -> Self {
        Preset {
            name,
            expression,
            x_range,
            y_range,
            default_start,
            eval,
        }
    }

    /// Draws a start point uniformly inside the preset's plotting range.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator to draw from.
    pub fn random_start<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        (
            rng.gen_range(self.x_range.0..=self.x_range.1),
            rng.gen_range(self.y_range.0..=self.y_range.1),
        )
    }

    /// Returns `true` if `(x, y)` lies inside the plotting range.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_range.0..=self.x_range.1).contains(&x)
            && (self.y_range.0..=self.y_range.1).contains(&y)
    }
}

impl LossSurface for Preset {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (self.eval)(x, y)
    }
}

impl fmt::Debug for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preset")
            .field("name", &self.name)
            .field("expression", &self.expression)
            .field("x_range", &self.x_range)
            .field("y_range", &self.y_range)
            .field("default_start", &self.default_start)
            .finish()
    }
}

#[cfg(test)]
#[path = "preset_test.rs"]
mod tests;
