// losscape-surfaces/src/presets.rs

use std::f64::consts::PI;

use losscape_core::RunConfig;

use crate::preset::Preset;

fn quadratic_bowl(x: f64, y: f64) -> f64 {
    x * x + y * y
}

fn rosenbrock(x: f64, y: f64) -> f64 {
    (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2)
}

fn himmelblau(x: f64, y: f64) -> f64 {
    (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)
}

fn saddle(x: f64, y: f64) -> f64 {
    x * x - y * y
}

fn rastrigin(x: f64, y: f64) -> f64 {
    20.0 + x * x - 10.0 * (2.0 * PI * x).cos() + y * y - 10.0 * (2.0 * PI * y).cos()
}

fn beale(x: f64, y: f64) -> f64 {
    (1.5 - x + x * y).powi(2) + (2.25 - x + x * y * y).powi(2) + (2.625 - x + x * y.powi(3)).powi(2)
}

static PRESETS: [Preset; 6] = [
    Preset::new(
        "Quadratic Bowl",
        "x^2 + y^2",
        (-5.0, 5.0),
        (-5.0, 5.0),
        (2.5, 2.5),
        quadratic_bowl,
    ),
    Preset::new(
        "Rosenbrock",
        "(1 - x)^2 + 100 * (y - x^2)^2",
        (-2.0, 2.0),
        (-1.0, 3.0),
        (-1.5, 2.0),
        rosenbrock,
    ),
    Preset::new(
        "Himmelblau",
        "(x^2 + y - 11)^2 + (x + y^2 - 7)^2",
        (-5.0, 5.0),
        (-5.0, 5.0),
        (0.0, 0.0),
        himmelblau,
    ),
    Preset::new("Saddle", "x^2 - y^2", (-3.0, 3.0), (-3.0, 3.0), (2.0, 0.01), saddle),
    Preset::new(
        "Rastrigin",
        "20 + x^2 - 10*cos(2*pi*x) + y^2 - 10*cos(2*pi*y)",
        (-5.12, 5.12),
        (-5.12, 5.12),
        (2.2, 2.2),
        rastrigin,
    ),
    Preset::new(
        "Beale",
        "(1.5 - x + x*y)^2 + (2.25 - x + x*y^2)^2 + (2.625 - x + x*y^3)^2",
        (-4.5, 4.5),
        (-4.5, 4.5),
        (1.0, 1.0),
        beale,
    ),
];

/// All built-in presets, the Quadratic Bowl first.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Looks up a preset by name, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// The preset a configuration record was saved from, if it is a built-in one.
pub fn resolve(config: &RunConfig) -> Option<&'static Preset> {
    by_name(&config.preset_name)
}

#[cfg(test)]
#[path = "presets_test.rs"]
mod tests;
