//! Built-in loss surfaces for losscape.
//!
//! Each [`Preset`] bundles a closed-form loss function with the expression
//! text shown to users, the plotting range and a default start point. Presets
//! implement [`LossSurface`] and can be handed directly to a
//! `TrajectoryDriver`.

pub mod preset;
pub mod presets;

pub use preset::Preset;
pub use presets::{by_name, presets, resolve};

// Re-export the evaluator trait so callers of this crate alone can name it
pub use losscape_core::LossSurface;
