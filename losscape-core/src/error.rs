use thiserror::Error;

/// Custom error type for the losscape crates.
///
/// Numerical outcomes (non-finite losses, convergence, divergence) are never
/// reported through this type: they are encoded in the driver state and in
/// the recorded steps. Errors only come from rejected configuration.
#[derive(Error, Debug)]
pub enum LosscapeError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Malformed configuration record: {0}")]
    Serialization(#[from] serde_json::Error),
}
