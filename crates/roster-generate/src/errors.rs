use thiserror::Error;

use roster_core::ValidationError;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("generated records rejected: {0}")]
    Validation(#[from] ValidationError),
}
