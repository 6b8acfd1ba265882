//! Error types for the AgendaPlan core.

use thiserror::Error;

/// Errors that can occur in planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
