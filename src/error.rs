//! Error taxonomy for parameter validation, benefit resolution, and the
//! collaborator layers around the projection core

use thiserror::Error;

use crate::plan::IntakeStep;

/// Errors surfaced by this crate
///
/// Validation failures are unrecoverable for the run: they abort before the
/// first year record is emitted and there is no partial output.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// A parameter failed boundary validation before projection.
    #[error("invalid parameter range: {0}")]
    InvalidParameterRange(String),

    /// Disability rating outside the tabulated domain {0, 10, ..., 100}.
    #[error("invalid disability rating {0}: must be a multiple of 10 between 0 and 100")]
    InvalidRating(u8),

    /// The guided intake tried to advance past a step with missing answers.
    #[error("intake step {0:?} is missing required answers")]
    IncompleteStep(IntakeStep),

    /// Scenario name not present in the store.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    /// A scenario parameter set failed to encode or decode.
    #[error("scenario serialization: {0}")]
    Scenario(#[from] serde_json::Error),

    /// CSV export failed.
    #[error("csv export: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure while writing output.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
