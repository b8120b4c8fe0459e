//! Errors for operations that refuse their input.
//!
//! Field validation never errors: its outcome is a [`Verdict`]. These errors
//! cover the callers that need a hard failure (billing, parsing, config).

use crate::checker::Verdict;

/// Errors produced by `rut-core`.
#[derive(Debug, thiserror::Error)]
pub enum RutError {
    #[error("RUT body is empty")]
    EmptyBody,

    #[error("RUT body contains a non-digit: {0}")]
    NonDigitBody(String),

    #[error("Invalid check character: {0:?}")]
    InvalidCheckCharacter(char),

    #[error("RUT body out of range: {0}")]
    BodyOutOfRange(String),

    #[error("RUT {id_number} Failed Validation ({verdict})")]
    FailedValidation { id_number: String, verdict: Verdict },

    #[error("Unknown document type code: {0:?}")]
    UnknownDocumentType(String),

    #[error("Receiver RUT {rut} exceeds {length_max} characters")]
    ReceiverRutTooLong { rut: String, length_max: usize },

    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}
