//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BedMgmtError`] via `From` at the port boundary.

/// Top-level error crossing the domain/application boundary.
#[derive(Debug, thiserror::Error)]
pub enum BedMgmtError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The remote backend could not be reached or answered with an error.
    #[error("backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),

    /// The caller gave up on the operation before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

/// Input that could not be turned into a domain value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("field {field} must be a non-negative number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A lookup by identifier returned nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
