//! OpenMRS adapter error types.

use bedmgmt_domain::error::BedMgmtError;

/// Errors specific to talking to the OpenMRS backend.
#[derive(Debug, thiserror::Error)]
pub enum OpenmrsError {
    /// The configured base URL cannot be turned into request URLs.
    #[error("invalid backend URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request could not be sent or the response body not decoded.
    #[error("request to backend failed")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend answered {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl From<OpenmrsError> for BedMgmtError {
    fn from(err: OpenmrsError) -> Self {
        Self::Backend(Box::new(err))
    }
}
