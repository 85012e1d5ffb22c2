//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use bedmgmt_domain::error::{BedMgmtError, ValidationError};

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    status: StatusCode,
    message: String,
}

/// Maps [`BedMgmtError`] to an HTML error page with an appropriate status
/// code.
#[derive(Debug)]
pub struct DashboardError(BedMgmtError);

impl From<BedMgmtError> for DashboardError {
    fn from(err: BedMgmtError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for DashboardError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

/// Status code a failed operation is reported with.
pub(crate) fn status_for(err: &BedMgmtError) -> StatusCode {
    match err {
        BedMgmtError::Validation(_) => StatusCode::BAD_REQUEST,
        BedMgmtError::NotFound(_) => StatusCode::NOT_FOUND,
        BedMgmtError::Backend(_) => StatusCode::BAD_GATEWAY,
        BedMgmtError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let message = match &self.0 {
            BedMgmtError::Backend(err) => {
                tracing::error!(error = %err, "backend error");
                "the bed management backend is unavailable".to_string()
            }
            other => other.to_string(),
        };

        let page = ErrorPage { status, message };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedmgmt_domain::error::NotFoundError;

    #[test]
    fn should_map_errors_to_status_codes() {
        let not_found: BedMgmtError = NotFoundError {
            entity: "Bed",
            id: "1".to_string(),
        }
        .into();
        assert_eq!(status_for(&not_found), StatusCode::NOT_FOUND);

        let invalid: BedMgmtError = ValidationError::InvalidNumber {
            field: "row",
            value: "x".to_string(),
        }
        .into();
        assert_eq!(status_for(&invalid), StatusCode::BAD_REQUEST);

        let backend = BedMgmtError::Backend(Box::new(std::io::Error::other("down")));
        assert_eq!(status_for(&backend), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn should_answer_bad_gateway_when_backend_fails() {
        let err = DashboardError(BedMgmtError::Backend(Box::new(std::io::Error::other(
            "secret connection string",
        ))));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
