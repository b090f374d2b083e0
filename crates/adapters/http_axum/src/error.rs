//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fitcenter_domain::error::{FitCenterError, ValidationError};
use fitcenter_domain::validation::INVALID_INPUT;

const CONNECTION_FAILED: &str = "Database connection failed.";
const INTERNAL_ERROR: &str = "Internal Server Error";
const NOT_FOUND: &str = "Not Found";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "Error")]
    error: &'a str,
}

/// Maps [`FitCenterError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by validation, a service or a repository.
    Domain(FitCenterError),
    /// No route matches the request path.
    UnknownRoute,
}

impl From<FitCenterError> for ApiError {
    fn from(err: FitCenterError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        ValidationError::schema(INVALID_INPUT).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "path parameter did not match");
        Self::UnknownRoute
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(FitCenterError::Validation(err)) => {
                tracing::debug!(
                    fields = ?err.fields().keys().collect::<Vec<_>>(),
                    "payload rejected"
                );
                return (StatusCode::BAD_REQUEST, Json(err)).into_response();
            }
            Self::Domain(FitCenterError::NotFound(err)) => {
                tracing::debug!(member_id = %err.member_id(), "member not found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(FitCenterError::Connection(err)) => {
                tracing::error!(error = %err, source = ?err.source(), "database connection error");
                (StatusCode::INTERNAL_SERVER_ERROR, CONNECTION_FAILED.to_string())
            }
            Self::Domain(FitCenterError::Query(err)) => {
                tracing::error!(error = %err, source = ?err.source(), "database query error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
            Self::UnknownRoute => (StatusCode::NOT_FOUND, NOT_FOUND.to_string()),
        };

        (status, Json(ErrorBody { error: &message })).into_response()
    }
}
