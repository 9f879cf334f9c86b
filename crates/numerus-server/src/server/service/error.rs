//! HTTP error responses.
//!
//! Converts [`numerus::Error`] and request-level failures into a status code
//! and a JSON body of the form `{"errorCode": "...", "message": "..."}`.
//! Client errors map to `400`; infrastructure failures map to `500` with the
//! cause logged rather than returned.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: &'static str,
    pub message: String,
}

/// An error that is rendered directly as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error_code,
                message: message.into(),
            },
        }
    }

    /// Neither `query` nor both range bounds were supplied, or a parameter
    /// failed to parse.
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_PARAMETERS", message)
    }

    /// The caller-level deadline for a range conversion elapsed.
    pub fn timeout() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "TIMEOUT",
            "The conversion did not complete in time",
        )
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<numerus::Error> for ApiError {
    fn from(err: numerus::Error) -> Self {
        let code = err.code();
        match err {
            numerus::Error::InvalidRange { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                code,
                "Min must be less than or equal to max",
            ),
            numerus::Error::OutOfRange { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                code,
                "Numbers must be between 1 and 3999",
            ),
            other => {
                tracing::error!("Unexpected error occurred: {other}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    "An unexpected error occurred",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_bad_request() {
        let err = ApiError::from(numerus::Error::InvalidRange { min: 5, max: 1 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error_code, "INVALID_RANGE");

        let err = ApiError::from(numerus::Error::OutOfRange { min: 0, max: 10 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error_code, "OUT_OF_RANGE");
    }

    #[test]
    fn hides_infrastructure_details() {
        let err = ApiError::from(numerus::Error::Dispatch {
            context: "Chunk 3 failed: task 17 panicked".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body,
            ErrorBody {
                error_code: "INTERNAL_SERVER_ERROR",
                message: "An unexpected error occurred".to_string(),
            }
        );
    }
}
