use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use genie_core::GenieError;
use serde_json::json;

/// Error envelope for the REST API.
///
/// Every failed request answers with `{"error": message}` and a status that
/// mirrors the failure class: 400 for requests missing fields, 401 for
/// credential problems, 429 when an upstream service rate limited us, 500
/// for everything else. A body that never decoded keeps the extractor's
/// status, so the envelope holds for malformed requests too. The message
/// keeps the upstream detail.
pub enum ApiError {
    Domain(GenieError),
    InvalidBody { status: StatusCode, detail: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Domain(err) => match err {
                GenieError::MissingParameters(_) => StatusCode::BAD_REQUEST,
                GenieError::MissingCredential | GenieError::AuthenticationFailed(_) => {
                    StatusCode::UNAUTHORIZED
                }
                GenieError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidBody { status, .. } => *status,
        }
    }

    fn message(&self) -> String {
        match self {
            // There is no rollback: the repository keeps whatever was
            // committed before the failing file.
            Self::Domain(err @ GenieError::FileCommitFailed { .. }) => {
                format!("{err}; files committed before the failure remain in the repository")
            }
            Self::Domain(err) => err.to_string(),
            Self::InvalidBody { detail, .. } => detail.clone(),
        }
    }
}

impl From<GenieError> for ApiError {
    fn from(err: GenieError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody { status: rejection.status(), detail: rejection.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        } else {
            tracing::warn!(error = %message, "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
