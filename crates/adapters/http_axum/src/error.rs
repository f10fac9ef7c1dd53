//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use poegate_domain::error::{PoeGateError, ToolFailure};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    error: String,
}

/// Maps [`PoeGateError`] to an HTTP response with appropriate status code.
pub struct ApiError(PoeGateError);

impl From<PoeGateError> for ApiError {
    fn from(err: PoeGateError) -> Self {
        Self(err)
    }
}

fn tool_status(kind: ToolFailure) -> StatusCode {
    match kind {
        ToolFailure::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        ToolFailure::MalformedOutput | ToolFailure::NonZeroExit => StatusCode::BAD_GATEWAY,
        ToolFailure::TimedOut => StatusCode::GATEWAY_TIMEOUT,
    }
}

/// Render an error followed by every `source()` below it, `: `-separated.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = err.to_string();
    let mut next = err.source();
    while let Some(cause) = next {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        next = cause.source();
    }
    chain
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PoeGateError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PoeGateError::Tool(err) => {
                tracing::error!(error = %error_chain(err), "power tool error");
                let status = tool_status(err.kind);
                let message = status
                    .canonical_reason()
                    .unwrap_or("power tool error")
                    .to_lowercase();
                (status, message)
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error: message,
        };
        (status, Json(body)).into_response()
    }
}
