use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ledgerview_chat::ChatError;
use ledgerview_store::StoreError;

/// Uniform JSON error body: `{"error": "..."}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

/// Store failures are logged with detail server-side; clients get a generic
/// message so query internals never leak.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "record snapshot failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "failed to run aggregation query",
    )
}

pub fn chat_error_to_response(err: ChatError) -> axum::response::Response {
    match err {
        ChatError::Configuration(msg) => {
            tracing::error!(error = %msg, "chat backend not configured");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "chat backend is not configured",
            )
        }
        ChatError::Upstream(msg) => {
            tracing::error!(error = %msg, "chat upstream failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, msg)
        }
    }
}
