//! JSON error body shapes shared by the API handlers.
//!
//! The legacy surface uses two distinct envelopes: catalog endpoints report
//! failures as `{"message": …}`, while the upload endpoint reports them as
//! `{"error": …}`. Handlers pick the message per endpoint; these helpers only
//! fix the body shape and status pairing.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `{"message": …}` body used by the catalog endpoints.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `{"error": …}` body used by the upload endpoint.
#[derive(Serialize)]
pub struct UploadErrorBody {
    pub error: String,
}

/// Build a `{"message": …}` response with the given status.
pub fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Build a `{"error": …}` response with the given status.
pub fn upload_error_response(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(UploadErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}
