/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Every error carries a stable code alongside a human-readable message.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

use crate::error::{RegistrationError, SubmissionError};
use crate::server::game_session::messages::{ErrorNotice, ServerMessage};

/// Sent verbatim when an outbound frame cannot be serialized.
pub const INTERNAL_ERROR_FRAME: &str =
    r#"{"key":"error","data":{"code":"INTERNAL_ERROR","message":"Internal server error"}}"#;

/// Builds an `error` frame.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "DUPLICATE_INDEX").
/// - `message`: Human-readable error message.
pub fn ws_error_message(code: &str, message: &str) -> ServerMessage {
    ServerMessage::Error(ErrorNotice {
        code: code.to_string(),
        message: message.to_string(),
    })
}

pub fn submission_error(e: &SubmissionError) -> ServerMessage {
    ws_error_message(e.code(), &e.to_string())
}

pub fn registration_error(e: &RegistrationError) -> ServerMessage {
    ws_error_message(e.code(), &e.to_string())
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(code: &str, message: &str, status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": { "code": code, "message": message } }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_frame() {
        let frame = submission_error(&SubmissionError::DuplicateIndex(3));
        assert_eq!(
            serde_json::to_value(&frame).unwrap(),
            json!({"key": "error", "data": {"code": "DUPLICATE_INDEX", "message": "Card index 3 was chosen more than once"}})
        );
    }

    #[test]
    fn test_internal_error_frame_is_json() {
        let value: serde_json::Value = serde_json::from_str(INTERNAL_ERROR_FRAME).unwrap();
        assert_eq!(value["data"]["code"], "INTERNAL_ERROR");
    }

    #[test]
    fn test_http_error_status() {
        let resp = http_error_response("SESSION_UNAVAILABLE", "down", StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
