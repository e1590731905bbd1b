//! Shared response envelope types for API handlers.
//!
//! Success responses use a `{ "message": ..., "data": ... }` envelope. Use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!` calls to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ..., "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        MessageResponse {
            message: message.into(),
            data,
        }
    }
}

/// Envelope for responses that carry a message but no payload
/// (`data` serializes as `null`).
pub type EmptyResponse = MessageResponse<Option<()>>;

impl EmptyResponse {
    pub fn message_only(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
            data: None,
        }
    }
}
