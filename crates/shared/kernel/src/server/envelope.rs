use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope returned by every intake operation.
///
/// Handlers always answer HTTP 200; success or failure travels in
/// `isSuccess` together with a human-readable `message`. The optional
/// `data` payload is omitted from the JSON when absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T = serde_json::Value> {
    pub is_success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful outcome without a payload.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { is_success: true, message: message.into(), data: None }
    }

    /// Successful outcome carrying a payload.
    #[must_use]
    pub fn success_with(message: impl Into<String>, data: T) -> Self {
        Self { is_success: true, message: message.into(), data: Some(data) }
    }

    /// Failed outcome; the message is the only information the caller gets.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { is_success: false, message: message.into(), data: None }
    }
}
