//! Webhook-specific error types.

use thiserror::Error;

/// Error type for incoming webhook verification and parsing.
///
/// # Example
///
/// ```rust
/// use printify_api::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidSignature;
/// assert_eq!(error.to_string(), "Webhook signature verification failed");
/// ```
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature header does not match the body.
    ///
    /// The message is generic so nothing about the expected signature leaks.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The body is not a valid event payload.
    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The event type is not one this library knows.
    #[error("Unknown webhook event type: {topic}")]
    UnknownEventType {
        /// The event type as received.
        topic: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_signature_message_is_generic() {
        let message = WebhookError::InvalidSignature.to_string();
        assert!(!message.contains("secret"));
        assert!(!message.contains("sha256"));
    }

    #[test]
    fn test_invalid_payload_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: WebhookError = serde_error.into();
        assert!(matches!(error, WebhookError::InvalidPayload(_)));
        assert!(error.to_string().starts_with("Invalid webhook payload"));
    }

    #[test]
    fn test_unknown_event_type_message() {
        let error = WebhookError::UnknownEventType {
            topic: "order:exploded".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown webhook event type: order:exploded");
    }
}
