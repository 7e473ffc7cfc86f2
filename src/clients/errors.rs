//! HTTP-specific error types for the Printify API SDK.
//!
//! Every operation returns [`HttpError`], which classifies a failure into
//! exactly one of four kinds:
//!
//! - [`ConstructionError`]: the request could not be built (path parameter
//!   arity, unsupported template directive, body serialization, bad header
//!   or URL)
//! - [`reqwest::Error`]: the request could not be delivered or the response
//!   could not be read
//! - [`ApiError`]: the API answered with a status code of 400 or above
//! - [`DecodeError`]: a body could not be decoded into the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::HttpError;
//!
//! match Product::find(&client, shop_id, "5d39b159e7c48c000728c89f").await {
//!     Ok(product) => println!("{}", product.title),
//!     Err(HttpError::Api(e)) if e.status == 404 => println!("gone"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {:?}", e.status, e.message()),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

/// Error returned when a request cannot be built.
///
/// These errors are raised before anything is sent over the network.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The number of supplied path parameters does not match the template.
    #[error("Endpoint '{template}' expects {expected} path parameter(s) but {supplied} were supplied.")]
    ArityMismatch {
        /// The endpoint template.
        template: String,
        /// Number of placeholders in the template.
        expected: usize,
        /// Number of parameters supplied.
        supplied: usize,
    },

    /// The template contains a `%` directive other than `%d`, `%s` or `%%`.
    #[error("Endpoint '{template}' contains unsupported placeholder '%{directive}'.")]
    UnsupportedPlaceholder {
        /// The endpoint template.
        template: String,
        /// The character following `%`.
        directive: char,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid request header '{name}': {reason}")]
    InvalidHeader {
        /// The header name.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The fully formed URL is not valid.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// The parser's description of the problem.
        reason: String,
    },
}

/// Error returned when the API responds with a status code of 400 or above.
///
/// The response body is decoded into a string-keyed JSON map and kept
/// as-is in `payload`. Printify error bodies usually carry `status`, `code`,
/// `message` and a nested `errors` object.
///
/// # Example
///
/// ```rust
/// use printify_api::ApiError;
/// use serde_json::json;
///
/// let payload = json!({"code": 8150, "message": "Validation failed."});
/// let error = ApiError {
///     status: 400,
///     payload: payload.as_object().unwrap().clone(),
///     request_id: None,
/// };
///
/// assert_eq!(error.message(), Some("Validation failed."));
/// assert_eq!(error.code(), Some(8150));
/// ```
#[derive(Debug, Clone, Error)]
#[error("Printify API responded with status {status}: {}", Value::Object(.payload.clone()))]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The decoded error body.
    pub payload: Map<String, Value>,
    /// The `X-Request-Id` header of the response, if present.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Returns the human readable message from the payload.
    ///
    /// Looks at `message` first and falls back to `error`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .get("message")
            .or_else(|| self.payload.get("error"))
            .and_then(Value::as_str)
    }

    /// Returns the numeric Printify error code from the payload, if any.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.payload.get("code").and_then(Value::as_i64)
    }
}

/// Error returned when a response body does not match the expected shape.
#[derive(Debug, Error)]
#[error("Failed to decode response body (status {status}): {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response whose body failed to decode.
    pub status: u16,
    /// The underlying JSON error.
    pub source: serde_json::Error,
}

/// Unified error type for every operation in the SDK.
///
/// No variant is ever retried or swallowed by the SDK; errors propagate to
/// the caller unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be built.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API responded with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Decode(e) => Some(e.status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Construction(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_error(status: u16, body: Value) -> ApiError {
        ApiError {
            status,
            payload: body.as_object().cloned().unwrap_or_default(),
            request_id: Some("req-1".to_string()),
        }
    }

    #[test]
    fn test_arity_mismatch_message() {
        let error = ConstructionError::ArityMismatch {
            template: "/v1/shops/%d/products/%s.json".to_string(),
            expected: 2,
            supplied: 1,
        };
        let message = error.to_string();
        assert!(message.contains("expects 2"));
        assert!(message.contains("1 were supplied"));
    }

    #[test]
    fn test_unsupported_placeholder_message() {
        let error = ConstructionError::UnsupportedPlaceholder {
            template: "/v1/%x.json".to_string(),
            directive: 'x',
        };
        assert!(error.to_string().contains("'%x'"));
    }

    #[test]
    fn test_api_error_message_prefers_message_field() {
        let error = api_error(400, json!({"message": "Validation failed.", "error": "x"}));
        assert_eq!(error.message(), Some("Validation failed."));

        let error = api_error(404, json!({"error": "not found"}));
        assert_eq!(error.message(), Some("not found"));
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_api_error_display_includes_status_and_payload() {
        let error = api_error(404, json!({"error": "not found"}));
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains(r#""error":"not found""#));
    }

    #[test]
    fn test_http_error_status() {
        let error = HttpError::from(api_error(422, json!({})));
        assert_eq!(error.status(), Some(422));

        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let error = HttpError::from(DecodeError {
            status: 200,
            source,
        });
        assert_eq!(error.status(), Some(200));

        let error = HttpError::from(ConstructionError::ArityMismatch {
            template: "/v1/shops.json".to_string(),
            expected: 0,
            supplied: 1,
        });
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let source = serde_json::from_str::<Value>("[").unwrap_err();
        let decode: &dyn std::error::Error = &DecodeError {
            status: 200,
            source,
        };
        assert!(decode.source().is_some());

        let api: &dyn std::error::Error = &api_error(500, json!({}));
        let _ = api;
    }

    #[test]
    fn test_http_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}
