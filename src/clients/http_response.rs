//! HTTP response types for the Printify API SDK.
//!
//! This module provides the [`HttpResponse`] type. The body is kept as raw
//! bytes and decoded later into whatever shape the calling operation expects.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::DecodeError;

/// An HTTP response from the Printify API.
///
/// The body has been read in full by the time an `HttpResponse` exists, so
/// the underlying connection is already released.
///
/// # Example
///
/// ```rust
/// use printify_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), br#"{"id": 7}"#.to_vec());
/// let value: serde_json::Value = response.json().unwrap();
/// assert_eq!(value["id"], 7);
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the body as UTF-8 text, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_slice(&self.body).map_err(|source| DecodeError {
            status: self.code,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        for code in [301, 400, 404, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, Vec::new());
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
        assert_eq!(response.header("X-Request-Id"), Some("abc-123-xyz"));
    }

    #[test]
    fn test_json_decodes_body() {
        let response = HttpResponse::new(200, HashMap::new(), br#"[1, 2, 3]"#.to_vec());
        let values: Vec<u32> = response.json().unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_json_reports_status_on_failure() {
        let response = HttpResponse::new(201, HashMap::new(), b"not json".to_vec());
        let error = response.json::<Value>().unwrap_err();
        assert_eq!(error.status, 201);
    }

    #[test]
    fn test_text_is_lossy() {
        let response = HttpResponse::new(500, HashMap::new(), b"oops".to_vec());
        assert_eq!(response.text(), "oops");
    }
}
