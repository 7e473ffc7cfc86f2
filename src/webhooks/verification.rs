//! Webhook signature verification.
//!
//! When a webhook is created with a secret, Printify signs every delivery
//! with HMAC-SHA256 over the raw request body and sends the result in the
//! [`HEADER_SIGNATURE`] header as `sha256=<lowercase hex>`.
//!
//! # Example
//!
//! ```rust
//! use printify_api::webhooks::{compute_signature, verify_event, verify_signature};
//!
//! let body = br#"{"id":"1","type":"order:created","resource":{"id":"2","type":"order"}}"#;
//! let header = compute_signature(body, "my-secret");
//! assert!(header.starts_with("sha256="));
//!
//! assert!(verify_signature(body, &header, "my-secret"));
//! assert!(!verify_signature(body, &header, "other-secret"));
//!
//! let event = verify_event(body, &header, "my-secret").unwrap();
//! assert_eq!(event.resource.id, "2");
//! ```
//!
//! # Security
//!
//! Signatures are compared in constant time. Always verify against the raw
//! body bytes, before any JSON re-encoding.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::webhooks::{Event, WebhookError};

type HmacSha256 = Hmac<Sha256>;

/// HTTP header carrying the delivery signature.
pub const HEADER_SIGNATURE: &str = "X-Pfy-Signature";

const SIGNATURE_PREFIX: &str = "sha256=";

fn digest(body: &[u8], secret: &str) -> Vec<u8> {
    // HMAC accepts keys of any length, so the error arm is unreachable.
    HmacSha256::new_from_slice(secret.as_bytes()).map_or_else(
        |_| Vec::new(),
        |mut mac| {
            mac.update(body);
            mac.finalize().into_bytes().to_vec()
        },
    )
}

/// Computes the signature header value for `body`, as `sha256=<hex>`.
#[must_use]
pub fn compute_signature(body: &[u8], secret: &str) -> String {
    format!("{SIGNATURE_PREFIX}{}", hex::encode(digest(body, secret)))
}

/// Checks a signature header value against `body`.
///
/// The `sha256=` prefix is optional and hex digits may be in either case.
#[must_use]
pub fn verify_signature(body: &[u8], signature_header: &str, secret: &str) -> bool {
    let received = signature_header.trim();
    let received = received.strip_prefix(SIGNATURE_PREFIX).unwrap_or(received);
    let Some(received) = hex::decode(received) else {
        return false;
    };

    let expected = digest(body, secret);
    !expected.is_empty() && expected.ct_eq(&received).into()
}

/// Parses an event payload without checking its signature.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidPayload`] if the body is not an event.
pub fn parse_event(body: &[u8]) -> Result<Event, WebhookError> {
    Ok(serde_json::from_slice(body)?)
}

/// Verifies a delivery's signature, then parses its event.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSignature`] if the signature does not
/// match, or [`WebhookError::InvalidPayload`] if the body is not an event.
pub fn verify_event(
    body: &[u8],
    signature_header: &str,
    secret: &str,
) -> Result<Event, WebhookError> {
    if !verify_signature(body, signature_header, secret) {
        tracing::debug!("Rejected webhook delivery with invalid signature");
        return Err(WebhookError::InvalidSignature);
    }
    let event = parse_event(body)?;
    tracing::debug!(
        event_id = %event.id,
        event_type = %event.event_type,
        "Verified webhook delivery"
    );
    Ok(event)
}

mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }

    pub fn decode(text: &str) -> Option<Vec<u8>> {
        if text.len() % 2 != 0 {
            return None;
        }
        text.as_bytes()
            .chunks(2)
            .map(|pair| {
                let high = char::from(pair[0]).to_digit(16)?;
                let low = char::from(pair[1]).to_digit(16)?;
                u8::try_from((high << 4) | low).ok()
            })
            .collect()
    }
}
