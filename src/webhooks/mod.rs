//! Incoming webhook deliveries.
//!
//! Printify notifies subscribers about shop, product and order changes by
//! POSTing an [`Event`] to the webhook URL. Subscriptions themselves are
//! managed with [`Webhook`](crate::rest::resources::v1::Webhook).
//!
//! # Overview
//!
//! - [`Event`], [`EventResource`], [`EventData`]: the delivery payload
//! - [`EventType`]: the known event types (`order:created`, ...)
//! - [`verify_event`]: checks the [`HEADER_SIGNATURE`] header and parses the
//!   payload in one step
//! - [`verify_signature`], [`compute_signature`], [`parse_event`]: the
//!   individual steps
//! - [`WebhookError`]: verification and parsing failures
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::webhooks::{verify_event, EventType, HEADER_SIGNATURE};
//!
//! async fn handle(headers: &HeaderMap, body: Bytes) -> StatusCode {
//!     let signature = headers
//!         .get(HEADER_SIGNATURE)
//!         .and_then(|value| value.to_str().ok())
//!         .unwrap_or_default();
//!
//!     match verify_event(&body, signature, "my-signing-secret") {
//!         Ok(event) if event.kind() == Some(EventType::OrderCreated) => {
//!             println!("order {} created", event.resource.id);
//!             StatusCode::OK
//!         }
//!         Ok(_) => StatusCode::OK,
//!         Err(_) => StatusCode::UNAUTHORIZED,
//!     }
//! }
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are `Send + Sync`.

mod errors;
mod types;
mod verification;

pub use errors::WebhookError;
pub use types::{Event, EventData, EventResource, EventType};
pub use verification::{
    compute_signature, parse_event, verify_event, verify_signature, HEADER_SIGNATURE,
};
