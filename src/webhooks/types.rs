//! Webhook event payload types.
//!
//! Every delivery carries a single [`Event`] describing what happened to
//! which resource.
//!
//! # Example
//!
//! ```rust
//! use printify_api::webhooks::{Event, EventType};
//!
//! let event: Event = serde_json::from_str(r#"{
//!     "id": "653b6be8-2ff7-4ab5-a7a6-6889a8b3bbf5",
//!     "type": "shop:disconnected",
//!     "created_at": "2022-05-17 15:00:00+00:00",
//!     "resource": {"id": "12345", "type": "shop", "data": null}
//! }"#).unwrap();
//!
//! assert_eq!(event.kind(), Some(EventType::ShopDisconnected));
//! assert_eq!(event.resource.resource_type, "shop");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::resources::v1::common::timestamp;
use crate::webhooks::WebhookError;

/// Event types a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A shop was disconnected.
    #[serde(rename = "shop:disconnected")]
    ShopDisconnected,

    /// A product was deleted.
    #[serde(rename = "product:deleted")]
    ProductDeleted,

    /// Publishing was requested for a product.
    #[serde(rename = "product:publish:started")]
    ProductPublishStarted,

    /// An order was created.
    #[serde(rename = "order:created")]
    OrderCreated,

    /// An order's status changed.
    #[serde(rename = "order:updated")]
    OrderUpdated,

    /// An order was sent to production.
    #[serde(rename = "order:sent-to-production")]
    OrderSentToProduction,

    /// Some or all items of an order shipped.
    #[serde(rename = "order:shipment:created")]
    OrderShipmentCreated,

    /// Some or all items of an order were delivered.
    #[serde(rename = "order:shipment:delivered")]
    OrderShipmentDelivered,
}

impl EventType {
    /// All known event types.
    pub const ALL: [Self; 8] = [
        Self::ShopDisconnected,
        Self::ProductDeleted,
        Self::ProductPublishStarted,
        Self::OrderCreated,
        Self::OrderUpdated,
        Self::OrderSentToProduction,
        Self::OrderShipmentCreated,
        Self::OrderShipmentDelivered,
    ];

    /// Returns the wire name, e.g. `order:created`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShopDisconnected => "shop:disconnected",
            Self::ProductDeleted => "product:deleted",
            Self::ProductPublishStarted => "product:publish:started",
            Self::OrderCreated => "order:created",
            Self::OrderUpdated => "order:updated",
            Self::OrderSentToProduction => "order:sent-to-production",
            Self::OrderShipmentCreated => "order:shipment:created",
            Self::OrderShipmentDelivered => "order:shipment:delivered",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = WebhookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event_type| event_type.as_str() == s)
            .ok_or_else(|| WebhookError::UnknownEventType {
                topic: s.to_string(),
            })
    }
}

/// A webhook delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique delivery id.
    pub id: String,

    /// The raw event type. See [`Event::kind`] for the parsed form.
    #[serde(rename = "type")]
    pub event_type: String,

    /// When the event occurred.
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    /// The resource the event is about.
    pub resource: EventResource,
}

impl Event {
    /// Returns the parsed event type, or `None` for types this library does
    /// not know about.
    #[must_use]
    pub fn kind(&self) -> Option<EventType> {
        self.event_type.parse().ok()
    }
}

/// The resource an event refers to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventResource {
    /// The resource id (a shop, product or order id).
    pub id: String,

    /// `shop`, `product` or `order`.
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Event specific data. Shape depends on the event type.
    #[serde(default)]
    pub data: Option<EventData>,
}

/// Event specific data.
///
/// The common fields are typed; anything else is kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EventData {
    /// The shop the event belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,

    /// Reason given for a failure or status change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Order status, for order events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Remaining event-specific fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
