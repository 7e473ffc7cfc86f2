//! Order resource implementation.
//!
//! Orders are submitted against a shop, either for existing products or for
//! products created on the fly from a blueprint and print areas. Submitted
//! orders wait `on-hold` until they are sent to production.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{Address, NewLineItem, Order, OrderSubmission};
//!
//! let submission = OrderSubmission {
//!     external_id: "2750e210-39bb-11e9-a503-452618153e4a".to_string(),
//!     label: Some("00012".to_string()),
//!     line_items: vec![NewLineItem::for_product("5bfd0b66a342bcc9b5563216", 17887, 1)],
//!     shipping_method: 1,
//!     send_shipping_notification: false,
//!     address_to: Address {
//!         first_name: Some("John".to_string()),
//!         country: Some("BE".to_string()),
//!         ..Default::default()
//!     },
//! };
//!
//! let reference = Order::submit(&client, shop_id, &submission).await?;
//! Order::send_to_production(&client, shop_id, &reference.id).await?;
//!
//! let order = Order::find(&client, shop_id, &reference.id).await?;
//! println!("{:?}", order.status);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::v1::common::{timestamp, Address};
use crate::rest::{
    Direct, Json, NoBody, NoContent, Operation, Page, PageQuery, Paginated, PathArg,
};

/// Production status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Newly created.
    #[default]
    Pending,
    /// Waiting for user action; editable.
    OnHold,
    SendingToProduction,
    InProduction,
    Canceled,
    Fulfilled,
    PartiallyFulfilled,
    /// The charge failed and may be retried by the merchant.
    PaymentNotReceived,
    HadIssues,
    /// A status this library does not know about.
    #[serde(other)]
    Unknown,
}

/// An order as returned by the API.
///
/// Amounts are integer cents.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Order {
    /// The order id.
    pub id: String,

    /// The recipient.
    #[serde(default)]
    pub address_to: Address,

    /// The ordered items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Sales channel details.
    #[serde(default)]
    pub metadata: OrderMetadata,

    /// Total retail price.
    #[serde(default)]
    pub total_price: u64,

    /// Total shipping cost.
    #[serde(default)]
    pub total_shipping: u64,

    /// Total tax.
    #[serde(default)]
    pub total_tax: u64,

    /// Production status.
    #[serde(default)]
    pub status: OrderStatus,

    /// 1 standard, 2 priority, 3 Printify Express, 4 economy.
    #[serde(default)]
    pub shipping_method: u32,

    /// Whether the order ships with Printify Express.
    #[serde(default)]
    pub is_printify_express: bool,

    /// Whether the order ships with economy shipping.
    #[serde(default)]
    pub is_economy_shipping: bool,

    /// Tracking details after fulfillment.
    #[serde(default)]
    pub shipments: Vec<Shipment>,

    /// When the order was created.
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was sent to production.
    #[serde(default, with = "timestamp")]
    pub sent_to_production_at: Option<DateTime<Utc>>,

    /// When the last item was fulfilled.
    #[serde(default, with = "timestamp")]
    pub fulfilled_at: Option<DateTime<Utc>>,

    /// Printify Connect tracking page, if enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printify_connect: Option<PrintifyConnect>,
}

/// A line item of an existing order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItem {
    /// The product id.
    #[serde(default)]
    pub product_id: String,
    /// The product variant id.
    pub variant_id: u64,
    /// Number of units.
    pub quantity: u32,
    /// The print provider fulfilling this item.
    #[serde(default)]
    pub print_provider_id: u64,
    /// Fulfillment cost in cents.
    #[serde(default)]
    pub cost: u64,
    /// Shipping cost in cents.
    #[serde(default)]
    pub shipping_cost: u64,
    /// Item status, e.g. `on-hold`, `in-production`, `has-issues`.
    #[serde(default)]
    pub status: String,
    /// Product details at the time of ordering.
    #[serde(default)]
    pub metadata: LineItemMetadata,
    /// When the item was sent to production.
    #[serde(default, with = "timestamp")]
    pub sent_to_production_at: Option<DateTime<Utc>>,
    /// When the item was fulfilled.
    #[serde(default, with = "timestamp")]
    pub fulfilled_at: Option<DateTime<Utc>>,
}

/// Product details captured on a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItemMetadata {
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Retail price in cents.
    #[serde(default)]
    pub price: u64,
    /// Variant title, e.g. `Heather Grey / XS`.
    #[serde(default)]
    pub variant_label: String,
    /// Variant SKU.
    #[serde(default)]
    pub sku: String,
    /// Country of the print provider.
    #[serde(default)]
    pub country: String,
}

/// Sales channel details of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderMetadata {
    /// `external`, `manual` or `sample`.
    #[serde(default)]
    pub order_type: String,
    /// Order id in the sales channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_order_id: Option<u64>,
    /// Order label in the sales channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_order_label: Option<String>,
    /// When the sales channel marked the order fulfilled.
    #[serde(default, with = "timestamp")]
    pub shop_fulfilled_at: Option<DateTime<Utc>>,
}

/// A shipment with its tracking details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shipment {
    /// Carrier code, e.g. `usps`.
    pub carrier: String,
    /// Tracking number.
    pub number: String,
    /// Tracking page URL.
    pub url: String,
    /// When the carrier reported delivery.
    #[serde(default, with = "timestamp")]
    pub delivered_at: Option<DateTime<Utc>>,
}

/// Printify Connect link for the order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrintifyConnect {
    /// Public tracking page URL.
    pub url: String,
    /// Printify Connect id.
    pub id: String,
}

/// An order to submit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderSubmission {
    /// The order's id in the sales channel.
    pub external_id: String,

    /// Label shown instead of `external_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The items to order.
    pub line_items: Vec<NewLineItem>,

    /// 1 standard, 2 priority, 3 Printify Express, 4 economy.
    pub shipping_method: u32,

    /// Whether the recipient is emailed once the order ships.
    #[serde(default)]
    pub send_shipping_notification: bool,

    /// The recipient.
    pub address_to: Address,
}

/// A line item to order.
///
/// Identify the item one of three ways: an existing `product_id` and
/// `variant_id`, a `sku`, or a `blueprint_id`, `print_provider_id`,
/// `variant_id` and `print_areas` to create the product on the fly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NewLineItem {
    /// An existing product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// A product variant id, or a catalog variant id for on-the-fly products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    /// An existing variant SKU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Print provider for an on-the-fly product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_provider_id: Option<u64>,
    /// Catalog blueprint for an on-the-fly product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<u64>,
    /// Images by placeholder position, e.g. `front`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_areas: Option<HashMap<String, Vec<PrintAreaValue>>>,
    /// Number of units.
    pub quantity: u32,
}

impl NewLineItem {
    /// A line item for an existing product variant.
    #[must_use]
    pub fn for_product(product_id: impl Into<String>, variant_id: u64, quantity: u32) -> Self {
        Self {
            product_id: Some(product_id.into()),
            variant_id: Some(variant_id),
            quantity,
            ..Self::default()
        }
    }

    /// A line item identified by SKU.
    #[must_use]
    pub fn for_sku(sku: impl Into<String>, quantity: u32) -> Self {
        Self {
            sku: Some(sku.into()),
            quantity,
            ..Self::default()
        }
    }
}

/// An image placed in a print area of an on-the-fly product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrintAreaValue {
    /// Image URL.
    pub src: String,
    /// Scale relative to the print area width.
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub angle: f64,
}

/// The id of a newly submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReference {
    /// The order id.
    pub id: String,
}

/// Line items and destination for a shipping cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingCalculation {
    /// Items to ship.
    pub line_items: Vec<NewLineItem>,
    /// Destination; `country` and `zip` are enough.
    pub address_to: Address,
}

/// Shipping costs in cents per method. Unavailable methods are `None`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingCosts {
    /// Standard shipping.
    #[serde(default)]
    pub standard: Option<u64>,
    /// Express shipping.
    #[serde(default)]
    pub express: Option<u64>,
    /// Priority shipping.
    #[serde(default)]
    pub priority: Option<u64>,
    /// Printify Express shipping.
    #[serde(default)]
    pub printify_express: Option<u64>,
    /// Economy shipping.
    #[serde(default)]
    pub economy: Option<u64>,
}

/// `GET /v1/shops/{shop_id}/orders.json`
pub const LIST_ORDERS: Operation<(u64,), NoBody, Paginated<Order>> =
    Operation::new(HttpMethod::Get, "/v1/shops/%d/orders.json");

/// `GET /v1/shops/{shop_id}/orders/{order_id}.json`
pub const GET_ORDER: Operation<(u64, String), NoBody, Direct<Order>> =
    Operation::new(HttpMethod::Get, "/v1/shops/%d/orders/%s.json");

/// `POST /v1/shops/{shop_id}/orders.json`
pub const SUBMIT_ORDER: Operation<(u64,), Json<OrderSubmission>, Direct<OrderReference>> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/orders.json");

/// `POST /v1/shops/{shop_id}/orders/express.json`
pub const SUBMIT_EXPRESS_ORDER: Operation<
    (u64,),
    Json<OrderSubmission>,
    Direct<serde_json::Value>,
> = Operation::new(HttpMethod::Post, "/v1/shops/%d/orders/express.json");

/// `POST /v1/shops/{shop_id}/orders/{order_id}/send_to_production.json`
pub const SEND_TO_PRODUCTION: Operation<(u64, String), NoBody, NoContent> = Operation::new(
    HttpMethod::Post,
    "/v1/shops/%d/orders/%s/send_to_production.json",
);

/// `POST /v1/shops/{shop_id}/orders/shipping.json`
pub const CALCULATE_SHIPPING: Operation<(u64,), Json<ShippingCalculation>, Direct<ShippingCosts>> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/orders/shipping.json");

/// `POST /v1/shops/{shop_id}/orders/{order_id}/cancel.json`
pub const CANCEL_ORDER: Operation<(u64, String), NoBody, Direct<Order>> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/orders/%s/cancel.json");

impl Order {
    /// Lists a shop's orders, first page only.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn all(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
    ) -> Result<Vec<Self>, HttpError> {
        LIST_ORDERS.call(client, (shop_id,)).await
    }

    /// Fetches one page of a shop's orders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn page(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        query: PageQuery,
    ) -> Result<Page<Self>, HttpError> {
        LIST_ORDERS.page(client, (shop_id,), query).await
    }

    /// Fetches a single order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn find(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        order_id: impl PathArg<String>,
    ) -> Result<Self, HttpError> {
        GET_ORDER.call(client, (shop_id, order_id)).await
    }

    /// Submits an order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn submit(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        submission: &OrderSubmission,
    ) -> Result<OrderReference, HttpError> {
        SUBMIT_ORDER.call_with(client, (shop_id,), submission).await
    }

    /// Submits an order for Printify Express delivery.
    ///
    /// Eligible and ineligible items may be split into separate orders, so
    /// the raw response is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn submit_express(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        submission: &OrderSubmission,
    ) -> Result<serde_json::Value, HttpError> {
        SUBMIT_EXPRESS_ORDER
            .call_with(client, (shop_id,), submission)
            .await
    }

    /// Sends an `on-hold` order to production.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn send_to_production(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        order_id: impl PathArg<String>,
    ) -> Result<(), HttpError> {
        SEND_TO_PRODUCTION.call(client, (shop_id, order_id)).await
    }

    /// Estimates shipping costs for a set of line items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn calculate_shipping(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        calculation: &ShippingCalculation,
    ) -> Result<ShippingCosts, HttpError> {
        CALCULATE_SHIPPING
            .call_with(client, (shop_id,), calculation)
            .await
    }

    /// Cancels an unpaid order and returns it.
    ///
    /// Only orders that are `on-hold` or `payment-not-received` can be
    /// canceled.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn cancel(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        order_id: impl PathArg<String>,
    ) -> Result<Self, HttpError> {
        CANCEL_ORDER.call(client, (shop_id, order_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{count_placeholders, ResponseShape};
    use serde_json::json;

    #[test]
    fn test_order_templates_match_arity() {
        let configs = [
            LIST_ORDERS.config(),
            GET_ORDER.config(),
            SUBMIT_ORDER.config(),
            SUBMIT_EXPRESS_ORDER.config(),
            SEND_TO_PRODUCTION.config(),
            CALCULATE_SHIPPING.config(),
            CANCEL_ORDER.config(),
        ];
        for config in configs {
            assert_eq!(
                count_placeholders(config.template).unwrap(),
                config.arity,
                "{}",
                config.template
            );
        }
        assert!(!SEND_TO_PRODUCTION.config().has_body);
        assert_eq!(SEND_TO_PRODUCTION.config().shape, ResponseShape::Empty);
        assert_eq!(CANCEL_ORDER.config().shape, ResponseShape::Direct);
    }

    #[test]
    fn test_order_paths_use_string_order_id() {
        let request = CANCEL_ORDER
            .build_request((123, "5a96f649b2439217d070f507"), None, None)
            .unwrap();
        assert_eq!(
            request.path,
            "/v1/shops/123/orders/5a96f649b2439217d070f507/cancel.json"
        );
    }

    #[test]
    fn test_order_deserialization() {
        let order: Order = serde_json::from_value(json!({
            "id": "5a96f649b2439217d070f507",
            "address_to": {"first_name": "John", "last_name": "Smith", "country": "BE"},
            "line_items": [{
                "product_id": "5b05842f3921c9547531758d",
                "quantity": 1,
                "variant_id": 17887,
                "print_provider_id": 5,
                "cost": 1050,
                "shipping_cost": 400,
                "status": "pending",
                "metadata": {
                    "title": "18K gold plated Necklace",
                    "price": 2200,
                    "variant_label": "Golden indigocoin",
                    "sku": "168699843",
                    "country": "United States"
                },
                "sent_to_production_at": "2017-04-18 13:24:28+00:00",
                "fulfilled_at": "2017-04-18 13:24:28+00:00"
            }],
            "metadata": {
                "order_type": "external",
                "shop_order_id": 1370762297,
                "shop_order_label": "1370762297",
                "shop_fulfilled_at": "2017-04-18 13:24:28+00:00"
            },
            "total_price": 2200,
            "total_shipping": 400,
            "total_tax": 0,
            "status": "payment-not-received",
            "shipping_method": 1,
            "shipments": [{
                "carrier": "usps",
                "number": "94001116990045395649372",
                "url": "http://example.com/94001116990045395649372",
                "delivered_at": "2017-04-18 13:24:28+00:00"
            }],
            "created_at": "2017-04-18 13:24:28+00:00",
            "printify_connect": {"url": "https://printify.me/p/abc", "id": "abc"}
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::PaymentNotReceived);
        assert_eq!(order.line_items[0].variant_id, 17887);
        assert_eq!(order.line_items[0].metadata.price, 2200);
        assert_eq!(order.metadata.shop_order_id, Some(1_370_762_297));
        assert_eq!(order.shipments[0].carrier, "usps");
        assert!(order.sent_to_production_at.is_none());
        assert_eq!(order.printify_connect.unwrap().id, "abc");
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let order: Order =
            serde_json::from_value(json!({"id": "x", "status": "teleported"})).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);

        let order: Order = serde_json::from_value(json!({"id": "x", "status": "on-hold"})).unwrap();
        assert_eq!(order.status, OrderStatus::OnHold);
    }

    #[test]
    fn test_submission_serialization() {
        let mut print_areas = HashMap::new();
        print_areas.insert(
            "front".to_string(),
            vec![PrintAreaValue {
                src: "https://images.example.com/image.png".to_string(),
                scale: 0.15,
                x: 0.8,
                y: 0.34,
                angle: 0.0,
            }],
        );
        let submission = OrderSubmission {
            external_id: "2750e210".to_string(),
            label: None,
            line_items: vec![
                NewLineItem::for_product("5bfd0b66a342bcc9b5563216", 17887, 1),
                NewLineItem {
                    print_provider_id: Some(5),
                    blueprint_id: Some(9),
                    variant_id: Some(17887),
                    print_areas: Some(print_areas),
                    quantity: 2,
                    ..Default::default()
                },
            ],
            shipping_method: 1,
            send_shipping_notification: false,
            address_to: Address::default(),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert!(value.get("label").is_none());
        assert_eq!(
            value["line_items"][0],
            json!({"product_id": "5bfd0b66a342bcc9b5563216", "variant_id": 17887, "quantity": 1})
        );
        assert_eq!(value["line_items"][1]["print_areas"]["front"][0]["scale"], 0.15);
        assert_eq!(value["address_to"], json!({}));
    }

    #[test]
    fn test_sku_line_item() {
        let value = serde_json::to_value(NewLineItem::for_sku("MY-SKU", 3)).unwrap();
        assert_eq!(value, json!({"sku": "MY-SKU", "quantity": 3}));
    }

    #[test]
    fn test_shipping_costs_missing_methods() {
        let costs: ShippingCosts =
            serde_json::from_value(json!({"standard": 1000, "express": 5000})).unwrap();
        assert_eq!(costs.standard, Some(1000));
        assert_eq!(costs.express, Some(5000));
        assert!(costs.economy.is_none());
    }
}
