//! Product resource implementation.
//!
//! Products belong to a shop and are built from a catalog blueprint, a print
//! provider, a set of variants and the print areas holding uploaded images.
//!
//! # Publishing
//!
//! Publishing is a handshake with the sales channel: [`Product::publish`]
//! locks the product and emits a `product:publish:started` event, then the
//! channel reports back with [`Product::publishing_succeeded`] or
//! [`Product::publishing_failed`], either of which unlocks the product.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{Product, Publish};
//! use printify_api::rest::PageQuery;
//!
//! let page = Product::page(&client, shop_id, PageQuery::new().limit(20)).await?;
//! for product in page.iter() {
//!     println!("{}: {}", product.id.as_deref().unwrap_or("-"), product.title);
//! }
//!
//! let mut product = Product::find(&client, shop_id, "5d39b159e7c48c000728c89f").await?;
//! product.title = "Updated title".to_string();
//! let product = Product::update(&client, shop_id, "5d39b159e7c48c000728c89f", &product).await?;
//!
//! Product::publish(&client, shop_id, "5d39b159e7c48c000728c89f", &Publish::default()).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::v1::common::{one_or_many, timestamp, PrintDetails};
use crate::rest::{
    Direct, Json, NoBody, NoContent, Operation, Page, PageQuery, Paginated, PathArg,
};

/// A product in a shop.
///
/// Fields marked read-only are returned by the API but never sent back on
/// create or update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The product id. Read-only.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// The product name.
    #[serde(default)]
    pub title: String,

    /// HTML description.
    #[serde(default)]
    pub description: String,

    /// Tags, also published to the sales channel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Product options (up to three). Read-only.
    #[serde(default, skip_serializing)]
    pub options: Vec<ProductOption>,

    /// Variants. Only `id` and `price` are needed on creation.
    #[serde(default)]
    pub variants: Vec<Variant>,

    /// Mock-up images. Read-only.
    #[serde(default, skip_serializing)]
    pub images: Vec<MockupImage>,

    /// When the product was created. Read-only.
    #[serde(default, with = "timestamp", skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated. Read-only.
    #[serde(default, alias = "update_at", with = "timestamp", skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Visibility in the sales channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// The catalog blueprint. Required on creation, read-only after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<u64>,

    /// The print provider. Required on creation, read-only after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_provider_id: Option<u64>,

    /// Owning user. Read-only.
    #[serde(default, skip_serializing)]
    pub user_id: Option<u64>,

    /// Owning shop. Read-only.
    #[serde(default, skip_serializing)]
    pub shop_id: Option<u64>,

    /// Print areas with their placeholders and images.
    #[serde(default)]
    pub print_areas: Vec<PrintArea>,

    /// Side printing settings for canvases.
    #[serde(
        default,
        deserialize_with = "one_or_many::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub print_details: Vec<PrintDetails>,

    /// External reference set by publishing succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<PublishReference>,

    /// Whether the product is locked by an ongoing publish. Read-only.
    #[serde(default, skip_serializing)]
    pub is_locked: bool,

    /// Whether the product can ship with Printify Express. Read-only.
    #[serde(default, skip_serializing)]
    pub is_printify_express_eligible: bool,

    /// Whether the product can ship with economy shipping. Read-only.
    #[serde(default, skip_serializing)]
    pub is_economy_shipping_eligible: bool,

    /// Offer Printify Express for this product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_printify_express_enabled: Option<bool>,

    /// Offer economy shipping for this product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_economy_shipping_enabled: Option<bool>,

    /// Channel-specific properties. Read-only.
    #[serde(default, skip_serializing)]
    pub sales_channel_properties: Vec<serde_json::Value>,
}

/// A product option such as colors or sizes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    /// Display name, e.g. `Colors`.
    pub name: String,
    /// Option kind, e.g. `color` or `size`.
    #[serde(rename = "type")]
    pub option_type: String,
    /// Possible values.
    #[serde(default)]
    pub values: Vec<ProductOptionValue>,
}

/// One value of a [`ProductOption`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOptionValue {
    /// Option value id, referenced by `Variant::options`.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Hex colors for color options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

/// A product variant.
///
/// Prices and costs are integer cents.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Variant {
    /// The catalog variant id.
    pub id: u64,

    /// Stock keeping unit, generated when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Retail price in cents.
    pub price: u64,

    /// Fulfillment cost. Read-only.
    #[serde(default, skip_serializing)]
    pub cost: Option<u64>,

    /// Variant title. Read-only.
    #[serde(default, skip_serializing)]
    pub title: Option<String>,

    /// Weight in grams. Read-only.
    #[serde(default, skip_serializing)]
    pub grams: Option<u64>,

    /// Whether the variant is offered and published.
    #[serde(default = "enabled")]
    pub is_enabled: bool,

    /// Only one variant can be default.
    #[serde(default)]
    pub is_default: bool,

    /// Stock status. Read-only.
    #[serde(default, skip_serializing)]
    pub is_available: Option<bool>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub is_printify_express_eligible: Option<bool>,

    /// Option value ids, in option order. Read-only.
    #[serde(default, skip_serializing)]
    pub options: Vec<u64>,
}

const fn enabled() -> bool {
    true
}

/// A mock-up image of the product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MockupImage {
    /// Image URL.
    pub src: String,
    /// Variants shown in the image.
    #[serde(default)]
    pub variant_ids: Vec<u64>,
    /// Camera position, e.g. `front`.
    #[serde(default)]
    pub position: String,
    /// Whether this is the main image.
    #[serde(default)]
    pub is_default: bool,
}

/// A print area: a set of variants sharing placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrintArea {
    /// Variants this print area applies to.
    pub variant_ids: Vec<u64>,
    /// Printable positions.
    pub placeholders: Vec<Placeholder>,
}

/// A printable position and the images placed on it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Placeholder {
    /// Catalog placeholder position, e.g. `front`.
    pub position: String,
    /// Images in drawing order.
    #[serde(default)]
    pub images: Vec<PlacedImage>,
}

/// An uploaded image positioned in a placeholder.
///
/// `x` and `y` are relative to the placeholder (0.5 is centered), `scale`
/// is relative to the placeholder width.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlacedImage {
    /// The uploaded image id.
    pub id: String,
    /// Original file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type, e.g. `image/png`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Image height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Image width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub angle: i32,
}

/// What the sales channel should publish.
///
/// Defaults to publishing everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publish {
    /// Publish the title.
    pub title: bool,
    /// Publish the description.
    pub description: bool,
    /// Publish the mock-up images.
    pub images: bool,
    /// Publish the variants and prices.
    pub variants: bool,
    /// Publish the tags.
    pub tags: bool,
    /// Walmart only.
    pub key_features: bool,
    /// Etsy and Walmart only.
    pub shipping_template: bool,
}

impl Default for Publish {
    fn default() -> Self {
        Self {
            title: true,
            description: true,
            images: true,
            variants: true,
            tags: true,
            key_features: true,
            shipping_template: true,
        }
    }
}

/// The product's identity in the sales channel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PublishReference {
    /// Product id in the sales channel.
    pub id: String,
    /// Product URL or handle in the sales channel.
    pub handle: String,
    /// Shipping template in the sales channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_template_id: Option<String>,
}

/// Body of the publishing succeeded call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishingSucceeded {
    /// Where the product was published.
    pub external: PublishReference,
}

/// Body of the publishing failed call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishingFailed {
    /// Why publishing failed.
    pub reason: String,
}

/// `GET /v1/shops/{shop_id}/products.json`
pub const LIST_PRODUCTS: Operation<(u64,), NoBody, Paginated<Product>> =
    Operation::new(HttpMethod::Get, "/v1/shops/%d/products.json");

/// `GET /v1/shops/{shop_id}/products/{product_id}.json`
pub const GET_PRODUCT: Operation<(u64, String), NoBody, Direct<Product>> =
    Operation::new(HttpMethod::Get, "/v1/shops/%d/products/%s.json");

/// `POST /v1/shops/{shop_id}/products.json`
pub const CREATE_PRODUCT: Operation<(u64,), Json<Product>, Direct<Product>> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/products.json");

/// `PUT /v1/shops/{shop_id}/products/{product_id}.json`
pub const UPDATE_PRODUCT: Operation<(u64, String), Json<Product>, Direct<Product>> =
    Operation::new(HttpMethod::Put, "/v1/shops/%d/products/%s.json");

/// `DELETE /v1/shops/{shop_id}/products/{product_id}.json`
pub const DELETE_PRODUCT: Operation<(u64, String), NoBody, NoContent> =
    Operation::new(HttpMethod::Delete, "/v1/shops/%d/products/%s.json");

/// `POST /v1/shops/{shop_id}/products/{product_id}/publish.json`
pub const PUBLISH_PRODUCT: Operation<(u64, String), Json<Publish>, NoContent> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/products/%s/publish.json");

/// `POST /v1/shops/{shop_id}/products/{product_id}/publishing_succeeded.json`
pub const PUBLISHING_SUCCEEDED: Operation<(u64, String), Json<PublishingSucceeded>, NoContent> =
    Operation::new(
        HttpMethod::Post,
        "/v1/shops/%d/products/%s/publishing_succeeded.json",
    );

/// `POST /v1/shops/{shop_id}/products/{product_id}/publishing_failed.json`
pub const PUBLISHING_FAILED: Operation<(u64, String), Json<PublishingFailed>, NoContent> =
    Operation::new(
        HttpMethod::Post,
        "/v1/shops/%d/products/%s/publishing_failed.json",
    );

/// `POST /v1/shops/{shop_id}/products/{product_id}/unpublished.json`
pub const NOTIFY_UNPUBLISHED: Operation<(u64, String), NoBody, NoContent> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/products/%s/unpublished.json");

impl Product {
    /// Lists the products of a shop, first page only.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn all(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
    ) -> Result<Vec<Self>, HttpError> {
        LIST_PRODUCTS.call(client, (shop_id,)).await
    }

    /// Fetches one page of a shop's products.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn page(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        query: PageQuery,
    ) -> Result<Page<Self>, HttpError> {
        LIST_PRODUCTS.page(client, (shop_id,), query).await
    }

    /// Fetches a single product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn find(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
    ) -> Result<Self, HttpError> {
        GET_PRODUCT.call(client, (shop_id, product_id)).await
    }

    /// Creates a product and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn create(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product: &Self,
    ) -> Result<Self, HttpError> {
        CREATE_PRODUCT.call_with(client, (shop_id,), product).await
    }

    /// Updates a product and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    /// Locked products are rejected with an API error.
    pub async fn update(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
        product: &Self,
    ) -> Result<Self, HttpError> {
        UPDATE_PRODUCT
            .call_with(client, (shop_id, product_id), product)
            .await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
    ) -> Result<(), HttpError> {
        DELETE_PRODUCT.call(client, (shop_id, product_id)).await
    }

    /// Starts publishing a product to the sales channel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn publish(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
        publish: &Publish,
    ) -> Result<(), HttpError> {
        PUBLISH_PRODUCT
            .call_with(client, (shop_id, product_id), publish)
            .await
    }

    /// Reports a successful publish and unlocks the product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn publishing_succeeded(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
        external: PublishReference,
    ) -> Result<(), HttpError> {
        PUBLISHING_SUCCEEDED
            .call_with(
                client,
                (shop_id, product_id),
                &PublishingSucceeded { external },
            )
            .await
    }

    /// Reports a failed publish and unlocks the product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn publishing_failed(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
        reason: impl Into<String>,
    ) -> Result<(), HttpError> {
        PUBLISHING_FAILED
            .call_with(
                client,
                (shop_id, product_id),
                &PublishingFailed {
                    reason: reason.into(),
                },
            )
            .await
    }

    /// Notifies Printify that the product was removed from the sales
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn notify_unpublished(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        product_id: impl PathArg<String>,
    ) -> Result<(), HttpError> {
        NOTIFY_UNPUBLISHED.call(client, (shop_id, product_id)).await
    }
}
