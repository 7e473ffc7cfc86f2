//! Printify API v1 resources.
//!
//! Each submodule declares its endpoints as `const` [`Operation`](crate::rest::Operation)
//! items and exposes them through methods on the resource type.
//!
//! # Resources
//!
//! - [`Shop`]: shops connected to the account
//! - [`Blueprint`], [`PrintProvider`]: the product catalog
//! - [`Product`]: products in a shop, including publishing
//! - [`Order`]: orders, production and shipping costs
//! - [`UploadedImage`]: the media library
//! - [`Webhook`]: webhook subscriptions
//!
//! Shop ids are integers and can be passed as [`ShopId`](crate::ShopId) or
//! any integer type; product, order, image and webhook ids are strings.

pub mod catalog;
pub mod common;
pub mod order;
pub mod product;
pub mod shop;
pub mod upload;
pub mod webhook;

pub use catalog::{
    Blueprint, BlueprintVariants, CatalogPlaceholder, CatalogVariant, HandlingTime, Location,
    PrintProvider, Shipping, ShippingCost, ShippingProfile, VariantOptions,
};
pub use common::{Address, PrintDetails, PrintOnSide};
pub use order::{
    LineItem, LineItemMetadata, NewLineItem, Order, OrderMetadata, OrderReference, OrderStatus,
    OrderSubmission, PrintAreaValue, PrintifyConnect, Shipment, ShippingCalculation,
    ShippingCosts,
};
pub use product::{
    MockupImage, PlacedImage, Placeholder, PrintArea, Product, ProductOption, ProductOptionValue,
    Publish, PublishReference, PublishingFailed, PublishingSucceeded, Variant,
};
pub use shop::Shop;
pub use upload::{ImageUpload, UploadedImage};
pub use webhook::{NewWebhook, Webhook, WebhookUpdate};
