//! REST operation infrastructure for the Printify API.
//!
//! This module provides the generic resource-access layer every resource
//! module is built from:
//!
//! - **[`Operation`]**: a const-constructible, typed endpoint binding
//! - **Path building**: printf-style templates with typed path parameters
//! - **Response decoding**: direct bodies and [`Page<T>`] envelopes
//!
//! # Overview
//!
//! Individual resources (Product, Order, etc.) live in the [`resources`]
//! submodule. Each declares one `const` [`Operation`] per API call and wraps
//! it in an ergonomic method.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{Order, Product, Shop};
//! use printify_api::rest::PageQuery;
//!
//! // List shops
//! let shops = Shop::all(&client).await?;
//!
//! // List the first page of products in a shop
//! let page = Product::page(&client, shops[0].id, PageQuery::new().limit(10)).await?;
//! for product in page.iter() {
//!     println!("- {}", product.title);
//! }
//!
//! // Fetch a single order
//! let order = Order::find(&client, shops[0].id, "5a96f649b2439217d070f507").await?;
//! ```
//!
//! # Example: Declaring an Operation
//!
//! ```rust
//! use printify_api::rest::{Direct, NoBody, Operation, ResponseShape};
//! use printify_api::HttpMethod;
//!
//! const GET_BLUEPRINT: Operation<(u64,), NoBody, Direct<serde_json::Value>> =
//!     Operation::new(HttpMethod::Get, "/v1/catalog/blueprints/%d.json");
//!
//! let config = GET_BLUEPRINT.config();
//! assert_eq!(config.arity, 1);
//! assert!(!config.has_body);
//! assert_eq!(config.shape, ResponseShape::Direct);
//! ```

mod operation;
mod path;
mod response;

pub mod resources;

pub use operation::{BodyKind, EndpointConfig, Json, NoBody, Operation};
pub use path::{build_path, count_placeholders, PathArg, PathArgs, PathParams, PathSlot};
pub use response::{
    Direct, NoContent, Page, PageQuery, Paginated, ResponseFormat, ResponseShape,
};
