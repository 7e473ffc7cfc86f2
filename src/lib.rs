//! # Printify API Rust SDK
//!
//! A Rust SDK for the Printify print-on-demand REST API, providing validated
//! configuration, an async HTTP transport and typed resource operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PrintifyConfig`] and [`PrintifyConfigBuilder`]
//! - Validated newtypes for the access token, host and shop id
//! - An async HTTP client that authenticates every request and classifies
//!   responses into [`HttpError`] variants
//! - Declarative, `const` REST operations ([`rest::Operation`]) with typed
//!   path parameters, bodies and response shapes
//! - Typed v1 resources: shops, catalog, products, orders, uploads and webhooks
//! - Signature verification for incoming webhook events
//!
//! ## Quick Start
//!
//! ```rust
//! use printify_api::{AccessToken, PrintifyConfig, ShopId};
//!
//! let config = PrintifyConfig::builder()
//!     .access_token(AccessToken::new("your-personal-access-token").unwrap())
//!     .shop_id(ShopId::new(12345).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.printify.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use printify_api::{AccessToken, HttpClient, PrintifyConfig};
//! use printify_api::rest::resources::v1::{Order, Product, Shop};
//! use printify_api::rest::PageQuery;
//!
//! let config = PrintifyConfig::builder()
//!     .access_token(AccessToken::new("your-personal-access-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let shops = Shop::all(&client).await?;
//! let shop_id = shops[0].id;
//!
//! let products = Product::page(&client, shop_id, PageQuery::new().limit(50)).await?;
//! let order = Order::find(&client, shop_id, "5a96f649b2439217d070f507").await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, HttpError>`:
//!
//! ```rust,ignore
//! use printify_api::HttpError;
//!
//! match Product::find(&client, shop_id, "missing").await {
//!     Ok(product) => println!("{}", product.title),
//!     Err(HttpError::Api(e)) if e.status == 404 => println!("not found"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {:?}", e.status, e.message()),
//!     Err(HttpError::Decode(e)) => println!("unexpected body: {e}"),
//!     Err(HttpError::Transport(e)) => println!("network error: {e}"),
//!     Err(HttpError::Construction(e)) => println!("bad request: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`; one client serves many tasks
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: One call is one request

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, HostUrl, PrintifyConfig, PrintifyConfigBuilder, ShopId};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ConstructionError, DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse,
};
