//! HTTP client types for Printify API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Printify API. It builds requests, sends them, and
//! classifies responses by status code.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client (the transport context)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A fully read response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: The unified error type returned by every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::{AccessToken, HttpClient, HttpMethod, HttpRequest, PrintifyConfig};
//!
//! let config = PrintifyConfig::builder()
//!     .access_token(AccessToken::new("my-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/v1/shops.json").build();
//! let response = client.request(request).await?;
//! println!("{}", response.text());
//! ```
//!
//! # Status Classification
//!
//! - **< 400**: the response is returned for decoding
//! - **>= 400**: the body is decoded as a JSON object and returned as
//!   [`HttpError::Api`], or as [`HttpError::Decode`] when it is not one
//!
//! Requests are never retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, ConstructionError, DecodeError, HttpError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
