//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports the current version)
//!   v1/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! # Using Resources
//!
//! The current version is re-exported at this module level for convenience:
//!
//! ```rust,ignore
//! use printify_api::rest::resources::Product;  // Uses v1
//!
//! // Or explicitly specify a version:
//! use printify_api::rest::resources::v1::Product;
//! ```
//!
//! # Available Resources
//!
//! | Resource | Operations |
//! |----------|------------|
//! | [`Shop`] | list, disconnect |
//! | [`Blueprint`], [`PrintProvider`] | catalog browsing, variants, shipping |
//! | [`Product`] | list, get, create, update, delete, publish and publishing status |
//! | [`Order`] | list, get, submit, express, send to production, shipping costs, cancel |
//! | [`UploadedImage`] | list, get, upload, archive |
//! | [`Webhook`] | list, create, update, delete |

pub mod v1;

pub use v1::*;
