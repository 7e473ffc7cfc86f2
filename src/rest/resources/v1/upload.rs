//! Image uploads.
//!
//! Images are uploaded once per account and referenced by id from product
//! print areas. An upload is either a public URL for Printify to fetch, or
//! base64 encoded file contents (recommended only for files under 5MB).
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{ImageUpload, UploadedImage};
//!
//! let image = UploadedImage::upload(
//!     &client,
//!     &ImageUpload::from_url("logo.png", "https://example.com/logo.png"),
//! )
//! .await?;
//!
//! let bytes = std::fs::read("design.png")?;
//! let image = UploadedImage::upload(&client, &ImageUpload::from_bytes("design.png", &bytes)).await?;
//!
//! UploadedImage::archive(&client, &image.id).await?;
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::v1::common::timestamp;
use crate::rest::{
    Direct, Json, NoBody, NoContent, Operation, Page, PageQuery, Paginated, PathArg,
};

/// An image stored in the account's media library.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UploadedImage {
    /// The upload id, used as `PlacedImage::id`.
    pub id: String,
    /// Original file name.
    #[serde(default)]
    pub file_name: String,
    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// MIME type, e.g. `image/png`.
    #[serde(default)]
    pub mime_type: String,
    /// URL of a preview rendition.
    #[serde(default)]
    pub preview_url: String,
    /// When the image was uploaded.
    #[serde(default, with = "timestamp")]
    pub upload_time: Option<DateTime<Utc>>,
}

/// An image to upload, by URL or by base64 contents.
///
/// Exactly one of `url` and `contents` should be set; use the constructors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name to store the image under.
    pub file_name: String,
    /// Public URL to fetch the image from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64 encoded file contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl ImageUpload {
    /// An upload Printify fetches from a public URL.
    #[must_use]
    pub fn from_url(file_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: Some(url.into()),
            contents: None,
        }
    }

    /// An upload of raw file bytes, base64 encoded here.
    #[must_use]
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Self {
        Self::from_base64(file_name, STANDARD.encode(bytes))
    }

    /// An upload of contents that are already base64 encoded.
    #[must_use]
    pub fn from_base64(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: None,
            contents: Some(contents.into()),
        }
    }
}

/// `GET /v1/uploads.json`
pub const LIST_UPLOADS: Operation<(), NoBody, Paginated<UploadedImage>> =
    Operation::new(HttpMethod::Get, "/v1/uploads.json");

/// `GET /v1/uploads/{image_id}.json`
pub const GET_UPLOAD: Operation<(String,), NoBody, Direct<UploadedImage>> =
    Operation::new(HttpMethod::Get, "/v1/uploads/%s.json");

/// `POST /v1/uploads/images.json`
pub const UPLOAD_IMAGE: Operation<(), Json<ImageUpload>, Direct<UploadedImage>> =
    Operation::new(HttpMethod::Post, "/v1/uploads/images.json");

/// `POST /v1/uploads/{image_id}/archive.json`
pub const ARCHIVE_UPLOAD: Operation<(String,), NoBody, NoContent> =
    Operation::new(HttpMethod::Post, "/v1/uploads/%s/archive.json");

impl UploadedImage {
    /// Lists uploaded images, first page only.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        LIST_UPLOADS.call(client, ()).await
    }

    /// Fetches one page of uploaded images.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn page(client: &HttpClient, query: PageQuery) -> Result<Page<Self>, HttpError> {
        LIST_UPLOADS.page(client, (), query).await
    }

    /// Fetches a single uploaded image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn find(
        client: &HttpClient,
        image_id: impl PathArg<String>,
    ) -> Result<Self, HttpError> {
        GET_UPLOAD.call(client, (image_id,)).await
    }

    /// Uploads an image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn upload(client: &HttpClient, upload: &ImageUpload) -> Result<Self, HttpError> {
        UPLOAD_IMAGE.call_with(client, (), upload).await
    }

    /// Archives an uploaded image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn archive(
        client: &HttpClient,
        image_id: impl PathArg<String>,
    ) -> Result<(), HttpError> {
        ARCHIVE_UPLOAD.call(client, (image_id,)).await
    }
}
