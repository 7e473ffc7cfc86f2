//! Response decoding for REST operations.
//!
//! Printify endpoints answer in one of two shapes. Most return the bare
//! resource or a bare array. Paginated list endpoints (products, orders,
//! uploads) wrap their results in an envelope:
//!
//! ```json
//! {
//!   "current_page": 1,
//!   "data": [ ... ],
//!   "first_page_url": "/?page=1",
//!   "last_page": 3,
//!   "next_page_url": "/?page=2",
//!   "per_page": 10,
//!   "total": 27
//! }
//! ```
//!
//! Each operation fixes its shape through a [`ResponseFormat`] type
//! parameter; the shape is never detected at runtime.
//!
//! - [`NoContent`]: the body is discarded and `()` is returned
//! - [`Direct<T>`]: the body is decoded into `T`
//! - [`Paginated<T>`]: the body is decoded into a [`Page<T>`] and its `data`
//!   is returned as a `Vec<T>`
//!
//! # Deref Pattern
//!
//! [`Page<T>`] implements `Deref<Target = Vec<T>>`, so a page can be used
//! like the vector of its items:
//!
//! ```rust
//! use printify_api::rest::Page;
//!
//! let page: Page<u32> = serde_json::from_str(
//!     r#"{"current_page": 1, "last_page": 2, "data": [3, 1, 2], "next_page_url": "/?page=2"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(page.len(), 3);
//! assert_eq!(page[0], 3);
//! assert!(page.has_next_page());
//! assert_eq!(page.into_data(), vec![3, 1, 2]);
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{DecodeError, HttpResponse};

/// A pagination envelope returned by paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in API order.
    pub data: Vec<T>,
    /// URL of the first page.
    #[serde(default)]
    pub first_page_url: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub prev_page_url: Option<String>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// URL of the last page.
    #[serde(default)]
    pub last_page_url: Option<String>,
    /// The 1-based number of this page.
    #[serde(default)]
    pub current_page: u32,
    /// The number of the last page.
    #[serde(default)]
    pub last_page: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Page size used by the API.
    #[serde(default)]
    pub per_page: u32,
    /// 1-based index of the first item on this page.
    #[serde(default)]
    pub from: Option<u64>,
    /// 1-based index of the last item on this page.
    #[serde(default)]
    pub to: Option<u64>,
}

impl<T> Page<T> {
    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Returns `true` if the API reports a following page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some() || self.current_page < self.last_page
    }

    /// Returns `true` if the API reports a preceding page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_url.is_some() || self.current_page > 1
    }

    /// Returns the number of the following page, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page() {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}

impl<T> Deref for Page<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Page<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// Query parameters accepted by paginated list endpoints.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::PageQuery;
///
/// let query = PageQuery::new().page(2).limit(50);
/// assert_eq!(query.page, Some(2));
/// assert_eq!(query.limit, Some(50));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// The 1-based page number to fetch.
    pub page: Option<u32>,
    /// Number of results per page.
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Creates an empty query (the API's defaults apply).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            limit: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_query(self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        query
    }
}

/// The response shape of an operation, as reported by
/// [`EndpointConfig`](crate::rest::EndpointConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// No value is decoded.
    Empty,
    /// The body is the resource or array itself.
    Direct,
    /// The body is a pagination envelope.
    Paginated,
}

/// A decoding strategy for response bodies.
pub trait ResponseFormat {
    /// The value produced by a successful decode.
    type Output;

    /// The shape this format expects.
    const SHAPE: ResponseShape;

    /// Decodes a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body does not match the shape.
    fn decode(response: &HttpResponse) -> Result<Self::Output, DecodeError>;
}

/// Discards the response body.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

impl ResponseFormat for NoContent {
    type Output = ();
    const SHAPE: ResponseShape = ResponseShape::Empty;

    fn decode(_response: &HttpResponse) -> Result<Self::Output, DecodeError> {
        Ok(())
    }
}

/// Decodes the body directly into `T`.
///
/// `T` is a single resource or a `Vec` of resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> ResponseFormat for Direct<T> {
    type Output = T;
    const SHAPE: ResponseShape = ResponseShape::Direct;

    fn decode(response: &HttpResponse) -> Result<Self::Output, DecodeError> {
        response.json()
    }
}

/// Decodes a pagination envelope and yields its `data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginated<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> Paginated<T> {
    /// Decodes the full envelope, keeping the pagination metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not a pagination envelope of `T`.
    pub fn decode_page(response: &HttpResponse) -> Result<Page<T>, DecodeError> {
        response.json()
    }
}

impl<T: DeserializeOwned> ResponseFormat for Paginated<T> {
    type Output = Vec<T>;
    const SHAPE: ResponseShape = ResponseShape::Paginated;

    fn decode(response: &HttpResponse) -> Result<Self::Output, DecodeError> {
        Self::decode_page(response).map(Page::into_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body.to_string().into_bytes())
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_direct_decodes_object() {
        let item = Direct::<Item>::decode(&response(json!({"id": 4}))).unwrap();
        assert_eq!(item, Item { id: 4 });
    }

    #[test]
    fn test_direct_decodes_array_in_order() {
        let items =
            Direct::<Vec<Item>>::decode(&response(json!([{"id": 2}, {"id": 1}]))).unwrap();
        assert_eq!(items, vec![Item { id: 2 }, Item { id: 1 }]);
    }

    #[test]
    fn test_paginated_unwraps_data_preserving_order() {
        let body = json!({
            "current_page": 1,
            "data": [{"id": 9}, {"id": 3}, {"id": 5}],
            "first_page_url": "/?page=1",
            "from": 1,
            "last_page": 1,
            "last_page_url": "/?page=1",
            "next_page_url": null,
            "per_page": 10,
            "prev_page_url": null,
            "to": 3,
            "total": 3
        });

        let items = Paginated::<Item>::decode(&response(body)).unwrap();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![9, 3, 5]);
    }

    #[test]
    fn test_paginated_rejects_bare_array() {
        let result = Paginated::<Item>::decode(&response(json!([{"id": 1}])));
        assert!(result.is_err());
    }

    #[test]
    fn test_direct_rejects_mismatched_json() {
        let result = Direct::<Item>::decode(&response(json!({"id": "not-a-number"})));
        assert_eq!(result.unwrap_err().status, 200);
    }

    #[test]
    fn test_no_content_ignores_body() {
        let malformed = HttpResponse::new(200, HashMap::new(), b"<ok>".to_vec());
        NoContent::decode(&malformed).unwrap();
    }

    #[test]
    fn test_page_metadata_and_navigation() {
        let page: Page<Item> = serde_json::from_value(json!({
            "current_page": 2,
            "last_page": 3,
            "data": [],
            "total": 25,
            "per_page": 10,
            "prev_page_url": "/?page=1",
            "next_page_url": "/?page=3"
        }))
        .unwrap();

        assert!(page.is_empty());
        assert!(page.has_prev_page());
        assert!(page.has_next_page());
        assert_eq!(page.next_page(), Some(3));
        assert_eq!(page.total, 25);
        assert!(page.from.is_none());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page: Page<Item> = serde_json::from_value(json!({
            "current_page": 3,
            "last_page": 3,
            "data": [{"id": 1}]
        }))
        .unwrap();

        assert!(!page.has_next_page());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_next_page_at_u32_max_does_not_overflow() {
        let page: Page<Item> = serde_json::from_value(json!({
            "current_page": u32::MAX,
            "last_page": u32::MAX,
            "next_page_url": "/?page=overflow",
            "data": []
        }))
        .unwrap();

        assert!(page.has_next_page());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_page_query_to_query() {
        assert!(PageQuery::new().to_query().is_empty());

        let query = PageQuery::new().page(4).limit(25).to_query();
        assert_eq!(query.get("page"), Some(&"4".to_string()));
        assert_eq!(query.get("limit"), Some(&"25".to_string()));
    }

    #[test]
    fn test_shapes() {
        assert_eq!(NoContent::SHAPE, ResponseShape::Empty);
        assert_eq!(Direct::<Item>::SHAPE, ResponseShape::Direct);
        assert_eq!(Paginated::<Item>::SHAPE, ResponseShape::Paginated);
    }
}
