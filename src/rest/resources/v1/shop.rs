//! Shop resource implementation.
//!
//! A shop is a sales channel connected to a Printify account. Every product,
//! order, upload listing and webhook hangs off a shop id.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::Shop;
//!
//! let shops = Shop::all(&client).await?;
//! for shop in &shops {
//!     println!("{} ({}) via {}", shop.title, shop.id, shop.sales_channel);
//! }
//!
//! Shop::disconnect(&client, shops[0].id).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::{Direct, NoBody, NoContent, Operation, PathArg};

/// A shop connected to the Printify account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shop {
    /// The shop id.
    pub id: u64,

    /// The shop's display name.
    #[serde(default)]
    pub title: String,

    /// The sales channel the shop is connected through, e.g. `etsy` or
    /// `custom_integration`.
    #[serde(default)]
    pub sales_channel: String,
}

/// `GET /v1/shops.json`
pub const LIST_SHOPS: Operation<(), NoBody, Direct<Vec<Shop>>> =
    Operation::new(HttpMethod::Get, "/v1/shops.json");

/// `DELETE /v1/shops/{shop_id}/connection.json`
pub const DISCONNECT_SHOP: Operation<(u64,), NoBody, NoContent> =
    Operation::new(HttpMethod::Delete, "/v1/shops/%d/connection.json");

impl Shop {
    /// Lists every shop in the account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not a list
    /// of shops.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        LIST_SHOPS.call(client, ()).await
    }

    /// Disconnects a shop from the account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn disconnect(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
    ) -> Result<(), HttpError> {
        DISCONNECT_SHOP.call(client, (shop_id,)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{count_placeholders, ResponseShape};
    use serde_json::json;

    #[test]
    fn test_shop_templates_match_arity() {
        for config in [LIST_SHOPS.config(), DISCONNECT_SHOP.config()] {
            assert_eq!(count_placeholders(config.template).unwrap(), config.arity);
            assert!(!config.has_body);
        }
        assert_eq!(DISCONNECT_SHOP.config().shape, ResponseShape::Empty);
    }

    #[test]
    fn test_disconnect_targets_connection_endpoint() {
        let request = DISCONNECT_SHOP.build_request((42,), None, None).unwrap();
        assert_eq!(request.http_method, HttpMethod::Delete);
        assert_eq!(request.path, "/v1/shops/42/connection.json");
    }

    #[test]
    fn test_shop_deserialization() {
        let shops: Vec<Shop> = serde_json::from_value(json!([
            {"id": 5432, "title": "My new store", "sales_channel": "My Sales Channel"},
            {"id": 9876, "title": "My other new store", "sales_channel": "disconnected"}
        ]))
        .unwrap();

        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].id, 5432);
        assert_eq!(shops[1].sales_channel, "disconnected");
    }
}
