//! Webhook subscriptions for a shop.
//!
//! Incoming deliveries are handled by the [`webhooks`](crate::webhooks)
//! module; this module only manages the subscriptions.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{NewWebhook, Webhook};
//! use printify_api::webhooks::EventType;
//!
//! let hook = NewWebhook::new(EventType::OrderCreated, "https://example.com/webhooks/order/created")
//!     .secret("my-signing-secret");
//! let webhook = Webhook::create(&client, shop_id, &hook).await?;
//!
//! Webhook::update(&client, shop_id, &webhook.id, "https://example.com/hooks").await?;
//! Webhook::delete(&client, shop_id, &webhook.id).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::{Direct, Json, NoBody, NoContent, Operation, PathArg};
use crate::webhooks::EventType;

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The webhook id.
    pub id: String,
    /// The subscribed event type, e.g. `order:created`.
    pub topic: String,
    /// Where deliveries are sent.
    pub url: String,
    /// The shop the webhook belongs to.
    #[serde(default)]
    pub shop_id: u64,
    /// The signing secret, when one was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Webhook {
    /// Returns the topic as an [`EventType`], if it is a known one.
    #[must_use]
    pub fn event_type(&self) -> Option<EventType> {
        self.topic.parse().ok()
    }
}

/// A webhook to create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewWebhook {
    /// Event type to subscribe to, e.g. `order:created`.
    pub topic: String,
    /// URL that receives the events.
    pub url: String,
    /// Secret used to sign deliveries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl NewWebhook {
    /// Creates a subscription request for `topic` delivered to `url`.
    #[must_use]
    pub fn new(topic: EventType, url: impl Into<String>) -> Self {
        Self {
            topic: topic.as_str().to_string(),
            url: url.into(),
            secret: None,
        }
    }

    /// Sets the secret used to sign deliveries.
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Body of the update call. Only the URL can change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookUpdate {
    /// The new delivery URL.
    pub url: String,
}

/// `GET /v1/shops/{shop_id}/webhooks.json`
pub const LIST_WEBHOOKS: Operation<(u64,), NoBody, Direct<Vec<Webhook>>> =
    Operation::new(HttpMethod::Get, "/v1/shops/%d/webhooks.json");

/// `POST /v1/shops/{shop_id}/webhooks.json`
pub const CREATE_WEBHOOK: Operation<(u64,), Json<NewWebhook>, Direct<Webhook>> =
    Operation::new(HttpMethod::Post, "/v1/shops/%d/webhooks.json");

/// `PUT /v1/shops/{shop_id}/webhooks/{webhook_id}.json`
pub const UPDATE_WEBHOOK: Operation<(u64, String), Json<WebhookUpdate>, Direct<Webhook>> =
    Operation::new(HttpMethod::Put, "/v1/shops/%d/webhooks/%s.json");

/// `DELETE /v1/shops/{shop_id}/webhooks/{webhook_id}.json`
pub const DELETE_WEBHOOK: Operation<(u64, String), NoBody, NoContent> =
    Operation::new(HttpMethod::Delete, "/v1/shops/%d/webhooks/%s.json");

impl Webhook {
    /// Lists a shop's webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn all(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
    ) -> Result<Vec<Self>, HttpError> {
        LIST_WEBHOOKS.call(client, (shop_id,)).await
    }

    /// Creates a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn create(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        webhook: &NewWebhook,
    ) -> Result<Self, HttpError> {
        CREATE_WEBHOOK.call_with(client, (shop_id,), webhook).await
    }

    /// Changes a webhook's delivery URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn update(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        webhook_id: impl PathArg<String>,
        url: impl Into<String>,
    ) -> Result<Self, HttpError> {
        UPDATE_WEBHOOK
            .call_with(
                client,
                (shop_id, webhook_id),
                &WebhookUpdate { url: url.into() },
            )
            .await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(
        client: &HttpClient,
        shop_id: impl PathArg<u64>,
        webhook_id: impl PathArg<String>,
    ) -> Result<(), HttpError> {
        DELETE_WEBHOOK.call(client, (shop_id, webhook_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::count_placeholders;
    use serde_json::json;

    #[test]
    fn test_webhook_templates_match_arity() {
        let configs = [
            LIST_WEBHOOKS.config(),
            CREATE_WEBHOOK.config(),
            UPDATE_WEBHOOK.config(),
            DELETE_WEBHOOK.config(),
        ];
        for config in configs {
            assert_eq!(count_placeholders(config.template).unwrap(), config.arity);
        }
    }

    #[test]
    fn test_webhook_ids_are_substituted() {
        let request = DELETE_WEBHOOK
            .build_request((1, "5cb87a8cd490a2ccb256cec4"), None, None)
            .unwrap();
        assert_eq!(
            request.path,
            "/v1/shops/1/webhooks/5cb87a8cd490a2ccb256cec4.json"
        );
    }

    #[test]
    fn test_new_webhook_serialization() {
        let hook = NewWebhook::new(EventType::OrderCreated, "https://example.com/hook");
        assert_eq!(
            serde_json::to_value(&hook).unwrap(),
            json!({"topic": "order:created", "url": "https://example.com/hook"})
        );

        let hook = hook.secret("s3cret");
        assert_eq!(serde_json::to_value(&hook).unwrap()["secret"], "s3cret");
    }

    #[test]
    fn test_webhook_event_type() {
        let webhook: Webhook = serde_json::from_value(json!({
            "topic": "order:created",
            "url": "https://example.com/webhooks/order/created",
            "shop_id": 1,
            "id": "5cb87a8cd490a2ccb256cec4"
        }))
        .unwrap();
        assert_eq!(webhook.event_type(), Some(EventType::OrderCreated));
        assert!(webhook.secret.is_none());

        let unknown = Webhook {
            topic: "something:else".to_string(),
            ..webhook
        };
        assert_eq!(unknown.event_type(), None);
    }
}
