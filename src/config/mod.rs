//! Configuration types for the Printify API SDK.
//!
//! This module provides the configuration used to initialize the SDK for
//! communication with the Printify REST API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PrintifyConfig`]: The main configuration struct holding all SDK settings
//! - [`PrintifyConfigBuilder`]: A builder for constructing [`PrintifyConfig`] instances
//! - [`AccessToken`]: A validated personal access token with masked debug output
//! - [`HostUrl`]: A validated API host URL
//! - [`ShopId`]: A validated shop identifier
//!
//! # Example
//!
//! ```rust
//! use printify_api::{AccessToken, PrintifyConfig, ShopId};
//!
//! let config = PrintifyConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .shop_id(ShopId::new(12345).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.printify.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl, ShopId};

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use std::time::Duration;

/// The production Printify API host.
pub const DEFAULT_HOST: &str = "https://api.printify.com";

/// Configuration for the Printify API SDK.
///
/// This struct holds the credential, the API host, and transport settings
/// shared by every request made through an [`HttpClient`](crate::HttpClient).
///
/// # Thread Safety
///
/// `PrintifyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use printify_api::{AccessToken, HostUrl, PrintifyConfig};
/// use std::time::Duration;
///
/// let config = PrintifyConfig::builder()
///     .access_token(AccessToken::new("your-token").unwrap())
///     .host(HostUrl::new("http://localhost:8080").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug)]
pub struct PrintifyConfig {
    access_token: AccessToken,
    host: HostUrl,
    shop_id: Option<ShopId>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PrintifyConfig {
    /// Creates a new builder for constructing a `PrintifyConfig`.
    #[must_use]
    pub fn builder() -> PrintifyConfigBuilder {
        PrintifyConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the default shop id, if configured.
    #[must_use]
    pub const fn shop_id(&self) -> Option<ShopId> {
        self.shop_id
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify PrintifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintifyConfig>();
};

/// Builder for constructing [`PrintifyConfig`] instances.
///
/// The only required field is `access_token`.
///
/// # Defaults
///
/// - `host`: `https://api.printify.com`
/// - `shop_id`: `None`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no timeout beyond the HTTP library's own)
#[derive(Debug, Default)]
pub struct PrintifyConfigBuilder {
    access_token: Option<AccessToken>,
    host: Option<HostUrl>,
    shop_id: Option<ShopId>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PrintifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the personal access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API host, e.g. to point at a proxy or a mock server.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the default shop used by shop-scoped helpers.
    #[must_use]
    pub const fn shop_id(mut self, shop_id: ShopId) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the total timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PrintifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not
    /// set, or [`ConfigError::InvalidHeaderValue`] if the user agent prefix
    /// cannot be sent in the `User-Agent` header.
    pub fn build(self) -> Result<PrintifyConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        if let Some(prefix) = &self.user_agent_prefix {
            if HeaderValue::from_str(prefix).is_err() {
                return Err(ConfigError::InvalidHeaderValue {
                    field: "user_agent_prefix",
                });
            }
        }

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };

        Ok(PrintifyConfig {
            access_token,
            host,
            shop_id: self.shop_id,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_access_token() {
        let result = PrintifyConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_rejects_user_agent_prefix_with_line_break() {
        let result = PrintifyConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0\r\nX-Injected: yes")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue {
                field: "user_agent_prefix"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PrintifyConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.host().as_ref(), DEFAULT_HOST);
        assert!(config.shop_id().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = PrintifyConfig::builder()
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("PrintifyConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://127.0.0.1:9000").unwrap();
        let shop = ShopId::new(777).unwrap();

        let config = PrintifyConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .host(host.clone())
            .shop_id(shop)
            .user_agent_prefix("MyStore/2.1")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.host(), &host);
        assert_eq!(config.shop_id(), Some(shop));
        assert_eq!(config.user_agent_prefix(), Some("MyStore/2.1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_is_clone() {
        let config = PrintifyConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.access_token(), config.access_token());
    }
}
