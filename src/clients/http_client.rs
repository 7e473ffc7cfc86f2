//! HTTP client for Printify API communication.
//!
//! This module provides the [`HttpClient`] type, the transport context every
//! operation runs against. It owns the connection pool, the API host and the
//! bearer credential, and classifies responses by status code.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::{Map, Value};

use crate::clients::errors::{ApiError, ConstructionError, DecodeError, HttpError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{PrintifyConfig, ShopId};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Printify API.
///
/// The client handles:
/// - Base URI construction from the configured host
/// - Default headers including User-Agent and the bearer token
/// - Status code classification into [`HttpError::Api`]
///
/// The client is never mutated after construction.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share by reference
/// across concurrently running operations.
///
/// # Example
///
/// ```rust,ignore
/// use printify_api::{AccessToken, HttpClient, HttpMethod, HttpRequest, PrintifyConfig};
///
/// let config = PrintifyConfig::builder()
///     .access_token(AccessToken::new("my-token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/v1/shops.json").build();
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.printify.com`).
    base_uri: String,
    shop_id: Option<ShopId>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// The configured timeout, if any, is applied to every request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &PrintifyConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self::with_reqwest_client(config, client))
    }

    /// Creates a new HTTP client that sends requests through an existing
    /// [`reqwest::Client`].
    ///
    /// The configured timeout is not applied; the supplied client's own
    /// settings are used as-is.
    #[must_use]
    pub fn with_reqwest_client(config: &PrintifyConfig, client: reqwest::Client) -> Self {
        let base_uri = config.host().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Printify API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer(),
        );

        tracing::debug!(base_uri = %base_uri, "Created Printify HTTP client");

        Self {
            client,
            base_uri,
            shop_id: config.shop_id(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default shop id, if one was configured.
    #[must_use]
    pub const fn shop_id(&self) -> Option<ShopId> {
        self.shop_id
    }

    /// Returns the default shop id or an error if none was configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when the configuration
    /// had no `shop_id`.
    pub const fn default_shop(&self) -> Result<ShopId, ConfigError> {
        match self.shop_id {
            Some(id) => Ok(id),
            None => Err(ConfigError::MissingRequiredField { field: "shop_id" }),
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Printify API.
    ///
    /// The response body is read in full before the status code is
    /// inspected. Status codes below 400 are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request URL is invalid (`Construction`)
    /// - A network error occurs (`Transport`)
    /// - The status code is 400 or above (`Api`)
    /// - An error body is not a JSON object (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_uri, request.path);
        let url = reqwest::Url::parse(&url).map_err(|e| ConstructionError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), url)
            .headers(Self::header_map(&headers)?);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to Printify API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received response from Printify API"
        );

        let response = HttpResponse::new(code, res_headers, body);
        if code < 400 {
            return Ok(response);
        }

        Err(Self::classify_failure(&response))
    }

    /// Converts headers into a [`HeaderMap`], rejecting names or values that
    /// cannot be sent.
    fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ConstructionError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let invalid = |reason: String| ConstructionError::InvalidHeader {
                name: name.clone(),
                reason,
            };
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    /// Turns a response with status >= 400 into an error.
    fn classify_failure(response: &HttpResponse) -> HttpError {
        match response.json::<Map<String, Value>>() {
            Ok(payload) => HttpError::Api(ApiError {
                status: response.code,
                payload,
                request_id: response.request_id().map(String::from),
            }),
            Err(e) => HttpError::Decode(DecodeError {
                status: e.status,
                source: e.source,
            }),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("authorization") {
                    (k.as_str(), "Bearer *****")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("shop_id", &self.shop_id)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}
