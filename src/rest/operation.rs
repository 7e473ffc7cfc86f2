//! Declarative REST operations.
//!
//! An [`Operation`] binds an HTTP method to an endpoint template. Its three
//! type parameters fix everything else about the call:
//!
//! - `P`: the path parameters, `()`, `(A,)` or `(A, B)` (see [`PathParams`])
//! - `B`: the body kind, [`NoBody`] or [`Json<T>`]
//! - `F`: the response format, [`NoContent`](crate::rest::NoContent),
//!   [`Direct<T>`](crate::rest::Direct) or [`Paginated<T>`](crate::rest::Paginated)
//!
//! Operations are `const` items, carry no state, and can be invoked from
//! any number of tasks at once. Every invocation performs exactly one round
//! trip: build the request, execute and classify it, then decode the body.
//! Nothing is retried or cached, and errors propagate unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::{Direct, NoBody, Operation};
//! use printify_api::HttpMethod;
//!
//! const GET_ORDER: Operation<(u64, String), NoBody, Direct<Order>> =
//!     Operation::new(HttpMethod::Get, "/v1/shops/%d/orders/%s.json");
//!
//! let order = GET_ORDER.call(&client, (shop_id, "5a96f649b2439217d070f507")).await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::clients::{ConstructionError, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::rest::path::{build_path, PathArgs, PathParams};
use crate::rest::response::{Page, PageQuery, Paginated, ResponseFormat, ResponseShape};

/// The body kind of an operation.
pub trait BodyKind {
    /// Whether the operation sends a JSON body.
    const HAS_BODY: bool;
}

/// Marker for operations that send no request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBody;

impl BodyKind for NoBody {
    const HAS_BODY: bool = false;
}

/// Marker for operations that send `T` as a JSON body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(PhantomData<fn(T)>);

impl<T: Serialize> BodyKind for Json<T> {
    const HAS_BODY: bool = true;
}

/// The runtime-inspectable configuration of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointConfig {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The endpoint template.
    pub template: &'static str,
    /// Number of path parameters.
    pub arity: usize,
    /// Whether a JSON body is sent.
    pub has_body: bool,
    /// The expected response shape.
    pub shape: ResponseShape,
}

/// A typed, stateless REST operation.
///
/// See the [module documentation](self) for details.
pub struct Operation<P, B, F> {
    method: HttpMethod,
    template: &'static str,
    _marker: PhantomData<fn() -> (P, B, F)>,
}

impl<P, B, F> Operation<P, B, F> {
    /// Creates a new operation.
    #[must_use]
    pub const fn new(method: HttpMethod, template: &'static str) -> Self {
        Self {
            method,
            template,
            _marker: PhantomData,
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the endpoint template.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }
}

impl<P, B, F> Clone for Operation<P, B, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, B, F> Copy for Operation<P, B, F> {}

impl<P, B, F> fmt::Debug for Operation<P, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("method", &self.method)
            .field("template", &self.template)
            .finish()
    }
}

impl<P: PathParams, B: BodyKind, F: ResponseFormat> Operation<P, B, F> {
    /// Returns the operation's configuration record.
    #[must_use]
    pub const fn config(&self) -> EndpointConfig {
        EndpointConfig {
            method: self.method,
            template: self.template,
            arity: P::ARITY,
            has_body: B::HAS_BODY,
            shape: F::SHAPE,
        }
    }

    /// Builds the request for this operation without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the template does not match the
    /// path parameters.
    pub fn build_request<A: PathArgs<P>>(
        &self,
        ids: A,
        body: Option<serde_json::Value>,
        query: Option<PageQuery>,
    ) -> Result<HttpRequest, ConstructionError> {
        let path = build_path(self.template, &ids.into_segments())?;
        let mut builder = HttpRequest::builder(self.method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            let params = query.to_query();
            if !params.is_empty() {
                builder = builder.query(params);
            }
        }
        Ok(builder.build())
    }

    async fn execute(
        &self,
        client: &HttpClient,
        request: HttpRequest,
    ) -> Result<F::Output, HttpError> {
        let response = client.request(request).await?;
        Ok(F::decode(&response)?)
    }
}

impl<P: PathParams, F: ResponseFormat> Operation<P, NoBody, F> {
    /// Invokes an operation that sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, fails in
    /// transit, is answered with status >= 400, or cannot be decoded.
    pub async fn call<A: PathArgs<P>>(
        &self,
        client: &HttpClient,
        ids: A,
    ) -> Result<F::Output, HttpError> {
        let request = self.build_request(ids, None, None)?;
        self.execute(client, request).await
    }
}

impl<P: PathParams, T: Serialize, F: ResponseFormat> Operation<P, Json<T>, F> {
    /// Invokes an operation that sends `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized, the request
    /// cannot be built, fails in transit, is answered with status >= 400, or
    /// cannot be decoded.
    pub async fn call_with<A: PathArgs<P>>(
        &self,
        client: &HttpClient,
        ids: A,
        body: &T,
    ) -> Result<F::Output, HttpError> {
        let body = serde_json::to_value(body).map_err(ConstructionError::Serialize)?;
        let request = self.build_request(ids, Some(body), None)?;
        self.execute(client, request).await
    }
}

impl<P, T> Operation<P, NoBody, Paginated<T>>
where
    P: PathParams,
    T: serde::de::DeserializeOwned,
{
    /// Fetches one page, keeping the pagination envelope.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call).
    pub async fn page<A: PathArgs<P>>(
        &self,
        client: &HttpClient,
        ids: A,
        query: PageQuery,
    ) -> Result<Page<T>, HttpError> {
        let request = self.build_request(ids, None, Some(query))?;
        let response = client.request(request).await?;
        Ok(Paginated::<T>::decode_page(&response)?)
    }
}
