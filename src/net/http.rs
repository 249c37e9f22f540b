//! Configured HTTP client with a global response interceptor.
//!
//! Client-side (hydrate): real requests via `gloo-net` fetch.
//! Server-side (SSR) and tests: [`FetchTransport`] reports a network error;
//! tests inject their own [`Transport`].
//!
//! DESIGN
//! ======
//! Every request carries cookies (`credentials: include`) and no manual token.
//! Any 401, from any endpoint, wipes all of durable storage before the error
//! is handed back to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::util::storage::DurableStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
}

/// A fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON-encoded body, if any.
    pub body: Option<String>,
    pub with_credentials: bool,
}

/// Status and raw body of a received response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs network I/O for one request.
///
/// Implementations return `Ok` for any received response, whatever its
/// status, and [`ApiError::Network`] when nothing came back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser fetch transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as FetchMethod, RequestBuilder};
            use web_sys::RequestCredentials;

            let method = match request.method {
                Method::Post => FetchMethod::POST,
            };
            let credentials =
                if request.with_credentials { RequestCredentials::Include } else { RequestCredentials::SameOrigin };
            let builder = RequestBuilder::new(&request.url).method(method).credentials(credentials);
            let built = match request.body {
                Some(body) => builder.header("Content-Type", "application/json").body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Unexpected { message: e.to_string() })?;

            let resp = built.send().await.map_err(|e| ApiError::Network { message: e.to_string() })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network { message: e.to_string() })?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network { message: "not available on server".to_owned() })
        }
    }
}

/// Single configured transport for all backend calls.
#[derive(Debug)]
pub struct HttpClient<T, S> {
    config: ClientConfig,
    transport: T,
    storage: S,
}

impl<T: Transport, S: DurableStorage> HttpClient<T, S> {
    pub fn new(config: ClientConfig, transport: T, storage: S) -> Self {
        Self { config, transport, storage }
    }

    /// Durable storage the interceptor clears on 401.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// `POST` a JSON body to `path` under the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses, or whatever the
    /// transport reports when no response arrives.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Unexpected { message: e.to_string() })?;
        self.send(Method::Post, path, Some(payload)).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: self.config.endpoint(path),
            body,
            with_credentials: self.config.with_credentials,
        };
        let result = match self.transport.send(request).await {
            Ok(resp) if resp.is_success() => Ok(resp),
            Ok(resp) => Err(ApiError::from_status(resp.status, &resp.body)),
            Err(e) => Err(e),
        };
        result.map_err(|e| self.intercept(e))
    }

    fn intercept(&self, error: ApiError) -> ApiError {
        if error.is_unauthorized() {
            log::warn!("received 401; clearing durable storage");
            self.storage.clear();
        }
        error
    }
}
