//! Request Pipeline
//!
//! Sends API requests with `reqwest` and routes reads through the response
//! cache. GETs are keyed by path and parameters, never by headers, so the
//! auth token does not split the cache. Mutations go straight to the network
//! and clear the whole cache once they succeed.

use std::sync::Arc;

use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::cache::{CacheKey, Cached, ExpiringStore};
use crate::error::{ApiError, Result};
use crate::http::url::build_url;
use crate::storage::{TokenStorage, AUTH_TOKEN_KEY};

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "x-user-auth-token";

/// The store type used for API responses.
pub type ResponseCache = ExpiringStore<Result<Value>>;

// == Http ==
/// The request pipeline shared by every endpoint wrapper.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    base_url: String,
    cache: Arc<ResponseCache>,
    storage: Arc<dyn TokenStorage>,
}

impl Http {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        cache: Arc<ResponseCache>,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            cache,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    // == Cache Key ==
    /// Derives the cache key of a GET: `[path]`, or `[path, params]` when
    /// there are parameters.
    pub fn request_key(path: &str, params: Option<&Value>) -> CacheKey {
        match params {
            Some(params) if params.as_object().is_some_and(|map| !map.is_empty()) => {
                CacheKey::sequence([CacheKey::from(path), CacheKey::from(params)])
            }
            _ => CacheKey::sequence([path]),
        }
    }

    // == Get ==
    /// Issues a cached GET. Concurrent callers for the same request share one
    /// network call.
    pub fn get(&self, path: &str, params: Option<Value>) -> Cached<Result<Value>> {
        let key = Self::request_key(path, params.as_ref());
        self.cache
            .get(key, |_| self.prepare(Method::GET, path, params, None))
    }

    // == Mutations ==
    /// Issues an uncached request and clears the cache if it succeeds.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let result = self.prepare(method.clone(), path, None, body).await;
        if result.is_ok() {
            debug!(%method, path, "mutation succeeded, clearing cache");
            self.cache.clear();
        }
        result
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send(Method::DELETE, path, None).await
    }

    /// Builds the request future. Nothing is sent until it is polled.
    fn prepare(
        &self,
        method: Method,
        path: &str,
        params: Option<Value>,
        body: Option<Value>,
    ) -> impl std::future::Future<Output = Result<Value>> + Send + 'static {
        let client = self.client.clone();
        let url = build_url(&self.base_url, path, params.as_ref());
        let token = self
            .storage
            .get_item(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty());

        async move {
            let url = url?;
            debug!(%method, %url, "sending request");

            let mut request = client.request(method.clone(), url.clone());
            if let Some(token) = token {
                request = request.header(AUTH_HEADER, token);
            }
            if let Some(body) = body {
                request = request.json(&body);
            }

            let response = request.send().await.map_err(|e| {
                warn!(%method, %url, error = %e, "request failed");
                ApiError::from(e)
            })?;
            let status = response.status();
            let text = response.text().await?;

            if status.is_success() {
                // Empty or non-JSON success bodies read as an empty object
                Ok(serde_json::from_str(&text).unwrap_or_else(|_| json!({})))
            } else {
                let body = serde_json::from_str::<Value>(&text)
                    .ok()
                    .or_else(|| (!text.is_empty()).then(|| Value::String(text.clone())));
                let err = ApiError::from_response(status.as_u16(), body.as_ref());
                warn!(%method, %url, status = status.as_u16(), error = %err, "API error");
                Err(err)
            }
        }
    }
}
