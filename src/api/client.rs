//! Loyalty Client
//!
//! The entry point callers hold. Owns the request pipeline, the response
//! cache and the token storage; endpoint wrappers live in sibling modules
//! as further `impl LoyaltyClient` blocks.

use std::sync::Arc;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{Http, ResponseCache};
use crate::storage::{MemoryStorage, TokenStorage, AUTH_TOKEN_KEY};

/// Public bucket serving uploaded media.
pub const MEDIA_BASE_URL: &str = "https://s3.amazonaws.com/prod.botisimo.com/resource";

// == Loyalty Client ==
/// Typed client for one loyalty team.
///
/// Cloning is cheap; clones share the cache and the token storage.
#[derive(Debug, Clone)]
pub struct LoyaltyClient {
    config: ClientConfig,
    http: Http,
    storage: Arc<dyn TokenStorage>,
}

impl LoyaltyClient {
    /// Creates a client with in-memory token storage.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_storage(config, Arc::new(MemoryStorage::new()))
    }

    /// Creates a client persisting its auth token in `storage`.
    pub fn with_storage(config: ClientConfig, storage: Arc<dyn TokenStorage>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let cache = Arc::new(ResponseCache::new(config.cache_ttl_ms));
        let http = Http::new(client, config.endpoint(), cache, storage.clone());

        debug!(endpoint = %config.endpoint(), ttl_ms = config.cache_ttl_ms, "client created");

        Ok(Self {
            config,
            http,
            storage,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.http.base_url()
    }

    /// The response cache shared by every GET.
    pub fn cache(&self) -> &Arc<ResponseCache> {
        self.http.cache()
    }

    /// The stored auth token, or an empty string when logged out.
    pub fn token(&self) -> String {
        self.storage.get_item(AUTH_TOKEN_KEY).unwrap_or_default()
    }

    /// Stores the auth token sent with every request. An empty token logs out.
    pub fn store_token(&self, token: &str) {
        if token.is_empty() {
            self.storage.remove_item(AUTH_TOKEN_KEY);
        } else {
            self.storage.set_item(AUTH_TOKEN_KEY, token);
        }
    }

    /// Ends the local session: clears the cache and forgets the auth token.
    ///
    /// No request is sent.
    pub fn logout(&self) {
        self.cache().clear();
        self.store_token("");
        info!("logged out");
    }

    /// URL of an uploaded media resource.
    pub fn media_url(&self, resource_id: impl std::fmt::Display) -> String {
        format!("{MEDIA_BASE_URL}/{resource_id}")
    }

    // == Transport Helpers ==
    /// Cached GET decoded into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<Value>,
    ) -> Result<T> {
        let value = self.http.get(path, params).await?;
        decode(value)
    }

    /// Cached GET with parameters taken from a request struct.
    pub(crate) async fn fetch_with<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let params = serde_json::to_value(params)?;
        self.fetch(path, Some(params)).await
    }

    /// Uncached request decoded into `T`; clears the cache when it succeeds.
    pub(crate) async fn mutate<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.http.send(method, path, body).await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(ApiError::from)
}
