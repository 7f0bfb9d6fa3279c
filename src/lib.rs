//! Loyalty Client - A typed client for the Botisimo loyalty REST API
//!
//! Reads go through an expiring, request-coalescing response cache;
//! successful writes clear it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod storage;

pub use api::LoyaltyClient;
pub use cache::{CacheKey, ExpiringStore};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use storage::{MemoryStorage, TokenStorage};
