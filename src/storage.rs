//! Token Storage Module
//!
//! Pluggable key/value storage for session data such as the auth token.

use std::collections::HashMap;
use std::fmt::Debug;

use parking_lot::RwLock;

/// Storage slot holding the current auth token.
pub const AUTH_TOKEN_KEY: &str = "botisimo-auth-token";

/// A string key/value store shaped like browser `localStorage`.
pub trait TokenStorage: Send + Sync + Debug {
    fn get_item(&self, name: &str) -> Option<String>;
    fn set_item(&self, name: &str, value: &str);
    fn remove_item(&self, name: &str);
}

// == Memory Storage ==
/// Default in-process storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, name: &str) -> Option<String> {
        self.items.read().get(name).cloned()
    }

    fn set_item(&self, name: &str, value: &str) {
        self.items
            .write()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_item(&self, name: &str) {
        self.items.write().remove(name);
    }
}
