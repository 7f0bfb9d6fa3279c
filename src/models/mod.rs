//! Request, response and entity models for the loyalty API
//!
//! This module defines the DTOs serialized into request bodies and
//! deserialized from response bodies.

pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use requests::*;
pub use responses::*;
pub use types::*;
