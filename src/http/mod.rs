//! HTTP Module
//!
//! The request pipeline and URL helpers used by the API client.

pub mod pipeline;
pub mod url;

pub use pipeline::{Http, ResponseCache, AUTH_HEADER};
pub use url::{build_url, url_join};
