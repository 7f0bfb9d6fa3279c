//! URL helpers
//!
//! Joining path segments and encoding GET parameters.

use reqwest::Url;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Joins parts with `/` and collapses repeated slashes before the query.
///
/// The `//` after a URL scheme is kept.
pub fn url_join<S: AsRef<str>>(parts: &[S]) -> String {
    let joined = parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<&str>>()
        .join("/");

    let (base, query) = match joined.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (joined.as_str(), None),
    };

    let (scheme, rest) = match base.find("://") {
        Some(idx) => base.split_at(idx + 3),
        None => ("", base),
    };

    let mut out = String::with_capacity(joined.len());
    out.push_str(scheme);
    let mut previous_slash = false;
    for ch in rest.chars() {
        if ch == '/' && previous_slash {
            continue;
        }
        previous_slash = ch == '/';
        out.push(ch);
    }

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(query);
    }
    out
}

/// Builds the request URL for `path` under `base`, appending `params` as a
/// query string when it is a JSON object.
pub fn build_url(base: &str, path: &str, params: Option<&Value>) -> Result<Url> {
    let joined = url_join(&[base, path]);
    let mut url = Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))?;

    if let Some(Value::Object(map)) = params {
        if !map.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in map {
                pairs.append_pair(name, &query_value(value));
            }
        }
    }

    Ok(url)
}

/// Renders one parameter value the way it appears in a query string.
pub fn query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
