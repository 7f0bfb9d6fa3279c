//! Mock loyalty API for integration tests
//!
//! An axum server on an ephemeral port that records every request and
//! replays responses programmed per method and path.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use parking_lot::Mutex;
use serde_json::Value;

use loyalty_client::{ClientConfig, LoyaltyClient};

/// One request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub token: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

pub struct MockServer {
    pub base_url: String,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Programs the raw body returned for `method path`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.state.responses.lock().insert(
            (method.to_uppercase(), path.to_string()),
            (status, body.into()),
        );
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond(method, path, status, body.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().clone()
    }

    /// Number of requests received for `method path`.
    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.state
            .requests
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().unwrap()
    }

    /// A client pointed at this server.
    pub fn client(&self) -> LoyaltyClient {
        LoyaltyClient::new(ClientConfig::new(self.base_url.clone())).unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        token: headers
            .get("x-user-auth-token")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let programmed = state
        .responses
        .lock()
        .get(&(method.to_string(), path))
        .cloned();

    match programmed {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"message":"Not found"}"#,
        )
            .into_response(),
    }
}
