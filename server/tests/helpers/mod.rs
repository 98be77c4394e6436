//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the full axum
//! router, plus `StubDiscord`, a local stand-in for the Discord webhook API
//! that records every execution it receives.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::Path;
use axum::http::{self, HeaderMap, Method, Request, Response, StatusCode};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use relay_server::api::{create_router, AppState};
use relay_server::config::Config;
use relay_server::relay::delivery::DiscordClient;

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub config: Config,
}

impl TestApp {
    /// Create a test app with the default test configuration.
    pub fn new() -> Self {
        Self::with_discord_base(&Config::default_for_test().discord_api_base)
    }

    /// Create a test app whose deliveries go to `discord_api_base`.
    pub fn with_discord_base(discord_api_base: &str) -> Self {
        let config = Config {
            discord_api_base: discord_api_base.into(),
            ..Config::default_for_test()
        };
        let discord = DiscordClient::new(&config).expect("Failed to build Discord client");
        let state = AppState::new(config.clone(), discord);
        let router = create_router(state);

        Self { router, config }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// POST a JSON event to `path`.
    pub async fn post_event(&self, path: &str, event: &serde_json::Value) -> Response<Body> {
        let request = Self::request(Method::POST, path)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(event.to_string()))
            .expect("Failed to build request");
        self.oneshot(request).await
    }

    /// POST a raw body to `path` (for malformed-input tests).
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Response<Body> {
        let request = Self::request(Method::POST, path)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.oneshot(request).await
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}

// ============================================================================
// Stub Discord API
// ============================================================================

/// One webhook execution received by [`StubDiscord`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub webhook_id: String,
    pub webhook_token: String,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// A local HTTP server that mimics the Discord Execute Webhook endpoint.
///
/// Replies to every execution with a fixed status and records what it saw.
pub struct StubDiscord {
    /// Base URL to point the relay's `discord_api_base` at.
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: JoinHandle<()>,
}

impl StubDiscord {
    /// Spawn the stub on a random port, answering with `reply_status`.
    pub async fn spawn(reply_status: StatusCode) -> Self {
        Self::spawn_with_reply(reply_status, "").await
    }

    /// Spawn the stub answering with `reply_status` and `reply_body`.
    pub async fn spawn_with_reply(reply_status: StatusCode, reply_body: &'static str) -> Self {
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        let router = Router::new().route(
            "/api/webhooks/{webhook_id}/{webhook_token}",
            post(
                move |Path((webhook_id, webhook_token)): Path<(String, String)>,
                      headers: HeaderMap,
                      body: Bytes| {
                    let recorded = recorded.clone();
                    async move {
                        let content_type = headers
                            .get(http::header::CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(ToString::to_string);
                        let body =
                            serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
                        recorded
                            .lock()
                            .expect("stub request log poisoned")
                            .push(RecordedRequest {
                                webhook_id,
                                webhook_token,
                                content_type,
                                body,
                            });
                        (reply_status, reply_body)
                    }
                },
            ),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub Discord server");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub Discord server failed");
        });

        Self {
            url,
            requests,
            _handle: handle,
        }
    }

    /// Everything the stub has received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("stub request log poisoned")
            .clone()
    }
}
