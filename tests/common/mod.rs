#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use photo_api::auth::JwtVerifier;
use photo_api::config::AppConfig;
use photo_api::database::store::{MemoryPhotoStore, PhotoStore};
use photo_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router wired to an in-memory store, plus handles for seeding and tokens.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryPhotoStore>,
    pub tokens: JwtVerifier,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryPhotoStore::new());
        Self::with_store(store.clone(), store)
    }

    /// Route requests to `backend`; `store` is kept for seeding.
    pub fn with_store(store: Arc<MemoryPhotoStore>, backend: Arc<dyn PhotoStore>) -> Self {
        let verifier = JwtVerifier::new(TEST_SECRET).expect("verifier");
        let state = AppState::new(backend, Arc::new(verifier));
        let router = photo_api::app::router(state, &AppConfig::development());
        Self {
            router,
            store,
            tokens: JwtVerifier::new(TEST_SECRET).expect("verifier"),
        }
    }

    pub fn token(&self, user: Uuid) -> String {
        self.tokens.issue(user, 1).expect("token")
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }
}

/// The real binary on a free port with the in-memory store. Killed on drop.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let server = Self::spawn()?;
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_photo-api"));
        cmd.env("PHOTO_API_PORT", port.to_string())
            .env("APP_ENV", "development")
            .env("PHOTO_STORE", "memory")
            .env("ACCESS_TOKEN_SECRET", TEST_SECRET)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
