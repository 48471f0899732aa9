//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock catalog source and a temporary state file, enabling E2E
//! testing without network access.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use cinedex_core::{
    testing::MockSource, CatalogConfig, CatalogSource, Config, Entry, JsonFileStore, LocalStore,
    ServerConfig, StorageConfig,
};
use cinedex_server::state::AppState;

/// Re-export fixtures for test convenience
pub use cinedex_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_toggle() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.post("/api/v1/favorites/2/toggle", json!({})).await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Shared state behind the router
    pub state: Arc<AppState>,
    /// Mock primary source - change entries or make it fail
    pub primary: MockSource,
    /// Mock fallback source, when configured
    pub fallback: Option<MockSource>,
    /// Temporary directory holding the state file
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture serving the fixture catalog.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state_path = temp_dir.path().join("state.json");

        if let Some(raw) = &test_config.initial_state {
            std::fs::write(&state_path, raw).expect("Failed to seed state file");
        }

        let primary = if test_config.primary_fails {
            MockSource::failing("mock://primary")
        } else {
            MockSource::ok("mock://primary", test_config.entries.clone())
        };
        let fallback = test_config
            .fallback
            .clone()
            .map(|entries| MockSource::ok("mock://fallback", entries));

        let config = Config {
            static_dir: None,
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            catalog: CatalogConfig {
                primary: "mock://primary".to_string(),
                fallback: fallback.as_ref().map(|_| "mock://fallback".to_string()),
                page_size: test_config.page_size,
                use_sample_on_failure: test_config.use_sample_on_failure,
            },
            storage: StorageConfig {
                path: state_path.clone(),
            },
        };

        let store: Arc<dyn LocalStore> = Arc::new(JsonFileStore::open(&state_path));
        let state = Arc::new(AppState::new(
            config,
            Arc::new(primary.clone()) as Arc<dyn CatalogSource>,
            fallback
                .clone()
                .map(|source| Arc::new(source) as Arc<dyn CatalogSource>),
            store,
        ));
        let _ = state.reload_catalog().await;

        let router = cinedex_server::api::create_router(Arc::clone(&state));

        Self {
            router,
            state,
            primary,
            fallback,
            temp_dir,
        }
    }

    /// Path of the persisted state file.
    pub fn state_path(&self) -> PathBuf {
        self.temp_dir.path().join("state.json")
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request("PUT", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Entries served by the primary source
    pub entries: Vec<Entry>,
    /// Make every primary fetch fail
    pub primary_fails: bool,
    /// Entries served by a fallback source, if any
    pub fallback: Option<Vec<Entry>>,
    pub page_size: usize,
    pub use_sample_on_failure: bool,
    /// Raw state file contents written before startup
    pub initial_state: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            entries: fixtures::catalog(),
            primary_fails: false,
            fallback: None,
            page_size: 12,
            use_sample_on_failure: true,
            initial_state: None,
        }
    }
}

impl TestConfig {
    /// Primary failing, fallback serving `entries`.
    pub fn with_fallback(entries: Vec<Entry>) -> Self {
        Self {
            primary_fails: true,
            fallback: Some(entries),
            ..Default::default()
        }
    }

    /// Every source failing, sample data disabled.
    pub fn unavailable() -> Self {
        Self {
            primary_fails: true,
            use_sample_on_failure: false,
            ..Default::default()
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
