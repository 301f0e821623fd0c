//! Test application setup utilities
//!
//! Provides a fully routed instance of the application backed by a temporary
//! SQLite file, plus a cookie jar of one for session-gated endpoints.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use uuid::Uuid;

use voluntrack_server::{api, config::AppConfig, db, AppState};

/// Test application wrapper for integration testing
#[derive(Debug)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    /// `name=value` pair sent as the `Cookie` header, as a browser would
    pub session_cookie: Option<String>,
}

impl TestApp {
    /// Create a new test application with a fresh SQLite database
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a new test application with custom configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let db = db::init_pool(&config.database)
            .await
            .expect("Failed to initialize test database");

        let state = AppState { config, db };
        let router = api::router(state.clone());

        Self {
            router,
            state,
            session_cookie: None,
        }
    }

    /// Sign in as `email` and keep the issued cookie for later requests
    pub async fn login(&mut self, email: &str) -> TestResponse {
        let response = self
            .post_json("/jwt", serde_json::json!({ "email": email, "name": "Test User" }))
            .await;
        self.store_cookie(&response);
        response
    }

    /// Sign out, applying the removal cookie the server sends back
    pub async fn logout(&mut self) -> TestResponse {
        let response = self.post_json("/logout", serde_json::json!({})).await;
        self.store_cookie(&response);
        response
    }

    fn store_cookie(&mut self, response: &TestResponse) {
        if let Some(pair) = response.set_cookie_pair() {
            self.session_cookie = Some(pair);
        }
    }

    /// Make a GET request to the test application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send("POST", uri, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send("PUT", uri, Some(body)).await
    }

    /// Make a PATCH request without a body
    pub async fn patch(&self, uri: &str) -> TestResponse {
        self.send("PATCH", uri, None).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send("DELETE", uri, None).await
    }

    async fn send(&self, method: &str, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.request(request).await
    }

    /// Make an arbitrary request
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a post as the signed-in user and return its id
    pub async fn create_post(&self, body: serde_json::Value) -> String {
        let response = self.post_json("/volunteers", body).await;
        response.assert_ok();
        let json: serde_json::Value = response.json();
        json["insertedId"]
            .as_str()
            .expect("insertedId missing")
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: bytes::Bytes,
}

impl TestResponse {
    /// Get the response body as a string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Parse the response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse response as JSON")
    }

    /// Raw `Set-Cookie` header, if any
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// The `name=value` part of the `Set-Cookie` header
    pub fn set_cookie_pair(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next().map(|pair| pair.trim().to_string()))
    }

    /// Assert the response status
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
        self
    }

    /// Assert the response status is OK (200)
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }

    /// Assert the response status is Bad Request (400)
    pub fn assert_bad_request(&self) -> &Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    /// Assert the response status is Unauthorized (401)
    pub fn assert_unauthorized(&self) -> &Self {
        self.assert_status(StatusCode::UNAUTHORIZED)
    }

    /// Assert the response status is Forbidden (403)
    pub fn assert_forbidden(&self) -> &Self {
        self.assert_status(StatusCode::FORBIDDEN)
    }

    /// Assert the response status is Not Found (404)
    pub fn assert_not_found(&self) -> &Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert the response status is Unprocessable Entity (422)
    pub fn assert_unprocessable(&self) -> &Self {
        self.assert_status(StatusCode::UNPROCESSABLE_ENTITY)
    }
}

/// Create a test configuration with a temporary SQLite database
pub fn test_config() -> AppConfig {
    // Unique file per test so tests can run in parallel
    let db_path = std::env::temp_dir().join(format!("voluntrack_test_{}.db", Uuid::new_v4().simple()));

    let mut config = AppConfig::default();
    config.database.url = format!("sqlite://{}?mode=rwc", db_path.display());
    config.database.max_connections = 2;
    config.auth.jwt_secret = "test_secret_key_that_is_at_least_32_bytes_long".to_string();
    config
}
