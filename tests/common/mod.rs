#![allow(dead_code)]

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use user_service::api::create_router;
use user_service::config::Config;
use user_service::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test client for API calls
pub struct TestClient {
    pub base_url: String,
    pub client: Client,
    pub token: Option<String>,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        let mut req = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(ref token) = self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req.send().await.expect("Failed to send request")
    }

    pub async fn get_with_auth(&self, path: &str, authorization: &str) -> reqwest::Response {
        self.get_with_auth_bytes(path, authorization.as_bytes()).await
    }

    /// Send raw header bytes, which need not be valid UTF-8
    pub async fn get_with_auth_bytes(&self, path: &str, authorization: &[u8]) -> reqwest::Response {
        let value = HeaderValue::from_bytes(authorization).expect("Invalid header bytes");
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, value)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post<T: serde::Serialize>(&self, path: &str, body: &T) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        name: &str,
        email: &str,
    ) -> reqwest::Response {
        self.post(
            "/register",
            &json!({
                "username": username,
                "password": password,
                "name": name,
                "email": email,
            }),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post(
            "/login",
            &json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Log in and return the issued token, panicking on failure
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let resp = self.login(username, password).await;
        assert_eq!(resp.status(), 200, "login failed for {}", username);
        let body: Value = resp.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }
}

/// Start a test server and return its URL and state
pub async fn start_test_server() -> (String, Arc<AppState>) {
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        signing_secret: TEST_SECRET.into(),
        ..Config::default()
    };
    let state = AppState::new(config);
    let app = create_router(Arc::clone(&state));

    // Bind to random port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    (base_url, state)
}
