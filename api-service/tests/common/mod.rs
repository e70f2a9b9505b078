use std::sync::Arc;

use api_service::domain::auth::models::EmailAddress;
use api_service::domain::auth::models::UserRecord;
use api_service::domain::auth::service::AuthService;
use api_service::inbound::http::router::create_router;
use api_service::outbound::store::InMemoryCredentialStore;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use serde_json::json;

const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub auth_service: Arc<AuthService<InMemoryCredentialStore>>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    ///
    /// The store is seeded with admin@example.com and user@example.com
    /// (password "password", active) plus dormant@example.com (same
    /// password, deactivated).
    pub async fn spawn() -> Self {
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash("password").expect("Failed to hash seed password");

        let user = |email: &str, username: &str| {
            UserRecord::new(
                EmailAddress::new(email.to_string()).expect("Invalid seed email"),
                username.to_string(),
                password_hash.clone(),
            )
        };

        let mut dormant = user("dormant@example.com", "dormant");
        dormant.is_active = false;

        let store = Arc::new(InMemoryCredentialStore::new([
            user("admin@example.com", "admin"),
            user("user@example.com", "testuser"),
            dormant,
        ]));

        let auth_service = Arc::new(AuthService::new(
            store,
            TokenCodec::new(TEST_SECRET, Duration::minutes(15)),
            Duration::minutes(30),
        ));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(Arc::clone(&auth_service));
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            auth_service,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Log in and return the response without asserting on it.
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Log in with valid credentials and return the access token.
    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let response = self.login(email, password).await;
        assert!(response.status().is_success(), "Login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }
}
