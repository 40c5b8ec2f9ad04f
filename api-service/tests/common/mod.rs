use std::sync::Arc;

use api_service::domain::user::models::User;
use api_service::domain::user::service::AuthenticationService;
use api_service::inbound::http::router::create_router;
use api_service::outbound::repositories::InMemoryUserRepository;
use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory credential store.
///
/// Seeded with `alice`/`wonderland` (active), `bob`/`builder` (disabled) and
/// `j.doe`/`plain` (active, blank stored email).
pub struct TestApp {
    pub address: String,
    /// Client that neither follows redirects nor keeps cookies
    pub api_client: reqwest::Client,
    /// Client that behaves like a browser: follows redirects and keeps cookies
    pub browser: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let hasher = PasswordHasher::new();
        let users = vec![
            User::try_new(
                "alice".to_string(),
                hasher.hash("wonderland").unwrap(),
                false,
                Some("Alice Liddell".to_string()),
                Some("alice@example.com".to_string()),
            )
            .unwrap(),
            User::try_new(
                "bob".to_string(),
                hasher.hash("builder").unwrap(),
                true,
                Some("Bob Builder".to_string()),
                None,
            )
            .unwrap(),
            User::try_new(
                "j.doe".to_string(),
                hasher.hash("plain").unwrap(),
                false,
                None,
                Some(String::new()),
            )
            .unwrap(),
        ];

        let repository = Arc::new(InMemoryUserRepository::new(users));
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));
        let auth_service = Arc::new(AuthenticationService::new(repository, authenticator));

        let router = create_router(auth_service, Duration::minutes(30));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Failed to create reqwest client"),
            browser: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Run the password grant and return the issued token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }
}
