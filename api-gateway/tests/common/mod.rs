use api_gateway::auth::{Role, TokenIssuer};
use api_gateway::config::{RouteTarget, ServerConfig, Settings};
use api_gateway::routes::create_router;
use api_gateway::state::AppState;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real gateway on an ephemeral port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn a gateway with no downstream routes configured.
    pub async fn spawn() -> Self {
        Self::spawn_with_routes(Vec::new()).await
    }

    /// Spawn a gateway whose forwarding table is under the test's control.
    pub async fn spawn_with_routes(routes: Vec<RouteTarget>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let settings = Settings {
            server: ServerConfig::default(),
            jwt_secret: TEST_SECRET.to_string(),
            routes,
        };
        let state = Arc::new(AppState::new(&settings));
        let app = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}

/// Mint a token signed with the test secret, the way the gateway itself would.
pub fn issue_token(role: Role) -> String {
    TokenIssuer::new(TEST_SECRET)
        .issue("test-user", role)
        .expect("Failed to issue token")
}
