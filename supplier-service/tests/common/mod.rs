use std::sync::Arc;
use supplier_service::routes::create_router;
use supplier_service::state::AppState;

/// Test application that spawns the real service on an ephemeral port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = Arc::new(AppState::new());
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
