//! Supply-chain API gateway entry point.

use api_gateway::config::Settings;
use api_gateway::routes::create_router;
use api_gateway::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("🚀 Starting API gateway...");

    let settings = Settings::load()?;
    if std::env::var("JWT_SECRET").is_err() {
        warn!("⚠️  JWT_SECRET not set, using default (INSECURE - set in production!)");
    }

    let state = Arc::new(AppState::new(&settings));
    let app = create_router(state);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Gateway listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   POST /auth/login      - Login with username/password, returns a token");
    info!("   POST /auth/register   - Register a new account");
    info!("   *    /api/**          - Relayed to the downstream services:");
    for route in &settings.routes {
        info!("        {} -> {}", route.prefix, route.base_url);
    }
    info!("");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_gateway=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
