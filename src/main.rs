use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use lex_gateway::config::{AppConfig, ENV_FILE, EnvOverlay};
use lex_gateway::routes;
use lex_gateway::services::lex::AwsLexRuntime;
use lex_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let overlay = EnvOverlay::load(ENV_FILE);
    let config = AppConfig::from_env(&overlay).context("invalid configuration")?;

    let runtime = AwsLexRuntime::from_env(config.region.as_deref()).await;
    let state = Arc::new(AppState::new(Arc::new(runtime), config.lex.clone()));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!(
        addr = %bind_addr,
        bot_id = %config.lex.bot_id,
        locale_id = %config.lex.locale_id,
        "Lex gateway listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
