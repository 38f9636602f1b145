use anyhow::Context;
use clap::Parser;
use legal_doc_search::api::create_router;
use legal_doc_search::config::ServerConfig;
use legal_doc_search::search::engine::Matcher;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let allowed_origins = config.allowed_origins()?;
    tracing::info!("CORS origins: {:?}", config.cors_origins);

    let matcher = Matcher::default();
    tracing::info!("Loaded {} legal documents", matcher.documents().len());

    let app = create_router(matcher, allowed_origins);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
