use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use solefresh_backend::{build_router, ServerConfig};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,solefresh_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env().context("Failed to read server configuration")?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.as_str().into()),
                ..Default::default()
            },
        ))
    });
    init_tracing();

    config.validate_static_dir()?;
    tracing::info!(
        "Serving {} from {} ({})",
        config.index_file().display(),
        config.static_dir.display(),
        config.environment.as_str()
    );

    let app = build_router(&config);
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Starting server on {}", addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}
