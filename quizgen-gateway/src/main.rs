//! Entry point for the `quizgen-gateway` HTTP server.

use std::sync::Arc;

use quizgen_gateway::{
    config::GatewayConfig,
    routes::{cors_layer, create_router},
};
use quizgen_generator::{BoundedGenerator, ScriptGenerator, SharedGenerator};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Limiter = Arc<BoundedGenerator<ScriptGenerator>>;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let limiter: Limiter = Arc::new(BoundedGenerator::new(
        ScriptGenerator::new(config.generator.clone()),
        config.generator.max_concurrent,
    ));
    let generator: SharedGenerator = limiter.clone();
    let app = create_router(generator, cors_layer(&config.allowed_origins));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        interpreter = %config.generator.interpreter.display(),
        script = %config.generator.script.display(),
        timeout = ?config.generator.timeout,
        max_concurrent = config.generator.max_concurrent,
        "quizgen-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(limiter))
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

/// Resolves on Ctrl+C or SIGTERM, after closing the limiter so queued
/// generations fail fast instead of spawning new processes.
async fn shutdown_signal(limiter: Limiter) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
    limiter.close();
}
