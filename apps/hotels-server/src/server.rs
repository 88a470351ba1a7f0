//! HTTP host: database, router, request tracing, serve loop.

use std::time::Duration;

use anyhow::Context as _;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use hotels::HotelsModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing::Span;

use crate::config::{AppConfig, DatabaseConfig};
use crate::signals::shutdown_signal;

/// # Errors
/// Connection failure.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.max_connections(cfg.max_connections).sqlx_logging(false);
    // Every pooled connection to `:memory:` would see its own empty database.
    if cfg.dsn.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }

    let backend = cfg.dsn.split(':').next().unwrap_or_default();
    tracing::info!(backend, max_connections = cfg.max_connections, "Connecting to database");
    Database::connect(opts)
        .await
        .context("failed to connect to database")
}

/// Mount the module and wrap everything in an `http_request` span.
#[must_use]
pub fn build_router(module: &HotelsModule) -> Router {
    module.register_rest(Router::new()).layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
            }),
    )
}

/// Connect, migrate, serve until Ctrl+C or SIGTERM, then close the pool.
///
/// # Errors
/// Any startup failure, or the server loop failing.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;

    let db = connect(&config.database).await?;
    if config.database.run_migrations {
        HotelsModule::migrate(&db).await?;
    }

    let module = HotelsModule::init(&db, &config.hotels)?;
    let router = build_router(&module);

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async {
        match shutdown_signal().await {
            Ok(signal) => tracing::info!(signal, "Shutdown requested, draining connections"),
            Err(e) => tracing::error!(error = %e, "Signal handling failed, shutting down"),
        }
    };
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    db.close().await.context("failed to close database")?;
    tracing::info!("Hotels server stopped");
    Ok(())
}
