use anyhow::Context as _;
use tokio::signal;

/// Resolves with the name of the first termination signal received
/// (`SIGINT` via Ctrl+C, or `SIGTERM` on unix).
///
/// # Errors
/// A signal handler could not be installed.
pub async fn shutdown_signal() -> anyhow::Result<&'static str> {
    tokio::select! {
        res = signal::ctrl_c() => res.context("install Ctrl+C handler").map(|()| "SIGINT"),
        res = sigterm() => res.map(|()| "SIGTERM"),
    }
}

#[cfg(unix)]
async fn sigterm() -> anyhow::Result<()> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("install SIGTERM handler")?
        .recv()
        .await;
    Ok(())
}

#[cfg(not(unix))]
async fn sigterm() -> anyhow::Result<()> {
    std::future::pending().await
}
