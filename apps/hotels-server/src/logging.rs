use anyhow::Context as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive used when `RUST_LOG` is not set. `-v` flags win over config.
fn default_directive(cfg: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => cfg.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// `--print-config` and `check`.
///
/// # Errors
/// Invalid filter directive, or a subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let directive = default_directive(cfg, verbose);
    let filter = if verbose > 0 {
        EnvFilter::try_new(directive)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))
    };
    let filter = filter.with_context(|| format!("invalid log filter '{directive}'"))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match cfg.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.context("failed to install tracing subscriber")
}
