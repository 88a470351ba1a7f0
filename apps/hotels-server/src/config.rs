//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, the YAML file given with
//! `--config`, `HOTELS__*` environment variables (`__` separates sections),
//! then CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context as _;
use figment::providers::{Env, Format as _, Serialized, Yaml};
use figment::Figment;
use hotels::config::HotelsConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "HOTELS__";

/// String settings re-read verbatim from the environment. The `Env` provider
/// types `123456`, `0123` or `true` as numbers and booleans.
const VERBATIM_KEYS: &[&str] = &["hotels.jwt_secret", "database.dsn", "logging.level"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub hotels: HotelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8087)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `sqlite://...`, `sqlite::memory:` or `postgres://...`
    pub dsn: String,
    pub max_connections: u32,
    /// Apply pending migrations on startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
            max_connections: 10,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    /// Fails when `path` is not a file or the merged result does not deserialize.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        for &key in VERBATIM_KEYS {
            if let Some(raw) = Env::var(&env_var_name(key)) {
                figment = figment.merge(Serialized::default(key, raw));
            }
        }

        figment.extract().context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.bind_addr.set_port(port);
        }
    }

    /// Checks that cannot be expressed in the types.
    ///
    /// # Errors
    /// Names the first offending setting.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.hotels.jwt_secret.is_empty() {
            anyhow::bail!("hotels.jwt_secret must be set");
        }
        if self.database.dsn.trim().is_empty() {
            anyhow::bail!("database.dsn must be set");
        }
        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be greater than zero");
        }
        Ok(())
    }

    /// Effective configuration as YAML, with the JWT secret masked.
    ///
    /// # Errors
    /// Serialization failure.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        let mut shown = self.clone();
        if !shown.hotels.jwt_secret.is_empty() {
            "<redacted>".clone_into(&mut shown.hotels.jwt_secret);
        }
        serde_saphyr::to_string(&shown).map_err(|e| anyhow::anyhow!("failed to render config: {e}"))
    }
}

fn env_var_name(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.replace('.', "__").to_uppercase())
}
