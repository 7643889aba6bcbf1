//! Runtime configuration for [`SqlStore`](crate::SqlStore).
//!
//! Settings live under the `store` table of `config/queryset.toml` and can be
//! overridden with `QUERYSET__STORE__*` environment variables, e.g.
//! `QUERYSET__STORE__DIALECT=sqlite`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "config/queryset.toml";

/// SQL dialect a [`SqlStore`](crate::SqlStore) renders for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    Mysql,
    Sqlite,
}

impl Dialect {
    /// Whether inserts can report the assigned identity with `RETURNING`
    pub fn supports_returning(self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Sqlite)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub dialect: Dialect,
    /// Log rendered SQL at debug level
    #[serde(default = "default_log_statements")]
    pub log_statements: bool,
}

fn default_log_statements() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            log_statements: default_log_statements(),
        }
    }
}

impl StoreConfig {
    /// Load from `config/queryset.toml` (optional) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from a specific file (optional) and the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("QUERYSET").separator("__"))
            .build()?;

        match settings.get::<StoreConfig>("store") {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "store configuration is invalid: {e}"
            ))),
        }
    }
}
