//! Generator configuration.
//!
//! Loaded from an optional TOML file and `QUERYSET_CODEGEN__*` environment
//! variables (e.g. `QUERYSET_CODEGEN__RUSTFMT=false`,
//! `QUERYSET_CODEGEN__EXTRA_DERIVES=serde::Serialize,serde::Deserialize`).
//! Command-line flags are applied on top by the binary.

use crate::error::{CodegenError, Result};
use config::{Config, Environment, File};
use proc_macro2::TokenStream;
use quote::ToTokens;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Path generated code uses to reach the runtime crate
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,
    /// Format the output with rustfmt when available
    #[serde(default = "default_rustfmt")]
    pub rustfmt: bool,
    /// Derives added to every model struct
    #[serde(default)]
    pub extra_derives: Vec<String>,
}

fn default_runtime_crate() -> String {
    "queryset".to_string()
}

fn default_rustfmt() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_crate: default_runtime_crate(),
            rustfmt: default_rustfmt(),
            extra_derives: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load from the environment and, when given, a config file that must exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("QUERYSET_CODEGEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extra_derives"),
            )
            .build()?;
        let config: GeneratorConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.runtime_path()?;
        self.derive_paths()?;
        Ok(())
    }

    pub(crate) fn runtime_path(&self) -> Result<TokenStream> {
        syn::parse_str::<syn::Path>(&self.runtime_crate)
            .map(|p| p.to_token_stream())
            .map_err(|e| {
                CodegenError::Config(format!(
                    "runtime_crate `{}` is not a path: {e}",
                    self.runtime_crate
                ))
            })
    }

    pub(crate) fn derive_paths(&self) -> Result<Vec<syn::Path>> {
        self.extra_derives
            .iter()
            .map(|derive| {
                syn::parse_str::<syn::Path>(derive).map_err(|e| {
                    CodegenError::Config(format!("extra derive `{derive}` is not a path: {e}"))
                })
            })
            .collect()
    }
}
