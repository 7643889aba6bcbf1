//! Code writer for generated query sets
//!
//! Emits, per model, the model struct with its column enum and `ModelTrait`
//! impl, the `<Model>QuerySet` and the `<Model>Updater`. The whole output is
//! built as one token stream and formatted with rustfmt when available.

mod model;
mod queryset;
mod updater;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::schema::{Field, FieldType, Model, Schema};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// Prefix of the first line of every generated file
pub const HEADER_PREFIX: &str = "// Code generated by queryset-codegen";

/// Writer for generated query set sources
#[derive(Debug, Clone, Default)]
pub struct QuerySetWriter {
    config: GeneratorConfig,
}

/// Shared state of one generation run
pub(crate) struct Context {
    /// Path of the runtime crate (`queryset` unless configured)
    pub runtime: TokenStream,
    pub derives: Vec<syn::Path>,
}

impl QuerySetWriter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Complete source text for `schema`
    ///
    /// `source_name` is recorded in the header line. The output is a pure
    /// function of the schema and the configuration.
    pub fn generate(&self, schema: &Schema, source_name: &str) -> Result<String> {
        let tokens = self.generate_tokens(schema)?;
        let code = tokens.to_string();
        let body = if self.config.rustfmt {
            format_code(&code)
        } else {
            code
        };

        let mut output = format!("{HEADER_PREFIX} from {source_name}. DO NOT EDIT.\n\n");
        output.push_str(body.trim_end());
        output.push('\n');
        Ok(output)
    }

    /// Unformatted tokens for every model of `schema`, in declaration order
    pub fn generate_tokens(&self, schema: &Schema) -> Result<TokenStream> {
        let context = Context {
            runtime: self.config.runtime_path()?,
            derives: self.config.derive_paths()?,
        };

        let mut tokens = TokenStream::new();
        for model in &schema.models {
            tokens.extend(model::generate(model, &context));
            tokens.extend(queryset::generate(model, &context));
            tokens.extend(updater::generate(model, &context));
        }
        Ok(tokens)
    }
}

/// Model struct identifier
pub(crate) fn model_ident(model: &Model) -> Ident {
    format_ident!("{}", model.name)
}

pub(crate) fn field_ident(field: &Field) -> Ident {
    format_ident!("{}", field.name)
}

/// Field type as written in the generated struct
pub(crate) fn field_type(field: &Field, runtime: &TokenStream) -> TokenStream {
    match &field.ty {
        FieldType::Association(ty) => quote! { #ty },
        FieldType::Scalar { base, nullable } => {
            let base = base.tokens(runtime);
            if *nullable {
                quote! { Option<#base> }
            } else {
                base
            }
        }
    }
}

/// Format code with rustfmt, falling back to the unformatted text
fn format_code(code: &str) -> String {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = match Command::new("rustfmt")
        .args(["--edition", "2021", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log::warn!("rustfmt not available ({e}), writing unformatted code");
            return code.to_string();
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(code.as_bytes()) {
            log::warn!("failed to pipe code to rustfmt: {e}");
        }
    }

    match child.wait_with_output() {
        Ok(output) if output.status.success() => match String::from_utf8(output.stdout) {
            Ok(formatted) => formatted,
            Err(_) => code.to_string(),
        },
        Ok(output) => {
            log::warn!(
                "rustfmt failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            code.to_string()
        }
        Err(e) => {
            log::warn!("rustfmt failed: {e}");
            code.to_string()
        }
    }
}
