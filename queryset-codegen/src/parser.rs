//! Input parsing for model definitions
//!
//! Three source formats are accepted:
//!
//! - `.rs`: Rust-syntax structs marked `#[queryset]` (never compiled)
//! - `.toml` / `.json`: a `models` array of `{ name, table_name?, fields }`
//!
//! The parser only reads what is written. Defaults, validation and type
//! classification happen in [`crate::extract`].

use crate::error::{CodegenError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use syn::ext::IdentExt;
use syn::{Attribute, Lit, Type};

/// One model as written in the source
#[derive(Debug, Clone)]
pub struct RawModel {
    pub name: String,
    pub table_name: Option<String>,
    pub fields: Vec<RawField>,
}

/// One field as written in the source
#[derive(Debug, Clone)]
pub struct RawField {
    pub name: String,
    pub ty: Type,
    pub column_name: Option<String>,
    pub primary_key: bool,
    pub soft_delete: bool,
    pub association: bool,
    pub default: bool,
    pub created_at: bool,
    pub updated_at: bool,
}

impl RawField {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            column_name: None,
            primary_key: false,
            soft_delete: false,
            association: false,
            default: false,
            created_at: false,
            updated_at: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Rust,
    Toml,
    Json,
}

impl SourceFormat {
    /// Format by extension, falling back to content sniffing
    pub fn detect(path: &Path, content: &str) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("rs") => Some(SourceFormat::Rust),
            Some("toml") => Some(SourceFormat::Toml),
            Some("json") => Some(SourceFormat::Json),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Some(SourceFormat::Json)
                } else if content.contains("#[queryset]") {
                    Some(SourceFormat::Rust)
                } else if trimmed.starts_with("[[models]]") || content.contains('=') {
                    Some(SourceFormat::Toml)
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SourceConfig {
    #[serde(default)]
    models: Vec<ModelConfig>,
}

#[derive(Debug, Deserialize)]
struct ModelConfig {
    name: String,
    table_name: Option<String>,
    #[serde(default)]
    fields: Vec<FieldConfig>,
}

#[derive(Debug, Deserialize)]
struct FieldConfig {
    name: String,
    #[serde(rename = "type")]
    type_str: String,
    column_name: Option<String>,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    soft_delete: bool,
    #[serde(default)]
    association: bool,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    created_at: bool,
    #[serde(default)]
    updated_at: bool,
}

/// Parse a file, or every supported file of a directory in name order
pub fn parse_path(path: &Path) -> Result<Vec<RawModel>> {
    if path.is_dir() {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let file = entry?.path();
            let supported = matches!(
                file.extension().and_then(|s| s.to_str()),
                Some("rs" | "toml" | "json")
            );
            if file.is_file() && supported {
                files.push(file);
            }
        }
        files.sort();

        let mut models = Vec::new();
        for file in files {
            models.extend(parse_file(&file)?);
        }
        Ok(models)
    } else {
        parse_file(path)
    }
}

pub fn parse_file(path: &Path) -> Result<Vec<RawModel>> {
    let content = fs::read_to_string(path)?;
    let format = SourceFormat::detect(path, &content).ok_or_else(|| {
        CodegenError::Parse(format!(
            "{}: unknown format. Supported: .rs (model structs), .toml, .json",
            path.display()
        ))
    })?;
    parse_source(&content, format)
        .map_err(|e| match e {
            CodegenError::Parse(msg) => CodegenError::Parse(format!("{}: {msg}", path.display())),
            other => other,
        })
}

pub fn parse_source(content: &str, format: SourceFormat) -> Result<Vec<RawModel>> {
    match format {
        SourceFormat::Rust => parse_rust(content),
        SourceFormat::Toml => {
            let config: SourceConfig =
                toml::from_str(content).map_err(|e| CodegenError::Parse(e.to_string()))?;
            convert_config(config)
        }
        SourceFormat::Json => {
            let config: SourceConfig =
                serde_json::from_str(content).map_err(|e| CodegenError::Parse(e.to_string()))?;
            convert_config(config)
        }
    }
}

/// Parse every `#[queryset]` struct of a Rust source
fn parse_rust(content: &str) -> Result<Vec<RawModel>> {
    let file = syn::parse_file(content)?;

    let mut models = Vec::new();
    for item in &file.items {
        let syn::Item::Struct(item) = item else {
            continue;
        };
        if !has_attribute(&item.attrs, "queryset") {
            continue;
        }

        let name = item.ident.unraw().to_string();
        let fields = match &item.fields {
            syn::Fields::Named(named) => named
                .named
                .iter()
                .map(parse_field)
                .collect::<Result<Vec<_>>>()?,
            syn::Fields::Unnamed(_) => {
                return Err(CodegenError::extraction(
                    name,
                    "tuple structs are not supported",
                ))
            }
            syn::Fields::Unit => Vec::new(),
        };

        models.push(RawModel {
            name,
            table_name: string_attribute(&item.attrs, "table_name"),
            fields,
        });
    }
    Ok(models)
}

fn parse_field(field: &syn::Field) -> Result<RawField> {
    let name = field
        .ident
        .as_ref()
        .ok_or_else(|| CodegenError::Parse("unnamed fields not supported".to_string()))?;

    let attrs = &field.attrs;
    Ok(RawField {
        name: name.unraw().to_string(),
        ty: field.ty.clone(),
        column_name: string_attribute(attrs, "column_name"),
        primary_key: has_attribute(attrs, "primary_key"),
        soft_delete: has_attribute(attrs, "soft_delete"),
        association: has_attribute(attrs, "association"),
        default: has_attribute(attrs, "default"),
        created_at: has_attribute(attrs, "created_at"),
        updated_at: has_attribute(attrs, "updated_at"),
    })
}

/// Value of a `#[name = "..."]` attribute
fn string_attribute(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(name))
        .find_map(|attr| {
            let meta = attr.meta.require_name_value().ok()?;
            match &meta.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            }
        })
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn convert_config(config: SourceConfig) -> Result<Vec<RawModel>> {
    config
        .models
        .into_iter()
        .map(|model| {
            let fields = model
                .fields
                .into_iter()
                .map(|f| {
                    let ty = syn::parse_str::<Type>(&f.type_str).map_err(|e| {
                        CodegenError::Parse(format!(
                            "field `{}.{}`: invalid type `{}`: {e}",
                            model.name, f.name, f.type_str
                        ))
                    })?;
                    Ok(RawField {
                        name: f.name,
                        ty,
                        column_name: f.column_name,
                        primary_key: f.primary_key,
                        soft_delete: f.soft_delete,
                        association: f.association,
                        default: f.default,
                        created_at: f.created_at,
                        updated_at: f.updated_at,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(RawModel {
                name: model.name,
                table_name: model.table_name,
                fields,
            })
        })
        .collect()
}
