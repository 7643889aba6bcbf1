//! Error types for codegen
//!
//! Every variant is fatal: generation stops and nothing is written.

use std::fmt;

#[derive(Debug)]
pub enum CodegenError {
    Io(std::io::Error),
    /// The input could not be read as a model definition source
    Parse(String),
    /// The definitions are structurally unusable
    SchemaExtraction { model: String, reason: String },
    /// Two fields of one model map to the same column
    DuplicateColumn { model: String, column: String },
    /// A non-association field has a type no query capability exists for
    UnsupportedFieldType {
        model: String,
        field: String,
        ty: String,
    },
    Config(String),
    Generation(String),
}

impl CodegenError {
    pub(crate) fn extraction(model: impl Into<String>, reason: impl Into<String>) -> Self {
        CodegenError::SchemaExtraction {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Io(e) => write!(f, "I/O error: {e}"),
            CodegenError::Parse(s) => write!(f, "Parse error: {s}"),
            CodegenError::SchemaExtraction { model, reason } => {
                write!(f, "Schema extraction error in `{model}`: {reason}")
            }
            CodegenError::DuplicateColumn { model, column } => {
                write!(f, "Duplicate column `{column}` in model `{model}`")
            }
            CodegenError::UnsupportedFieldType { model, field, ty } => {
                write!(
                    f,
                    "Unsupported type `{ty}` for field `{model}.{field}` (mark it #[association] if it is one)"
                )
            }
            CodegenError::Config(s) => write!(f, "Configuration error: {s}"),
            CodegenError::Generation(s) => write!(f, "Generation error: {s}"),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodegenError {
    fn from(err: std::io::Error) -> Self {
        CodegenError::Io(err)
    }
}

impl From<syn::Error> for CodegenError {
    fn from(err: syn::Error) -> Self {
        CodegenError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;
