//! Generation pipeline and atomic emission
//!
//! The target file is only replaced once the whole source has been generated
//! and written to a temporary file next to it.

use crate::config::GeneratorConfig;
use crate::error::{CodegenError, Result};
use crate::extract::extract;
use crate::parser::parse_path;
use crate::writer::QuerySetWriter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub models: Vec<String>,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Write `contents` to `path` through a temporary file in the same directory
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| CodegenError::Io(e.error))?;
    Ok(())
}

/// Parse `input`, generate and write the result to `output`
///
/// Any failure leaves `output` as it was.
pub fn generate_file(input: &Path, output: &Path, config: &GeneratorConfig) -> Result<Summary> {
    if output.is_dir() {
        return Err(CodegenError::Generation(format!(
            "output `{}` is a directory, expected a file",
            output.display()
        )));
    }

    let schema = extract(parse_path(input)?)?;
    log::debug!(
        "extracted {} model(s) from {}",
        schema.models.len(),
        input.display()
    );

    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let code = QuerySetWriter::new(config.clone()).generate(&schema, &source_name)?;
    write_atomic(output, &code)?;

    let summary = Summary {
        models: schema.models.iter().map(|m| m.name.clone()).collect(),
        output: output.to_path_buf(),
        bytes: code.len(),
    };
    log::info!(
        "generated {} model(s) [{}] into {} ({} bytes)",
        summary.models.len(),
        summary.models.join(", "),
        summary.output.display(),
        summary.bytes
    );
    Ok(summary)
}
