//! queryset-codegen
//!
//! Build-time generator for the `queryset` runtime. Model definitions (Rust
//! structs marked `#[queryset]`, or TOML/JSON) are parsed, validated into a
//! [`Schema`] and turned into one Rust source file holding, per model, the
//! struct, its column enum, a `<Model>QuerySet` and a `<Model>Updater`.
//!
//! Generating source files instead of expanding a procedural macro keeps the
//! emitted API readable and reviewable in the consuming crate.

pub mod classify;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod parser;
pub mod schema;
pub mod writer;

pub use config::GeneratorConfig;
pub use emit::{generate_file, write_atomic, Summary};
pub use error::{CodegenError, Result};
pub use schema::{Field, Model, Schema};
pub use writer::QuerySetWriter;
