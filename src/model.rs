//! Model trait implemented by generated code
//!
//! This module provides [`ModelTrait`], the seam between a generated model struct
//! and the generic query layer. The generated impl supplies static metadata
//! ([`ModelMeta`]) and per-field conversions; everything else (clause composition,
//! soft-delete scoping, point vs. batch paths) lives in the runtime.

use crate::error::StoreError;
use crate::row::Row;
use chrono::{DateTime, Utc};
use sea_query::Value;

/// Static description of a generated model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelMeta {
    /// Model name, used in error messages
    pub name: &'static str,
    pub table: &'static str,
    /// Column names in declaration order (associations excluded)
    pub columns: &'static [&'static str],
    pub primary_key: Option<&'static str>,
    pub soft_delete: Option<SoftDelete>,
}

/// Soft-delete marker column of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftDelete {
    pub column: &'static str,
    pub kind: TimeKind,
}

/// Storage type of a time column written by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    /// `chrono::DateTime<Utc>`
    Utc,
    /// `chrono::NaiveDateTime` holding UTC wall time
    Naive,
}

impl TimeKind {
    /// Value stored when the runtime stamps `now`
    pub fn value(self, now: DateTime<Utc>) -> Value {
        match self {
            TimeKind::Utc => Value::from(now),
            TimeKind::Naive => Value::from(now.naive_utc()),
        }
    }
}

impl ModelMeta {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

/// Trait for generated model structs
///
/// # Example
///
/// ```no_run
/// use queryset::{ModelMeta, ModelTrait, Row, StoreError, Value};
///
/// #[derive(Debug, Clone, Default)]
/// struct Tag { id: i64, label: String }
///
/// static TAG_META: ModelMeta = ModelMeta {
///     name: "Tag",
///     table: "tags",
///     columns: &["id", "label"],
///     primary_key: Some("id"),
///     soft_delete: None,
/// };
///
/// impl ModelTrait for Tag {
///     fn meta() -> &'static ModelMeta { &TAG_META }
///     fn from_row(row: &Row) -> Result<Self, StoreError> {
///         Ok(Self { id: row.try_get("id")?, label: row.try_get("label")? })
///     }
///     fn get(&self, column: &str) -> Option<Value> {
///         match column {
///             "id" => Some(Value::from(self.id)),
///             "label" => Some(Value::from(self.label.clone())),
///             _ => None,
///         }
///     }
///     fn primary_key_value(&self) -> Option<Value> {
///         (self.id != 0).then(|| Value::from(self.id))
///     }
///     fn set_primary_key(&mut self, value: Value) -> Result<(), StoreError> {
///         self.id = queryset::identity(value, "id")?;
///         Ok(())
///     }
///     fn insert_values(&self) -> Vec<(&'static str, Value)> {
///         let mut values = Vec::new();
///         if self.id != 0 { values.push(("id", Value::from(self.id))); }
///         values.push(("label", Value::from(self.label.clone())));
///         values
///     }
/// }
/// ```
pub trait ModelTrait: Sized {
    fn meta() -> &'static ModelMeta;

    /// Build an instance from a row returned by the store
    fn from_row(row: &Row) -> Result<Self, StoreError>;

    /// Current value of a column, `None` for unknown columns
    fn get(&self, column: &str) -> Option<Value>;

    /// Primary key value, `None` when the model has no key or it is zero/unset
    fn primary_key_value(&self) -> Option<Value>;

    /// Store the identity assigned by the store on insert
    fn set_primary_key(&mut self, value: Value) -> Result<(), StoreError>;

    /// Column/value pairs written by `create`
    fn insert_values(&self) -> Vec<(&'static str, Value)>;

    /// Required columns whose value is absent
    fn missing_required(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Set creation/update marker fields to `now`
    fn stamp_created(&mut self, _now: DateTime<Utc>) {}
}
