//! Rows returned by a store and value extraction helpers.
//!
//! A [`Row`] is an ordered list of `(column, sea_query::Value)` pairs. Generated
//! `from_row` impls pull typed values out of it with [`Row::try_get`], which goes
//! through `sea_query::ValueType` so `Option<T>` columns accept NULL and every
//! other type rejects it.

use crate::error::StoreError;
use sea_query::{Value, ValueType};

/// One result row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.push((column.into(), value.into()));
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Value at a position, for single-column results such as `count(*)`
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extract a typed value
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` when the column is missing or its value does
    /// not convert into `T` (including NULL for non-`Option` types).
    pub fn try_get<T: ValueType>(&self, column: &str) -> Result<T, StoreError> {
        let value = self
            .get(column)
            .ok_or_else(|| StoreError::Decode(format!("column `{column}` missing from row")))?;
        decode(value.clone(), column)
    }

    /// Extract an integer column whatever width the driver reported it with
    pub fn try_get_integer<T: TryFrom<i128>>(&self, column: &str) -> Result<T, StoreError> {
        match self.try_get_optional_integer(column)? {
            Some(value) => Ok(value),
            None => Err(StoreError::Decode(format!(
                "column `{column}`: unexpected NULL"
            ))),
        }
    }

    /// Nullable variant of [`Row::try_get_integer`]
    pub fn try_get_optional_integer<T: TryFrom<i128>>(
        &self,
        column: &str,
    ) -> Result<Option<T>, StoreError> {
        let value = self
            .get(column)
            .ok_or_else(|| StoreError::Decode(format!("column `{column}` missing from row")))?;
        integer(value, column)?
            .map(|raw| narrow(raw, column))
            .transpose()
    }
}

impl<C: Into<String>, V: Into<Value>> FromIterator<(C, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

/// Convert a value into the column's Rust type
pub fn decode<T: ValueType>(value: Value, column: &str) -> Result<T, StoreError> {
    <T as ValueType>::try_from(value.clone()).map_err(|_| {
        StoreError::Decode(format!(
            "column `{column}`: cannot convert {value:?} into {}",
            T::type_name()
        ))
    })
}

/// Integer payload of any integer variant, `None` for NULL
///
/// Widened to `i128` so both `i64` and `u64` columns keep their full range
/// until narrowed to the field type.
fn integer(value: &Value, column: &str) -> Result<Option<i128>, StoreError> {
    let raw = match value {
        Value::TinyInt(v) => v.map(i128::from),
        Value::SmallInt(v) => v.map(i128::from),
        Value::Int(v) => v.map(i128::from),
        Value::BigInt(v) => v.map(i128::from),
        Value::TinyUnsigned(v) => v.map(i128::from),
        Value::SmallUnsigned(v) => v.map(i128::from),
        Value::Unsigned(v) => v.map(i128::from),
        Value::BigUnsigned(v) => v.map(i128::from),
        other => {
            return Err(StoreError::Decode(format!(
                "column `{column}`: expected an integer, got {other:?}"
            )))
        }
    };
    Ok(raw)
}

fn narrow<T: TryFrom<i128>>(raw: i128, column: &str) -> Result<T, StoreError> {
    T::try_from(raw)
        .map_err(|_| StoreError::Decode(format!("column `{column}`: {raw} out of range")))
}

/// Convert a store-assigned identity into an integer primary key
///
/// Drivers report identities with whatever integer width they use internally
/// (`BIGINT` for Postgres, unsigned for MySQL's last insert id), so every integer
/// variant is accepted as long as it fits `T`.
pub fn identity<T: TryFrom<i128>>(value: Value, column: &str) -> Result<T, StoreError> {
    let raw = integer(&value, column)?.ok_or_else(|| {
        StoreError::Decode(format!("column `{column}`: store returned a NULL identity"))
    })?;
    narrow(raw, column)
}
