//! Instance operations: create, partial update and delete of one model value.
//!
//! Generated models expose these as inherent `create` / `update` / `delete`
//! methods; the free functions here hold the behavior so every model shares it.

use crate::error::QueryError;
use crate::model::ModelTrait;
use crate::query::clause::{Condition, Insert};
use crate::query::update::Updater;
use crate::query::{base_filter, remove};
use crate::store::Store;
use chrono::Utc;

/// Insert `entity` and fill its primary key from the store-assigned identity
///
/// Creation/update timestamps are stamped with the current time first. A
/// model whose primary key is already set is inserted with that key and no
/// identity is requested.
///
/// # Errors
///
/// Returns [`QueryError::Validation`] without touching the store when a
/// required field is empty.
pub fn create<M: ModelTrait>(store: &dyn Store, entity: &mut M) -> Result<(), QueryError> {
    let meta = M::meta();
    let missing = entity.missing_required();
    if !missing.is_empty() {
        return Err(QueryError::Validation {
            model: meta.name,
            message: format!("required field(s) not set: {}", missing.join(", ")),
        });
    }

    entity.stamp_created(Utc::now());

    let returning = match entity.primary_key_value() {
        Some(_) => None,
        None => meta.primary_key,
    };
    let statement = Insert {
        table: meta.table,
        values: entity.insert_values(),
        returning,
    };
    log::debug!("{}: {}", meta.name, statement);

    if let Some(identity) = store.insert(&statement)? {
        if returning.is_some() {
            entity.set_primary_key(identity)?;
        }
    }
    Ok(())
}

/// Write the selected columns of `entity` to its row
///
/// # Errors
///
/// - [`QueryError::EmptyUpdate`] for an empty selection
/// - [`QueryError::Validation`] when the selection names the primary key, the
///   soft-delete column or an unknown column
/// - [`QueryError::MissingPrimaryKey`] when the instance has no key
pub fn update_columns<M: ModelTrait>(
    store: &dyn Store,
    entity: &M,
    columns: &[&'static str],
) -> Result<u64, QueryError> {
    let meta = M::meta();
    if columns.is_empty() {
        return Err(QueryError::EmptyUpdate { model: meta.name });
    }

    let mut updater = Updater::for_model(store, entity);
    for &column in columns {
        let protected = meta.primary_key == Some(column)
            || meta.soft_delete.map(|s| s.column) == Some(column);
        if protected {
            return Err(QueryError::Validation {
                model: meta.name,
                message: format!("column `{column}` cannot be updated"),
            });
        }
        let value = entity.get(column).ok_or_else(|| QueryError::Validation {
            model: meta.name,
            message: format!("unknown column `{column}`"),
        })?;
        updater = updater.set(column, value);
    }
    updater.update()
}

/// Delete the row of `entity`
///
/// Soft-deletable models are stamped instead; deleting an already deleted
/// row affects zero rows and is not an error.
///
/// # Errors
///
/// Returns [`QueryError::MissingPrimaryKey`] when the instance has no key.
pub fn delete<M: ModelTrait>(store: &dyn Store, entity: &M) -> Result<u64, QueryError> {
    let meta = M::meta();
    let (column, value) = meta
        .primary_key
        .zip(entity.primary_key_value())
        .ok_or(QueryError::MissingPrimaryKey { model: meta.name })?;

    let mut filter = base_filter(meta);
    filter.push(Condition::PrimaryKey { column, value });
    remove(store, meta, filter)
}
