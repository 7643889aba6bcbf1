//! Query building and execution for generated models.
//!
//! # Architecture
//!
//! - **Clause**: the statement tree handed to a [`Store`](crate::Store) (`clause`)
//! - **Select**: the generic query set every `<Model>QuerySet` wraps (`select`)
//! - **Update**: the generic updater every `<Model>Updater` wraps (`update`)
//! - **Statement**: rendering of clause trees into SQL with sea-query (`statement`)
//!
//! Every read and write path starts its filter with [`base_filter`], which puts the
//! implicit soft-delete condition first so user predicates can never override it.

pub mod clause;
pub mod select;
pub mod statement;
pub mod update;

pub use clause::{
    Arity, Condition, Delete, Direction, Filter, Insert, Operator, OrderBy, Predicate, Select,
    Statement, Update,
};
pub use select::QuerySet;
pub use update::{Scope, Updater};

use crate::error::QueryError;
use crate::model::ModelMeta;
use crate::store::Store;
use chrono::Utc;

/// Filter every statement for `meta` starts from
pub(crate) fn base_filter(meta: &ModelMeta) -> Filter {
    let mut filter = Filter::new();
    if let Some(soft_delete) = meta.soft_delete {
        filter.push(Condition::NotDeleted(soft_delete.column));
    }
    filter
}

/// Remove the rows matched by `filter`
///
/// Models with a soft-delete column get an `UPDATE` stamping it with the current
/// time; the filter already excludes deleted rows so repeated deletes touch nothing.
pub(crate) fn remove(
    store: &dyn Store,
    meta: &ModelMeta,
    filter: Filter,
) -> Result<u64, QueryError> {
    match meta.soft_delete {
        Some(soft_delete) => {
            let statement = Update {
                table: meta.table,
                assignments: vec![(soft_delete.column, soft_delete.kind.value(Utc::now()))],
                filter,
            };
            log::debug!("{}: {}", meta.name, statement);
            Ok(store.update(&statement)?)
        }
        None => {
            let statement = Delete {
                table: meta.table,
                filter,
            };
            log::debug!("{}: {}", meta.name, statement);
            Ok(store.delete(&statement)?)
        }
    }
}
