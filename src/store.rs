//! The `Store` seam between generated code and a database driver.
//!
//! Generated query sets and updaters only ever talk to `&dyn Store`. The store
//! receives a fully composed clause tree and owns everything below it: SQL
//! dialect, parameter binding, connections and transactions.

use crate::error::StoreError;
use crate::query::clause::{Delete, Insert, Select, Update};
use crate::row::Row;
use sea_query::Value;

/// Executes clause trees against a backing store
///
/// # Examples
///
/// ```no_run
/// use queryset::{MockStore, Store};
/// use queryset::query::clause::Select;
///
/// let store = MockStore::new();
/// let rows = store.select(&Select::new("users")).unwrap();
/// assert!(rows.is_empty());
/// ```
pub trait Store {
    /// Rows matching the statement, in store order
    fn select(&self, statement: &Select) -> Result<Vec<Row>, StoreError>;

    /// Number of rows matching the statement's filter
    fn count(&self, statement: &Select) -> Result<u64, StoreError>;

    /// Insert a row and return the identity the store assigned to
    /// `statement.returning`, if any
    fn insert(&self, statement: &Insert) -> Result<Option<Value>, StoreError>;

    /// Apply assignments and return the number of affected rows
    fn update(&self, statement: &Update) -> Result<u64, StoreError>;

    /// Remove rows and return the number of affected rows
    fn delete(&self, statement: &Delete) -> Result<u64, StoreError>;
}

impl<S: Store + ?Sized> Store for &S {
    fn select(&self, statement: &Select) -> Result<Vec<Row>, StoreError> {
        (**self).select(statement)
    }

    fn count(&self, statement: &Select) -> Result<u64, StoreError> {
        (**self).count(statement)
    }

    fn insert(&self, statement: &Insert) -> Result<Option<Value>, StoreError> {
        (**self).insert(statement)
    }

    fn update(&self, statement: &Update) -> Result<u64, StoreError> {
        (**self).update(statement)
    }

    fn delete(&self, statement: &Delete) -> Result<u64, StoreError> {
        (**self).delete(statement)
    }
}
