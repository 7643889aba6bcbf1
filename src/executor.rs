//! `Executor` driver seam and the sea-query backed [`SqlStore`].
//!
//! `SqlStore` renders clause trees into SQL for one [`Dialect`] and hands
//! `(sql, values)` to an [`Executor`], which wraps whatever driver the
//! application uses. Driver errors come back as [`StoreError::Driver`] and are
//! forwarded to callers unchanged.

use crate::config::{Dialect, StoreConfig};
use crate::error::StoreError;
use crate::query::clause::{Delete, Insert, Select, Update};
use crate::query::statement::{
    render_count, render_delete, render_insert, render_select, render_update,
};
use crate::row::{identity, Row};
use crate::store::Store;
use sea_query::{Value, Values};

/// Trait for executing rendered SQL
///
/// # Examples
///
/// ```no_run
/// use queryset::{Executor, Row, StoreError};
/// use queryset::sea_query::Values;
///
/// struct Noop;
///
/// impl Executor for Noop {
///     fn execute(&self, _sql: &str, _values: &Values) -> Result<u64, StoreError> {
///         Ok(0)
///     }
///     fn query_all(&self, _sql: &str, _values: &Values) -> Result<Vec<Row>, StoreError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait Executor {
    /// Execute a statement and return the number of rows affected
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the statement fails.
    fn execute(&self, sql: &str, values: &Values) -> Result<u64, StoreError>;

    /// Execute a query and return all rows
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    fn query_all(&self, sql: &str, values: &Values) -> Result<Vec<Row>, StoreError>;

    /// Execute an insert without `RETURNING` and report the identity the
    /// driver assigned (MySQL's last insert id)
    ///
    /// The default executes the statement and reports no identity.
    fn execute_insert(&self, sql: &str, values: &Values) -> Result<Option<Value>, StoreError> {
        self.execute(sql, values).map(|_| None)
    }
}

/// [`Store`] rendering SQL with sea-query and running it on an [`Executor`]
pub struct SqlStore<E> {
    executor: E,
    dialect: Dialect,
    log_statements: bool,
}

impl<E: Executor> SqlStore<E> {
    pub fn new(executor: E, dialect: Dialect) -> Self {
        Self {
            executor,
            dialect,
            log_statements: true,
        }
    }

    pub fn from_config(executor: E, config: &StoreConfig) -> Self {
        Self {
            executor,
            dialect: config.dialect,
            log_statements: config.log_statements,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    fn trace(&self, sql: &str) {
        if self.log_statements {
            log::debug!("{:?}: {sql}", self.dialect);
        }
    }
}

impl<E: Executor> Store for SqlStore<E> {
    fn select(&self, statement: &Select) -> Result<Vec<Row>, StoreError> {
        if !statement.preload.is_empty() {
            log::warn!(
                "{}: preload of {:?} is not supported by SqlStore, loading rows only",
                statement.table,
                statement.preload
            );
        }
        let (sql, values) = render_select(statement, self.dialect);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("queryset.select", table = statement.table, sql = %sql)
            .entered();
        self.trace(&sql);
        self.executor.query_all(&sql, &values)
    }

    fn count(&self, statement: &Select) -> Result<u64, StoreError> {
        let (sql, values) = render_count(statement, self.dialect);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("queryset.count", table = statement.table, sql = %sql)
            .entered();
        self.trace(&sql);
        let rows = self.executor.query_all(&sql, &values)?;
        let value = rows
            .first()
            .and_then(|row| row.value_at(0))
            .cloned()
            .ok_or_else(|| StoreError::Decode("count query returned no rows".to_string()))?;
        identity(value, "count")
    }

    fn insert(&self, statement: &Insert) -> Result<Option<Value>, StoreError> {
        let (sql, values) = render_insert(statement, self.dialect)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("queryset.insert", table = statement.table, sql = %sql)
            .entered();
        self.trace(&sql);
        match statement.returning {
            Some(_) if self.dialect.supports_returning() => {
                let rows = self.executor.query_all(&sql, &values)?;
                Ok(rows.first().and_then(|row| row.value_at(0)).cloned())
            }
            Some(_) => self.executor.execute_insert(&sql, &values),
            None => self.executor.execute(&sql, &values).map(|_| None),
        }
    }

    fn update(&self, statement: &Update) -> Result<u64, StoreError> {
        let (sql, values) = render_update(statement, self.dialect);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("queryset.update", table = statement.table, sql = %sql)
            .entered();
        self.trace(&sql);
        self.executor.execute(&sql, &values)
    }

    fn delete(&self, statement: &Delete) -> Result<u64, StoreError> {
        let (sql, values) = render_delete(statement, self.dialect);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("queryset.delete", table = statement.table, sql = %sql)
            .entered();
        self.trace(&sql);
        self.executor.execute(&sql, &values)
    }
}
