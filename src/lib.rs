//! # queryset
//!
//! Runtime for strongly-typed query sets and updaters generated by
//! `queryset-codegen`.
//!
//! Generated code composes clause trees ([`query::clause`]) through the generic
//! [`QuerySet`] and [`Updater`] and hands them to a [`Store`]. Models with a
//! soft-delete column are scoped to live rows on every read and write path, and
//! deleting them stamps the column instead of removing the row.
//!
//! ```no_run
//! use queryset::{Dialect, SqlStore, StoreConfig};
//! # fn example<E: queryset::Executor>(executor: E) -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::load()?;
//! let store = SqlStore::from_config(executor, &config);
//! assert_eq!(store.dialect(), Dialect::Postgres);
//! # Ok(())
//! # }
//! ```

pub mod active_model;
pub mod config;
pub mod error;
pub mod executor;
pub mod mock;
pub mod model;
pub mod query;
pub mod row;
pub mod store;

#[cfg(test)]
mod tests_cfg;

// Generated code only depends on this crate
pub use chrono;
pub use sea_query;
pub use sea_query::Value;

pub use config::{Dialect, StoreConfig};
pub use error::{QueryError, StoreError};
pub use executor::{Executor, SqlStore};
pub use mock::{MockResult, MockStore};
pub use model::{ModelMeta, ModelTrait, SoftDelete, TimeKind};
pub use query::{
    Arity, Condition, Direction, Filter, Operator, OrderBy, Predicate, QuerySet, Scope, Statement,
    Updater,
};
pub use row::{decode, identity, Row};
pub use store::Store;
