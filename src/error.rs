//! Error types returned by generated query sets, updaters and instance operations.
//!
//! Two layers exist:
//! - [`StoreError`] is whatever the store collaborator reports (driver failures,
//!   row decoding problems). It is forwarded unchanged.
//! - [`QueryError`] is what callers of generated code see. It adds the run-time
//!   failures the query layer itself detects before or after talking to the store.

use std::fmt;

/// Error reported by a [`Store`](crate::Store) implementation
#[derive(Debug)]
pub enum StoreError {
    /// Failure raised by the underlying driver (constraint violation, connectivity, ...)
    Driver(Box<dyn std::error::Error + Send + Sync>),
    /// A row value could not be converted into the field's Rust type
    Decode(String),
    /// Other store failures
    Other(String),
}

impl StoreError {
    /// Wrap a driver error without reinterpreting it
    pub fn driver<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Driver(Box::new(err))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Driver(e) => write!(f, "Driver error: {e}"),
            StoreError::Decode(s) => write!(f, "Decode error: {s}"),
            StoreError::Other(s) => write!(f, "Store error: {s}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Driver(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Error returned by generated query sets, updaters and instance operations
#[derive(Debug)]
pub enum QueryError {
    /// `one()` matched zero rows
    NotFound { model: &'static str },
    /// `update()` was called without any `set_*` call
    EmptyUpdate { model: &'static str },
    /// Point operation on an instance whose primary key is zero or unset
    MissingPrimaryKey { model: &'static str },
    /// The instance cannot be written as-is
    Validation {
        model: &'static str,
        message: String,
    },
    /// The store failed to execute the statement
    Store(StoreError),
}

impl QueryError {
    /// True for [`QueryError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::NotFound { .. })
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NotFound { model } => write!(f, "{model}: record not found"),
            QueryError::EmptyUpdate { model } => {
                write!(f, "{model}: update has no fields to set")
            }
            QueryError::MissingPrimaryKey { model } => {
                write!(f, "{model}: primary key is required for this operation")
            }
            QueryError::Validation { model, message } => {
                write!(f, "{model}: validation failed: {message}")
            }
            QueryError::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        QueryError::Store(err)
    }
}
