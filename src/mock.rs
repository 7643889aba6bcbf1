//! In-memory [`Store`] that records statements and replays queued results.
//!
//! Used by the crate's own tests and by applications testing generated code
//! without a database. Results are consumed in FIFO order; when the queue is
//! empty every call succeeds with an empty answer (no rows, zero counts, no
//! identity).

use crate::error::StoreError;
use crate::query::clause::{Delete, Insert, Select, Statement, Update};
use crate::row::Row;
use crate::store::Store;
use sea_query::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Queued answer for the next store call
#[derive(Debug)]
pub enum MockResult {
    /// Rows for `select`
    Rows(Vec<Row>),
    /// Cardinality for `count`
    Count(u64),
    /// Assigned identity for `insert`
    Identity(Option<Value>),
    /// Affected rows for `update` / `delete`
    Affected(u64),
    /// Failure returned by whichever call comes next
    Error(StoreError),
}

impl MockResult {
    fn kind(&self) -> &'static str {
        match self {
            MockResult::Rows(_) => "rows",
            MockResult::Count(_) => "count",
            MockResult::Identity(_) => "identity",
            MockResult::Affected(_) => "affected rows",
            MockResult::Error(_) => "error",
        }
    }
}

/// Recording store for tests
#[derive(Debug, Default)]
pub struct MockStore {
    statements: Mutex<Vec<Statement>>,
    results: Mutex<VecDeque<MockResult>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_rows(self, rows: Vec<Row>) -> Self {
        self.push_result(MockResult::Rows(rows));
        self
    }

    pub fn append_count(self, count: u64) -> Self {
        self.push_result(MockResult::Count(count));
        self
    }

    pub fn append_identity(self, identity: impl Into<Value>) -> Self {
        self.push_result(MockResult::Identity(Some(identity.into())));
        self
    }

    pub fn append_affected(self, affected: u64) -> Self {
        self.push_result(MockResult::Affected(affected));
        self
    }

    pub fn append_error(self, error: StoreError) -> Self {
        self.push_result(MockResult::Error(error));
        self
    }

    /// Queue a result on a shared store
    pub fn push_result(&self, result: MockResult) {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    /// Every statement received so far, in call order
    pub fn statements(&self) -> Vec<Statement> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered shapes of every statement received so far
    pub fn rendered(&self) -> Vec<String> {
        self.statements().iter().map(ToString::to_string).collect()
    }

    /// Most recent statement
    pub fn last(&self) -> Option<Statement> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Results still waiting in the queue
    pub fn pending(&self) -> usize {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn record(&self, statement: Statement) -> Option<MockResult> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(statement);
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

fn unexpected(expected: &str, got: &MockResult) -> StoreError {
    StoreError::Other(format!(
        "mock store: expected queued {expected}, found {}",
        got.kind()
    ))
}

impl Store for MockStore {
    fn select(&self, statement: &Select) -> Result<Vec<Row>, StoreError> {
        match self.record(Statement::Select(statement.clone())) {
            None => Ok(Vec::new()),
            Some(MockResult::Rows(rows)) => Ok(rows),
            Some(MockResult::Error(e)) => Err(e),
            Some(other) => Err(unexpected("rows", &other)),
        }
    }

    fn count(&self, statement: &Select) -> Result<u64, StoreError> {
        match self.record(Statement::Count(statement.clone())) {
            None => Ok(0),
            Some(MockResult::Count(count)) => Ok(count),
            Some(MockResult::Error(e)) => Err(e),
            Some(other) => Err(unexpected("count", &other)),
        }
    }

    fn insert(&self, statement: &Insert) -> Result<Option<Value>, StoreError> {
        match self.record(Statement::Insert(statement.clone())) {
            None => Ok(None),
            Some(MockResult::Identity(identity)) => Ok(identity),
            Some(MockResult::Error(e)) => Err(e),
            Some(other) => Err(unexpected("identity", &other)),
        }
    }

    fn update(&self, statement: &Update) -> Result<u64, StoreError> {
        match self.record(Statement::Update(statement.clone())) {
            None => Ok(0),
            Some(MockResult::Affected(n)) => Ok(n),
            Some(MockResult::Error(e)) => Err(e),
            Some(other) => Err(unexpected("affected rows", &other)),
        }
    }

    fn delete(&self, statement: &Delete) -> Result<u64, StoreError> {
        match self.record(Statement::Delete(statement.clone())) {
            None => Ok(0),
            Some(MockResult::Affected(n)) => Ok(n),
            Some(MockResult::Error(e)) => Err(e),
            Some(other) => Err(unexpected("affected rows", &other)),
        }
    }
}
