//! Generic partial-update builder.
//!
//! An [`Updater`] collects `column = value` assignments and applies them to
//! either the rows matched by a query set's predicates or to one model instance
//! addressed by primary key.

use crate::error::QueryError;
use crate::model::ModelTrait;
use crate::query::base_filter;
use crate::query::clause::{Condition, Predicate, Update};
use crate::store::Store;
use sea_query::Value;
use std::marker::PhantomData;

/// Rows an [`Updater`] applies to
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// Every row matching the carried-forward predicates
    Filter(Vec<Predicate>),
    /// The row with this primary key; `None` when the instance had no key
    Instance(Option<Value>),
}

pub struct Updater<'s, M> {
    store: &'s dyn Store,
    scope: Scope,
    assignments: Vec<(&'static str, Value)>,
    _model: PhantomData<fn() -> M>,
}

impl<'s, M> std::fmt::Debug for Updater<'s, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("scope", &self.scope)
            .field("assignments", &self.assignments)
            .finish()
    }
}

impl<'s, M: ModelTrait> Updater<'s, M> {
    /// Updater over the rows matched by `predicates`
    pub fn scoped(store: &'s dyn Store, predicates: Vec<Predicate>) -> Self {
        Self {
            store,
            scope: Scope::Filter(predicates),
            assignments: Vec::new(),
            _model: PhantomData,
        }
    }

    /// Updater over a single instance, addressed by its primary key
    pub fn for_model(store: &'s dyn Store, model: &M) -> Self {
        Self {
            store,
            scope: Scope::Instance(model.primary_key_value()),
            assignments: Vec::new(),
            _model: PhantomData,
        }
    }

    /// Assign a column; assigning the same column again replaces the value
    pub fn set(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.assignments.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.assignments.push((column, value)),
        }
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Assignments in first-set order
    pub fn assignments(&self) -> &[(&'static str, Value)] {
        &self.assignments
    }

    /// Apply the assignments and return the number of affected rows
    ///
    /// # Errors
    ///
    /// - [`QueryError::EmptyUpdate`] when nothing was set; no statement is issued
    /// - [`QueryError::MissingPrimaryKey`] for an instance scope without a key
    pub fn update(self) -> Result<u64, QueryError> {
        let meta = M::meta();
        if self.assignments.is_empty() {
            return Err(QueryError::EmptyUpdate { model: meta.name });
        }

        let mut filter = base_filter(meta);
        match self.scope {
            Scope::Filter(predicates) => {
                for predicate in predicates {
                    filter.push(Condition::Predicate(predicate));
                }
            }
            Scope::Instance(key) => {
                let (column, value) = meta
                    .primary_key
                    .zip(key)
                    .ok_or(QueryError::MissingPrimaryKey { model: meta.name })?;
                filter.push(Condition::PrimaryKey { column, value });
            }
        }

        let statement = Update {
            table: meta.table,
            assignments: self.assignments,
            filter,
        };
        log::debug!("{}: {}", meta.name, statement);
        Ok(self.store.update(&statement)?)
    }
}
