//! Generic query set for generated models.
//!
//! `<Model>QuerySet` types emitted by `queryset-codegen` are thin wrappers around
//! [`QuerySet<M>`]: each generated `<field>_<op>` method pushes one
//! [`Predicate`], and the terminals are forwarded unchanged. Building methods
//! consume the query set and return it extended, so a query set is used at most
//! once.

use crate::error::QueryError;
use crate::model::ModelTrait;
use crate::query::clause::{Condition, Direction, Filter, OrderBy, Predicate, Select, Statement};
use crate::query::update::Updater;
use crate::query::{base_filter, remove};
use crate::store::Store;
use std::marker::PhantomData;

/// Query builder scoped to one model
///
/// # Example
///
/// ```no_run
/// use queryset::{MockStore, Operator, Predicate, QuerySet, Value};
/// # use queryset::ModelTrait;
/// # fn example<User: ModelTrait>() -> Result<(), queryset::QueryError> {
/// let store = MockStore::new();
///
/// let mut users: Vec<User> = Vec::new();
/// QuerySet::<User>::new(&store)
///     .filter(Predicate::compare("email", Operator::Eq, Value::from("a@x.com")))
///     .order_by("id", queryset::Direction::Desc)
///     .limit(10)
///     .all(&mut users)?;
/// # Ok(())
/// # }
/// ```
pub struct QuerySet<'s, M> {
    store: &'s dyn Store,
    predicates: Vec<Predicate>,
    order_by: Vec<OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
    preload: Vec<&'static str>,
    _model: PhantomData<fn() -> M>,
}

impl<'s, M> std::fmt::Debug for QuerySet<'s, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuerySet")
            .field("predicates", &self.predicates)
            .field("order_by", &self.order_by)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("preload", &self.preload)
            .finish()
    }
}

impl<'s, M: ModelTrait> QuerySet<'s, M> {
    pub fn new(store: &'s dyn Store) -> Self {
        Self {
            store,
            predicates: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            preload: Vec::new(),
            _model: PhantomData,
        }
    }

    /// Append a predicate; predicates are AND-ed in chain order
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order_by.push(OrderBy { column, direction });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Ask the store to load an association alongside the rows
    pub fn preload(mut self, association: &'static str) -> Self {
        if !self.preload.contains(&association) {
            self.preload.push(association);
        }
        self
    }

    /// Predicates accumulated so far, in chain order
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    fn filter_clause(&self) -> Filter {
        let mut filter = base_filter(M::meta());
        for predicate in &self.predicates {
            filter.push(Condition::Predicate(predicate.clone()));
        }
        filter
    }

    /// Statement `all()` would run
    pub fn to_select(&self) -> Select {
        Select {
            table: M::meta().table,
            filter: self.filter_clause(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            preload: self.preload.clone(),
        }
    }

    /// Load every matching row into `dest`
    ///
    /// `dest` is replaced only when the whole result decodes; zero matches
    /// leave it empty.
    pub fn all(self, dest: &mut Vec<M>) -> Result<(), QueryError> {
        let select = self.to_select();
        log::debug!("{}: {}", M::meta().name, select);
        let rows = self.store.select(&select)?;
        let models = rows
            .iter()
            .map(M::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        *dest = models;
        Ok(())
    }

    /// Load the first matching row into `dest`
    ///
    /// Without explicit ordering the primary key orders ascending, so the
    /// result is deterministic. Zero matches return [`QueryError::NotFound`]
    /// and leave `dest` untouched.
    pub fn one(self, dest: &mut M) -> Result<(), QueryError> {
        let meta = M::meta();
        let mut select = self.to_select();
        if select.order_by.is_empty() {
            if let Some(primary_key) = meta.primary_key {
                select.order_by.push(OrderBy {
                    column: primary_key,
                    direction: Direction::Asc,
                });
            }
        }
        select.limit = Some(1);
        log::debug!("{}: {}", meta.name, select);

        let rows = self.store.select(&select)?;
        let row = rows
            .first()
            .ok_or(QueryError::NotFound { model: meta.name })?;
        *dest = M::from_row(row)?;
        Ok(())
    }

    /// Number of matching rows; ordering and paging are ignored
    pub fn count(self) -> Result<u64, QueryError> {
        let meta = M::meta();
        let mut select = Select::new(meta.table);
        select.filter = self.filter_clause();
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{}: {}", meta.name, Statement::Count(select.clone()));
        }
        Ok(self.store.count(&select)?)
    }

    /// Delete every matching row
    ///
    /// Models with a soft-delete column are stamped instead of removed.
    pub fn delete(self) -> Result<u64, QueryError> {
        remove(self.store, M::meta(), self.filter_clause())
    }

    /// Updater scoped by the predicates accumulated so far
    pub fn get_updater(self) -> Updater<'s, M> {
        Updater::scoped(self.store, self.predicates)
    }
}
