//! Rendering of clause trees into dialect SQL with sea-query.

use crate::config::Dialect;
use crate::error::StoreError;
use crate::query::clause::{
    Condition, Delete, Direction, Filter, Insert, Operator, Predicate, Select, Update,
};
use sea_query::{
    BinOper, DeleteStatement, Expr, ExprTrait, Iden, InsertStatement, MysqlQueryBuilder, Order,
    PostgresQueryBuilder, Query, SelectStatement, SqliteQueryBuilder, UpdateStatement, Values,
};

/// Table or column name as emitted by the generator
#[derive(Debug, Clone, Copy)]
pub struct Name(pub &'static str);

impl Iden for Name {
    fn unquoted(&self) -> &str {
        self.0
    }
}

macro_rules! build_for {
    ($statement:expr, $dialect:expr) => {
        match $dialect {
            Dialect::Postgres => $statement.build(PostgresQueryBuilder),
            Dialect::Mysql => $statement.build(MysqlQueryBuilder),
            Dialect::Sqlite => $statement.build(SqliteQueryBuilder),
        }
    };
}

fn predicate_expr(predicate: &Predicate) -> Expr {
    let column = Expr::col(Name(predicate.column));
    let first = || predicate.arguments.first().cloned().unwrap_or(sea_query::Value::Bool(None));
    match predicate.operator {
        Operator::Eq => column.eq(first()),
        Operator::Ne => column.ne(first()),
        Operator::Gt => column.gt(first()),
        Operator::Gte => column.gte(first()),
        Operator::Lt => column.lt(first()),
        Operator::Lte => column.lte(first()),
        Operator::Like => column.binary(BinOper::Like, Expr::val(first())),
        Operator::In => column.is_in(predicate.arguments.iter().cloned()),
        Operator::NotIn => column.is_not_in(predicate.arguments.iter().cloned()),
        Operator::IsNull => column.is_null(),
        Operator::IsNotNull => column.is_not_null(),
    }
}

fn condition_expr(condition: &Condition) -> Expr {
    match condition {
        Condition::NotDeleted(column) => Expr::col(Name(*column)).is_null(),
        Condition::PrimaryKey { column, value } => Expr::col(Name(*column)).eq(value.clone()),
        Condition::Predicate(predicate) => predicate_expr(predicate),
    }
}

fn conditions(filter: &Filter) -> impl Iterator<Item = Expr> + '_ {
    filter.conditions.iter().map(condition_expr)
}

pub fn select_statement(select: &Select) -> SelectStatement {
    let mut query = Query::select();
    query.column(sea_query::Asterisk).from(Name(select.table));
    for expr in conditions(&select.filter) {
        query.and_where(expr);
    }
    for order in &select.order_by {
        let direction = match order.direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        };
        query.order_by(Name(order.column), direction);
    }
    if let Some(limit) = select.limit {
        query.limit(limit);
    }
    if let Some(offset) = select.offset {
        query.offset(offset);
    }
    query
}

pub fn count_statement(select: &Select) -> SelectStatement {
    let mut query = Query::select();
    query.expr(Expr::cust("COUNT(*)")).from(Name(select.table));
    for expr in conditions(&select.filter) {
        query.and_where(expr);
    }
    query
}

/// Insert statement; `RETURNING` is added only when the dialect supports it
pub fn insert_statement(insert: &Insert, dialect: Dialect) -> Result<InsertStatement, StoreError> {
    let mut query = Query::insert();
    query.into_table(Name(insert.table));
    if insert.values.is_empty() {
        query.or_default_values();
    } else {
        query.columns(insert.values.iter().map(|(column, _)| Name(*column)));
        query
            .values(insert.values.iter().map(|(_, value)| Expr::val(value.clone())))
            .map_err(|e| StoreError::Other(format!("invalid insert for {}: {e}", insert.table)))?;
    }
    if let Some(column) = insert.returning {
        if dialect.supports_returning() {
            query.returning_col(Name(column));
        }
    }
    Ok(query)
}

pub fn update_statement(update: &Update) -> UpdateStatement {
    let mut query = Query::update();
    query.table(Name(update.table));
    for (column, value) in &update.assignments {
        query.value(Name(*column), value.clone());
    }
    for expr in conditions(&update.filter) {
        query.and_where(expr);
    }
    query
}

pub fn delete_statement(delete: &Delete) -> DeleteStatement {
    let mut query = Query::delete();
    query.from_table(Name(delete.table));
    for expr in conditions(&delete.filter) {
        query.and_where(expr);
    }
    query
}

pub fn render_select(select: &Select, dialect: Dialect) -> (String, Values) {
    build_for!(select_statement(select), dialect)
}

pub fn render_count(select: &Select, dialect: Dialect) -> (String, Values) {
    build_for!(count_statement(select), dialect)
}

pub fn render_insert(insert: &Insert, dialect: Dialect) -> Result<(String, Values), StoreError> {
    let query = insert_statement(insert, dialect)?;
    Ok(build_for!(query, dialect))
}

pub fn render_update(update: &Update, dialect: Dialect) -> (String, Values) {
    build_for!(update_statement(update), dialect)
}

pub fn render_delete(delete: &Delete, dialect: Dialect) -> (String, Values) {
    build_for!(delete_statement(delete), dialect)
}
