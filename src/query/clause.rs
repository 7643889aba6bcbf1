//! Clause tree handed to a [`Store`](crate::Store).
//!
//! Generated query sets never build SQL text. They assemble the statements in
//! this module (table, ordered conditions, ordering, limit/offset, or a
//! column/value list for writes) and let the store execute them.
//!
//! The `Display` impls render the dialect-neutral statement shape with `?`
//! placeholders. It is what gets logged and what tests assert on:
//!
//! ```text
//! UPDATE users SET name = ? WHERE deleted_at IS NULL AND (email = ?)
//! ```

use sea_query::Value;
use std::fmt;

/// Closed set of predicate operators a generated field method can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

/// How many arguments an operator binds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No argument (`IS NULL`)
    Unary,
    /// Exactly one argument (`= ?`)
    Binary,
    /// Any number of arguments (`IN (?, ?)`)
    List,
}

impl Operator {
    /// Every operator, in method emission order
    pub const ALL: [Operator; 11] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::Like,
        Operator::In,
        Operator::NotIn,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    pub const fn arity(self) -> Arity {
        match self {
            Operator::IsNull | Operator::IsNotNull => Arity::Unary,
            Operator::In | Operator::NotIn => Arity::List,
            Operator::Eq
            | Operator::Ne
            | Operator::Gt
            | Operator::Gte
            | Operator::Lt
            | Operator::Lte
            | Operator::Like => Arity::Binary,
        }
    }

    /// SQL spelling of the operator
    pub const fn sql(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }

    /// Suffix of the generated chain method (`email_eq`, `id_not_in`, ...)
    pub const fn method_suffix(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Like => "like",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
        }
    }

    /// Name of the enum variant, for generated code that spells the operator
    pub const fn variant_name(self) -> &'static str {
        match self {
            Operator::Eq => "Eq",
            Operator::Ne => "Ne",
            Operator::Gt => "Gt",
            Operator::Gte => "Gte",
            Operator::Lt => "Lt",
            Operator::Lte => "Lte",
            Operator::Like => "Like",
            Operator::In => "In",
            Operator::NotIn => "NotIn",
            Operator::IsNull => "IsNull",
            Operator::IsNotNull => "IsNotNull",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

/// One user-applied condition: `column <op> arguments`
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub operator: Operator,
    pub arguments: Vec<Value>,
}

impl Predicate {
    /// `column <op> ?` for single-argument operators
    pub fn compare(column: &'static str, operator: Operator, value: Value) -> Self {
        debug_assert_eq!(operator.arity(), Arity::Binary);
        Self {
            column,
            operator,
            arguments: vec![value],
        }
    }

    /// `column IN (?, ...)` / `column NOT IN (?, ...)`
    pub fn list<I>(column: &'static str, operator: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        debug_assert_eq!(operator.arity(), Arity::List);
        Self {
            column,
            operator,
            arguments: values.into_iter().collect(),
        }
    }

    /// `column IS NULL` / `column IS NOT NULL`
    pub fn null(column: &'static str, operator: Operator) -> Self {
        debug_assert_eq!(operator.arity(), Arity::Unary);
        Self {
            column,
            operator,
            arguments: Vec::new(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator.arity() {
            Arity::Unary => write!(f, "({} {})", self.column, self.operator),
            Arity::Binary => write!(f, "({} {} ?)", self.column, self.operator),
            Arity::List => {
                let placeholders = vec!["?"; self.arguments.len()].join(", ");
                write!(f, "({} {} ({placeholders}))", self.column, self.operator)
            }
        }
    }
}

/// A single AND-ed term of a [`Filter`]
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Implicit soft-delete scoping: `column IS NULL`
    NotDeleted(&'static str),
    /// Point-operation scoping: `column = ?`
    PrimaryKey { column: &'static str, value: Value },
    /// User-applied predicate, rendered in its own parentheses
    Predicate(Predicate),
}

impl Condition {
    fn arguments(&self) -> &[Value] {
        match self {
            Condition::NotDeleted(_) => &[],
            Condition::PrimaryKey { value, .. } => std::slice::from_ref(value),
            Condition::Predicate(p) => &p.arguments,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::NotDeleted(column) => write!(f, "{column} IS NULL"),
            Condition::PrimaryKey { column, .. } => write!(f, "{column} = ?"),
            Condition::Predicate(p) => write!(f, "{p}"),
        }
    }
}

/// Ordered conjunction of conditions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Bound arguments, in placeholder order
    pub fn arguments(&self) -> impl Iterator<Item = &Value> + '_ {
        self.conditions.iter().flat_map(|c| c.arguments().iter())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: Direction,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        write!(f, "{} {direction}", self.column)
    }
}

/// Row read (also used for `count`, which ignores ordering and paging)
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: &'static str,
    pub filter: Filter,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    /// Associations the store should load alongside the rows
    pub preload: Vec<&'static str>,
}

impl Select {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filter: Filter::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            preload: Vec::new(),
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT * FROM {}", self.table)?;
        if !self.filter.is_empty() {
            write!(f, " WHERE {}", self.filter)?;
        }
        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " ORDER BY {order}")?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: &'static str,
    pub values: Vec<(&'static str, Value)>,
    /// Column whose store-assigned value should be reported back
    pub returning: Option<&'static str>,
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self
            .values
            .iter()
            .map(|(column, _)| *column)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; self.values.len()].join(", ");
        write!(
            f,
            "INSERT INTO {} ({columns}) VALUES ({placeholders})",
            self.table
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: &'static str,
    pub assignments: Vec<(&'static str, Value)>,
    pub filter: Filter,
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "UPDATE {} SET {set}", self.table)?;
        if !self.filter.is_empty() {
            write!(f, " WHERE {}", self.filter)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: &'static str,
    pub filter: Filter,
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        if !self.filter.is_empty() {
            write!(f, " WHERE {}", self.filter)?;
        }
        Ok(())
    }
}

/// Any statement a store can be asked to execute
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Count(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// Bound arguments, in placeholder order
    pub fn arguments(&self) -> Vec<Value> {
        match self {
            Statement::Select(s) | Statement::Count(s) => s.filter.arguments().cloned().collect(),
            Statement::Insert(i) => i.values.iter().map(|(_, v)| v.clone()).collect(),
            Statement::Update(u) => u
                .assignments
                .iter()
                .map(|(_, v)| v)
                .chain(u.filter.arguments())
                .cloned()
                .collect(),
            Statement::Delete(d) => d.filter.arguments().cloned().collect(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(s) => write!(f, "{s}"),
            Statement::Count(s) => {
                write!(f, "SELECT count(*) FROM {}", s.table)?;
                if !s.filter.is_empty() {
                    write!(f, " WHERE {}", s.filter)?;
                }
                Ok(())
            }
            Statement::Insert(i) => write!(f, "{i}"),
            Statement::Update(u) => write!(f, "{u}"),
            Statement::Delete(d) => write!(f, "{d}"),
        }
    }
}
