//! Query AST structures
//!
//! The parsed query representation handed to the planner.

use regex::Regex;
use serde_json::Value;

/// Filter operation types
#[derive(Debug, Clone)]
pub enum FilterOp {
    /// Equality: column = value
    Eq(Value),
    /// Inequality: column != value
    Ne(Value),
    /// Greater than: column > value
    Gt(Value),
    /// Greater than or equal: column >= value
    Gte(Value),
    /// Less than: column < value
    Lt(Value),
    /// Less than or equal: column <= value
    Lte(Value),
    /// Regex match on the rendered string value: column ~ pattern
    Match(Regex),
}

impl FilterOp {
    /// Returns the operator symbol as written in queries
    pub fn op_name(&self) -> &'static str {
        match self {
            FilterOp::Eq(_) => "=",
            FilterOp::Ne(_) => "!=",
            FilterOp::Gt(_) => ">",
            FilterOp::Gte(_) => ">=",
            FilterOp::Lt(_) => "<",
            FilterOp::Lte(_) => "<=",
            FilterOp::Match(_) => "~",
        }
    }
}

/// A single predicate (column + operation)
#[derive(Debug, Clone)]
pub struct Predicate {
    /// Column name the predicate applies to
    pub column: String,
    /// Filter operation
    pub op: FilterOp,
}

impl Predicate {
    /// Creates a predicate
    pub fn new(column: impl Into<String>, op: FilterOp) -> Self {
        Self {
            column: column.into(),
            op,
        }
    }

    /// Equality predicate
    pub fn eq(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, FilterOp::Eq(value))
    }

    /// Inequality predicate
    pub fn ne(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, FilterOp::Ne(value))
    }

    /// Greater-than predicate
    pub fn gt(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, FilterOp::Gt(value))
    }

    /// Less-than predicate
    pub fn lt(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, FilterOp::Lt(value))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One sort key as written in the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Column to sort by
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Parsed query
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Target table name
    pub table: String,
    /// Output columns; empty means all columns of the table
    pub columns: Vec<String>,
    /// Filter predicates (all combined with AND)
    pub predicates: Vec<Predicate>,
    /// Sort keys, in priority order
    pub sort: Vec<SortSpec>,
    /// Row limit (optional)
    pub limit: Option<u64>,
}

impl Query {
    /// Creates a query against a table
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Adds an output column
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Adds a predicate
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds a sort key
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort.push(sort);
        self
    }

    /// Sets the limit
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_builder() {
        let query = Query::new("hosts")
            .with_column("name")
            .with_predicate(Predicate::eq("state", json!(0)))
            .with_sort(SortSpec::asc("name"))
            .with_limit(10);

        assert_eq!(query.table, "hosts");
        assert_eq!(query.columns, vec!["name"]);
        assert_eq!(query.predicates.len(), 1);
        assert_eq!(query.sort, vec![SortSpec::asc("name")]);
        assert_eq!(query.limit, Some(10));
    }

    #[test]
    fn test_operator_names() {
        assert_eq!(Predicate::eq("a", json!(1)).op.op_name(), "=");
        assert_eq!(Predicate::ne("a", json!(1)).op.op_name(), "!=");
        assert_eq!(Predicate::gt("a", json!(1)).op.op_name(), ">");
        assert_eq!(Predicate::lt("a", json!(1)).op.op_name(), "<");
    }

    #[test]
    fn test_sort_spec() {
        let spec = SortSpec::desc("last_check");
        assert_eq!(spec.direction, SortDirection::Desc);
        assert_eq!(spec.direction.as_str(), "desc");
    }
}
