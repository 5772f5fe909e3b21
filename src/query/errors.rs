//! Query and planner error types

use thiserror::Error;

/// Errors raised while parsing query text
#[derive(Debug, Error)]
pub enum QueryError {
    /// Query contained no lines at all
    #[error("empty query")]
    Empty,

    /// First line was not a GET
    #[error("query must start with 'GET <table>', got '{0}'")]
    MissingGet(String),

    /// Header line without a `Name: value` shape
    #[error("malformed header line '{0}'")]
    MalformedHeader(String),

    /// Header name the engine does not know
    #[error("unknown header '{0}'")]
    UnknownHeader(String),

    /// Filter header without `<column> <op> <value>` shape
    #[error("malformed filter '{0}'")]
    MalformedFilter(String),

    /// Filter operator the engine does not know
    #[error("unknown filter operator '{0}'")]
    UnknownOperator(String),

    /// Regex operand of a `~` filter failed to compile
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Sort direction other than asc/desc
    #[error("invalid sort direction '{0}'")]
    InvalidDirection(String),

    /// Limit that is not a non-negative integer
    #[error("invalid limit '{0}'")]
    InvalidLimit(String),
}

/// Result type for parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while planning a parsed query
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Query names a table the registry does not have
    #[error("unknown table '{0}'")]
    UnknownTable(String),

    /// Query names a column the table does not have
    #[error("table '{table}' has no column '{column}'")]
    UnknownColumn { table: String, column: String },
}

/// Result type for planning
pub type PlannerResult<T> = Result<T, PlannerError>;
