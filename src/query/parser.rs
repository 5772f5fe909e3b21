//! Query text parser
//!
//! Queries are line-oriented:
//!
//! ```text
//! GET hosts
//! Columns: name state
//! Filter: state = 0
//! Filter: name ~ ^web
//! Sort: name asc
//! Limit: 10
//! ```
//!
//! The first non-empty line must be `GET <table>`. Headers follow, one
//! per line; `Filter:` and `Sort:` may repeat. Parsing stops at the end
//! of input or the first blank line after the GET.

use regex::Regex;
use serde_json::Value;

use super::ast::{FilterOp, Predicate, Query, SortDirection, SortSpec};
use super::errors::{QueryError, QueryResult};

/// Parses query text into the AST
pub struct QueryParser;

impl QueryParser {
    /// Parses one query.
    pub fn parse(text: &str) -> QueryResult<Query> {
        let mut lines = text.lines().map(str::trim);

        let get_line = lines
            .by_ref()
            .find(|line| !line.is_empty())
            .ok_or(QueryError::Empty)?;

        let table = match get_line.split_once(' ') {
            Some(("GET", table)) if !table.trim().is_empty() => table.trim().to_string(),
            _ => return Err(QueryError::MissingGet(get_line.to_string())),
        };

        let mut query = Query::new(table);

        for line in lines {
            if line.is_empty() {
                break;
            }

            let (header, value) = line
                .split_once(':')
                .ok_or_else(|| QueryError::MalformedHeader(line.to_string()))?;
            let value = value.trim();

            match header.trim() {
                "Columns" => {
                    for column in value.split_whitespace() {
                        query.columns.push(column.to_string());
                    }
                }
                "Filter" => query.predicates.push(Self::parse_filter(value)?),
                "Sort" => query.sort.push(Self::parse_sort(value)?),
                "Limit" => {
                    query.limit = Some(
                        value
                            .parse::<u64>()
                            .map_err(|_| QueryError::InvalidLimit(value.to_string()))?,
                    );
                }
                other => return Err(QueryError::UnknownHeader(other.to_string())),
            }
        }

        Ok(query)
    }

    /// Parses one `Filter:` value of the form `<column> <op> <operand>`
    fn parse_filter(value: &str) -> QueryResult<Predicate> {
        let (column, rest) = value
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| QueryError::MalformedFilter(value.to_string()))?;
        let (op, operand) = match rest.trim_start().split_once(char::is_whitespace) {
            Some((op, operand)) => (op, operand.trim()),
            None => (rest.trim_start(), ""),
        };

        if column.is_empty() || op.is_empty() || operand.is_empty() {
            return Err(QueryError::MalformedFilter(value.to_string()));
        }

        let op = match op {
            "=" => FilterOp::Eq(Self::parse_operand(operand)),
            "!=" => FilterOp::Ne(Self::parse_operand(operand)),
            ">" => FilterOp::Gt(Self::parse_operand(operand)),
            ">=" => FilterOp::Gte(Self::parse_operand(operand)),
            "<" => FilterOp::Lt(Self::parse_operand(operand)),
            "<=" => FilterOp::Lte(Self::parse_operand(operand)),
            "~" => {
                let regex = Regex::new(operand).map_err(|source| QueryError::InvalidRegex {
                    pattern: operand.to_string(),
                    source,
                })?;
                FilterOp::Match(regex)
            }
            other => return Err(QueryError::UnknownOperator(other.to_string())),
        };

        Ok(Predicate::new(column, op))
    }

    /// Parses one `Sort:` value of the form `<column> [asc|desc]`
    fn parse_sort(value: &str) -> QueryResult<SortSpec> {
        let mut parts = value.split_whitespace();
        let column = parts
            .next()
            .ok_or_else(|| QueryError::MalformedHeader(format!("Sort: {value}")))?;

        let direction = match parts.next() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => return Err(QueryError::InvalidDirection(other.to_string())),
        };

        Ok(SortSpec {
            column: column.to_string(),
            direction,
        })
    }

    /// Types a filter operand: integer, then float, then string.
    fn parse_operand(operand: &str) -> Value {
        if let Ok(n) = operand.parse::<i64>() {
            return Value::from(n);
        }
        if let Ok(f) = operand.parse::<f64>() {
            return Value::from(f);
        }
        Value::String(operand.to_string())
    }
}
