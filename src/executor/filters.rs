//! Predicate filtering for query execution
//!
//! Filters rows strictly according to predicates. No type coercion: a
//! numeric bound never matches a string cell, a missing cell matches
//! nothing, including inequality.

use serde_json::Value;

use crate::query::{FilterOp, ResolvedPredicate};
use crate::table::Row;

/// Evaluates predicates against rows
pub struct RowFilter;

impl RowFilter {
    /// Checks whether a row matches all predicates (AND semantics)
    pub fn matches(row: Row<'_>, predicates: &[ResolvedPredicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(row, pred))
    }

    /// Checks whether a row matches a single predicate
    fn matches_predicate(row: Row<'_>, predicate: &ResolvedPredicate) -> bool {
        let cell = match predicate.column.value(row) {
            Some(v) => v,
            None => return false, // degenerate row, no match
        };

        match &predicate.op {
            FilterOp::Eq(expected) => cell == *expected,
            FilterOp::Ne(expected) => Self::comparable(&cell, expected) && cell != *expected,
            FilterOp::Gt(bound) => Self::cmp_match(&cell, bound, |o| o > 0),
            FilterOp::Gte(bound) => Self::cmp_match(&cell, bound, |o| o >= 0),
            FilterOp::Lt(bound) => Self::cmp_match(&cell, bound, |o| o < 0),
            FilterOp::Lte(bound) => Self::cmp_match(&cell, bound, |o| o <= 0),
            FilterOp::Match(regex) => match &cell {
                Value::String(s) => regex.is_match(s),
                _ => false, // regex applies to string cells only
            },
        }
    }

    /// True when both values are of a comparable kind (both numbers or
    /// both strings)
    fn comparable(a: &Value, b: &Value) -> bool {
        (a.is_number() && b.is_number()) || (a.is_string() && b.is_string())
    }

    /// Orders cell against bound and tests the sign of the comparison.
    ///
    /// Numbers compare numerically, strings lexicographically; every
    /// other combination fails the predicate.
    fn cmp_match(cell: &Value, bound: &Value, test: fn(i8) -> bool) -> bool {
        let sign = match (cell, bound) {
            (Value::Number(a), Value::Number(b)) => {
                match (a.as_f64(), b.as_f64()) {
                    (Some(af), Some(bf)) => {
                        if af < bf {
                            -1
                        } else if af > bf {
                            1
                        } else {
                            0
                        }
                    }
                    _ => return false,
                }
            }
            (Value::String(a), Value::String(b)) => match a.cmp(b) {
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => 1,
            },
            _ => return false,
        };
        test(sign)
    }
}
