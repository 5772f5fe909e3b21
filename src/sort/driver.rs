//! Sort driver
//!
//! Applies the planned sort keys to a row set with a stable sort. A key
//! whose sorter declines contributes nothing to the ordering of a pair
//! and evaluation falls through to the next key; when every key declines,
//! the stable sort leaves rows in insertion order. Declined keys are
//! reported back so callers can surface that ordering by those columns is
//! unavailable.

use std::cell::Cell;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::query::SortDirection;
use crate::table::Row;

use super::ordering::RowOrdering;
use super::sorter::Sorter;

/// One planned sort key: a column name, its sorter, and a direction
pub struct SortKey {
    /// Column the key orders by, for reporting
    pub column: String,
    /// Sorter obtained from the column at plan time
    pub sorter: Arc<dyn Sorter>,
    /// Requested direction
    pub direction: SortDirection,
}

impl SortKey {
    /// Creates a sort key
    pub fn new(column: impl Into<String>, sorter: Arc<dyn Sorter>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            sorter,
            direction,
        }
    }
}

/// What the driver observed while sorting
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Columns whose sorter declined at least one comparison, in key order
    pub not_implemented: Vec<String>,
}

impl SortOutcome {
    /// True when every key ordered every pair it was asked about
    pub fn fully_ordered(&self) -> bool {
        self.not_implemented.is_empty()
    }
}

/// Applies sort keys to row sets
pub struct SortDriver;

impl SortDriver {
    /// Sorts rows in place by the given keys.
    ///
    /// The sort is stable: rows equivalent under all keys keep their
    /// insertion order. With fewer than two rows no comparison runs and
    /// the outcome reports nothing.
    pub fn sort(rows: &mut [Row<'_>], keys: &[SortKey]) -> SortOutcome {
        if keys.is_empty() || rows.len() < 2 {
            return SortOutcome::default();
        }

        let declined: Vec<Cell<bool>> = keys.iter().map(|_| Cell::new(false)).collect();

        rows.sort_by(|a, b| {
            for (key, flag) in keys.iter().zip(&declined) {
                let ord = match key.sorter.compare(*a, *b) {
                    RowOrdering::NotImplemented => {
                        flag.set(true);
                        continue;
                    }
                    RowOrdering::Equal => continue,
                    RowOrdering::Less => Ordering::Less,
                    RowOrdering::Greater => Ordering::Greater,
                };
                return match key.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                };
            }
            Ordering::Equal
        });

        SortOutcome {
            not_implemented: keys
                .iter()
                .zip(&declined)
                .filter(|(_, flag)| flag.get())
                .map(|(key, _)| key.column.clone())
                .collect(),
        }
    }
}
