//! Table trait
//!
//! A table names a set of columns and enumerates its rows out of a
//! snapshot of the monitored state.

use std::sync::Arc;

use crate::monitor::Snapshot;

use super::column::Column;
use super::row::Row;

/// A queryable table over the monitored state.
pub trait Table: Send + Sync {
    /// Table name as it appears in queries
    fn name(&self) -> &str;

    /// Human-readable description for table listings
    fn description(&self) -> &str;

    /// All columns of this table, in listing order
    fn columns(&self) -> &[Arc<dyn Column>];

    /// Looks up a column by name
    fn column(&self, name: &str) -> Option<Arc<dyn Column>> {
        self.columns().iter().find(|c| c.name() == name).cloned()
    }

    /// Enumerates the rows of this table from a snapshot, in the
    /// snapshot's insertion order.
    fn rows<'a>(&self, snapshot: &'a Snapshot) -> Vec<Row<'a>>;
}
