//! Table registry
//!
//! The registry is the plan-time discovery surface: the planner resolves
//! table and column names against it, and listings are rendered from it.

use std::sync::Arc;

use super::table::Table;

/// Name-indexed collection of tables
#[derive(Default)]
pub struct TableRegistry {
    tables: Vec<Arc<dyn Table>>,
}

impl TableRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registers a table. Lookups resolve to the first registration of a
    /// name, so callers register each name once.
    pub fn register(&mut self, table: Arc<dyn Table>) {
        self.tables.push(table);
    }

    /// Looks up a table by name
    pub fn table(&self, name: &str) -> Option<Arc<dyn Table>> {
        self.tables.iter().find(|t| t.name() == name).cloned()
    }

    /// All registered tables, in registration order
    pub fn tables(&self) -> &[Arc<dyn Table>] {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::Snapshot;
    use crate::table::{Column, Row};

    struct EmptyTable {
        name: &'static str,
        columns: Vec<Arc<dyn Column>>,
    }

    impl Table for EmptyTable {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "test table"
        }

        fn columns(&self) -> &[Arc<dyn Column>] {
            &self.columns
        }

        fn rows<'a>(&self, _snapshot: &'a Snapshot) -> Vec<Row<'a>> {
            Vec::new()
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = TableRegistry::new();
        registry.register(Arc::new(EmptyTable {
            name: "hosts",
            columns: Vec::new(),
        }));

        assert!(registry.table("hosts").is_some());
        assert!(registry.table("services").is_none());
        assert_eq!(registry.tables().len(), 1);
    }
}
