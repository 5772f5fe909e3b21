//! Standard tables
//!
//! The hosts and services tables of the monitored world, with their
//! column sets. Column accessors reach into the status records; the rest
//! of the engine only ever sees the `Table`/`Column` traits.

use std::sync::Arc;

use crate::table::{
    Column, DoubleColumn, IntColumn, Row, StringColumn, Table, TableRegistry, TimeColumn,
};

use super::snapshot::Snapshot;
use super::types::{HostRecord, ServiceRecord};

/// The `hosts` table
pub struct HostsTable {
    columns: Vec<Arc<dyn Column>>,
}

impl HostsTable {
    /// Creates the hosts table with its standard columns
    pub fn new() -> Self {
        let columns: Vec<Arc<dyn Column>> = vec![
            Arc::new(StringColumn::<HostRecord>::new(
                "name",
                "Host name",
                |h| h.name.as_str(),
            )),
            Arc::new(StringColumn::<HostRecord>::new(
                "alias",
                "Host alias",
                |h| h.alias.as_str(),
            )),
            Arc::new(StringColumn::<HostRecord>::new(
                "address",
                "Network address",
                |h| h.address.as_str(),
            )),
            Arc::new(IntColumn::<HostRecord>::new(
                "state",
                "Current state (0 up, 1 down, 2 unreachable)",
                |h| h.state,
            )),
            Arc::new(StringColumn::<HostRecord>::new(
                "plugin_output",
                "Output of the last check plugin",
                |h| h.plugin_output.as_str(),
            )),
            Arc::new(TimeColumn::<HostRecord>::new(
                "last_check",
                "Time of the last check",
                |h| h.last_check,
            )),
            Arc::new(DoubleColumn::<HostRecord>::new(
                "latency",
                "Latency of the last check in seconds",
                |h| h.latency,
            )),
            Arc::new(IntColumn::<HostRecord>::new(
                "num_services",
                "Number of services on this host",
                |h| h.num_services,
            )),
        ];
        Self { columns }
    }
}

impl Default for HostsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for HostsTable {
    fn name(&self) -> &str {
        "hosts"
    }

    fn description(&self) -> &str {
        "All monitored hosts"
    }

    fn columns(&self) -> &[Arc<dyn Column>] {
        &self.columns
    }

    fn rows<'a>(&self, snapshot: &'a Snapshot) -> Vec<Row<'a>> {
        snapshot.hosts.iter().map(Row::new).collect()
    }
}

/// The `services` table
pub struct ServicesTable {
    columns: Vec<Arc<dyn Column>>,
}

impl ServicesTable {
    /// Creates the services table with its standard columns
    pub fn new() -> Self {
        let columns: Vec<Arc<dyn Column>> = vec![
            Arc::new(StringColumn::<ServiceRecord>::new(
                "host_name",
                "Host the service runs on",
                |s| s.host_name.as_str(),
            )),
            Arc::new(StringColumn::<ServiceRecord>::new(
                "description",
                "Service description",
                |s| s.description.as_str(),
            )),
            Arc::new(IntColumn::<ServiceRecord>::new(
                "state",
                "Current state (0 ok, 1 warning, 2 critical, 3 unknown)",
                |s| s.state,
            )),
            Arc::new(StringColumn::<ServiceRecord>::new(
                "plugin_output",
                "Output of the last check plugin",
                |s| s.plugin_output.as_str(),
            )),
            Arc::new(TimeColumn::<ServiceRecord>::new(
                "last_check",
                "Time of the last check",
                |s| s.last_check,
            )),
            Arc::new(DoubleColumn::<ServiceRecord>::new(
                "latency",
                "Latency of the last check in seconds",
                |s| s.latency,
            )),
            Arc::new(IntColumn::<ServiceRecord>::new(
                "current_attempt",
                "Check attempt the service is currently on",
                |s| s.current_attempt,
            )),
        ];
        Self { columns }
    }
}

impl Default for ServicesTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for ServicesTable {
    fn name(&self) -> &str {
        "services"
    }

    fn description(&self) -> &str {
        "All monitored services"
    }

    fn columns(&self) -> &[Arc<dyn Column>] {
        &self.columns
    }

    fn rows<'a>(&self, snapshot: &'a Snapshot) -> Vec<Row<'a>> {
        snapshot.services.iter().map(Row::new).collect()
    }
}

/// Builds the registry with the standard tables
pub fn standard_registry() -> TableRegistry {
    let mut registry = TableRegistry::new();
    registry.register(Arc::new(HostsTable::new()));
    registry.register(Arc::new(ServicesTable::new()));
    registry
}
