//! Monitored state for livequery
//!
//! The engine queries an immutable point-in-time snapshot of a monitoring
//! core's status: the hosts being watched and the services checked on
//! them. Snapshots are loaded from a JSON status file and never mutated;
//! rows handed to the query pipeline stay stable for the lifetime of the
//! snapshot borrow.

mod snapshot;
mod tables;
mod types;

pub use snapshot::{Snapshot, SnapshotError};
pub use tables::{standard_registry, HostsTable, ServicesTable};
pub use types::{HostRecord, ServiceRecord};
