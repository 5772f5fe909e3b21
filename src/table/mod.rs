//! Table subsystem for livequery
//!
//! Tables describe the queryable surface of the monitored state: each
//! table exposes a fixed set of named, typed columns over the records of
//! a snapshot.
//!
//! # Design Principles
//!
//! - Rows are opaque: columns reach into records through accessors, the
//!   engine never inspects record fields directly
//! - Columns are the discovery surface: filters and sorters are obtained
//!   from the column registered for a name, never constructed ad hoc
//! - Read-only: nothing in this subsystem mutates a record

mod column;
mod registry;
mod row;
mod table;

pub use column::{Column, ColumnType, DoubleColumn, IntColumn, StringColumn, TimeColumn};
pub use registry::TableRegistry;
pub use row::Row;
pub use table::Table;
