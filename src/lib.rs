//! livequery - A live-monitoring status query engine
//!
//! Queries a point-in-time snapshot of a monitoring core's status
//! through named tables with typed columns. Ordering of result rows is
//! delegated to per-column sorters; a sorter may decline every
//! comparison, which the engine surfaces instead of failing the query.

pub mod cli;
pub mod executor;
pub mod http_server;
pub mod monitor;
pub mod observability;
pub mod query;
pub mod sort;
pub mod table;
