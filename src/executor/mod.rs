//! Query executor subsystem for livequery
//!
//! Consumes plans and produces deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Enumerate the table's rows from the snapshot
//! 2. Filter rows strictly according to predicates
//! 3. Apply sort keys through the sort driver
//! 4. Apply limit
//! 5. Render output columns
//!
//! Execution is infallible: a predicate on a mismatched type excludes
//! the row, and a sort key whose sorter declines is reported in the
//! result, not raised as an error.

mod executor;
mod filters;
mod result;

pub use executor::QueryExecutor;
pub use filters::RowFilter;
pub use result::{ExecutionResult, ResultRow};
