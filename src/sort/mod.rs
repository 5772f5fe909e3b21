//! Sort subsystem for livequery
//!
//! Ordering of result rows is delegated to per-column sorters behind a
//! dynamic trait. Sorters answer with a four-valued ordering result: the
//! usual three comparisons plus a not-implemented sentinel by which a
//! sorter declines to order rows at all.
//!
//! # Design Principles
//!
//! - Unsupported ordering is a value, not an error: the comparison path
//!   never returns `Result` and never panics
//! - Sorters are stateless and shared: one instance serves every
//!   comparison of a query, concurrently if the caller wants to
//! - A sorter either orders every pair or no pair; the sentinel is
//!   all-or-nothing per sorter

mod driver;
mod ordering;
mod sorter;

pub use driver::{SortDriver, SortKey, SortOutcome};
pub use ordering::RowOrdering;
pub use sorter::{DoubleSorter, IntSorter, Sorter, StringSorter, TimeSorter};
