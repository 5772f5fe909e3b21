//! Row sorters
//!
//! The `Sorter` trait is the comparator seam of the engine: the sort
//! driver only ever sees `Arc<dyn Sorter>` handles obtained from columns
//! at plan time. Implementations compare through a field accessor; the
//! integer sorter is a permanent stand-in that declines every comparison
//! until integer ordering lands.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};

use crate::table::Row;

use super::ordering::RowOrdering;

/// Orders rows by one column.
///
/// Contract:
/// - `compare` must not panic and must not mutate the rows
/// - implementations are stateless after construction and safe to call
///   concurrently from any number of threads on one instance
/// - a sorter that answers `NotImplemented` for one pair answers it for
///   every pair
pub trait Sorter: Send + Sync {
    /// Compares two rows, yielding the four-valued ordering result.
    fn compare(&self, lhs: Row<'_>, rhs: Row<'_>) -> RowOrdering;
}

/// Sorter registered for integer-typed columns.
///
/// Integer ordering is not implemented yet. Every comparison answers
/// `RowOrdering::NotImplemented`, which keeps integer columns registered
/// and plannable while the sort driver can see that ordering by them is
/// unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntSorter;

impl IntSorter {
    /// Process-wide shared instance.
    ///
    /// The sorter carries no state, so every integer column hands out the
    /// same allocation.
    pub fn shared() -> Arc<dyn Sorter> {
        static SHARED: OnceLock<Arc<dyn Sorter>> = OnceLock::new();
        let sorter: Arc<dyn Sorter> = Arc::clone(SHARED.get_or_init(|| Arc::new(IntSorter)));
        sorter
    }
}

impl Sorter for IntSorter {
    fn compare(&self, _lhs: Row<'_>, _rhs: Row<'_>) -> RowOrdering {
        RowOrdering::NotImplemented
    }
}

/// Orders rows by a string field, lexicographically.
///
/// Rows that are not of the record type sort before typed rows.
pub struct StringSorter<T> {
    getter: fn(&T) -> &str,
}

impl<T> StringSorter<T> {
    /// Creates a sorter from a field accessor
    pub fn new(getter: fn(&T) -> &str) -> Self {
        Self { getter }
    }
}

impl<T: Send + Sync + 'static> Sorter for StringSorter<T> {
    fn compare(&self, lhs: Row<'_>, rhs: Row<'_>) -> RowOrdering {
        match (lhs.downcast::<T>(), rhs.downcast::<T>()) {
            (Some(a), Some(b)) => (self.getter)(a).cmp((self.getter)(b)).into(),
            (None, None) => RowOrdering::Equal,
            (None, Some(_)) => RowOrdering::Less,
            (Some(_), None) => RowOrdering::Greater,
        }
    }
}

/// Orders rows by a double field.
///
/// Uses the IEEE 754 total order, so NaN values land deterministically
/// instead of poisoning the sort.
pub struct DoubleSorter<T> {
    getter: fn(&T) -> f64,
}

impl<T> DoubleSorter<T> {
    /// Creates a sorter from a field accessor
    pub fn new(getter: fn(&T) -> f64) -> Self {
        Self { getter }
    }
}

impl<T: Send + Sync + 'static> Sorter for DoubleSorter<T> {
    fn compare(&self, lhs: Row<'_>, rhs: Row<'_>) -> RowOrdering {
        match (lhs.downcast::<T>(), rhs.downcast::<T>()) {
            (Some(a), Some(b)) => (self.getter)(a).total_cmp(&(self.getter)(b)).into(),
            (None, None) => RowOrdering::Equal,
            (None, Some(_)) => RowOrdering::Less,
            (Some(_), None) => RowOrdering::Greater,
        }
    }
}

/// Orders rows by a UTC timestamp field, oldest first.
pub struct TimeSorter<T> {
    getter: fn(&T) -> DateTime<Utc>,
}

impl<T> TimeSorter<T> {
    /// Creates a sorter from a field accessor
    pub fn new(getter: fn(&T) -> DateTime<Utc>) -> Self {
        Self { getter }
    }
}

impl<T: Send + Sync + 'static> Sorter for TimeSorter<T> {
    fn compare(&self, lhs: Row<'_>, rhs: Row<'_>) -> RowOrdering {
        match (lhs.downcast::<T>(), rhs.downcast::<T>()) {
            (Some(a), Some(b)) => (self.getter)(a).cmp(&(self.getter)(b)).into(),
            (None, None) => RowOrdering::Equal,
            (None, Some(_)) => RowOrdering::Less,
            (Some(_), None) => RowOrdering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Record {
        name: String,
        latency: f64,
        last_check: DateTime<Utc>,
    }

    fn record(name: &str, latency: f64, hour: u32) -> Record {
        Record {
            name: name.to_string(),
            latency,
            last_check: Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_int_sorter_always_declines() {
        let sorter = IntSorter;
        let a = record("a", 0.1, 1);
        let b = record("b", 0.2, 2);

        assert_eq!(
            sorter.compare(Row::new(&a), Row::new(&b)),
            RowOrdering::NotImplemented
        );
        assert_eq!(
            sorter.compare(Row::new(&b), Row::new(&a)),
            RowOrdering::NotImplemented
        );
        assert_eq!(
            sorter.compare(Row::new(&a), Row::new(&a)),
            RowOrdering::NotImplemented
        );
    }

    #[test]
    fn test_int_sorter_repeated_calls_identical() {
        let sorter = IntSorter;
        let a = record("a", 0.1, 1);
        let first = sorter.compare(Row::new(&a), Row::new(&a));
        let second = sorter.compare(Row::new(&a), Row::new(&a));
        assert_eq!(first, second);
    }

    #[test]
    fn test_int_sorter_declines_foreign_rows() {
        let sorter = IntSorter;
        let not_a_record = 123_u32;
        assert_eq!(
            sorter.compare(Row::new(&not_a_record), Row::new(&not_a_record)),
            RowOrdering::NotImplemented
        );
    }

    #[test]
    fn test_shared_int_sorter_is_one_instance() {
        let a = IntSorter::shared();
        let b = IntSorter::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_string_sorter_orders_lexicographically() {
        let sorter: StringSorter<Record> = StringSorter::new(|r| r.name.as_str());
        let a = record("alpha", 0.0, 1);
        let b = record("beta", 0.0, 1);

        assert_eq!(sorter.compare(Row::new(&a), Row::new(&b)), RowOrdering::Less);
        assert_eq!(sorter.compare(Row::new(&b), Row::new(&a)), RowOrdering::Greater);
        assert_eq!(sorter.compare(Row::new(&a), Row::new(&a)), RowOrdering::Equal);
    }

    #[test]
    fn test_double_sorter_total_order_with_nan() {
        let sorter: DoubleSorter<Record> = DoubleSorter::new(|r| r.latency);
        let a = record("a", f64::NAN, 1);
        let b = record("b", 1.0, 1);

        // NaN is ordered, not poisonous; both directions stay consistent
        let forward = sorter.compare(Row::new(&a), Row::new(&b));
        let backward = sorter.compare(Row::new(&b), Row::new(&a));
        assert!(forward.is_implemented());
        assert_eq!(forward.reverse(), backward);
    }

    #[test]
    fn test_time_sorter_oldest_first() {
        let sorter: TimeSorter<Record> = TimeSorter::new(|r| r.last_check);
        let early = record("a", 0.0, 1);
        let late = record("b", 0.0, 2);

        assert_eq!(
            sorter.compare(Row::new(&early), Row::new(&late)),
            RowOrdering::Less
        );
    }

    #[test]
    fn test_foreign_rows_sort_before_typed_rows() {
        let sorter: StringSorter<Record> = StringSorter::new(|r| r.name.as_str());
        let typed = record("a", 0.0, 1);
        let foreign = 7_u8;

        assert_eq!(
            sorter.compare(Row::new(&foreign), Row::new(&typed)),
            RowOrdering::Less
        );
        assert_eq!(
            sorter.compare(Row::new(&typed), Row::new(&foreign)),
            RowOrdering::Greater
        );
        assert_eq!(
            sorter.compare(Row::new(&foreign), Row::new(&foreign)),
            RowOrdering::Equal
        );
    }
}
