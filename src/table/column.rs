//! Column definitions
//!
//! A column binds a name to a typed accessor over a record type. Columns
//! render cell values for output and hand out the sorter that orders rows
//! by this column.
//!
//! Supported column types:
//! - int: 64-bit signed integer
//! - double: 64-bit floating point
//! - string: UTF-8 string
//! - time: UTC timestamp

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::sort::{DoubleSorter, IntSorter, Sorter, StringSorter, TimeSorter};

use super::row::Row;

/// Supported column types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// UTC timestamp
    Time,
}

impl ColumnType {
    /// Returns the type name used in listings and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Double => "double",
            ColumnType::String => "string",
            ColumnType::Time => "time",
        }
    }
}

/// A named, typed column over the rows of one table.
///
/// Implementations are stateless apart from their accessor and safe to
/// share across threads for the lifetime of the registry.
pub trait Column: Send + Sync {
    /// Column name as it appears in queries
    fn name(&self) -> &str;

    /// Human-readable description for table listings
    fn description(&self) -> &str;

    /// Declared type of this column
    fn column_type(&self) -> ColumnType;

    /// Renders the cell value for output.
    ///
    /// Returns `None` when the row does not wrap this column's record
    /// type; the caller decides how to render the gap.
    fn value(&self, row: Row<'_>) -> Option<Value>;

    /// Returns the sorter ordering rows by this column.
    fn make_sorter(&self) -> Arc<dyn Sorter>;
}

/// Integer-typed column.
pub struct IntColumn<T> {
    name: String,
    description: String,
    getter: fn(&T) -> i64,
}

impl<T> IntColumn<T> {
    /// Creates an integer column from a field accessor
    pub fn new(name: impl Into<String>, description: impl Into<String>, getter: fn(&T) -> i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            getter,
        }
    }
}

impl<T: Send + Sync + 'static> Column for IntColumn<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Int
    }

    fn value(&self, row: Row<'_>) -> Option<Value> {
        row.downcast::<T>().map(|r| Value::from((self.getter)(r)))
    }

    fn make_sorter(&self) -> Arc<dyn Sorter> {
        // Integer ordering is not implemented yet; the shared stub keeps
        // the column registered while answering every comparison with
        // the not-implemented sentinel.
        IntSorter::shared()
    }
}

/// Double-typed column.
pub struct DoubleColumn<T> {
    name: String,
    description: String,
    getter: fn(&T) -> f64,
}

impl<T> DoubleColumn<T> {
    /// Creates a double column from a field accessor
    pub fn new(name: impl Into<String>, description: impl Into<String>, getter: fn(&T) -> f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            getter,
        }
    }
}

impl<T: Send + Sync + 'static> Column for DoubleColumn<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Double
    }

    fn value(&self, row: Row<'_>) -> Option<Value> {
        row.downcast::<T>().map(|r| Value::from((self.getter)(r)))
    }

    fn make_sorter(&self) -> Arc<dyn Sorter> {
        Arc::new(DoubleSorter::new(self.getter))
    }
}

/// String-typed column.
pub struct StringColumn<T> {
    name: String,
    description: String,
    getter: fn(&T) -> &str,
}

impl<T> StringColumn<T> {
    /// Creates a string column from a field accessor
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        getter: fn(&T) -> &str,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            getter,
        }
    }
}

impl<T: Send + Sync + 'static> Column for StringColumn<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::String
    }

    fn value(&self, row: Row<'_>) -> Option<Value> {
        row.downcast::<T>()
            .map(|r| Value::String((self.getter)(r).to_string()))
    }

    fn make_sorter(&self) -> Arc<dyn Sorter> {
        Arc::new(StringSorter::new(self.getter))
    }
}

/// Time-typed column (UTC timestamps).
pub struct TimeColumn<T> {
    name: String,
    description: String,
    getter: fn(&T) -> DateTime<Utc>,
}

impl<T> TimeColumn<T> {
    /// Creates a time column from a field accessor
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        getter: fn(&T) -> DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            getter,
        }
    }
}

impl<T: Send + Sync + 'static> Column for TimeColumn<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Time
    }

    fn value(&self, row: Row<'_>) -> Option<Value> {
        // RFC 3339 in UTC; lexicographic order matches chronological order
        row.downcast::<T>()
            .map(|r| Value::String((self.getter)(r).to_rfc3339()))
    }

    fn make_sorter(&self) -> Arc<dyn Sorter> {
        Arc::new(TimeSorter::new(self.getter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::RowOrdering;
    use chrono::TimeZone;

    struct Record {
        name: String,
        checks: i64,
        latency: f64,
        last_check: DateTime<Utc>,
    }

    fn record() -> Record {
        Record {
            name: "web01".to_string(),
            checks: 42,
            latency: 0.25,
            last_check: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_int_column_renders_value() {
        let column: IntColumn<Record> = IntColumn::new("checks", "Number of checks", |r| r.checks);
        let record = record();
        assert_eq!(column.value(Row::new(&record)), Some(Value::from(42)));
        assert_eq!(column.column_type(), ColumnType::Int);
    }

    #[test]
    fn test_int_column_sorter_is_not_implemented() {
        let column: IntColumn<Record> = IntColumn::new("checks", "Number of checks", |r| r.checks);
        let sorter = column.make_sorter();
        let a = record();
        let b = record();
        assert_eq!(
            sorter.compare(Row::new(&a), Row::new(&b)),
            RowOrdering::NotImplemented
        );
    }

    #[test]
    fn test_string_column_renders_value() {
        let column: StringColumn<Record> = StringColumn::new("name", "Host name", |r| r.name.as_str());
        let record = record();
        assert_eq!(
            column.value(Row::new(&record)),
            Some(Value::String("web01".to_string()))
        );
    }

    #[test]
    fn test_double_column_renders_value() {
        let column: DoubleColumn<Record> = DoubleColumn::new("latency", "Check latency", |r| r.latency);
        let record = record();
        assert_eq!(column.value(Row::new(&record)), Some(Value::from(0.25)));
    }

    #[test]
    fn test_time_column_renders_rfc3339() {
        let column: TimeColumn<Record> =
            TimeColumn::new("last_check", "Time of last check", |r| r.last_check);
        let record = record();
        let value = column.value(Row::new(&record)).unwrap();
        assert!(value.as_str().unwrap().starts_with("2024-03-01T12:00:00"));
    }

    #[test]
    fn test_foreign_row_renders_none() {
        let column: IntColumn<Record> = IntColumn::new("checks", "Number of checks", |r| r.checks);
        let not_a_record = "something else".to_string();
        assert_eq!(column.value(Row::new(&not_a_record)), None);
    }
}
