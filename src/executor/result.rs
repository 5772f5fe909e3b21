//! Result types for query execution

use serde::Serialize;
use serde_json::Value;

/// One rendered result row, cell values in output-column order
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ResultRow {
    /// Rendered cell values
    pub values: Vec<Value>,
}

/// Result of query execution
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// Output column names, in rendering order
    pub columns: Vec<String>,
    /// Rows in result order
    pub rows: Vec<ResultRow>,
    /// Number of rows enumerated before filtering
    pub scanned_count: usize,
    /// Number of rows returned
    pub returned_count: usize,
    /// Whether the limit cut the result off
    pub limit_applied: bool,
    /// Sort-key columns whose ordering is not implemented; rows kept
    /// their prior order with respect to these keys
    pub not_implemented_keys: Vec<String>,
}

impl ExecutionResult {
    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of result rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Renders the result as a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_serializes_rows_as_arrays() {
        let result = ExecutionResult {
            columns: vec!["name".to_string(), "state".to_string()],
            rows: vec![ResultRow {
                values: vec![json!("web01"), json!(0)],
            }],
            scanned_count: 3,
            returned_count: 1,
            limit_applied: false,
            not_implemented_keys: Vec::new(),
        };

        let rendered = result.to_json();
        assert_eq!(rendered["rows"][0], json!(["web01", 0]));
        assert_eq!(rendered["returned_count"], json!(1));
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }
}
