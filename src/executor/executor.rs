//! Query executor for livequery
//!
//! Executes query plans against a snapshot, producing deterministic
//! results: same plan + same snapshot = same rows in the same order.

use serde_json::Value;
use uuid::Uuid;

use crate::monitor::Snapshot;
use crate::observability::Logger;
use crate::query::QueryPlan;
use crate::sort::SortDriver;

use super::filters::RowFilter;
use super::result::{ExecutionResult, ResultRow};

/// Executes query plans
pub struct QueryExecutor;

impl QueryExecutor {
    /// Runs a plan against a snapshot.
    ///
    /// Sort keys whose sorter declines every comparison do not reorder
    /// rows; their columns are listed in `not_implemented_keys` and a
    /// warning is logged, once per key per query.
    pub fn execute(plan: &QueryPlan, snapshot: &Snapshot) -> ExecutionResult {
        let query_id = Uuid::new_v4().to_string();

        // Step 1: enumerate rows in snapshot insertion order
        let mut rows = plan.table.rows(snapshot);
        let scanned_count = rows.len();

        // Step 2: filter
        rows.retain(|row| RowFilter::matches(*row, &plan.predicates));

        // Step 3: sort
        let outcome = SortDriver::sort(&mut rows, &plan.sort_keys);
        for column in &outcome.not_implemented {
            Logger::warn(
                "SORT_KEY_NOT_IMPLEMENTED",
                &[
                    ("column", column.as_str()),
                    ("table", plan.table.name()),
                    ("query_id", query_id.as_str()),
                ],
            );
        }

        // Step 4: limit
        let mut limit_applied = false;
        if let Some(limit) = plan.limit {
            let limit = limit as usize;
            if rows.len() > limit {
                rows.truncate(limit);
                limit_applied = true;
            }
        }

        // Step 5: render output columns
        let result_rows: Vec<ResultRow> = rows
            .iter()
            .map(|row| ResultRow {
                values: plan
                    .output
                    .iter()
                    .map(|column| column.value(*row).unwrap_or(Value::Null))
                    .collect(),
            })
            .collect();

        let returned = result_rows.len();
        Logger::info(
            "QUERY_EXECUTED",
            &[
                ("table", plan.table.name()),
                ("scanned", &scanned_count.to_string()),
                ("returned", &returned.to_string()),
                ("query_id", query_id.as_str()),
            ],
        );

        ExecutionResult {
            columns: plan.output.iter().map(|c| c.name().to_string()).collect(),
            rows: result_rows,
            scanned_count,
            returned_count: returned,
            limit_applied,
            not_implemented_keys: outcome.not_implemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{standard_registry, HostRecord, ServiceRecord};
    use crate::query::{Query, QueryParser, QueryPlanner};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn host(name: &str, state: i64, latency: f64, hour: u32) -> HostRecord {
        HostRecord {
            name: name.to_string(),
            alias: String::new(),
            address: String::new(),
            state,
            plugin_output: String::new(),
            last_check: Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
            latency,
            num_services: 0,
        }
    }

    fn service(host_name: &str, description: &str, state: i64) -> ServiceRecord {
        ServiceRecord {
            host_name: host_name.to_string(),
            description: description.to_string(),
            state,
            plugin_output: String::new(),
            last_check: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            latency: 0.0,
            current_attempt: 1,
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            hosts: vec![
                host("web02", 0, 0.3, 10),
                host("db01", 1, 0.1, 12),
                host("web01", 2, 0.2, 11),
            ],
            services: vec![
                service("web02", "HTTP", 0),
                service("db01", "Postgres", 2),
            ],
        }
    }

    fn run(query_text: &str, snapshot: &Snapshot) -> ExecutionResult {
        let registry = standard_registry();
        let query = QueryParser::parse(query_text).unwrap();
        let plan = QueryPlanner::new(&registry).plan(&query).unwrap();
        QueryExecutor::execute(&plan, snapshot)
    }

    #[test]
    fn test_execute_filters_and_renders() {
        let snapshot = snapshot();
        let result = run("GET hosts\nColumns: name\nFilter: state = 0\n", &snapshot);

        assert_eq!(result.scanned_count, 3);
        assert_eq!(result.returned_count, 1);
        assert_eq!(result.rows[0].values, vec![json!("web02")]);
    }

    #[test]
    fn test_execute_sorts_by_string_column() {
        let snapshot = snapshot();
        let result = run("GET hosts\nColumns: name\nSort: name asc\n", &snapshot);

        let names: Vec<&Value> = result.rows.iter().map(|r| &r.values[0]).collect();
        assert_eq!(names, vec![&json!("db01"), &json!("web01"), &json!("web02")]);
        assert!(result.not_implemented_keys.is_empty());
    }

    #[test]
    fn test_execute_sort_by_integer_column_keeps_insertion_order() {
        let snapshot = snapshot();
        let result = run("GET hosts\nColumns: name\nSort: state asc\n", &snapshot);

        // Integer ordering is not implemented; rows stay in snapshot order
        let names: Vec<&Value> = result.rows.iter().map(|r| &r.values[0]).collect();
        assert_eq!(names, vec![&json!("web02"), &json!("db01"), &json!("web01")]);
        assert_eq!(result.not_implemented_keys, vec!["state".to_string()]);
    }

    #[test]
    fn test_execute_integer_key_falls_through_to_string_key() {
        let snapshot = snapshot();
        let result = run(
            "GET hosts\nColumns: name\nSort: state asc\nSort: name desc\n",
            &snapshot,
        );

        let names: Vec<&Value> = result.rows.iter().map(|r| &r.values[0]).collect();
        assert_eq!(names, vec![&json!("web02"), &json!("web01"), &json!("db01")]);
        assert_eq!(result.not_implemented_keys, vec!["state".to_string()]);
    }

    #[test]
    fn test_execute_applies_limit() {
        let snapshot = snapshot();
        let result = run("GET hosts\nSort: name asc\nLimit: 2\n", &snapshot);

        assert_eq!(result.returned_count, 2);
        assert!(result.limit_applied);
    }

    #[test]
    fn test_execute_limit_not_flagged_when_under() {
        let snapshot = snapshot();
        let result = run("GET services\nLimit: 10\n", &snapshot);

        assert_eq!(result.returned_count, 2);
        assert!(!result.limit_applied);
    }

    #[test]
    fn test_execute_deterministic() {
        let snapshot = snapshot();
        let text = "GET hosts\nColumns: name latency\nSort: latency desc\n";

        let first = run(text, &snapshot);
        let second = run(text, &snapshot);

        assert_eq!(first.to_json()["rows"], second.to_json()["rows"]);
    }

    #[test]
    fn test_execute_all_columns_by_default() {
        let snapshot = snapshot();
        let registry = standard_registry();
        let plan = QueryPlanner::new(&registry)
            .plan(&Query::new("services"))
            .unwrap();
        let result = QueryExecutor::execute(&plan, &snapshot);

        assert_eq!(result.columns.len(), plan.output.len());
        assert_eq!(result.rows[0].values.len(), result.columns.len());
    }
}
