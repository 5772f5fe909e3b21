//! Query planner
//!
//! Resolves a parsed query against the table registry: table and column
//! names become trait handles, sort keys pick up their sorters from the
//! columns they name. Resolution failures are planner errors; a sort key
//! whose sorter will decline every comparison still plans successfully.

use std::sync::Arc;

use crate::sort::SortKey;
use crate::table::{Column, Table, TableRegistry};

use super::ast::{FilterOp, Query};
use super::errors::{PlannerError, PlannerResult};

/// A predicate with its column resolved to a handle
#[derive(Clone)]
pub struct ResolvedPredicate {
    /// Column the predicate reads
    pub column: Arc<dyn Column>,
    /// Filter operation
    pub op: FilterOp,
}

/// Executable plan for one query
pub struct QueryPlan {
    /// Table the query runs against
    pub table: Arc<dyn Table>,
    /// Columns rendered into the result, in output order
    pub output: Vec<Arc<dyn Column>>,
    /// Resolved filter predicates (AND semantics)
    pub predicates: Vec<ResolvedPredicate>,
    /// Sort keys with their sorters, in priority order
    pub sort_keys: Vec<SortKey>,
    /// Row limit
    pub limit: Option<u64>,
}

impl std::fmt::Debug for QueryPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryPlan")
            .field("table", &self.table.name())
            .field(
                "output",
                &self.output.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field(
                "predicates",
                &self
                    .predicates
                    .iter()
                    .map(|p| p.column.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "sort_keys",
                &self.sort_keys.iter().map(|k| &k.column).collect::<Vec<_>>(),
            )
            .field("limit", &self.limit)
            .finish()
    }
}

/// Plans parsed queries against a registry
pub struct QueryPlanner<'a> {
    registry: &'a TableRegistry,
}

impl<'a> QueryPlanner<'a> {
    /// Creates a planner over a registry
    pub fn new(registry: &'a TableRegistry) -> Self {
        Self { registry }
    }

    /// Builds the plan for a query.
    ///
    /// Deterministic: the same query against the same registry yields the
    /// same plan.
    pub fn plan(&self, query: &Query) -> PlannerResult<QueryPlan> {
        let table = self
            .registry
            .table(&query.table)
            .ok_or_else(|| PlannerError::UnknownTable(query.table.clone()))?;

        let output = if query.columns.is_empty() {
            table.columns().to_vec()
        } else {
            query
                .columns
                .iter()
                .map(|name| Self::resolve_column(&table, name))
                .collect::<PlannerResult<Vec<_>>>()?
        };

        let predicates = query
            .predicates
            .iter()
            .map(|p| {
                Ok(ResolvedPredicate {
                    column: Self::resolve_column(&table, &p.column)?,
                    op: p.op.clone(),
                })
            })
            .collect::<PlannerResult<Vec<_>>>()?;

        let sort_keys = query
            .sort
            .iter()
            .map(|s| {
                let column = Self::resolve_column(&table, &s.column)?;
                Ok(SortKey::new(column.name(), column.make_sorter(), s.direction))
            })
            .collect::<PlannerResult<Vec<_>>>()?;

        Ok(QueryPlan {
            table,
            output,
            predicates,
            sort_keys,
            limit: query.limit,
        })
    }

    fn resolve_column(table: &Arc<dyn Table>, name: &str) -> PlannerResult<Arc<dyn Column>> {
        table.column(name).ok_or_else(|| PlannerError::UnknownColumn {
            table: table.name().to_string(),
            column: name.to_string(),
        })
    }
}
