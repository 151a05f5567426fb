use std::collections::BTreeSet;

use tracing::debug;

use crate::engine::aggregate::{Aggregator, CountAll, DistinctMonths, group_by};
use crate::engine::filter::RowFilter;
use crate::engine::types::{Dimension, RowSet, SalesTable};
use crate::shared::config::CONFIG;

/// Minimum activity an item needs within a slice. Both bounds are
/// inclusive and must hold together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityThresholds {
    pub min_sales: u64,
    pub min_months: usize,
}

impl Default for ActivityThresholds {
    fn default() -> Self {
        Self {
            min_sales: 10,
            min_months: 2,
        }
    }
}

impl ActivityThresholds {
    pub fn new(min_sales: u64, min_months: usize) -> Self {
        Self {
            min_sales,
            min_months,
        }
    }

    pub fn from_config() -> Self {
        let cfg = &CONFIG.analytics;
        Self::new(cfg.min_sales, cfg.min_months)
    }
}

fn slice<'a>(
    table: &'a SalesTable,
    filter_on: Dimension,
    filter_value: &str,
    year: Option<i32>,
) -> RowSet<'a> {
    RowFilter::new()
        .with_equals(filter_on, filter_value)
        .with_year(year)
        .apply(table)
}

fn qualifying_in(
    rows: &RowSet<'_>,
    column: Dimension,
    thresholds: ActivityThresholds,
) -> BTreeSet<String> {
    let by_sales: BTreeSet<&str> = group_by::<CountAll, _>(rows, column)
        .into_iter()
        .filter(|(_, count)| count.finalize() >= thresholds.min_sales)
        .map(|(item, _)| item)
        .collect();
    let by_months: BTreeSet<&str> = group_by::<DistinctMonths, _>(rows, column)
        .into_iter()
        .filter(|(_, months)| months.finalize() >= thresholds.min_months)
        .map(|(item, _)| item)
        .collect();

    by_sales
        .intersection(&by_months)
        .map(|item| item.to_string())
        .collect()
}

/// Values of `column` meeting both thresholds within the
/// `filter_on == filter_value` slice of `year`.
pub fn qualifying_items(
    table: &SalesTable,
    filter_on: Dimension,
    column: Dimension,
    filter_value: &str,
    year: Option<i32>,
    thresholds: ActivityThresholds,
) -> BTreeSet<String> {
    let rows = slice(table, filter_on, filter_value, year);
    qualifying_in(&rows, column, thresholds)
}

/// Rows of the slice whose `column` value qualifies. Rows are returned
/// whole, in source order, for callers to re-aggregate.
pub fn filter_items_by_min_sales<'a>(
    table: &'a SalesTable,
    filter_on: Dimension,
    column: Dimension,
    filter_value: &str,
    year: Option<i32>,
    thresholds: ActivityThresholds,
) -> RowSet<'a> {
    let rows = slice(table, filter_on, filter_value, year);
    let qualifying = qualifying_in(&rows, column, thresholds);

    let active: RowSet<'a> = rows
        .iter()
        .filter(|r| r.dimension(column).is_some_and(|v| qualifying.contains(v)))
        .collect();

    debug!(
        target: "open_prices::activity",
        filter_on = %filter_on,
        column = %column,
        filter_value,
        year = ?year,
        min_sales = thresholds.min_sales,
        min_months = thresholds.min_months,
        slice_rows = rows.len(),
        qualifying = qualifying.len(),
        active_rows = active.len(),
        "Filtered items by activity"
    );

    active
}
