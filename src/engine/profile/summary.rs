use std::collections::BTreeSet;

use tracing::info;

use crate::engine::types::{Column, SalesTable};

/// Share of rows missing a value in one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub column: Column,
    pub missing_ratio: f64,
}

/// Distinct values of one column, sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub values: Vec<String>,
}

impl ColumnSummary {
    pub fn distinct_count(&self) -> usize {
        self.values.len()
    }
}

/// Missing-value ratio per schema column, in schema order. An empty table
/// has nothing to measure and yields no profiles.
pub fn missing_ratios(table: &SalesTable) -> Vec<ColumnProfile> {
    if table.is_empty() {
        return Vec::new();
    }
    let total = table.len() as f64;
    Column::ALL
        .into_iter()
        .map(|column| {
            let missing = table.iter().filter(|row| row.is_missing(column)).count();
            ColumnProfile {
                column,
                missing_ratio: missing as f64 / total,
            }
        })
        .collect()
}

pub fn column_summaries(table: &SalesTable) -> Vec<ColumnSummary> {
    Column::ALL
        .into_iter()
        .map(|column| ColumnSummary {
            column,
            values: distinct_values(table, column),
        })
        .collect()
}

pub fn log_column_summaries(table: &SalesTable) {
    for summary in column_summaries(table) {
        info!(
            target: "open_prices::profile",
            column = summary.column.name(),
            distinct = summary.distinct_count(),
            values = ?summary.values,
            "Column summary"
        );
    }
}

// Numeric columns sort by value, text columns lexicographically.
fn distinct_values(table: &SalesTable, column: Column) -> Vec<String> {
    match column {
        Column::Year => sorted_numbers(table.iter().map(|r| f64::from(r.year))),
        Column::Month => sorted_numbers(table.iter().map(|r| f64::from(r.month))),
        Column::Price => sorted_numbers(table.iter().filter_map(|r| r.price)),
        Column::PricePer => sorted_text(table.iter().filter_map(|r| r.price_per.map(|p| p.as_str()))),
        Column::Dimension(d) => sorted_text(table.iter().filter_map(|r| r.dimension(d))),
    }
}

fn sorted_numbers(values: impl Iterator<Item = f64>) -> Vec<String> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values.into_iter().map(|v| v.to_string()).collect()
}

fn sorted_text<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
