use serde::Serialize;

use crate::engine::aggregate::{SalesCounts, SalesMetrics};

/// One presentation row of a metrics table.
///
/// Mean prices are flattened to plain numbers; a group without priced
/// rows shows `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub name: String,
    pub total_sales: u64,
    pub kilo_sales: u64,
    pub kilo_mean_price: f64,
    pub unit_sales: u64,
    pub unit_mean_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountsRow {
    pub name: String,
    pub total_sales: u64,
    pub kilo_sales: u64,
    pub unit_sales: u64,
}

/// Zips the aligned metric series into rows, in ranked-index order.
pub fn make_metrics_table(metrics: &SalesMetrics) -> Vec<MetricsRow> {
    metrics
        .index()
        .labels()
        .enumerate()
        .map(|(i, name)| MetricsRow {
            name: name.to_string(),
            total_sales: metrics.counts.values()[i],
            kilo_sales: metrics.kilo_counts.values()[i],
            kilo_mean_price: metrics.kilo_mean_price.values()[i].value(),
            unit_sales: metrics.unit_counts.values()[i],
            unit_mean_price: metrics.unit_mean_price.values()[i].value(),
            total_price: metrics.total_prices.values()[i],
        })
        .collect()
}

pub fn make_counts_table(counts: &SalesCounts) -> Vec<CountsRow> {
    counts
        .index()
        .labels()
        .enumerate()
        .map(|(i, name)| CountsRow {
            name: name.to_string(),
            total_sales: counts.counts.values()[i],
            kilo_sales: counts.kilo_counts.values()[i],
            unit_sales: counts.unit_counts.values()[i],
        })
        .collect()
}
