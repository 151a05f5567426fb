use std::collections::HashMap;

use tracing::debug;

use super::ops::{Aggregator, AvgPrice, CountAll, group_by};
use super::series::{Metric, RankedIndex, Ranking, Series};
use crate::engine::filter::RowFilter;
use crate::engine::types::{Dimension, PricePer, RowSet, SalesTable};

/// Full metric set for one dimension. Every series shares `counts`' index.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesMetrics {
    pub counts: Series<u64>,
    pub kilo_counts: Series<u64>,
    pub kilo_mean_price: Series<Metric>,
    pub unit_counts: Series<u64>,
    pub unit_mean_price: Series<Metric>,
    /// `kilo_count * kilo_mean_price + unit_count * unit_mean_price`.
    pub total_prices: Series<f64>,
}

impl SalesMetrics {
    pub fn index(&self) -> &RankedIndex {
        self.counts.index()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count-only variant of [`SalesMetrics`].
#[derive(Debug, Clone, PartialEq)]
pub struct SalesCounts {
    pub counts: Series<u64>,
    pub kilo_counts: Series<u64>,
    pub unit_counts: Series<u64>,
}

impl SalesCounts {
    pub fn index(&self) -> &RankedIndex {
        self.counts.index()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Computes counts, mean prices and estimated totals per `dimension` value
/// within the `filter_on == filter_value` slice of `year` (`None` for every
/// year).
pub fn compute_sales_metrics(
    table: &SalesTable,
    dimension: Dimension,
    filter_on: Dimension,
    filter_value: &str,
    year: Option<i32>,
    ranking: Ranking,
) -> SalesMetrics {
    let slice = RowFilter::new()
        .with_equals(filter_on, filter_value)
        .with_year(year)
        .apply(table);

    let counts = rank(&slice, dimension, ranking);
    let index = counts.index().clone();

    let kilo = partition(&slice, PricePer::Kilogram);
    let kilo_counts = aligned_counts(&kilo, dimension, &index);
    let kilo_mean_price = aligned_mean_price(&kilo, dimension, &index);

    let unit = partition(&slice, PricePer::Unit);
    let unit_counts = aligned_counts(&unit, dimension, &index);
    let unit_mean_price = aligned_mean_price(&unit, dimension, &index);

    let totals = (0..index.len())
        .map(|i| {
            kilo_counts.values()[i] as f64 * kilo_mean_price.values()[i].value()
                + unit_counts.values()[i] as f64 * unit_mean_price.values()[i].value()
        })
        .collect();
    let total_prices = Series::new(index.clone(), totals);

    debug!(
        target: "open_prices::aggregate",
        dimension = %dimension,
        filter_on = %filter_on,
        filter_value,
        year = ?year,
        rows = slice.len(),
        kilo_rows = kilo.len(),
        unit_rows = unit.len(),
        groups = index.len(),
        "Computed sales metrics"
    );

    SalesMetrics {
        counts,
        kilo_counts,
        kilo_mean_price,
        unit_counts,
        unit_mean_price,
        total_prices,
    }
}

/// Counts per `dimension` value for one year, or for every year when `year`
/// is `None`, split by price unit.
pub fn compute_sales_metrics_for_year(
    table: &SalesTable,
    dimension: Dimension,
    year: Option<i32>,
    ranking: Ranking,
) -> SalesCounts {
    let slice = RowFilter::new().with_year(year).apply(table);

    let counts = rank(&slice, dimension, ranking);
    let index = counts.index().clone();
    let kilo_counts = aligned_counts(&partition(&slice, PricePer::Kilogram), dimension, &index);
    let unit_counts = aligned_counts(&partition(&slice, PricePer::Unit), dimension, &index);

    debug!(
        target: "open_prices::aggregate",
        dimension = %dimension,
        year = ?year,
        rows = slice.len(),
        groups = index.len(),
        "Computed sales counts"
    );

    SalesCounts {
        counts,
        kilo_counts,
        unit_counts,
    }
}

fn rank(slice: &RowSet<'_>, dimension: Dimension, ranking: Ranking) -> Series<u64> {
    let groups = group_by::<CountAll, _>(slice, dimension);
    Series::ranked(groups.into_iter().map(|(k, c)| (k, c.finalize())), ranking)
}

fn partition<'a>(slice: &RowSet<'a>, price_per: PricePer) -> RowSet<'a> {
    RowFilter::new().with_price_per(price_per).apply(slice)
}

fn aligned_counts(rows: &RowSet<'_>, dimension: Dimension, index: &RankedIndex) -> Series<u64> {
    let counts: HashMap<&str, u64> = group_by::<CountAll, _>(rows, dimension)
        .into_iter()
        .map(|(k, c)| (k, c.finalize()))
        .collect();
    Series::reindex(&counts, index, 0)
}

fn aligned_mean_price(
    rows: &RowSet<'_>,
    dimension: Dimension,
    index: &RankedIndex,
) -> Series<Metric> {
    let means: HashMap<&str, Metric> = group_by::<AvgPrice, _>(rows, dimension)
        .into_iter()
        .map(|(k, avg)| (k, avg.finalize()))
        .collect();
    Series::reindex(&means, index, Metric::NoData)
}
