pub mod metrics;
pub mod ops;
pub mod series;

pub use metrics::{SalesCounts, SalesMetrics, compute_sales_metrics, compute_sales_metrics_for_year};
pub use ops::{Aggregator, AvgPrice, CountAll, DistinctMonths, group_by};
pub use series::{Metric, RankedIndex, Ranking, Series};
