pub mod activity;
pub mod aggregate;
pub mod errors;
pub mod filter;
pub mod profile;
pub mod selection;
pub mod table;
pub mod trend;
pub mod types;

pub use activity::{ActivityThresholds, filter_items_by_min_sales, qualifying_items};
pub use aggregate::{
    Metric, RankedIndex, Ranking, SalesCounts, SalesMetrics, Series, compute_sales_metrics,
    compute_sales_metrics_for_year,
};
pub use errors::AnalyticsError;
pub use filter::{RowFilter, filter_rows};
pub use profile::{ColumnProfile, ColumnSummary, column_summaries, missing_ratios};
pub use selection::{FilterTarget, TopN};
pub use table::{CountsRow, MetricsRow, make_counts_table, make_metrics_table};
pub use trend::{MONTHS, TrendGrid, TrendGridRow, TrendPoint, make_trend_data};
pub use types::{
    Column, Dimension, Observation, ObservationBuilder, PricePer, RowSet, SalesTable,
};
