mod assembler;

pub use assembler::{CountsRow, MetricsRow, make_counts_table, make_metrics_table};
