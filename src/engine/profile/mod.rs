mod summary;

pub use summary::{
    ColumnProfile, ColumnSummary, column_summaries, log_column_summaries, missing_ratios,
};
