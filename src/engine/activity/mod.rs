mod thresholds;

pub use thresholds::{ActivityThresholds, filter_items_by_min_sales, qualifying_items};
