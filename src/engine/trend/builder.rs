use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::engine::filter::RowFilter;
use crate::engine::types::{Dimension, SalesTable};

/// The fixed calendar every trend series spans.
pub const MONTHS: RangeInclusive<u32> = 1..=12;

/// Sales count of one item in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub month: u32,
    pub count: u64,
    pub item: String,
}

/// Dense monthly counts for each selected item of `column`, within the
/// `filter_on == filter_value` slice of `year`.
///
/// The output holds twelve points per selected item, months 1 to 12 in
/// order, blocks in the order of `selected_items`. Months without sales
/// carry a zero count so charts draw continuous series.
pub fn make_trend_data<S: AsRef<str>>(
    table: &SalesTable,
    filter_on: Dimension,
    column: Dimension,
    filter_value: &str,
    year: Option<i32>,
    selected_items: &[S],
) -> Vec<TrendPoint> {
    let slice = RowFilter::new()
        .with_equals(filter_on, filter_value)
        .with_year(year)
        .apply(table);

    let mut points = Vec::with_capacity(selected_items.len() * MONTHS.count());
    for item in selected_items {
        let item = item.as_ref();
        let rows = RowFilter::new().with_equals(column, item).apply(&slice);

        let mut monthly: HashMap<u32, u64> = HashMap::new();
        for row in &rows {
            *monthly.entry(row.month).or_insert(0) += 1;
        }

        points.extend(MONTHS.map(|month| TrendPoint {
            month,
            count: monthly.get(&month).copied().unwrap_or(0),
            item: item.to_string(),
        }));
    }

    debug!(
        target: "open_prices::trend",
        filter_on = %filter_on,
        column = %column,
        filter_value,
        year = ?year,
        slice_rows = slice.len(),
        items = selected_items.len(),
        points = points.len(),
        "Built monthly trend data"
    );

    points
}
