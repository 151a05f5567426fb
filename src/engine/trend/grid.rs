use std::collections::HashMap;

use indexmap::IndexSet;
use serde::Serialize;

use super::builder::{MONTHS, TrendPoint};

/// Month-by-item pivot of trend points, used for the tabular view next to
/// trend charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendGrid {
    /// Column headers, in first-seen order.
    pub items: Vec<String>,
    /// One row per calendar month.
    pub rows: Vec<TrendGridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendGridRow {
    pub month: u32,
    pub counts: Vec<u64>,
}

impl TrendGrid {
    pub fn from_points(points: &[TrendPoint]) -> Self {
        let items: IndexSet<&str> = points.iter().map(|p| p.item.as_str()).collect();

        let mut cells: HashMap<(u32, &str), u64> = HashMap::new();
        for p in points {
            cells.entry((p.month, p.item.as_str())).or_insert(p.count);
        }

        let rows = MONTHS
            .map(|month| TrendGridRow {
                month,
                counts: items
                    .iter()
                    .map(|item| cells.get(&(month, *item)).copied().unwrap_or(0))
                    .collect(),
            })
            .collect();

        Self {
            items: items.into_iter().map(str::to_string).collect(),
            rows,
        }
    }

    pub fn get(&self, month: u32, item: &str) -> Option<u64> {
        let column = self.items.iter().position(|i| i == item)?;
        self.rows
            .iter()
            .find(|r| r.month == month)
            .map(|r| r.counts[column])
    }
}
