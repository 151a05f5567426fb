use tracing::debug;

use super::condition::{
    Condition, ConjunctiveCondition, DimensionCondition, PricePerCondition, YearCondition,
};
use crate::engine::types::{Dimension, Observation, PricePer, RowSet, SalesTable};

/// Conjunctive row selection: dimension equalities, an optional price unit
/// and an optional year (`None` means all years).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    equals: Vec<(Dimension, String)>,
    price_per: Option<PricePer>,
    year: Option<i32>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_equals(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.equals.push((dimension, value.into()));
        self
    }

    pub fn with_price_per(mut self, price_per: PricePer) -> Self {
        self.price_per = Some(price_per);
        self
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn to_condition(&self) -> ConjunctiveCondition {
        let mut conditions: Vec<Box<dyn Condition>> = self
            .equals
            .iter()
            .map(|(dim, value)| {
                Box::new(DimensionCondition::new(*dim, value.clone())) as Box<dyn Condition>
            })
            .collect();
        if let Some(price_per) = self.price_per {
            conditions.push(Box::new(PricePerCondition::new(price_per)));
        }
        if let Some(year) = self.year {
            conditions.push(Box::new(YearCondition::new(year)));
        }
        ConjunctiveCondition::new(conditions)
    }

    /// Selects matching rows, preserving their order. Never fails; an empty
    /// result is a normal outcome.
    pub fn apply<'a, I>(&self, rows: I) -> RowSet<'a>
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let condition = self.to_condition();
        let selected: RowSet<'a> = rows.into_iter().filter(|r| condition.evaluate(r)).collect();
        debug!(
            target: "open_prices::filter",
            conditions = condition.len(),
            matched = selected.len(),
            "Applied row filter"
        );
        selected
    }
}

/// Rows of `table` matching every `(dimension, value)` pair and, when given,
/// the year.
pub fn filter_rows<'a, S: AsRef<str>>(
    table: &'a SalesTable,
    equals: &[(Dimension, S)],
    year: Option<i32>,
) -> RowSet<'a> {
    equals
        .iter()
        .fold(RowFilter::new(), |f, (dim, value)| {
            f.with_equals(*dim, value.as_ref())
        })
        .with_year(year)
        .apply(table)
}
