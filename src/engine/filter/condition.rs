use std::fmt::Debug;

use crate::engine::types::{Dimension, Observation, PricePer};

/// Row predicate evaluated against a single observation.
pub trait Condition: Send + Sync + Debug {
    fn evaluate(&self, row: &Observation) -> bool;
}

/// Exact, case-sensitive equality on a dimension column. Missing values
/// never match.
#[derive(Debug, Clone)]
pub struct DimensionCondition {
    dimension: Dimension,
    value: String,
}

impl DimensionCondition {
    pub fn new(dimension: Dimension, value: String) -> Self {
        Self { dimension, value }
    }
}

impl Condition for DimensionCondition {
    fn evaluate(&self, row: &Observation) -> bool {
        row.dimension(self.dimension) == Some(self.value.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct YearCondition {
    year: i32,
}

impl YearCondition {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Condition for YearCondition {
    fn evaluate(&self, row: &Observation) -> bool {
        row.year == self.year
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PricePerCondition {
    price_per: PricePer,
}

impl PricePerCondition {
    pub fn new(price_per: PricePer) -> Self {
        Self { price_per }
    }
}

impl Condition for PricePerCondition {
    fn evaluate(&self, row: &Observation) -> bool {
        row.price_per == Some(self.price_per)
    }
}

/// All inner conditions must hold. An empty conjunction matches every row.
#[derive(Debug, Default)]
pub struct ConjunctiveCondition {
    conditions: Vec<Box<dyn Condition>>,
}

impl ConjunctiveCondition {
    pub fn new(conditions: Vec<Box<dyn Condition>>) -> Self {
        Self { conditions }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Condition for ConjunctiveCondition {
    fn evaluate(&self, row: &Observation) -> bool {
        self.conditions.iter().all(|c| c.evaluate(row))
    }
}
