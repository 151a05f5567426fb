use std::collections::{HashMap, HashSet};

use ahash::RandomState as AHashRandomState;

use super::series::Metric;
use crate::engine::types::{Dimension, Observation};

/// Per-group accumulator fed one observation at a time.
pub trait Aggregator: Default {
    type Output;

    fn update(&mut self, row: &Observation);

    fn merge(&mut self, other: &Self);

    fn finalize(&self) -> Self::Output;
}

/// Row count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountAll {
    count: u64,
}

impl Aggregator for CountAll {
    type Output = u64;

    #[inline]
    fn update(&mut self, _row: &Observation) {
        self.count += 1;
    }

    #[inline]
    fn merge(&mut self, other: &CountAll) {
        self.count += other.count;
    }

    fn finalize(&self) -> u64 {
        self.count
    }
}

/// Mean of the non-missing prices. No priced row yields `Metric::NoData`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvgPrice {
    sum: f64,
    count: u64,
}

impl Aggregator for AvgPrice {
    type Output = Metric;

    fn update(&mut self, row: &Observation) {
        if let Some(price) = row.price {
            self.sum += price;
            self.count += 1;
        }
    }

    fn merge(&mut self, other: &AvgPrice) {
        self.sum += other.sum;
        self.count += other.count;
    }

    fn finalize(&self) -> Metric {
        if self.count == 0 {
            return Metric::NoData;
        }
        Metric::Observed(self.sum / self.count as f64)
    }
}

/// Number of distinct months a group was observed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistinctMonths {
    uniq: HashSet<u32>,
}

impl DistinctMonths {
    pub fn months(&self) -> &HashSet<u32> {
        &self.uniq
    }
}

impl Aggregator for DistinctMonths {
    type Output = usize;

    fn update(&mut self, row: &Observation) {
        self.uniq.insert(row.month);
    }

    fn merge(&mut self, other: &DistinctMonths) {
        self.uniq.extend(other.uniq.iter().copied());
    }

    fn finalize(&self) -> usize {
        self.uniq.len()
    }
}

/// Groups rows by their `dimension` value and feeds each group into its own
/// accumulator. Rows with a missing dimension value are skipped.
pub fn group_by<'a, A, I>(rows: I, dimension: Dimension) -> HashMap<&'a str, A, AHashRandomState>
where
    A: Aggregator,
    I: IntoIterator<Item = &'a Observation>,
{
    let mut groups: HashMap<&'a str, A, AHashRandomState> =
        HashMap::with_hasher(AHashRandomState::new());
    for row in rows {
        if let Some(key) = row.dimension(dimension) {
            groups.entry(key).or_default().update(row);
        }
    }
    groups
}
