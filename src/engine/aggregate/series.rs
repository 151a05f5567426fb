use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use indexmap::IndexSet;

/// Mean-style metric that keeps "nothing to average" apart from a real zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric {
    Observed(f64),
    #[default]
    NoData,
}

impl Metric {
    /// Numeric value, with `NoData` read as `0.0`.
    pub fn value(&self) -> f64 {
        match self {
            Metric::Observed(v) => *v,
            Metric::NoData => 0.0,
        }
    }

    pub fn is_observed(&self) -> bool {
        matches!(self, Metric::Observed(_))
    }
}

/// How many ranked dimension values to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    #[default]
    All,
    /// Top `n` values; `Head(None)` keeps the full ranking.
    Head(Option<usize>),
}

impl Ranking {
    pub fn from_flags(head: bool, n: Option<usize>) -> Self {
        if head { Ranking::Head(n) } else { Ranking::All }
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            Ranking::All => None,
            Ranking::Head(n) => *n,
        }
    }
}

/// Ordered set of dimension values shared by every series of one
/// computation. Clones share storage.
#[derive(Debug, Clone)]
pub struct RankedIndex {
    labels: Arc<IndexSet<String>>,
}

// Order-sensitive, unlike `IndexSet`'s own equality.
impl PartialEq for RankedIndex {
    fn eq(&self, other: &Self) -> bool {
        self.labels.iter().eq(other.labels.iter())
    }
}

impl Eq for RankedIndex {}

impl RankedIndex {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    pub fn label(&self, position: usize) -> Option<&str> {
        self.labels.get_index(position).map(String::as_str)
    }

    /// True when both handles point at the same index storage.
    pub fn is_same(&self, other: &RankedIndex) -> bool {
        Arc::ptr_eq(&self.labels, &other.labels)
    }
}

/// Values keyed by a `RankedIndex`, stored positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    index: RankedIndex,
    values: Vec<T>,
}

impl<T> Series<T> {
    pub(crate) fn new(index: RankedIndex, values: Vec<T>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self { index, values }
    }

    pub fn index(&self) -> &RankedIndex {
        &self.index
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&T> {
        self.index.position(label).map(|i| &self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.index.labels().zip(self.values.iter())
    }

    pub fn shares_index<U>(&self, other: &Series<U>) -> bool {
        self.index.is_same(&other.index)
    }
}

impl<T: Clone> Series<T> {
    /// Aligns `source` onto `index`; labels absent from `source` get `fill`.
    /// Keys of `source` that are not in `index` are dropped.
    pub fn reindex<K, S>(source: &HashMap<K, T, S>, index: &RankedIndex, fill: T) -> Self
    where
        K: Borrow<str> + Hash + Eq,
        S: BuildHasher,
    {
        let values = index
            .labels()
            .map(|label| source.get(label).cloned().unwrap_or_else(|| fill.clone()))
            .collect();
        Self::new(index.clone(), values)
    }
}

impl Series<u64> {
    /// Ranks counts in descending order, ties broken by ascending label, and
    /// truncates according to `ranking`. The result defines a new index.
    pub fn ranked<K: AsRef<str>>(counts: impl IntoIterator<Item = (K, u64)>, ranking: Ranking) -> Self {
        let mut entries: Vec<(K, u64)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_ref().cmp(b.0.as_ref())));
        if let Some(n) = ranking.limit() {
            entries.truncate(n);
        }
        let (labels, values): (IndexSet<String>, Vec<u64>) = entries
            .into_iter()
            .map(|(label, count)| (label.as_ref().to_string(), count))
            .unzip();
        let index = RankedIndex {
            labels: Arc::new(labels),
        };
        Self::new(index, values)
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}
