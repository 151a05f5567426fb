use std::iter::Copied;
use std::slice;

use super::observation::Observation;
use super::schema::Column;

/// Owned, in-memory table of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    rows: Vec<Observation>,
}

impl SalesTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn iter(&self) -> slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    /// Borrowed view over every row.
    pub fn view(&self) -> RowSet<'_> {
        self.rows.iter().collect()
    }

    /// Copy of the table without rows missing any of `columns`.
    pub fn drop_missing(&self, columns: &[Column]) -> SalesTable {
        self.rows
            .iter()
            .filter(|row| !columns.iter().any(|c| row.is_missing(*c)))
            .cloned()
            .collect()
    }
}

impl FromIterator<Observation> for SalesTable {
    fn from_iter<T: IntoIterator<Item = Observation>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a Observation;
    type IntoIter = slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Borrowed subset of a table's rows, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet<'a> {
    rows: Vec<&'a Observation>,
}

impl<'a> RowSet<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, &'a Observation>> {
        self.rows.iter().copied()
    }

    pub fn to_table(&self) -> SalesTable {
        self.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a Observation> for RowSet<'a> {
    fn from_iter<T: IntoIterator<Item = &'a Observation>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a, 'b> IntoIterator for &'b RowSet<'a> {
    type Item = &'a Observation;
    type IntoIter = Copied<slice::Iter<'b, &'a Observation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
