use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::engine::errors::AnalyticsError;
use crate::engine::types::{Dimension, Observation, SalesTable};
use crate::shared::config::{CONFIG, SelectionConfig};

/// Distinct years present in the table, most recent first.
pub fn available_years(table: &SalesTable) -> Vec<i32> {
    let years: BTreeSet<i32> = table.iter().map(|row| row.year).collect();
    years.into_iter().rev().collect()
}

/// Distinct values of `dimension` across the whole table, ascending.
pub fn filter_values(table: &SalesTable, dimension: Dimension) -> Vec<String> {
    item_options(table, dimension)
}

/// Distinct values of `column` within `rows`, ascending. Missing values are
/// skipped.
pub fn item_options<'a, I>(rows: I, column: Dimension) -> Vec<String>
where
    I: IntoIterator<Item = &'a Observation>,
{
    rows.into_iter()
        .filter_map(|row| row.dimension(column))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `preferred` when offered, otherwise the first option.
pub fn default_choice<'a, S: AsRef<str>>(options: &'a [S], preferred: &str) -> Option<&'a str> {
    options
        .iter()
        .map(AsRef::as_ref)
        .find(|o| *o == preferred)
        .or_else(|| options.first().map(AsRef::as_ref))
}

/// Initial multi-selection: the first option, if any.
pub fn default_items<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    options
        .first()
        .map(|o| vec![o.as_ref().to_string()])
        .unwrap_or_default()
}

/// Dimension a dashboard page slices by before ranking or trending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTarget {
    Currency,
    Country,
}

impl FilterTarget {
    pub fn dimension(&self) -> Dimension {
        match self {
            FilterTarget::Currency => Dimension::Currency,
            FilterTarget::Country => Dimension::Country,
        }
    }

    pub fn preferred_in<'c>(&self, config: &'c SelectionConfig) -> &'c str {
        match self {
            FilterTarget::Currency => &config.preferred_currency,
            FilterTarget::Country => &config.preferred_country,
        }
    }

    pub fn preferred(&self) -> &'static str {
        self.preferred_in(&CONFIG.selection)
    }

    /// Filter dimension and default value for this target over `table`.
    pub fn default_filter(&self, table: &SalesTable) -> Option<(Dimension, String)> {
        let dimension = self.dimension();
        let options = filter_values(table, dimension);
        default_choice(&options, self.preferred()).map(|v| (dimension, v.to_string()))
    }
}

impl fmt::Display for FilterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dimension(), f)
    }
}

impl FromStr for FilterTarget {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Dimension>()? {
            Dimension::Currency => Ok(FilterTarget::Currency),
            Dimension::Country => Ok(FilterTarget::Country),
            _ => Err(AnalyticsError::InvalidDimension(s.to_string())),
        }
    }
}
