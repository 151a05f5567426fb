use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::AnalyticsError;

/// Categorical column used to group sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Product,
    Category,
    Currency,
    Country,
    Store,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Product,
        Dimension::Category,
        Dimension::Currency,
        Dimension::Country,
        Dimension::Store,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Product => "product_name",
            Dimension::Category => "category_tag",
            Dimension::Currency => "proof_currency",
            Dimension::Country => "location_osm_address_country",
            Dimension::Store => "store_name",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Dimension {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.column_name() == s)
            .ok_or_else(|| AnalyticsError::InvalidDimension(s.to_string()))
    }
}

/// How a price observation is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PricePer {
    Kilogram,
    Unit,
}

impl PricePer {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricePer::Kilogram => "KILOGRAM",
            PricePer::Unit => "UNIT",
        }
    }
}

impl fmt::Display for PricePer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricePer {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KILOGRAM" => Ok(PricePer::Kilogram),
            "UNIT" => Ok(PricePer::Unit),
            _ => Err(AnalyticsError::InvalidPricePer(s.to_string())),
        }
    }
}

/// Every column of the observation schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Year,
    Month,
    Price,
    PricePer,
    Dimension(Dimension),
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Year,
        Column::Month,
        Column::Price,
        Column::PricePer,
        Column::Dimension(Dimension::Product),
        Column::Dimension(Dimension::Category),
        Column::Dimension(Dimension::Currency),
        Column::Dimension(Dimension::Country),
        Column::Dimension(Dimension::Store),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::Year => "year",
            Column::Month => "month",
            Column::Price => "price",
            Column::PricePer => "price_per",
            Column::Dimension(d) => d.column_name(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Dimension> for Column {
    fn from(value: Dimension) -> Self {
        Column::Dimension(value)
    }
}
