use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::schema::{Column, Dimension, PricePer};
use crate::engine::errors::AnalyticsError;

/// One price observation. Rows are read-only inputs to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub price: Option<f64>,
    pub price_per: Option<PricePer>,
    pub product_name: Option<String>,
    pub category_tag: Option<String>,
    pub proof_currency: Option<String>,
    #[serde(rename = "location_osm_address_country")]
    pub country: Option<String>,
    pub store_name: Option<String>,
}

impl Observation {
    pub fn dimension(&self, dimension: Dimension) -> Option<&str> {
        let value = match dimension {
            Dimension::Product => &self.product_name,
            Dimension::Category => &self.category_tag,
            Dimension::Currency => &self.proof_currency,
            Dimension::Country => &self.country,
            Dimension::Store => &self.store_name,
        };
        value.as_deref()
    }

    fn dimension_mut(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::Product => &mut self.product_name,
            Dimension::Category => &mut self.category_tag,
            Dimension::Currency => &mut self.proof_currency,
            Dimension::Country => &mut self.country,
            Dimension::Store => &mut self.store_name,
        }
    }

    pub fn is_missing(&self, column: Column) -> bool {
        match column {
            Column::Year | Column::Month => false,
            Column::Price => self.price.is_none(),
            Column::PricePer => self.price_per.is_none(),
            Column::Dimension(d) => self.dimension(d).is_none(),
        }
    }
}

/// Builds observations the way the loader hands them to the engine:
/// year and month come from the observation date, and blank dimension
/// values collapse to `None`.
#[derive(Debug, Clone)]
pub struct ObservationBuilder {
    observation: Observation,
}

impl ObservationBuilder {
    pub fn from_date(date: NaiveDate) -> Self {
        Self::empty(date.year(), date.month())
    }

    pub fn from_year_month(year: i32, month: u32) -> Result<Self, AnalyticsError> {
        if !(1..=12).contains(&month) {
            return Err(AnalyticsError::InvalidMonth(month));
        }
        Ok(Self::empty(year, month))
    }

    fn empty(year: i32, month: u32) -> Self {
        Self {
            observation: Observation {
                year,
                month,
                price: None,
                price_per: None,
                product_name: None,
                category_tag: None,
                proof_currency: None,
                country: None,
                store_name: None,
            },
        }
    }

    /// NaN prices are stored as missing.
    pub fn price(mut self, price: f64) -> Self {
        self.observation.price = (!price.is_nan()).then_some(price);
        self
    }

    pub fn price_per(mut self, price_per: PricePer) -> Self {
        self.observation.price_per = Some(price_per);
        self
    }

    pub fn dimension(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        let value = value.into();
        *self.observation.dimension_mut(dimension) =
            (!value.trim().is_empty()).then_some(value);
        self
    }

    pub fn build(self) -> Observation {
        self.observation
    }
}
