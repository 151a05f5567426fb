use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while building typed inputs for the analytics engine.
///
/// The aggregation functions themselves never fail: an empty slice is a
/// valid result. These errors only surface at the boundary where untyped
/// values (column names, price units, months, slider values) become typed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown dimension column: {0}")]
    InvalidDimension(String),

    #[error("Unknown price unit: {0}")]
    InvalidPricePer(String),

    #[error("Month out of range (expected 1-12): {0}")]
    InvalidMonth(u32),

    #[error("Top-N value out of range: {0}")]
    InvalidTopN(usize),
}

impl AnalyticsError {
    pub fn log_error(&self) {
        match self {
            AnalyticsError::InvalidDimension(name) => {
                error!("Unknown dimension column: {}", name);
                debug!("Invalid dimension error details: {:?}", self);
            }
            AnalyticsError::InvalidPricePer(value) => {
                error!("Unknown price unit: {}", value);
                debug!("Invalid price unit error details: {:?}", self);
            }
            AnalyticsError::InvalidMonth(month) => {
                error!("Month out of range: {}", month);
                debug!("Invalid month error details: {:?}", self);
            }
            AnalyticsError::InvalidTopN(n) => {
                error!("Top-N value out of range: {}", n);
                debug!("Invalid top-N error details: {:?}", self);
            }
        }
    }
}
