use chrono::NaiveDate;

use super::observation::{Observation, ObservationBuilder};
use super::schema::{Column, Dimension, PricePer};
use crate::engine::errors::AnalyticsError;

#[test]
fn year_and_month_come_from_date() {
    let date = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();
    let obs = ObservationBuilder::from_date(date).build();

    assert_eq!(obs.year, 2024);
    assert_eq!(obs.month, 7);
}

#[test]
fn explicit_month_is_validated() {
    assert!(ObservationBuilder::from_year_month(2023, 12).is_ok());
    assert_eq!(
        ObservationBuilder::from_year_month(2023, 0).unwrap_err(),
        AnalyticsError::InvalidMonth(0)
    );
    assert_eq!(
        ObservationBuilder::from_year_month(2023, 13).unwrap_err(),
        AnalyticsError::InvalidMonth(13)
    );
}

#[test]
fn blank_dimension_values_become_missing() {
    let obs = ObservationBuilder::from_year_month(2023, 1)
        .unwrap()
        .dimension(Dimension::Product, "")
        .dimension(Dimension::Category, "   ")
        .dimension(Dimension::Currency, "EUR")
        .build();

    assert_eq!(obs.dimension(Dimension::Product), None);
    assert_eq!(obs.dimension(Dimension::Category), None);
    assert_eq!(obs.dimension(Dimension::Currency), Some("EUR"));
    assert!(obs.is_missing(Column::Dimension(Dimension::Product)));
    assert!(!obs.is_missing(Column::Dimension(Dimension::Currency)));
}

#[test]
fn nan_price_is_missing() {
    let obs = ObservationBuilder::from_year_month(2023, 1)
        .unwrap()
        .price(f64::NAN)
        .price_per(PricePer::Unit)
        .build();

    assert_eq!(obs.price, None);
    assert!(obs.is_missing(Column::Price));
    assert!(!obs.is_missing(Column::PricePer));
    assert!(!obs.is_missing(Column::Year));
}

#[test]
fn deserializes_dataset_column_names() {
    let json = r#"[{
        "year": 2024,
        "month": 5,
        "price": 2.5,
        "price_per": "KILOGRAM",
        "product_name": "Apples",
        "proof_currency": "EUR",
        "location_osm_address_country": "France"
    }]"#;

    let rows: Vec<Observation> = serde_json::from_str(json).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price_per, Some(PricePer::Kilogram));
    assert_eq!(rows[0].dimension(Dimension::Country), Some("France"));
    assert_eq!(rows[0].dimension(Dimension::Store), None);
}
