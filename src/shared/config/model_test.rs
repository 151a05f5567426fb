use std::fs;

use indoc::indoc;
use tempfile::tempdir;

use super::model::load_settings_from;

#[test]
fn file_values_override_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("open_prices.toml");
    fs::write(
        &path,
        indoc! {r#"
            [analytics]
            min_sales = 3
            min_months = 1

            [selection]
            preferred_currency = "USD"
        "#},
    )
    .expect("write config");

    let settings = load_settings_from(path.to_str().unwrap()).expect("load settings");

    assert_eq!(settings.analytics.min_sales, 3);
    assert_eq!(settings.analytics.min_months, 1);
    assert_eq!(settings.selection.preferred_currency, "USD");
    // untouched keys keep their defaults
    assert_eq!(settings.selection.preferred_country, "France");
    assert_eq!(settings.selection.default_top_n, 10);
    assert_eq!(settings.selection.max_top_n, 20);
    assert_eq!(settings.logging.stdout_level, "info");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    assert!(load_settings_from(path.to_str().unwrap()).is_err());
}

#[test]
fn malformed_value_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(
        &path,
        indoc! {r#"
            [analytics]
            min_sales = "lots"
        "#},
    )
    .expect("write config");

    assert!(load_settings_from(path.to_str().unwrap()).is_err());
}
