use serde::Deserialize;
use std::env;

const CONFIG_ENV_VAR: &str = "OPEN_PRICES_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/open_prices";
const ENV_PREFIX: &str = "OPEN_PRICES";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub analytics: AnalyticsConfig,
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

/// Thresholds used to decide which items count as "active" in a slice.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    pub min_sales: u64,
    pub min_months: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub preferred_currency: String,
    pub preferred_country: String,
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn builder_with_defaults() -> Result<Builder, config::ConfigError> {
    config::Config::builder()
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("analytics.min_sales", 10_i64)?
        .set_default("analytics.min_months", 2_i64)?
        .set_default("selection.default_top_n", 10_i64)?
        .set_default("selection.max_top_n", 20_i64)?
        .set_default("selection.preferred_currency", "EUR")?
        .set_default("selection.preferred_country", "France")
}

/// Loads settings from the file named by `OPEN_PRICES_CONFIG` (optional),
/// then applies `OPEN_PRICES__SECTION__KEY` environment overrides.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let settings: Settings = builder_with_defaults()?
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

/// Loads settings from an explicit file, which must exist. Environment
/// overrides are not applied.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    builder_with_defaults()?
        .add_source(config::File::with_name(path))
        .build()?
        .try_deserialize()
}
