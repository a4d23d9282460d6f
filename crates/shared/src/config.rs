//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// REST backend configuration.
    pub api: ApiConfig,
    /// Tenant selection injected into every query.
    #[serde(default)]
    pub tenant: TenantConfig,
    /// Report and dashboard tuning.
    #[serde(default)]
    pub report: ReportConfig,
}

/// REST backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `https://erp.example.com/api/`.
    pub base_url: String,
    /// Bearer token forwarded on every request.
    #[serde(default)]
    pub token: Option<String>,
}

/// Tenant (business category) selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantConfig {
    /// Selected business category, sent as the `business_category` query parameter.
    #[serde(default)]
    pub business_category_id: Option<i64>,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Suffix appended to amounts written out in words.
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
    /// Stock quantity at or below which an item without a reorder level is low.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
    /// Number of invoices shown on the dashboard.
    #[serde(default = "default_recent_invoice_count")]
    pub recent_invoice_count: usize,
    /// Number of month buckets in the sales vs. expenses trend.
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_currency_suffix() -> String {
    "Taka Only".to_string()
}

fn default_low_stock_threshold() -> i64 {
    10
}

fn default_recent_invoice_count() -> usize {
    5
}

fn default_trend_months() -> u32 {
    6
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_suffix: default_currency_suffix(),
            low_stock_threshold: default_low_stock_threshold(),
            recent_invoice_count: default_recent_invoice_count(),
            trend_months: default_trend_months(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `LEDGERDESK__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`](crate::AppError::Configuration)
    /// if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERDESK").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
