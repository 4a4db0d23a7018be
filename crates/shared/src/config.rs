//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Calculator defaults used when a request omits a field.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Calculator defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CalculatorConfig {
    /// Percentage fee on the gross USD amount.
    #[serde(default = "default_fee_percent")]
    pub fee_percent: f64,
    /// Flat fee in USD.
    #[serde(default = "default_fixed_fee")]
    pub fixed_fee: f64,
    /// Tax (TDS) percentage on the post-fee USD amount.
    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,
    /// USD to INR exchange rate.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,
    /// USD amount pre-filled for the forward calculation.
    #[serde(default = "default_amount_usd")]
    pub amount_usd: f64,
    /// INR target pre-filled for the inverse calculation.
    #[serde(default = "default_target_inr")]
    pub target_inr: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            fee_percent: default_fee_percent(),
            fixed_fee: default_fixed_fee(),
            tax_percent: default_tax_percent(),
            exchange_rate: default_exchange_rate(),
            amount_usd: default_amount_usd(),
            target_inr: default_target_inr(),
        }
    }
}

fn default_fee_percent() -> f64 {
    4.4
}

fn default_fixed_fee() -> f64 {
    0.30
}

fn default_tax_percent() -> f64 {
    0.0
}

fn default_exchange_rate() -> f64 {
    82.0
}

fn default_amount_usd() -> f64 {
    100.0
}

fn default_target_inr() -> f64 {
    10_000.0
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PAYCALC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
