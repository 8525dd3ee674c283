use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub api: ApiConfig,
    pub checkout: CheckoutConfig,
    pub calendar: CalendarStyle,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the booking backend, e.g. `https://example.com/api`.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckoutConfig {
    /// Publishable key for the hosted-checkout provider.
    pub publishable_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarStyle {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl WidgetConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("SKIFF").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
