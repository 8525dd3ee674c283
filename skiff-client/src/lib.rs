pub mod app_config;
pub mod rest;
mod wire;

pub use app_config::WidgetConfig;
pub use rest::RestClient;
