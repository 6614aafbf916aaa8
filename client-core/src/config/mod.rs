use crate::error::CoreError;
use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Logging and trace export settings shared by every client binary.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector (e.g. http://tempo:4317). Spans stay local when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_service_name() -> String {
    "document-client".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

/// Load settings from an optional config file layered under `APP_` environment variables.
///
/// Nested keys use `__`, so `APP_API__BASE_URL` maps to `api.base_url`.
pub fn load_settings<T: DeserializeOwned>(config_file: &Path) -> Result<T, CoreError> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(File::from(config_file).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
