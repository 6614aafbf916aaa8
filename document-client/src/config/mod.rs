use client_core::config::{load_settings, TelemetrySettings};
use client_core::error::CoreError;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Backend API root, e.g. http://localhost:8000/api. Paths like `/documents` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, CoreError> {
    let base_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Works both from the workspace root and from inside document-client
    let configuration_directory = if base_path.ends_with("document-client") {
        base_path.join("config")
    } else {
        base_path.join("document-client").join("config")
    };

    load_settings(&configuration_directory.join("base.yaml"))
}
