//! Logging configuration

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Tracing subscriber configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Force JSON output; defaults to JSON in production only
    pub json: Option<bool>,
}

impl LoggingConfig {
    /// Whether to emit JSON lines in `environment`
    pub fn use_json(&self, environment: Environment) -> bool {
        self.json
            .unwrap_or(environment == Environment::Production)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: None,
        }
    }
}

fn default_filter() -> String {
    "info,hemservice_assistant=debug".to_string()
}
