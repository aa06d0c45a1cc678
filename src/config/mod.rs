//! Typed configuration read from `HEMSERVICE__*` environment variables.
//!
//! Every section has defaults, so an empty environment yields the bundled
//! catalog, in-memory sessions and the standard 2025 tax rules.
//!
//! ```no_run
//! use hemservice_assistant::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Jour: {}", config.assistant.emergency_phone);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod assistant;
mod catalog;
mod error;
mod logging;
mod storage;

pub use assistant::AssistantConfig;
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

use crate::domain::intent::IntentTuning;
use crate::domain::pricing::TaxPolicy;

/// Everything a host needs to build an [`Assistant`](crate::Assistant).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment name, selects the log format
    #[serde(default)]
    pub environment: Environment,

    /// Company contact details and session limits
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Classifier weights and boosts
    #[serde(default)]
    pub intent: IntentTuning,

    /// VAT and ROT/RUT parameters
    #[serde(default)]
    pub tax: TaxPolicy,

    /// Session store backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Service catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    ///
    /// Nesting uses a double underscore:
    /// `HEMSERVICE__ASSISTANT__MAIN_PHONE=08-555 000 00` sets
    /// `assistant.main_phone`, `HEMSERVICE__TAX__ROT_RATE=30` sets `tax.rot_rate`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEMSERVICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.assistant.validate()?;
        self.storage.validate()?;
        validate_tuning(&self.intent)?;
        validate_tax(&self.tax)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn validate_tuning(tuning: &IntentTuning) -> Result<(), ValidationError> {
    for (name, value) in tuning.weights() {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidWeight { name, value });
        }
    }
    for (name, value) in [
        ("intent.off_hours_before", tuning.off_hours_before),
        ("intent.off_hours_after", tuning.off_hours_after),
    ] {
        if value > 23 {
            return Err(ValidationError::InvalidHour { name, value });
        }
    }
    Ok(())
}

fn validate_tax(tax: &TaxPolicy) -> Result<(), ValidationError> {
    if tax.rot_annual_cap > tax.combined_annual_cap {
        return Err(ValidationError::InconsistentCaps {
            rot: tax.rot_annual_cap,
            combined: tax.combined_annual_cap,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-wide
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "HEMSERVICE__ENVIRONMENT",
        "HEMSERVICE__ASSISTANT__MAIN_PHONE",
        "HEMSERVICE__ASSISTANT__CONTEXT_WINDOW",
        "HEMSERVICE__INTENT__PATTERN_WEIGHT",
        "HEMSERVICE__TAX__ROT_RATE",
        "HEMSERVICE__STORAGE__BACKEND",
        "HEMSERVICE__STORAGE__DIRECTORY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.assistant.context_window, 5);
        assert_eq!(config.intent, IntentTuning::default());
        assert_eq!(config.tax, TaxPolicy::default());
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_variables_override_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEMSERVICE__ENVIRONMENT", "production");
        env::set_var("HEMSERVICE__ASSISTANT__MAIN_PHONE", "08-555 000 00");
        env::set_var("HEMSERVICE__ASSISTANT__CONTEXT_WINDOW", "8");
        env::set_var("HEMSERVICE__INTENT__PATTERN_WEIGHT", "0.6");
        env::set_var("HEMSERVICE__TAX__ROT_RATE", "30");
        env::set_var("HEMSERVICE__STORAGE__BACKEND", "file");
        env::set_var("HEMSERVICE__STORAGE__DIRECTORY", "/var/lib/hemservice");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.assistant.main_phone, "08-555 000 00");
        assert_eq!(config.assistant.context_window, 8);
        assert_eq!(config.intent.pattern_weight, 0.6);
        assert_eq!(config.intent.urgency_boost, 0.3);
        assert_eq!(config.tax.rot_rate, Percentage::new(30));
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let config = AppConfig {
            intent: IntentTuning {
                urgency_boost: -0.1,
                ..IntentTuning::default()
            },
            ..AppConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidWeight {
                name: "urgency_boost",
                value: -0.1
            })
        );
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        let config = AppConfig {
            intent: IntentTuning {
                off_hours_after: 24,
                ..IntentTuning::default()
            },
            ..AppConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHour { value: 24, .. })
        ));
    }

    #[test]
    fn rot_cap_above_combined_cap_is_rejected() {
        let config = AppConfig {
            tax: TaxPolicy {
                rot_annual_cap: 90_000,
                ..TaxPolicy::default()
            },
            ..AppConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ValidationError::InconsistentCaps { .. })
        ));
    }
}
