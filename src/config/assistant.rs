//! Assistant configuration: company contact details and session limits

use serde::Deserialize;

use super::error::ValidationError;

/// Company details surfaced in replies, plus per-session limits
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Main phone number offered in fallbacks and handoff
    #[serde(default = "default_main_phone")]
    pub main_phone: String,

    /// Around-the-clock number surfaced for emergencies
    #[serde(default = "default_emergency_phone")]
    pub emergency_phone: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_whatsapp_url")]
    pub whatsapp_url: String,

    /// Human-readable response time promise
    #[serde(default = "default_response_time")]
    pub response_time: String,

    /// Messages scanned when building the turn context
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    /// Messages kept in the persisted session blob
    #[serde(default = "default_persisted_messages")]
    pub persisted_messages: usize,

    /// Prefix of the session-scoped storage key
    #[serde(default = "default_storage_key_prefix")]
    pub storage_key_prefix: String,

    /// Longest accepted user message, in characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

impl AssistantConfig {
    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.main_phone.trim().is_empty() {
            return Err(ValidationError::MissingRequired("assistant.main_phone"));
        }
        if self.emergency_phone.trim().is_empty() {
            return Err(ValidationError::MissingRequired("assistant.emergency_phone"));
        }
        if self.storage_key_prefix.is_empty() {
            return Err(ValidationError::MissingRequired("assistant.storage_key_prefix"));
        }
        if self.context_window == 0 {
            return Err(ValidationError::ZeroWindow("assistant.context_window"));
        }
        if self.persisted_messages == 0 {
            return Err(ValidationError::ZeroWindow("assistant.persisted_messages"));
        }
        if self.max_message_length == 0 {
            return Err(ValidationError::ZeroWindow("assistant.max_message_length"));
        }
        Ok(())
    }

    /// Storage key for one session
    pub fn storage_key(&self, session: impl std::fmt::Display) -> String {
        format!("{}:{}", self.storage_key_prefix, session)
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            main_phone: default_main_phone(),
            emergency_phone: default_emergency_phone(),
            email: default_email(),
            whatsapp_url: default_whatsapp_url(),
            response_time: default_response_time(),
            context_window: default_context_window(),
            persisted_messages: default_persisted_messages(),
            storage_key_prefix: default_storage_key_prefix(),
            max_message_length: default_max_message_length(),
        }
    }
}

fn default_company_name() -> String {
    "Hemservice".to_string()
}

fn default_main_phone() -> String {
    "08-123 456 78".to_string()
}

fn default_emergency_phone() -> String {
    "070-123 45 67".to_string()
}

fn default_email() -> String {
    "info@hemservice.se".to_string()
}

fn default_whatsapp_url() -> String {
    "https://wa.me/46701234567".to_string()
}

fn default_response_time() -> String {
    "inom 2 timmar på vardagar".to_string()
}

fn default_context_window() -> usize {
    5
}

fn default_persisted_messages() -> usize {
    10
}

fn default_storage_key_prefix() -> String {
    "hemservice-chat".to_string()
}

fn default_max_message_length() -> usize {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AssistantConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.context_window, 5);
        assert_eq!(config.persisted_messages, 10);
    }

    #[test]
    fn empty_phone_is_rejected() {
        let config = AssistantConfig {
            main_phone: "  ".to_string(),
            ..AssistantConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("assistant.main_phone"))
        );
    }

    #[test]
    fn zero_window_is_rejected() {
        let config = AssistantConfig {
            context_window: 0,
            ..AssistantConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ZeroWindow("assistant.context_window"))
        );
    }

    #[test]
    fn storage_key_is_prefixed() {
        let config = AssistantConfig::default();
        assert_eq!(config.storage_key("abc"), "hemservice-chat:abc");
    }
}
