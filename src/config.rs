//! Configuration types.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::policy::WarningMode;

/// Global warning settings, edited from the settings tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardSettings {
    /// Master switch for confirmation dialogs.
    pub warnings_enabled: bool,
    /// Which policy applies to contacts without a guard override.
    pub warning_mode: WarningMode,
    /// Custom mode: warn before the first message to a new contact.
    pub new_contact_warning: bool,
    /// Custom mode: warn when a contact's name looks like another's.
    /// Stored and editable, but not consulted by the evaluator.
    pub similar_name_warning: bool,
    /// Custom mode: always warn for group chats.
    pub group_warning: bool,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            warnings_enabled: true,
            warning_mode: WarningMode::Smart,
            new_contact_warning: true,
            similar_name_warning: true,
            group_warning: true,
        }
    }
}

impl GuardSettings {
    /// Build settings from `CHAT_GUARD_*` environment variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let warning_mode = match lookup("CHAT_GUARD_WARNING_MODE") {
            Some(raw) => raw
                .parse::<WarningMode>()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "CHAT_GUARD_WARNING_MODE".into(),
                    message,
                })?,
            None => defaults.warning_mode,
        };

        Ok(Self {
            warnings_enabled: flag(
                &lookup,
                "CHAT_GUARD_WARNINGS_ENABLED",
                defaults.warnings_enabled,
            )?,
            warning_mode,
            new_contact_warning: flag(
                &lookup,
                "CHAT_GUARD_WARN_NEW_CONTACT",
                defaults.new_contact_warning,
            )?,
            similar_name_warning: flag(
                &lookup,
                "CHAT_GUARD_WARN_SIMILAR_NAME",
                defaults.similar_name_warning,
            )?,
            group_warning: flag(&lookup, "CHAT_GUARD_WARN_GROUP", defaults.group_warning)?,
        })
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got {:?}", other),
        }),
    }
}
