//! Global warning mode.

use serde::{Deserialize, Serialize};

/// How the global policy decides for contacts without a guard override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningMode {
    /// Disable all warning prompts.
    Never,
    /// Confirm every message before sending.
    Always,
    /// Warn for new contacts and groups.
    #[default]
    Smart,
    /// Warn according to the individual custom flags.
    Custom,
}

impl std::fmt::Display for WarningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Never => "never",
            Self::Always => "always",
            Self::Smart => "smart",
            Self::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for WarningMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            "smart" => Ok(Self::Smart),
            "custom" => Ok(Self::Custom),
            other => Err(format!("Unknown warning mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("SMART".parse::<WarningMode>(), Ok(WarningMode::Smart));
        assert_eq!(" custom ".parse::<WarningMode>(), Ok(WarningMode::Custom));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("sometimes".parse::<WarningMode>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for mode in [
            WarningMode::Never,
            WarningMode::Always,
            WarningMode::Smart,
            WarningMode::Custom,
        ] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
    }

    #[test]
    fn default_is_smart() {
        assert_eq!(WarningMode::default(), WarningMode::Smart);
    }
}
