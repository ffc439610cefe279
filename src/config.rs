//! Game settings
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Command-line flags
//!
//! No files or environment variables are read.

use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ExploreOptions, DEFAULT_CAPACITY};
use crate::domain::Language;

/// Unified configuration for detective-quest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Narration language and menu keys (default: pt)
    pub language: Language,
    /// Maximum number of rooms recorded per session (default: 100)
    pub max_visits: usize,
    /// Colored terminal output (default: true)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_visits: DEFAULT_CAPACITY,
            color: true,
        }
    }
}

/// Overrides taken from the command line; `None` keeps the base value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub language: Option<Language>,
    pub max_visits: Option<usize>,
    pub no_color: bool,
}

impl Settings {
    /// Apply overrides onto self and validate the result.
    pub fn with_overrides(&self, overrides: &SettingsOverrides) -> Result<Self, ApplicationError> {
        let settings = Self {
            language: overrides.language.unwrap_or(self.language),
            max_visits: overrides.max_visits.unwrap_or(self.max_visits),
            color: self.color && !overrides.no_color,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_visits == 0 {
            return Err(ApplicationError::Config {
                message: "max_visits must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn explore_options(&self) -> ExploreOptions {
        ExploreOptions {
            language: self.language,
            max_visits: self.max_visits,
        }
    }

    /// Serialize the settings to TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
