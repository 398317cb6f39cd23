use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::feature_flags::FeatureFlags;
use crate::models::UnknownRolePolicy;

/// Number of "Up Next" items on the student dashboard.
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// `[session]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub unknown_role: UnknownRolePolicy,
    /// Initial value of the theme flag when the app starts.
    #[serde(default)]
    pub dark_by_default: bool,
}

/// `[dashboard]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

fn default_upcoming_limit() -> usize {
    DEFAULT_UPCOMING_LIMIT
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Parse a `config.toml` document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse `contents`, falling back to defaults (all features off, unknown
    /// roles rejected) when it is malformed.
    pub fn load_or_default(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => {
                tracing::info!(?config, "portal config loaded");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "config.toml unparseable, using defaults");
                Self::default()
            }
        }
    }
}
