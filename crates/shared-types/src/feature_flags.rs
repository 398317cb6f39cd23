use serde::{Deserialize, Serialize};

/// Feature flags controlling optional shell chrome.
///
/// Loaded from the `[features]` table of `config.toml`. Every field defaults
/// to `false` so that a missing or incomplete config disables all optional
/// chrome. Flags never affect the route table or the sidebar menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Mount the global assistant overlay.
    #[serde(default)]
    pub assistant: bool,
    /// Show the notification bell in the topbar.
    #[serde(default)]
    pub notifications: bool,
}
