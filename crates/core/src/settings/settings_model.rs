//! Application settings models.
//!
//! Settings live behind an explicit persistence adapter
//! (`SettingsRepositoryTrait`) instead of ambient browser storage; clients
//! read the settings object and apply it themselves.

use serde::{Deserialize, Serialize};

/// Application-level settings shared by every client of this instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Display font size preference: "sm", "md" or "lg".
    pub font_size: String,
    pub theme: String,
    pub instance_id: String,
    pub onboarding_completed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_size: "md".to_string(),
            theme: "light".to_string(),
            instance_id: String::new(),
            onboarding_completed: false,
        }
    }
}

/// Partial settings update; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub font_size: Option<String>,
    pub theme: Option<String>,
    pub onboarding_completed: Option<bool>,
}
