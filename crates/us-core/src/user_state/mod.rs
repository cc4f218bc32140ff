//! User-state domain model
//!
//! The single persisted aggregate: onboarding progress, session flag,
//! optional identity, and theme preferences. Every field has a defined
//! default so a read never produces a partial value, and older stored
//! documents decode into fully-populated state via `#[serde(default)]`.

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// The identity fields set together when a user signs in.
///
/// Modeled as one sub-record so that user id, display name, and email are
/// always all present or all absent; they cannot drift apart through
/// field-by-field mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeBrand {
    #[default]
    Default,
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DarkThemeConfig {
    #[default]
    FollowSystem,
    Light,
    Dark,
}

/// The persisted user-state aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub onboarding_complete: bool,

    #[serde(default)]
    pub authenticated: bool,

    #[serde(default)]
    pub identity: Option<UserIdentity>,

    #[serde(default)]
    pub theme_brand: ThemeBrand,

    #[serde(default)]
    pub dark_theme_config: DarkThemeConfig,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            onboarding_complete: false,
            authenticated: false,
            identity: None,
            theme_brand: ThemeBrand::default(),
            dark_theme_config: DarkThemeConfig::default(),
        }
    }
}

impl UserState {
    /// Display name of the signed-in user, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.user_name.as_str())
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
