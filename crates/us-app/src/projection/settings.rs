use std::sync::Arc;

use us_core::ports::UserStatePort;
use us_core::user_state::{DarkThemeConfig, ThemeBrand, UserState};

use super::StateProjection;

/// Display state for the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsViewState {
    Loading,
    Success {
        theme_brand: ThemeBrand,
        dark_theme_config: DarkThemeConfig,
    },
}

/// Pure mapping from the aggregate to the settings screen's display state.
pub fn project_settings(state: &UserState) -> SettingsViewState {
    SettingsViewState::Success {
        theme_brand: state.theme_brand,
        dark_theme_config: state.dark_theme_config,
    }
}

/// Settings-screen projection over the shared stream, with the default
/// grace period.
pub fn settings_projection(source: Arc<dyn UserStatePort>) -> StateProjection<SettingsViewState> {
    StateProjection::new(source, SettingsViewState::Loading, project_settings)
}
