use anyhow::Context;
use us_core::ports::UserStatePort;
use us_core::user_state::DarkThemeConfig;

use crate::repository::UserDataRepository;

/// Use case selecting the dark-theme behavior.
pub struct SetDarkThemeConfig {
    repo: UserDataRepository,
}

impl SetDarkThemeConfig {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, config: DarkThemeConfig) -> anyhow::Result<()> {
        self.repo
            .set_dark_theme_config(config)
            .await
            .context("set dark theme config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryUserStateStore;
    use std::sync::Arc;
    use us_core::user_state::ThemeBrand;

    #[tokio::test]
    async fn test_execute_updates_only_the_dark_theme_config() {
        let store = Arc::new(InMemoryUserStateStore::default());
        let uc = SetDarkThemeConfig::new(UserDataRepository::new(store.clone()));

        uc.execute(DarkThemeConfig::Dark).await.unwrap();

        let state = store.current();
        assert_eq!(state.dark_theme_config, DarkThemeConfig::Dark);
        assert_eq!(state.theme_brand, ThemeBrand::Default);
    }
}
