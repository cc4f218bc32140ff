//! Application runtime and use-case accessor
//!
//! `AppRuntime` holds the wired pipeline; `UseCases` is a factory returning
//! use-case instances with their dependencies pre-wired, so embedding code
//! can write `runtime.usecases().complete_onboarding().execute().await`.

use std::sync::Arc;

use us_app::projection::{
    home_projection, settings_projection, HomeViewState, SettingsViewState, StateProjection,
};
use us_app::usecases::{
    CompleteOnboarding, GetUserState, SetAuthenticated, SetDarkThemeConfig, SetThemeBrand,
    SignOut, UpdateUserInfo,
};
use us_app::{AppStateRouter, UserDataRepository};
use us_core::ports::UserStatePort;

/// Handle over the assembled user-state pipeline.
pub struct AppRuntime {
    repository: UserDataRepository,
    router: AppStateRouter,
    home: StateProjection<HomeViewState>,
    settings: StateProjection<SettingsViewState>,
}

impl AppRuntime {
    pub(crate) fn new(repository: UserDataRepository, router: AppStateRouter) -> Self {
        let source = Arc::new(repository.clone()) as Arc<dyn UserStatePort>;
        let home = home_projection(Arc::clone(&source));
        let settings = settings_projection(source);

        Self {
            repository,
            router,
            home,
            settings,
        }
    }

    /// The domain-facing single source of truth.
    pub fn repository(&self) -> &UserDataRepository {
        &self.repository
    }

    /// The top-level flow router.
    pub fn router(&self) -> &AppStateRouter {
        &self.router
    }

    /// Shared home-screen projection. Clones share one upstream
    /// subscription and one grace-period lifecycle.
    pub fn home_view(&self) -> StateProjection<HomeViewState> {
        self.home.clone()
    }

    /// Shared settings-screen projection.
    pub fn settings_view(&self) -> StateProjection<SettingsViewState> {
        self.settings.clone()
    }

    /// Use-case accessor with dependencies pre-wired.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }
}

/// Factory for use-case instances.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn get_user_state(&self) -> GetUserState {
        GetUserState::new(self.runtime.repository.clone())
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::new(self.runtime.repository.clone())
    }

    pub fn set_authenticated(&self) -> SetAuthenticated {
        SetAuthenticated::new(self.runtime.repository.clone())
    }

    pub fn update_user_info(&self) -> UpdateUserInfo {
        UpdateUserInfo::new(self.runtime.repository.clone())
    }

    pub fn set_theme_brand(&self) -> SetThemeBrand {
        SetThemeBrand::new(self.runtime.repository.clone())
    }

    pub fn set_dark_theme_config(&self) -> SetDarkThemeConfig {
        SetDarkThemeConfig::new(self.runtime.repository.clone())
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.runtime.repository.clone())
    }
}
