//! User-data repository
//!
//! The stable domain-facing contract over the preference store. It performs
//! no transformation; the indirection exists so a future alternate backing
//! store (e.g., remote-synced) can replace the file store without touching
//! any consumer.

use std::sync::Arc;

use async_trait::async_trait;
use us_core::ports::{StorageError, UserStatePort, UserStateStream};
use us_core::user_state::{DarkThemeConfig, ThemeBrand, UserIdentity, UserState};

/// Single source of truth for user state, as seen by use cases,
/// projections, and the router.
#[derive(Clone)]
pub struct UserDataRepository {
    store: Arc<dyn UserStatePort>,
}

impl UserDataRepository {
    pub fn new(store: Arc<dyn UserStatePort>) -> Self {
        Self { store }
    }

    /// Snapshot of the current aggregate.
    pub fn current(&self) -> UserState {
        self.store.observe().borrow().clone()
    }
}

#[async_trait]
impl UserStatePort for UserDataRepository {
    fn observe(&self) -> UserStateStream {
        self.store.observe()
    }

    async fn set_onboarding_complete(&self, complete: bool) -> Result<(), StorageError> {
        self.store.set_onboarding_complete(complete).await
    }

    async fn set_authenticated(&self, authenticated: bool) -> Result<(), StorageError> {
        self.store.set_authenticated(authenticated).await
    }

    async fn set_user_info(&self, identity: UserIdentity) -> Result<(), StorageError> {
        self.store.set_user_info(identity).await
    }

    async fn set_theme_brand(&self, brand: ThemeBrand) -> Result<(), StorageError> {
        self.store.set_theme_brand(brand).await
    }

    async fn set_dark_theme_config(&self, config: DarkThemeConfig) -> Result<(), StorageError> {
        self.store.set_dark_theme_config(config).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryUserStateStore;

    #[tokio::test]
    async fn delegates_mutations_to_the_store() {
        let store = Arc::new(InMemoryUserStateStore::default());
        let repo = UserDataRepository::new(store.clone());

        repo.set_onboarding_complete(true).await.unwrap();
        repo.set_theme_brand(ThemeBrand::Alternate).await.unwrap();

        let state = store.current();
        assert!(state.onboarding_complete);
        assert_eq!(state.theme_brand, ThemeBrand::Alternate);
    }

    #[tokio::test]
    async fn exposes_the_store_stream_unmodified() {
        let store = Arc::new(InMemoryUserStateStore::default());
        let repo = UserDataRepository::new(store.clone());

        let mut rx = repo.observe();
        assert_eq!(*rx.borrow(), UserState::default());

        store.set_authenticated(true).await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().authenticated);
    }
}
