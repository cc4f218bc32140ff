//! Hand-rolled in-memory store for unit tests.

use async_trait::async_trait;
use tokio::sync::watch;
use us_core::ports::{StorageError, UserStatePort, UserStateStream};
use us_core::user_state::{DarkThemeConfig, ThemeBrand, UserIdentity, UserState};

/// In-memory `UserStatePort` with the same replay-latest stream contract as
/// the durable store, minus the disk.
pub struct InMemoryUserStateStore {
    tx: watch::Sender<UserState>,
}

impl InMemoryUserStateStore {
    pub fn new(initial: UserState) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> UserState {
        self.tx.borrow().clone()
    }
}

impl Default for InMemoryUserStateStore {
    fn default() -> Self {
        Self::new(UserState::default())
    }
}

#[async_trait]
impl UserStatePort for InMemoryUserStateStore {
    fn observe(&self) -> UserStateStream {
        self.tx.subscribe()
    }

    async fn set_onboarding_complete(&self, complete: bool) -> Result<(), StorageError> {
        self.tx.send_modify(|state| state.onboarding_complete = complete);
        Ok(())
    }

    async fn set_authenticated(&self, authenticated: bool) -> Result<(), StorageError> {
        self.tx.send_modify(|state| state.authenticated = authenticated);
        Ok(())
    }

    async fn set_user_info(&self, identity: UserIdentity) -> Result<(), StorageError> {
        self.tx.send_modify(|state| state.identity = Some(identity));
        Ok(())
    }

    async fn set_theme_brand(&self, brand: ThemeBrand) -> Result<(), StorageError> {
        self.tx.send_modify(|state| state.theme_brand = brand);
        Ok(())
    }

    async fn set_dark_theme_config(&self, config: DarkThemeConfig) -> Result<(), StorageError> {
        self.tx.send_modify(|state| state.dark_theme_config = config);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.tx.send_replace(UserState::default());
        Ok(())
    }
}
