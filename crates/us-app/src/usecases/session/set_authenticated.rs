use anyhow::Context;
use us_core::ports::UserStatePort;

use crate::repository::UserDataRepository;

/// Use case flipping the session authentication flag.
pub struct SetAuthenticated {
    repo: UserDataRepository,
}

impl SetAuthenticated {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, authenticated: bool) -> anyhow::Result<()> {
        self.repo
            .set_authenticated(authenticated)
            .await
            .context("set authenticated flag")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryUserStateStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_updates_only_the_auth_flag() {
        let store = Arc::new(InMemoryUserStateStore::default());
        let uc = SetAuthenticated::new(UserDataRepository::new(store.clone()));

        uc.execute(true).await.unwrap();

        let state = store.current();
        assert!(state.authenticated);
        assert!(!state.onboarding_complete);
        assert!(state.identity.is_none());
    }
}
