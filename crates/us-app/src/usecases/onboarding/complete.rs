use anyhow::Context;
use us_core::ports::UserStatePort;

use crate::repository::UserDataRepository;

/// Use case for completing onboarding.
///
/// Marks onboarding as complete in the persisted state and nothing else.
pub struct CompleteOnboarding {
    repo: UserDataRepository,
}

impl CompleteOnboarding {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.repo
            .set_onboarding_complete(true)
            .await
            .context("complete onboarding")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryUserStateStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_marks_onboarding_as_complete() {
        let store = Arc::new(InMemoryUserStateStore::default());
        let uc = CompleteOnboarding::new(UserDataRepository::new(store.clone()));

        assert!(!store.current().onboarding_complete);

        uc.execute().await.unwrap();

        assert!(store.current().onboarding_complete);
    }

    #[tokio::test]
    async fn test_execute_preserves_other_fields() {
        let store = Arc::new(InMemoryUserStateStore::default());
        store.set_authenticated(true).await.unwrap();

        let uc = CompleteOnboarding::new(UserDataRepository::new(store.clone()));
        uc.execute().await.unwrap();

        let state = store.current();
        assert!(state.onboarding_complete);
        assert!(state.authenticated);
    }

    #[tokio::test]
    async fn test_execute_when_already_completed() {
        let store = Arc::new(InMemoryUserStateStore::default());
        store.set_onboarding_complete(true).await.unwrap();

        let uc = CompleteOnboarding::new(UserDataRepository::new(store.clone()));
        uc.execute().await.unwrap();

        assert!(store.current().onboarding_complete);
    }
}
