use anyhow::Context;
use us_core::ports::UserStatePort;

use crate::repository::UserDataRepository;

/// Use case for logging out: resets the whole aggregate to defaults in one
/// observable transition, which also drives the router back to onboarding.
pub struct SignOut {
    repo: UserDataRepository,
}

impl SignOut {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.repo.clear().await.context("sign out")
    }
}
