use anyhow::Context;
use us_core::ports::UserStatePort;
use us_core::user_state::UserIdentity;

use crate::repository::UserDataRepository;

/// Use case replacing the identity sub-record as a unit.
///
/// User id, display name, and email are applied together; a failed write
/// applies none of them.
pub struct UpdateUserInfo {
    repo: UserDataRepository,
}

impl UpdateUserInfo {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: UserIdentity) -> anyhow::Result<()> {
        self.repo
            .set_user_info(identity)
            .await
            .context("update user info")
    }
}
