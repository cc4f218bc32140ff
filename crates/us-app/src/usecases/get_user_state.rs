use us_core::ports::{UserStatePort, UserStateStream};

use crate::repository::UserDataRepository;

/// Use case returning the live user-state stream unmodified.
///
/// Exists so callers can depend on a named operation instead of the
/// repository type directly.
pub struct GetUserState {
    repo: UserDataRepository,
}

impl GetUserState {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> UserStateStream {
        self.repo.observe()
    }
}
