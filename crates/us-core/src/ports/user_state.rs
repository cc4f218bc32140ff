//! User-state store port
//!
//! The single source of truth for persisted user state. Implementations are
//! provided by the infrastructure layer (e.g., a file-backed store).

use async_trait::async_trait;
use tokio::sync::watch;

use crate::ports::errors::StorageError;
use crate::user_state::{DarkThemeConfig, ThemeBrand, UserIdentity, UserState};

/// Live stream of the current aggregate.
///
/// A watch receiver replays the latest committed value to every new
/// subscriber and pushes the full aggregate after each committed mutation.
/// Dropping one receiver never affects other subscribers.
pub type UserStateStream = watch::Receiver<UserState>;

#[async_trait]
pub trait UserStatePort: Send + Sync {
    /// Subscribe to the live stream. The receiver carries a decoded value
    /// immediately; an empty backing store surfaces as the default
    /// aggregate, never as an absent or partial one.
    fn observe(&self) -> UserStateStream;

    /// Atomically update exactly the onboarding flag.
    async fn set_onboarding_complete(&self, complete: bool) -> Result<(), StorageError>;

    /// Atomically update exactly the authentication flag.
    async fn set_authenticated(&self, authenticated: bool) -> Result<(), StorageError>;

    /// Atomically replace the identity sub-record as a unit.
    async fn set_user_info(&self, identity: UserIdentity) -> Result<(), StorageError>;

    /// Atomically update exactly the theme brand.
    async fn set_theme_brand(&self, brand: ThemeBrand) -> Result<(), StorageError>;

    /// Atomically update exactly the dark-theme configuration.
    async fn set_dark_theme_config(&self, config: DarkThemeConfig) -> Result<(), StorageError>;

    /// Reset the entire aggregate to defaults in one observable transition.
    /// Used on logout.
    async fn clear(&self) -> Result<(), StorageError>;
}
