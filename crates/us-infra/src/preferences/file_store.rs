//! File-backed preference store
//!
//! Durable, crash-surviving storage of the [`UserState`] aggregate behind a
//! live watch stream. The JSON document is the single durable record; every
//! mutation is a serialized read-modify-write committed with an atomic
//! tmp-file-then-rename before the stream advances.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};
use us_core::ports::{StorageError, UserStatePort, UserStateStream};
use us_core::user_state::{DarkThemeConfig, ThemeBrand, UserIdentity, UserState};

pub const DEFAULT_PREFERENCES_FILE: &str = "user_state.json";

/// Durable store and sole writer of persisted user state.
///
/// All mutation entry points funnel through one critical section, so two
/// concurrent field-scoped writes can never interleave their
/// read-modify-write cycles and clobber each other's fields.
pub struct FilePreferenceStore {
    path: PathBuf,
    state_tx: watch::Sender<UserState>,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Open the store at the given file path, seeding the live stream with
    /// the decoded current value.
    ///
    /// A missing or empty file materializes the default aggregate. An
    /// undecodable file fails open to defaults (logged) rather than
    /// producing a dead stream. Other I/O failures are surfaced.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let initial = load_or_default(&path).await?;
        let (state_tx, _) = watch::channel(initial);

        Ok(Self {
            path,
            state_tx,
            write_lock: Mutex::new(()),
        })
    }

    /// Open the store under a base directory using the default file name.
    pub async fn open_in(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open(base_dir.as_ref().join(DEFAULT_PREFERENCES_FILE)).await
    }

    /// One serialized read-modify-write cycle: apply `mutate` to a copy of
    /// the current aggregate, commit it durably, then advance the stream.
    /// On failure the stream stays on the last committed value.
    async fn update(&self, mutate: impl FnOnce(&mut UserState)) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut next = self.state_tx.borrow().clone();
        mutate(&mut next);

        self.persist(&next).await?;
        self.state_tx.send_replace(next);
        Ok(())
    }

    async fn persist(&self, state: &UserState) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(state)?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        // Write-then-rename so the target is always either the previous
        // document or the fully written new one.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .map_err(|source| StorageError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), "committed user state");
        Ok(())
    }
}

async fn load_or_default(path: &Path) -> Result<UserState, StorageError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(UserState::default());
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(UserState::default());
    }

    match serde_json::from_str(&content) {
        Ok(state) => Ok(state),
        Err(err) => {
            // Corrupt or drifted document: downstream navigation and UI
            // depend on always having a value, so substitute defaults
            // instead of refusing to start.
            warn!(
                path = %path.display(),
                error = %err,
                "stored user state is undecodable, falling back to defaults"
            );
            Ok(UserState::default())
        }
    }
}

#[async_trait]
impl UserStatePort for FilePreferenceStore {
    fn observe(&self) -> UserStateStream {
        self.state_tx.subscribe()
    }

    async fn set_onboarding_complete(&self, complete: bool) -> Result<(), StorageError> {
        self.update(|state| state.onboarding_complete = complete).await
    }

    async fn set_authenticated(&self, authenticated: bool) -> Result<(), StorageError> {
        self.update(|state| state.authenticated = authenticated).await
    }

    async fn set_user_info(&self, identity: UserIdentity) -> Result<(), StorageError> {
        self.update(|state| state.identity = Some(identity)).await
    }

    async fn set_theme_brand(&self, brand: ThemeBrand) -> Result<(), StorageError> {
        self.update(|state| state.theme_brand = brand).await
    }

    async fn set_dark_theme_config(&self, config: DarkThemeConfig) -> Result<(), StorageError> {
        self.update(|state| state.dark_theme_config = config).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.update(|state| *state = UserState::default()).await
    }
}
