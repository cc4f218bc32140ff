//! Dependency wiring
//!
//! Assembly only: construct infra adapters, wrap them in the domain-facing
//! repository, and hand everything to the runtime. No business decisions
//! are made here.

use std::sync::Arc;

use tracing::info;
use us_app::{AppStateRouter, UserDataRepository};
use us_core::ports::UserStatePort;
use us_infra::FilePreferenceStore;

use super::runtime::AppRuntime;
use crate::config::RuntimeConfig;

/// Errors during dependency wiring.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Preference store initialization failed: {0}")]
    PreferenceStoreInit(String),
}

/// Assemble the pipeline: preference store → repository → router and
/// projections, returned as one [`AppRuntime`] handle.
pub async fn bootstrap(config: &RuntimeConfig) -> Result<AppRuntime, WiringError> {
    let preferences_path = config.preferences_path();
    let store = FilePreferenceStore::open(&preferences_path)
        .await
        .map_err(|e| WiringError::PreferenceStoreInit(e.to_string()))?;

    let repository = UserDataRepository::new(Arc::new(store) as Arc<dyn UserStatePort>);
    let router = AppStateRouter::spawn(repository.observe());

    info!(path = %preferences_path.display(), "user-state pipeline assembled");
    Ok(AppRuntime::new(repository, router))
}
