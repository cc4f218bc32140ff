//! Runtime configuration
//!
//! Pure data resolution: where the durable preference document lives.
//! No validation or business rules here.

use std::path::PathBuf;

use anyhow::Context;
use us_infra::preferences::DEFAULT_PREFERENCES_FILE;

pub const APP_DIR_NAME: &str = "unistate";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
}

impl RuntimeConfig {
    /// Resolve the platform data directory for this app.
    pub fn resolve() -> anyhow::Result<Self> {
        let base = dirs::data_dir().context("no platform data directory available")?;
        Ok(Self {
            data_dir: base.join(APP_DIR_NAME),
        })
    }

    /// Use an explicit data directory (tests, embedders).
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the durable preference document.
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_PREFERENCES_FILE)
    }
}
