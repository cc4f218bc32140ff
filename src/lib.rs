//! # unistate
//!
//! Composition shell for the user-state synchronization pipeline.
//!
//! The pipeline is a single source of truth for persisted user state: a
//! durable, file-backed preference store exposed as a live stream, thin
//! named use cases over it, per-screen view-state projections with
//! grace-period subscription management, and an app-state router deriving
//! the top-level flow (onboarding vs. main) from the same stream.
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! let config = unistate::RuntimeConfig::resolve()?;
//! let runtime = unistate::bootstrap(&config).await?;
//!
//! runtime.usecases().complete_onboarding().execute().await?;
//! let state = runtime.router().current();
//! # let _ = state;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;

pub use bootstrap::{bootstrap, init_tracing, AppRuntime, UseCases, WiringError};
pub use config::RuntimeConfig;

// Re-export the layer crates for embedders that need the full surface.
pub use us_app;
pub use us_core;
pub use us_infra;
