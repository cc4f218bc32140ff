//! # us-app
//!
//! Application layer for unistate: the domain-facing user-data repository,
//! thin single-operation use cases, per-screen view-state projections with
//! grace-period subscription management, and the app-state router.

pub mod projection;
pub mod repository;
pub mod router;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use projection::{
    home_projection, settings_projection, HomeViewState, SettingsViewState, StateProjection,
    ViewStateSubscription, DEFAULT_GRACE_PERIOD,
};
pub use repository::UserDataRepository;
pub use router::AppStateRouter;
