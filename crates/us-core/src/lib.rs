//! # us-core
//!
//! Core domain models and port contracts for unistate.
//!
//! This crate contains the persisted `UserState` aggregate, the derived
//! `AppState` routing value, and the port traits implemented by the
//! infrastructure layer. It carries no infrastructure dependencies.

// Public module exports
pub mod app_state;
pub mod ports;
pub mod user_state;

// Re-export commonly used types at the crate root
pub use app_state::AppState;
pub use user_state::{DarkThemeConfig, ThemeBrand, UserIdentity, UserState};
