//! Use cases
//!
//! Narrow, named, single-operation wrappers over the repository. Each use
//! case is one struct with one async `execute`; no validation or derived
//! computation lives here, and errors propagate unchanged from the store.

mod get_user_state;
pub mod onboarding;
pub mod session;
pub mod theme;

pub use get_user_state::GetUserState;
pub use onboarding::CompleteOnboarding;
pub use session::{SetAuthenticated, SignOut, UpdateUserInfo};
pub use theme::{SetDarkThemeConfig, SetThemeBrand};
