//! Top-level application flow state
//!
//! The router value derived from the user-state stream: which coarse flow
//! (splash, onboarding, main) the shell should mount.

use crate::user_state::UserState;

/// Coarse navigation decision derived from [`UserState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// No user state observed yet; the shell shows a splash/loading surface.
    #[default]
    Uninitialized,
    /// Onboarding has not been completed.
    NeedsOnboarding,
    /// Onboarding is complete. `authenticated` is carried for screens to
    /// consume; it does not gate the top-level flow.
    Ready { authenticated: bool },
}

impl AppState {
    /// Recompute the flow decision from one user-state emission.
    ///
    /// Flow selection reads `onboarding_complete` only. Returning to
    /// `NeedsOnboarding` after completion happens solely through a full
    /// state reset (logout), never through ordinary navigation.
    pub fn from_user_state(state: &UserState) -> Self {
        if state.onboarding_complete {
            AppState::Ready {
                authenticated: state.authenticated,
            }
        } else {
            AppState::NeedsOnboarding
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_uninitialized() {
        assert_eq!(AppState::default(), AppState::Uninitialized);
    }

    #[test]
    fn incomplete_onboarding_selects_onboarding_flow() {
        let state = UserState::default();
        assert_eq!(AppState::from_user_state(&state), AppState::NeedsOnboarding);
    }

    #[test]
    fn completed_onboarding_selects_main_flow() {
        let mut state = UserState::default();
        state.onboarding_complete = true;

        assert_eq!(
            AppState::from_user_state(&state),
            AppState::Ready {
                authenticated: false
            }
        );
    }

    #[test]
    fn authentication_is_carried_but_does_not_gate_the_flow() {
        let mut state = UserState::default();
        state.authenticated = true;

        // Still the onboarding flow: only onboarding_complete selects.
        assert_eq!(AppState::from_user_state(&state), AppState::NeedsOnboarding);

        state.onboarding_complete = true;
        assert_eq!(
            AppState::from_user_state(&state),
            AppState::Ready {
                authenticated: true
            }
        );
    }
}
