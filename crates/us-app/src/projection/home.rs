use std::sync::Arc;

use us_core::ports::UserStatePort;
use us_core::user_state::UserState;

use super::StateProjection;

/// Display state for the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeViewState {
    Loading,
    Success { user_name: Option<String> },
}

/// Pure mapping from the aggregate to the home screen's display state.
pub fn project_home(state: &UserState) -> HomeViewState {
    HomeViewState::Success {
        user_name: state.user_name().map(str::to_owned),
    }
}

/// Home-screen projection over the shared stream, with the default grace
/// period.
pub fn home_projection(source: Arc<dyn UserStatePort>) -> StateProjection<HomeViewState> {
    StateProjection::new(source, HomeViewState::Loading, project_home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use us_core::user_state::UserIdentity;

    #[test]
    fn maps_identity_to_user_name() {
        let mut state = UserState::default();
        assert_eq!(
            project_home(&state),
            HomeViewState::Success { user_name: None }
        );

        state.identity = Some(UserIdentity {
            user_id: "u1".into(),
            user_name: "Ann".into(),
            email: "a@x.com".into(),
        });
        assert_eq!(
            project_home(&state),
            HomeViewState::Success {
                user_name: Some("Ann".into())
            }
        );
    }
}
