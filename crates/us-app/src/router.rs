//! App-state router
//!
//! Derives the coarse top-level flow decision from the shared user-state
//! stream, independent of any screen. The router observes for the process
//! lifetime, so a logout-driven `clear()` correctly moves the flow back to
//! onboarding.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use us_core::app_state::AppState;
use us_core::ports::UserStateStream;

pub struct AppStateRouter {
    state_rx: watch::Receiver<AppState>,
    driver: JoinHandle<()>,
}

impl AppStateRouter {
    /// Start routing over the given stream.
    ///
    /// The routed state starts at `Uninitialized` and is recomputed from
    /// every emission; duplicate recomputations are not re-notified.
    pub fn spawn(mut source: UserStateStream) -> Self {
        let (state_tx, state_rx) = watch::channel(AppState::Uninitialized);

        let driver = tokio::spawn(async move {
            loop {
                let next = {
                    let state = source.borrow_and_update();
                    AppState::from_user_state(&state)
                };
                state_tx.send_if_modified(|current| {
                    if *current == next {
                        return false;
                    }
                    debug!(from = ?current, to = ?next, "app state transition");
                    *current = next;
                    true
                });
                if source.changed().await.is_err() {
                    break;
                }
            }
        });

        Self { state_rx, driver }
    }

    /// Current flow decision.
    pub fn current(&self) -> AppState {
        *self.state_rx.borrow()
    }

    /// Subscribe to flow decisions; the receiver replays the current one.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_rx.clone()
    }
}

impl Drop for AppStateRouter {
    fn drop(&mut self) {
        self.driver.abort();
    }
}
