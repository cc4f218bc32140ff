//! View-state projections
//!
//! Each screen consumes the shared user-state stream through a
//! [`StateProjection`]: a pure mapping function plus an explicit
//! reference-counted subscription lifecycle. The upstream subscription is
//! started when the first observer attaches and torn down only after a
//! grace period once the last observer detaches, so a brief navigate
//! away-and-back resumes from the cached value instead of re-showing
//! `Loading`.

mod home;
mod settings;

pub use home::{home_projection, project_home, HomeViewState};
pub use settings::{project_settings, settings_projection, SettingsViewState};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use us_core::ports::UserStatePort;
use us_core::user_state::UserState;

/// Delay between the last observer detaching and the upstream subscription
/// actually being torn down.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// A per-screen derivation of the shared user-state stream.
///
/// The projection owns no state of its own: its output is always the seed
/// value (the screen's `Loading` variant) or a pure function of the latest
/// `UserState` emission.
pub struct StateProjection<T: Clone + Send + Sync + 'static> {
    inner: Arc<ProjectionInner<T>>,
}

impl<T: Clone + Send + Sync + 'static> Clone for StateProjection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ProjectionInner<T: Clone + Send + Sync + 'static> {
    source: Arc<dyn UserStatePort>,
    map: Arc<dyn Fn(&UserState) -> T + Send + Sync>,
    loading: T,
    grace_period: Duration,
    lifecycle: Mutex<Lifecycle<T>>,
}

struct Lifecycle<T> {
    observers: usize,
    /// Bumped on every attach and last-detach; a pending teardown only
    /// fires if the epoch it captured is still current.
    epoch: u64,
    upstream: Option<Upstream<T>>,
}

struct Upstream<T> {
    view_tx: watch::Sender<T>,
    driver: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> StateProjection<T> {
    pub fn new(
        source: Arc<dyn UserStatePort>,
        loading: T,
        map: impl Fn(&UserState) -> T + Send + Sync + 'static,
    ) -> Self {
        Self::with_grace_period(source, loading, map, DEFAULT_GRACE_PERIOD)
    }

    pub fn with_grace_period(
        source: Arc<dyn UserStatePort>,
        loading: T,
        map: impl Fn(&UserState) -> T + Send + Sync + 'static,
        grace_period: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(ProjectionInner {
                source,
                map: Arc::new(map),
                loading,
                grace_period,
                lifecycle: Mutex::new(Lifecycle {
                    observers: 0,
                    epoch: 0,
                    upstream: None,
                }),
            }),
        }
    }

    /// Attach an observer.
    ///
    /// The first observer starts the upstream subscription and sees
    /// `Loading` until the first emission is mapped. A re-attach while the
    /// upstream is still alive (within the grace window) replays the cached
    /// last value immediately.
    pub fn subscribe(&self) -> ViewStateSubscription<T> {
        let mut lifecycle = self.inner.lifecycle.lock().unwrap();
        lifecycle.observers += 1;
        lifecycle.epoch += 1;

        let rx = match &lifecycle.upstream {
            Some(upstream) => upstream.view_tx.subscribe(),
            None => {
                let (view_tx, view_rx) = watch::channel(self.inner.loading.clone());
                let driver = self.spawn_driver(view_tx.clone());
                lifecycle.upstream = Some(Upstream { view_tx, driver });
                view_rx
            }
        };

        ViewStateSubscription {
            rx,
            _guard: ObserverGuard {
                inner: Arc::clone(&self.inner),
            },
        }
    }

    /// Number of currently attached observers.
    pub fn observer_count(&self) -> usize {
        self.inner.lifecycle.lock().unwrap().observers
    }

    fn spawn_driver(&self, view_tx: watch::Sender<T>) -> JoinHandle<()> {
        let mut source_rx = self.inner.source.observe();
        let map = Arc::clone(&self.inner.map);

        tokio::spawn(async move {
            loop {
                let view = {
                    let state = source_rx.borrow_and_update();
                    (map.as_ref())(&state)
                };
                // send_replace caches the value even with zero receivers
                // attached, so emissions landing inside the grace window
                // still reach a later reattach. The driver stops only when
                // the source closes or the teardown timer aborts it.
                view_tx.send_replace(view);
                if source_rx.changed().await.is_err() {
                    break;
                }
            }
        })
    }
}

/// One observer's handle on a projection.
///
/// Dropping the handle detaches the observer; the upstream subscription
/// survives until the grace period elapses with no observers attached.
pub struct ViewStateSubscription<T: Clone + Send + Sync + 'static> {
    rx: watch::Receiver<T>,
    _guard: ObserverGuard<T>,
}

impl<T: Clone + Send + Sync + 'static> ViewStateSubscription<T> {
    /// Latest value without waiting.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next emission.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }

    /// Wait until the view state satisfies `accept`, returning it.
    pub async fn wait_for(
        &mut self,
        accept: impl FnMut(&T) -> bool,
    ) -> Result<T, watch::error::RecvError> {
        self.rx.wait_for(accept).await.map(|value| (*value).clone())
    }
}

struct ObserverGuard<T: Clone + Send + Sync + 'static> {
    inner: Arc<ProjectionInner<T>>,
}

impl<T: Clone + Send + Sync + 'static> Drop for ObserverGuard<T> {
    fn drop(&mut self) {
        let mut lifecycle = self.inner.lifecycle.lock().unwrap();
        lifecycle.observers -= 1;
        if lifecycle.observers > 0 {
            return;
        }

        lifecycle.epoch += 1;
        let armed_epoch = lifecycle.epoch;
        drop(lifecycle);

        let inner = Arc::clone(&self.inner);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(inner.grace_period).await;
                    teardown_if_idle(&inner, armed_epoch);
                });
            }
            // No runtime left to time the grace period; tear down now.
            Err(_) => teardown_if_idle(&inner, armed_epoch),
        }
    }
}

fn teardown_if_idle<T: Clone + Send + Sync + 'static>(
    inner: &ProjectionInner<T>,
    armed_epoch: u64,
) {
    let mut lifecycle = inner.lifecycle.lock().unwrap();
    if lifecycle.observers == 0 && lifecycle.epoch == armed_epoch {
        if let Some(upstream) = lifecycle.upstream.take() {
            upstream.driver.abort();
            debug!("view-state upstream torn down after grace period");
        }
    }
}
