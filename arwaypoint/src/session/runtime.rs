//! Event runtime for the waypoint session.
//!
//! Wires a [`LocationProvider`] to the session reducer over a single
//! mpsc channel and publishes state snapshots over a watch channel.
//! All state mutation happens on one task; observers only ever see
//! cloned snapshots.
//!
//! ```text
//! LocationProvider ──┐
//! user input ────────┼──► mpsc ──► reducer task ──► watch snapshots
//! AR tracking ───────┘
//! ```
//!
//! The fix request is issued once when the runtime starts and cannot
//! be cancelled; dropping the runtime mid-request is not guarded
//! against, matching the one-shot platform call it models.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::ar::TrackingState;
use crate::location::{FixOptions, LocationProvider};

use super::model::{SessionConfig, SessionEvent, SessionState};
use super::reducer::Session;

/// Handle for interacting with a running session.
///
/// Cheap to clone. Events injected here are applied by the reducer
/// task in arrival order.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<SessionEvent>,
    state: watch::Receiver<SessionState>,
}

impl SessionHandle {
    /// Inject a user request to enter the AR view.
    pub fn request_ar(&self) {
        self.send(SessionEvent::ArRequested);
    }

    /// Inject an AR tracking-quality signal.
    pub fn tracking_changed(&self, tracking: TrackingState) {
        self.send(SessionEvent::TrackingChanged(tracking));
    }

    /// Inject a raw session event.
    pub fn send(&self, event: SessionEvent) {
        // A closed channel means the reducer task is gone; there is
        // nobody left to observe the event.
        if self.events.send(event).is_err() {
            debug!("Session reducer has shut down; dropping event");
        }
    }

    /// A snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// A watch receiver for observing state changes.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }
}

/// A running waypoint session: reducer task plus the one-shot fix task.
#[derive(Debug)]
pub struct SessionRuntime {
    handle: SessionHandle,
}

impl SessionRuntime {
    /// Start a session on the current tokio runtime.
    ///
    /// Issues the one-shot fix request immediately and spawns the
    /// reducer task. The returned runtime's [`handle`](Self::handle)
    /// is the only way to interact with the session.
    pub fn start(
        config: SessionConfig,
        provider: Arc<dyn LocationProvider>,
        fix_options: FixOptions,
    ) -> Self {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<SessionEvent>();
        let mut session = Session::new(config);
        let (state_tx, state_rx) = watch::channel(session.state().clone());

        // One-shot fix task: fires exactly once, no retry.
        let fix_events = event_tx.clone();
        tokio::spawn(async move {
            let result = provider.request_fix(&fix_options).await;
            let event = match result {
                Ok(fix) => SessionEvent::FixAcquired(fix.coordinate),
                Err(error) => SessionEvent::FixFailed(error),
            };
            let _ = fix_events.send(event);
        });

        // Reducer task: the only place session state is mutated.
        tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                if session.apply(event) {
                    // Receivers may all be gone; keep reducing anyway so
                    // late subscribers via the handle still see updates.
                    let _ = state_tx.send(session.state().clone());
                }
            }
            debug!("Session event channel closed; reducer exiting");
        });

        Self {
            handle: SessionHandle {
                events: event_tx,
                state: state_rx,
            },
        }
    }

    /// Handle for injecting events and observing state.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::GREETING_TEXT;
    use crate::geo::{Coordinate, Region};
    use crate::location::{LocationError, SimulatedProvider};
    use crate::session::AppMode;
    use std::time::Duration;

    const TARGET: Coordinate = Coordinate {
        latitude: 37.7749,
        longitude: -122.4194,
    };

    fn config() -> SessionConfig {
        SessionConfig::new(Region::with_default_span(TARGET))
    }

    async fn wait_for_mode(handle: &SessionHandle, mode: AppMode) {
        let mut watch = handle.watch();
        tokio::time::timeout(Duration::from_secs(2), async {
            while watch.borrow().mode != mode {
                watch.changed().await.expect("watch channel closed");
            }
        })
        .await
        .expect("timed out waiting for mode change");
    }

    #[tokio::test]
    async fn test_fix_drives_loading_to_map() {
        let provider = Arc::new(SimulatedProvider::fix(TARGET));
        let runtime = SessionRuntime::start(config(), provider, FixOptions::default());
        let handle = runtime.handle();

        wait_for_mode(&handle, AppMode::Map).await;
        let state = handle.state();
        assert_eq!(state.distance_km, Some(0.0));
        assert!(state.ar_available);
    }

    #[tokio::test]
    async fn test_fix_failure_recorded_but_still_loading() {
        let provider = Arc::new(SimulatedProvider::failing(LocationError::new(
            1,
            "permission denied",
        )));
        let runtime = SessionRuntime::start(config(), provider, FixOptions::default());
        let handle = runtime.handle();

        let mut watch = handle.watch();
        tokio::time::timeout(Duration::from_secs(2), async {
            while watch.borrow().fix_failure.is_none() {
                watch.changed().await.expect("watch channel closed");
            }
        })
        .await
        .expect("timed out waiting for recorded failure");

        let state = handle.state();
        assert_eq!(state.mode, AppMode::Loading);
        assert_eq!(state.fix_failure.unwrap().code, 1);
    }

    #[tokio::test]
    async fn test_full_flow_to_ar_greeting() {
        let provider = Arc::new(SimulatedProvider::fix(TARGET));
        let runtime = SessionRuntime::start(config(), provider, FixOptions::default());
        let handle = runtime.handle();

        wait_for_mode(&handle, AppMode::Map).await;
        handle.request_ar();
        wait_for_mode(&handle, AppMode::Ar).await;

        handle.tracking_changed(TrackingState::Normal);
        let mut watch = handle.watch();
        tokio::time::timeout(Duration::from_secs(2), async {
            while watch.borrow().label.text() != GREETING_TEXT {
                watch.changed().await.expect("watch channel closed");
            }
        })
        .await
        .expect("timed out waiting for greeting");
    }

    #[tokio::test]
    async fn test_silent_provider_stays_loading() {
        let provider = Arc::new(SimulatedProvider::silent());
        let runtime = SessionRuntime::start(config(), provider, FixOptions::default());
        let handle = runtime.handle();

        tokio::time::sleep(Duration::from_millis(50)).await;
        let state = handle.state();
        assert_eq!(state.mode, AppMode::Loading);
        assert!(state.fix_failure.is_none());
    }
}
