//! State machine for the waypoint session.
//!
//! A single reducer applies [`SessionEvent`]s to a [`SessionState`].
//! The transition table:
//!
//! - `Loading` → `Map` on `FixAcquired` (stores the region, computes
//!   the distance and evaluates the proximity flag exactly once).
//! - `FixFailed` records the error and leaves the mode at `Loading`;
//!   there is no retry and no error UI, so without a fix the session
//!   shows a loading screen indefinitely.
//! - `Map` → `Ar` on `ArRequested`, only while the proximity flag is
//!   set. Repeat requests in `Ar` are idempotent; requests anywhere
//!   else are ignored.
//! - `TrackingChanged` feeds the AR label in any mode.

use tracing::{debug, info, warn};

use crate::geo;

use super::model::{AppMode, SessionConfig, SessionEvent, SessionState};

/// The waypoint session: configuration plus the evolving state record.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    state: SessionState,
}

impl Session {
    /// Create a session in `Loading` mode.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::new(),
        }
    }

    /// The current state record.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Apply an event to the state record.
    ///
    /// Returns `true` if the state changed in a way observers should
    /// re-render for.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::FixAcquired(coordinate) => {
                if self.state.has_fix() {
                    // The fix is one-shot; later positions are not tracked.
                    debug!(%coordinate, "Ignoring fix after the first");
                    return false;
                }

                let distance = geo::distance_km(coordinate, self.config.target.center);
                let ar_available = distance < self.config.proximity_threshold_km;

                info!(
                    %coordinate,
                    distance_km = distance,
                    ar_available,
                    "Position fix acquired"
                );

                self.state.current_location =
                    Some(geo::Region::with_default_span(coordinate));
                self.state.distance_km = Some(distance);
                self.state.ar_available = ar_available;
                self.state.mode = AppMode::Map;
                true
            }
            SessionEvent::FixFailed(error) => {
                // Logged and recorded, never retried, never surfaced as
                // error UI. The session stays in Loading.
                warn!(code = error.code, message = %error.message, "Location fix failed");
                self.state.fix_failure = Some(error);
                true
            }
            SessionEvent::ArRequested => match self.state.mode {
                AppMode::Map if self.state.ar_available => {
                    info!("Entering AR mode");
                    self.state.mode = AppMode::Ar;
                    true
                }
                AppMode::Ar => {
                    // Idempotent: pressing again while already in AR.
                    false
                }
                _ => {
                    debug!(mode = ?self.state.mode, "Ignoring AR request");
                    false
                }
            },
            SessionEvent::TrackingChanged(tracking) => {
                debug!(?tracking, "Tracking state changed");
                let text_before = self.state.label.text().to_string();
                let signal_before = self.state.label.last_signal();
                self.state.label.on_tracking_changed(tracking);
                self.state.label.text() != text_before || signal_before != Some(tracking)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::{TrackingState, GREETING_TEXT, INITIALIZING_TEXT};
    use crate::geo::{Coordinate, Region};
    use crate::location::LocationError;

    const TARGET: Coordinate = Coordinate {
        latitude: 37.7749,
        longitude: -122.4194,
    };

    fn session() -> Session {
        Session::new(SessionConfig::new(Region::with_default_span(TARGET)))
    }

    #[test]
    fn test_fix_transitions_loading_to_map() {
        let mut s = session();
        let changed = s.apply(SessionEvent::FixAcquired(TARGET));

        assert!(changed);
        assert_eq!(s.state().mode, AppMode::Map);
        assert_eq!(s.state().distance_km, Some(0.0));
        assert!(s.state().ar_available);
        assert_eq!(
            s.state().current_location.unwrap().center,
            TARGET
        );
    }

    #[test]
    fn test_fix_outside_threshold_disables_ar() {
        let mut s = session();
        // ~559 km away (Los Angeles)
        s.apply(SessionEvent::FixAcquired(Coordinate::new(
            34.0522, -118.2437,
        )));

        assert_eq!(s.state().mode, AppMode::Map);
        assert!(!s.state().ar_available);
    }

    #[test]
    fn test_proximity_boundary_is_exclusive() {
        let mut s = session();
        // ~0.1 km due north of the target: strictly-less-than fails
        s.apply(SessionEvent::FixAcquired(Coordinate::new(
            TARGET.latitude + 0.0009001,
            TARGET.longitude,
        )));

        let d = s.state().distance_km.unwrap();
        assert!(d >= 0.1, "Expected distance at or past boundary, got {}", d);
        assert!(!s.state().ar_available);
    }

    #[test]
    fn test_second_fix_is_ignored() {
        let mut s = session();
        s.apply(SessionEvent::FixAcquired(TARGET));
        let first_distance = s.state().distance_km;

        let changed = s.apply(SessionEvent::FixAcquired(Coordinate::new(
            34.0522, -118.2437,
        )));

        assert!(!changed);
        assert_eq!(s.state().distance_km, first_distance);
        assert!(s.state().ar_available, "Proximity flag must not re-evaluate");
    }

    #[test]
    fn test_fix_failure_stays_loading() {
        let mut s = session();
        s.apply(SessionEvent::FixFailed(LocationError::new(
            2,
            "position unavailable",
        )));

        assert_eq!(s.state().mode, AppMode::Loading);
        assert_eq!(s.state().fix_failure.as_ref().unwrap().code, 2);
        assert!(!s.state().has_fix());
    }

    #[test]
    fn test_ar_request_requires_proximity() {
        let mut s = session();
        s.apply(SessionEvent::FixAcquired(Coordinate::new(
            34.0522, -118.2437,
        )));

        let changed = s.apply(SessionEvent::ArRequested);
        assert!(!changed);
        assert_eq!(s.state().mode, AppMode::Map);
    }

    #[test]
    fn test_ar_request_ignored_while_loading() {
        let mut s = session();
        let changed = s.apply(SessionEvent::ArRequested);
        assert!(!changed);
        assert_eq!(s.state().mode, AppMode::Loading);
    }

    #[test]
    fn test_ar_entry_and_idempotent_repeat() {
        let mut s = session();
        s.apply(SessionEvent::FixAcquired(TARGET));

        assert!(s.apply(SessionEvent::ArRequested));
        assert_eq!(s.state().mode, AppMode::Ar);

        // Pressing again has no additional effect
        assert!(!s.apply(SessionEvent::ArRequested));
        assert_eq!(s.state().mode, AppMode::Ar);
    }

    #[test]
    fn test_ar_is_terminal() {
        let mut s = session();
        s.apply(SessionEvent::FixAcquired(TARGET));
        s.apply(SessionEvent::ArRequested);

        // No event can leave Ar
        s.apply(SessionEvent::FixFailed(LocationError::new(3, "late timeout")));
        s.apply(SessionEvent::TrackingChanged(TrackingState::Unavailable));
        assert_eq!(s.state().mode, AppMode::Ar);
    }

    #[test]
    fn test_tracking_normal_updates_label() {
        let mut s = session();
        s.apply(SessionEvent::FixAcquired(TARGET));
        s.apply(SessionEvent::ArRequested);

        s.apply(SessionEvent::TrackingChanged(TrackingState::Normal));
        assert_eq!(s.state().label.text(), GREETING_TEXT);
    }

    #[test]
    fn test_tracking_unavailable_leaves_label() {
        let mut s = session();
        s.apply(SessionEvent::TrackingChanged(TrackingState::Unavailable));
        assert_eq!(s.state().label.text(), INITIALIZING_TEXT);
    }
}
