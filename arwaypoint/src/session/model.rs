//! Core data types for the waypoint session.
//!
//! Types here form the explicit finite-state record of the session:
//! the display mode, the captured location, and the derived distance.
//! All mutation goes through the reducer in [`super::reducer`].

use crate::ar::{TrackingLabel, TrackingState};
use crate::geo::{self, Coordinate, Region};
use crate::location::LocationError;

/// The session's display mode.
///
/// Transitions are forward-only: `Loading` → `Map` on a successful fix,
/// `Map` → `Ar` on a user request while the proximity flag is set.
/// `Ar` is terminal; no reverse transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for the first (and only) position fix.
    Loading,
    /// Showing current and target positions on the map.
    Map,
    /// Showing the camera-anchored AR label.
    Ar,
}

/// An externally-driven notification delivered to the session reducer.
///
/// All asynchronous inputs (the fix result, user actions, the AR
/// runtime's tracking signal) arrive as events on a single channel,
/// preserving single-threaded, no-lock semantics.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The location provider delivered a position.
    FixAcquired(Coordinate),
    /// The location provider failed; carries the platform code and message.
    FixFailed(LocationError),
    /// The user asked to enter the AR view.
    ArRequested,
    /// The AR runtime reported a tracking-quality change.
    TrackingChanged(TrackingState),
}

/// Configuration for a waypoint session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The fixed target the session measures distance against.
    pub target: Region,
    /// Distance below which the AR entry point is offered, in km.
    pub proximity_threshold_km: f64,
}

impl SessionConfig {
    /// Create a session config for a target with the default threshold.
    pub fn new(target: Region) -> Self {
        Self {
            target,
            proximity_threshold_km: geo::PROXIMITY_THRESHOLD_KM,
        }
    }

    /// Set the proximity threshold.
    pub fn with_proximity_threshold_km(mut self, threshold_km: f64) -> Self {
        self.proximity_threshold_km = threshold_km;
        self
    }
}

/// The session's finite-state record.
///
/// `current_location`, `distance_km`, and `ar_available` are populated
/// together, exactly once, when the first fix arrives; they never
/// update afterwards. `fix_failure` records a failed fix explicitly;
/// the mode stays `Loading`, but the stuck state is observable.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current display mode.
    pub mode: AppMode,
    /// Map framing around the captured position; absent until the fix.
    pub current_location: Option<Region>,
    /// Distance to the target in kilometers; absent until the fix.
    pub distance_km: Option<f64>,
    /// Whether the AR entry point is offered. Evaluated once at fix time.
    pub ar_available: bool,
    /// The recorded fix failure, if the provider reported one.
    pub fix_failure: Option<LocationError>,
    /// The AR label and the last tracking signal it saw.
    pub label: TrackingLabel,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: AppMode::Loading,
            current_location: None,
            distance_km: None,
            ar_available: false,
            fix_failure: None,
            label: TrackingLabel::new(),
        }
    }
}

impl SessionState {
    /// Create a fresh session state in `Loading` mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the one-shot fix has already been consumed.
    pub fn has_fix(&self) -> bool {
        self.current_location.is_some()
    }
}
