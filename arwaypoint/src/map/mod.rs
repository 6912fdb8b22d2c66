//! Map presentation view model
//!
//! Builds the declarative description the map rendering surface
//! consumes: an initial framing region, one marker per position
//! (blue for self, red for the target), the distance readout, and the
//! AR entry point when the proximity flag is set. Pure data; rendering
//! is delegated entirely to the consumer.

use serde::Serialize;

use crate::geo::{Coordinate, Region};
use crate::session::SessionState;

/// Title of the marker at the user's position.
pub const SELF_MARKER_TITLE: &str = "You are here";

/// Title of the marker at the target position.
pub const TARGET_MARKER_TITLE: &str = "Hello World Location";

/// Label of the AR entry point button.
pub const AR_BUTTON_LABEL: &str = "Show AR";

/// Pin color for a map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinColor {
    /// The user's own position.
    Blue,
    /// The target position.
    Red,
}

/// A labeled point marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker position.
    pub coordinate: Coordinate,
    /// Marker title shown on tap/hover.
    pub title: String,
    /// Pin color.
    pub pin_color: PinColor,
}

/// The declarative map scene: framing, markers, readout, AR entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    /// Initial viewport framing around the current position.
    pub initial_region: Region,
    /// Current position and target markers.
    pub markers: Vec<Marker>,
    /// Human-readable distance readout.
    pub distance_text: String,
    /// Whether the AR entry point button is rendered.
    pub show_ar_button: bool,
}

impl MapScene {
    /// Build the map scene from a session state, if one can be shown.
    ///
    /// Returns `None` until the fix has arrived (`current_location` and
    /// `distance_km` are populated together, so both are required).
    pub fn from_state(state: &SessionState, target: &Region) -> Option<Self> {
        let current = state.current_location?;
        let distance_km = state.distance_km?;

        Some(Self {
            initial_region: current,
            markers: vec![
                Marker {
                    coordinate: current.center,
                    title: SELF_MARKER_TITLE.to_string(),
                    pin_color: PinColor::Blue,
                },
                Marker {
                    coordinate: target.center,
                    title: TARGET_MARKER_TITLE.to_string(),
                    pin_color: PinColor::Red,
                },
            ],
            distance_text: format!("Distance to target: {:.2} km", distance_km),
            show_ar_button: state.ar_available,
        })
    }
}
