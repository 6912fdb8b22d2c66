//! AR scene view model and tracking label
//!
//! The AR presentation is a declarative scene graph with a single
//! camera-anchored text node. The node's content is driven by the AR
//! runtime's tracking-quality signal: it starts as an initialization
//! placeholder and flips to the waypoint greeting once tracking is
//! established.
//!
//! Loss of tracking is an explicit state here, not a silent gap: the
//! label records the last signal it saw, but only
//! [`TrackingState::Normal`] ever changes the displayed text.

use serde::Serialize;

/// Text shown while the AR runtime is still establishing tracking.
pub const INITIALIZING_TEXT: &str = "Initializing AR...";

/// Text shown once tracking is established.
pub const GREETING_TEXT: &str = "Hello World!";

/// The AR runtime's assessment of camera pose-estimation quality.
///
/// Mirrors the tracking-state notification of the AR rendering surface.
/// Only `Normal` changes the displayed label; the other states are
/// recorded but leave the text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackingState {
    /// Tracking is established and stable.
    Normal,
    /// Tracking has been lost.
    Unavailable,
    /// Tracking quality is degraded but not lost.
    Limited,
}

/// The camera-anchored text label and its reaction to tracking signals.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingLabel {
    text: String,
    last_signal: Option<TrackingState>,
}

impl Default for TrackingLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingLabel {
    /// Create a label in its initializing state.
    pub fn new() -> Self {
        Self {
            text: INITIALIZING_TEXT.to_string(),
            last_signal: None,
        }
    }

    /// Apply a tracking signal.
    ///
    /// `Normal` switches the text to the greeting. `Unavailable` is an
    /// explicit no-op (loss of tracking is recorded but not rendered),
    /// as is any other signal.
    pub fn on_tracking_changed(&mut self, state: TrackingState) {
        self.last_signal = Some(state);
        if state == TrackingState::Normal {
            self.text = GREETING_TEXT.to_string();
        }
    }

    /// The currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The most recent tracking signal, if any was received.
    pub fn last_signal(&self) -> Option<TrackingState> {
        self.last_signal
    }
}

/// Text style for an AR text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font family name.
    pub font_family: String,
    /// Font size in points.
    pub font_size: u32,
    /// Text color as a hex string.
    pub color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 30,
            color: "#ffffff".to_string(),
        }
    }
}

/// A single text node anchored in the camera feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    /// Displayed text content.
    pub content: String,
    /// Uniform 3-D scale.
    pub scale: [f64; 3],
    /// Position relative to the camera, in meters.
    pub position: [f64; 3],
    /// Text styling.
    pub style: TextStyle,
}

/// The declarative AR scene graph: one text node, one meter in front of
/// the camera at half scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArScene {
    /// The anchored text node.
    pub text: TextNode,
}

impl ArScene {
    /// Build the scene for the given label state.
    pub fn for_label(label: &TrackingLabel) -> Self {
        Self {
            text: TextNode {
                content: label.text().to_string(),
                scale: [0.5, 0.5, 0.5],
                position: [0.0, 0.0, -1.0],
                style: TextStyle::default(),
            },
        }
    }
}
