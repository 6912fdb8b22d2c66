//! Waypoint session (mode controller)
//!
//! This module owns the session's finite-state record and the reducer
//! that mutates it. Three display modes exist:
//!
//! - **Loading**: waiting for the one-shot position fix
//! - **Map**: fix captured; showing current and target positions
//! - **Ar**: the user entered the AR view (terminal)
//!
//! All external notifications (the fix result, user actions, AR
//! tracking signals) arrive as [`SessionEvent`]s on a single channel
//! consumed by one reducer task. See [`SessionRuntime`] for the wiring.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use arwaypoint::geo::{Coordinate, Region};
//! use arwaypoint::location::{FixOptions, SimulatedProvider};
//! use arwaypoint::session::{SessionConfig, SessionRuntime};
//!
//! let target = Region::with_default_span(Coordinate::new(37.7749, -122.4194));
//! let provider = Arc::new(SimulatedProvider::fix(Coordinate::new(37.7749, -122.4194)));
//! let runtime = SessionRuntime::start(
//!     SessionConfig::new(target),
//!     provider,
//!     FixOptions::default(),
//! );
//! let handle = runtime.handle();
//! ```

mod model;
mod reducer;
mod runtime;

pub use model::{AppMode, SessionConfig, SessionEvent, SessionState};
pub use reducer::Session;
pub use runtime::{SessionHandle, SessionRuntime};
