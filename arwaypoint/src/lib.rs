//! ARWaypoint - Proximity-triggered AR waypoint sessions
//!
//! This library models a single-screen application: acquire the user's
//! position once, show it with a fixed target on a map, compute the
//! great-circle distance between them, and offer an augmented-reality
//! view once the user is within 0.1 km of the target.
//!
//! # Architecture
//!
//! ```text
//! LocationProvider ──► SessionRuntime ──► SessionState snapshots
//!   (one-shot fix)      (event reducer)     │
//!                                           ├─► MapScene  (map surface)
//!                                           └─► ArScene   (AR surface)
//! ```
//!
//! - [`geo`] - coordinates, regions, and the haversine distance
//! - [`location`] - the one-shot position fix abstraction
//! - [`session`] - the Loading/Map/Ar mode controller and event runtime
//! - [`map`] / [`ar`] - declarative view models for the two surfaces
//! - [`app`] - configuration and wiring
//! - [`telemetry`] - file-based tracing setup

pub mod app;
pub mod ar;
pub mod geo;
pub mod location;
pub mod map;
pub mod session;
pub mod telemetry;

/// Crate version, for CLI banners.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
