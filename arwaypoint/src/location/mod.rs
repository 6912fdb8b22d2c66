//! Location acquisition
//!
//! A one-shot position fix abstraction over a platform location
//! service. The request fires exactly once per session, with
//! high-accuracy mode, a 20-second timeout, and a 1-second maximum
//! cached-fix age by default. There is no retry and no cancellation:
//! once issued, the request either delivers a [`Fix`], delivers a
//! [`LocationError`], or never completes.
//!
//! # Example
//!
//! ```ignore
//! use arwaypoint::geo::Coordinate;
//! use arwaypoint::location::{FixOptions, LocationProvider, SimulatedProvider};
//!
//! let provider = SimulatedProvider::fix(Coordinate::new(37.7749, -122.4194));
//! let fix = provider.request_fix(&FixOptions::default()).await?;
//! ```

mod simulated;
mod types;

pub use simulated::SimulatedProvider;
pub use types::{
    Fix, FixOptions, LocationError, CODE_PERMISSION_DENIED, CODE_POSITION_UNAVAILABLE,
    CODE_TIMEOUT,
};

use std::future::Future;
use std::pin::Pin;

/// Boxed future type for dyn-compatible provider methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for one-shot position fix providers.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling simulated providers in tests and the demo CLI.
///
/// Implementations deliver exactly one result per call. The future may
/// never resolve (a platform service that never calls back); callers
/// must not rely on completion.
pub trait LocationProvider: Send + Sync {
    /// Request a single position fix.
    ///
    /// # Arguments
    ///
    /// * `options` - Accuracy, timeout, and cached-fix age settings
    fn request_fix(&self, options: &FixOptions) -> BoxFuture<'static, Result<Fix, LocationError>>;
}
