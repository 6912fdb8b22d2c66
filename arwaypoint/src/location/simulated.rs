//! Simulated location provider for tests and the demo CLI.

use std::time::Duration;

use crate::geo::Coordinate;

use super::types::{Fix, FixOptions, LocationError};
use super::{BoxFuture, LocationProvider};

/// What the simulated provider delivers when asked for a fix.
#[derive(Debug, Clone)]
enum Behavior {
    /// Deliver a successful fix at this coordinate.
    Fix(Coordinate),
    /// Deliver the given error.
    Fail(LocationError),
    /// Never deliver anything (exercises the permanent-loading path).
    Silent,
}

/// A location provider that delivers a pre-configured outcome.
///
/// Used by tests and the CLI demo in place of a platform location
/// service. The configured delay models fix acquisition time; if it
/// exceeds the request timeout, a timeout error is delivered instead,
/// after the timeout elapses.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    behavior: Behavior,
    delay: Duration,
}

impl SimulatedProvider {
    /// A provider that reports the given position.
    pub fn fix(coordinate: Coordinate) -> Self {
        Self {
            behavior: Behavior::Fix(coordinate),
            delay: Duration::ZERO,
        }
    }

    /// A provider that fails with the given error.
    pub fn failing(error: LocationError) -> Self {
        Self {
            behavior: Behavior::Fail(error),
            delay: Duration::ZERO,
        }
    }

    /// A provider that never responds.
    pub fn silent() -> Self {
        Self {
            behavior: Behavior::Silent,
            delay: Duration::ZERO,
        }
    }

    /// Set the simulated acquisition delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl LocationProvider for SimulatedProvider {
    fn request_fix(&self, options: &FixOptions) -> BoxFuture<'static, Result<Fix, LocationError>> {
        let behavior = self.behavior.clone();
        let delay = self.delay;
        let timeout = options.timeout;

        Box::pin(async move {
            match behavior {
                Behavior::Silent => {
                    // Mirrors a platform service that never calls back:
                    // not even the timeout fires.
                    std::future::pending::<()>().await;
                    unreachable!()
                }
                _ if delay > timeout => {
                    tokio::time::sleep(timeout).await;
                    Err(LocationError::timeout(timeout))
                }
                Behavior::Fix(coordinate) => {
                    tokio::time::sleep(delay).await;
                    Ok(Fix::new(coordinate))
                }
                Behavior::Fail(error) => {
                    tokio::time::sleep(delay).await;
                    Err(error)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::CODE_TIMEOUT;

    #[tokio::test]
    async fn test_fix_delivered() {
        let provider = SimulatedProvider::fix(Coordinate::new(37.7749, -122.4194));
        let fix = provider
            .request_fix(&FixOptions::default())
            .await
            .expect("fix should succeed");
        assert_eq!(fix.coordinate, Coordinate::new(37.7749, -122.4194));
    }

    #[tokio::test]
    async fn test_fix_delivered_after_delay() {
        let provider = SimulatedProvider::fix(Coordinate::new(53.5, 10.0))
            .with_delay(Duration::from_millis(20));

        let start = std::time::Instant::now();
        let fix = provider
            .request_fix(&FixOptions::default())
            .await
            .expect("fix should succeed");
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(fix.coordinate, Coordinate::new(53.5, 10.0));
    }

    #[tokio::test]
    async fn test_failure_delivered() {
        let provider = SimulatedProvider::failing(LocationError::new(1, "permission denied"));
        let err = provider
            .request_fix(&FixOptions::default())
            .await
            .expect_err("fix should fail");
        assert_eq!(err.code, 1);
        assert_eq!(err.message, "permission denied");
    }

    #[tokio::test]
    async fn test_delay_beyond_timeout_reports_timeout() {
        let provider = SimulatedProvider::fix(Coordinate::new(0.0, 0.0))
            .with_delay(Duration::from_secs(60));
        let options = FixOptions::default().with_timeout(Duration::from_millis(10));

        let err = provider
            .request_fix(&options)
            .await
            .expect_err("should time out");
        assert_eq!(err.code, CODE_TIMEOUT);
    }

    #[tokio::test]
    async fn test_silent_provider_never_resolves() {
        let provider = SimulatedProvider::silent();
        let pending = provider.request_fix(&FixOptions::default());

        let raced =
            tokio::time::timeout(Duration::from_millis(50), pending).await;
        assert!(raced.is_err(), "Silent provider must not resolve");
    }
}
