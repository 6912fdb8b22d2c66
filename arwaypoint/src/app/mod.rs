//! Application wiring.
//!
//! `App` ties an [`AppConfig`] and a [`LocationProvider`] together into
//! a running [`SessionRuntime`]. This is the single screen of the
//! system: one session, one fix, one target.

mod config;
mod error;

pub use config::{AppConfig, TARGET_LOCATION};
pub use error::AppError;

use std::sync::Arc;

use crate::location::LocationProvider;
use crate::session::{SessionHandle, SessionRuntime};

/// A running waypoint application.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    runtime: SessionRuntime,
}

impl App {
    /// Start the application on the current tokio runtime.
    ///
    /// Issues the one-shot fix request immediately; the session enters
    /// `Map` mode on success or stays in `Loading` forever on failure.
    pub fn start(config: AppConfig, provider: Arc<dyn LocationProvider>) -> Self {
        let runtime = SessionRuntime::start(
            config.session_config(),
            provider,
            config.fix_options.clone(),
        );
        Self { config, runtime }
    }

    /// The application configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle for injecting events and observing session state.
    pub fn handle(&self) -> SessionHandle {
        self.runtime.handle()
    }
}
