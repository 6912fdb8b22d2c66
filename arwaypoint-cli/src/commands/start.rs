//! Start command - run a waypoint session end to end.
//!
//! Builds a simulated location provider from the CLI flags, starts the
//! application, and renders the session either as an interactive TUI
//! or as headless JSON lines (for non-TTY environments and scripting).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arwaypoint::app::{App, AppConfig};
use arwaypoint::ar::TrackingState;
use arwaypoint::geo::Coordinate;
use arwaypoint::location::{
    FixOptions, LocationError, LocationProvider, SimulatedProvider,
};
use arwaypoint::map::MapScene;
use arwaypoint::session::AppMode;
use clap::Args;

use crate::error::CliError;
use crate::tui_app;

/// Arguments for the start command.
#[derive(Debug, Args)]
pub struct StartArgs {
    /// Simulated current latitude, in degrees (default: the target itself)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Simulated current longitude, in degrees (default: the target itself)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Simulate a failed fix with this platform error code
    #[arg(long, conflicts_with_all = ["lat", "lon", "no_fix"])]
    pub fail: Option<i32>,

    /// Message for the simulated failure
    #[arg(long, requires = "fail", default_value = "simulated failure")]
    pub fail_message: String,

    /// Simulate a location service that never calls back
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub no_fix: bool,

    /// Simulated fix acquisition delay, in seconds
    #[arg(long, default_value_t = 1.0)]
    pub delay: f64,

    /// Fix timeout override, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Force headless output even on a TTY
    #[arg(long)]
    pub headless: bool,

    /// In headless mode, walk through AR entry and tracking automatically
    #[arg(long)]
    pub auto_ar: bool,
}

impl StartArgs {
    /// Build the simulated provider described by the flags.
    fn provider(&self) -> Arc<dyn LocationProvider> {
        let delay = Duration::from_secs_f64(self.delay);
        let provider = if self.no_fix {
            SimulatedProvider::silent()
        } else if let Some(code) = self.fail {
            SimulatedProvider::failing(LocationError::new(code, self.fail_message.clone()))
        } else {
            let coordinate = Coordinate::new(
                self.lat.unwrap_or(arwaypoint::app::TARGET_LOCATION.center.latitude),
                self.lon.unwrap_or(arwaypoint::app::TARGET_LOCATION.center.longitude),
            );
            SimulatedProvider::fix(coordinate)
        };
        Arc::new(provider.with_delay(delay))
    }

    /// Build the fix options, applying the timeout override.
    fn fix_options(&self) -> FixOptions {
        let options = FixOptions::default();
        match self.timeout {
            Some(secs) => options.with_timeout(Duration::from_secs(secs)),
            None => options,
        }
    }
}

/// Run the start command.
pub fn run(args: StartArgs) -> Result<(), CliError> {
    let _log_guard = arwaypoint::telemetry::init_logging()?;
    tracing::info!(version = arwaypoint::VERSION, "Starting waypoint session");

    let config = AppConfig::default().with_fix_options(args.fix_options());
    let provider = args.provider();

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    // Spawning needs a runtime context; the guard must not outlive this
    // block or the headless block_on below would panic.
    let app = {
        let _enter = runtime.enter();
        App::start(config, provider)
    };

    // Signal handler for graceful shutdown
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();
    ctrlc::set_handler(move || {
        shutdown_clone.store(true, Ordering::SeqCst);
    })
    .map_err(|e| CliError::Config(format!("Failed to set signal handler: {}", e)))?;

    if args.headless || !atty::is(atty::Stream::Stdout) {
        run_headless(&runtime, &app, shutdown, args.auto_ar)
    } else {
        tui_app::run_tui(&app, shutdown)
    }
}

/// Headless mode: print state transitions and scene graphs as JSON lines.
///
/// Exits once the demo has nothing further to show: after the map scene
/// (or, with `--auto-ar`, after the AR greeting), or after a recorded
/// fix failure. With `--no-fix` the session mirrors the indefinite
/// loading screen and only a shutdown signal ends it.
fn run_headless(
    runtime: &tokio::runtime::Runtime,
    app: &App,
    shutdown: Arc<AtomicBool>,
    auto_ar: bool,
) -> Result<(), CliError> {
    let handle = app.handle();
    let target = app.config().target;
    let mut watch = handle.watch();

    println!("{}", serde_json::json!({ "event": "loading" }));

    runtime.block_on(async move {
        loop {
            if shutdown.load(Ordering::SeqCst) {
                break;
            }

            let waited = tokio::time::timeout(Duration::from_millis(100), watch.changed()).await;
            match waited {
                Err(_) => continue,   // poll the shutdown flag again
                Ok(Err(_)) => break,  // reducer gone
                Ok(Ok(())) => {}
            }

            let state = watch.borrow().clone();
            match state.mode {
                AppMode::Loading => {
                    if let Some(failure) = &state.fix_failure {
                        println!(
                            "{}",
                            serde_json::json!({
                                "event": "fix_failed",
                                "code": failure.code,
                                "message": failure.message,
                            })
                        );
                        break;
                    }
                }
                AppMode::Map => {
                    if let Some(scene) = MapScene::from_state(&state, &target) {
                        println!(
                            "{}",
                            serde_json::json!({ "event": "map", "scene": scene })
                        );
                        if auto_ar && state.ar_available {
                            handle.request_ar();
                        } else {
                            break;
                        }
                    }
                }
                AppMode::Ar => {
                    let scene = arwaypoint::ar::ArScene::for_label(&state.label);
                    println!(
                        "{}",
                        serde_json::json!({ "event": "ar", "scene": scene })
                    );
                    if state.label.text() == arwaypoint::ar::GREETING_TEXT {
                        break;
                    }
                    // Walk the tracking signal through to the greeting
                    handle.tracking_changed(TrackingState::Normal);
                }
            }
        }
    });

    Ok(())
}
