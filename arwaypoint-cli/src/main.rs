//! ARWaypoint CLI - Command-line interface
//!
//! Runs a waypoint session against a simulated location provider and
//! renders the three display states (Loading, Map, AR) as a terminal
//! UI or as headless JSON output.

mod commands;
mod error;
mod tui_app;
mod ui;

use clap::{Parser, Subcommand};

use commands::distance::DistanceArgs;
use commands::start::StartArgs;

#[derive(Debug, Parser)]
#[command(name = "arwaypoint", version = arwaypoint::VERSION)]
#[command(about = "Proximity-triggered AR waypoint viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a waypoint session with a simulated location provider
    Start(StartArgs),
    /// Compute the distance from a point to the built-in target
    Distance(DistanceArgs),
    /// Show the effective built-in configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start(args) => commands::start::run(args),
        Commands::Distance(args) => commands::distance::run(args),
        Commands::Config => commands::config::run(),
    };

    if let Err(e) = result {
        e.exit();
    }
}
