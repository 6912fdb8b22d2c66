//! Config command - show the effective built-in configuration.
//!
//! The target location is compiled in; there is no config file to edit.
//! This command exists so a deployment can verify what it was built with.

use arwaypoint::app::AppConfig;

use crate::error::CliError;

/// Run the config command.
pub fn run() -> Result<(), CliError> {
    let config = AppConfig::default();

    println!("Effective Configuration");
    println!("=======================");
    println!();
    println!("[target]");
    println!("  latitude        = {}", config.target.center.latitude);
    println!("  longitude       = {}", config.target.center.longitude);
    println!("  latitude_delta  = {}", config.target.latitude_delta);
    println!("  longitude_delta = {}", config.target.longitude_delta);
    println!();
    println!("[fix]");
    println!("  high_accuracy = {}", config.fix_options.high_accuracy);
    println!("  timeout_ms    = {}", config.fix_options.timeout.as_millis());
    println!(
        "  maximum_age_ms = {}",
        config.fix_options.maximum_age.as_millis()
    );
    println!();
    println!("[proximity]");
    println!("  threshold_km = {}", config.proximity_threshold_km);

    Ok(())
}
