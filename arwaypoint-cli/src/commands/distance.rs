//! Distance command - haversine distance from a point to the target.

use clap::Args;

use arwaypoint::app::TARGET_LOCATION;
use arwaypoint::geo::{self, Coordinate};

use crate::error::CliError;

/// Arguments for the distance command.
#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Latitude of the point, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the point, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}

/// Run the distance command.
pub fn run(args: DistanceArgs) -> Result<(), CliError> {
    let here = Coordinate::new(args.lat, args.lon);
    let target = TARGET_LOCATION.center;
    let distance = geo::distance_km(here, target);

    println!("From:   {}", here);
    println!("Target: {}", target);
    println!("Distance to target: {:.2} km", distance);
    if geo::within_proximity(distance) {
        println!("Within AR activation range (< {} km)", geo::PROXIMITY_THRESHOLD_KM);
    }

    Ok(())
}
