//! Command-line configuration.
//!
//! Defaults reproduce the sample trip: start `0,0`, target `6,6` and two
//! chained roads. Log verbosity is controlled with `RUST_LOG`.

use clap::Parser;

use crate::fare::{DEFAULT_RATE, Fare};
use crate::geo::{DEFAULT_ORIGIN_LAT, DEFAULT_ORIGIN_LNG, DEFAULT_STEP, GeoTransform};
use crate::maps::{DEFAULT_MAPS_URL, WaypointMode};
use crate::quote::QuoteOptions;

/// Minimum travel cost on a grid with special roads.
///
/// Walking costs the Manhattan distance. A special road can be taken from
/// anywhere after walking to its entry, and costs a fixed amount to reach its
/// exit. Prints the cheapest cost, a fare, the route and a directions link.
#[derive(Parser, Debug, Clone)]
#[command(name = "roadgrid", version, about)]
pub struct Cli {
    /// Start point as `x,y`.
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    pub start: String,

    /// Target point as `x,y`.
    #[arg(long, default_value = "6,6", allow_hyphen_values = true)]
    pub target: String,

    /// Special roads as `x1,y1,x2,y2,cost` separated by `;`. Empty for none.
    #[arg(long, default_value = "0,0,2,2,1;2,2,5,5,2", allow_hyphen_values = true)]
    pub roads: String,

    /// Price per unit of travel cost.
    #[arg(long, default_value_t = DEFAULT_RATE)]
    pub rate: u64,

    /// Latitude of grid point (0, 0).
    #[arg(long, default_value_t = DEFAULT_ORIGIN_LAT, allow_hyphen_values = true)]
    pub origin_lat: f64,

    /// Longitude of grid point (0, 0).
    #[arg(long, default_value_t = DEFAULT_ORIGIN_LNG, allow_hyphen_values = true)]
    pub origin_lng: f64,

    /// Degrees per grid unit.
    #[arg(long, default_value_t = DEFAULT_STEP)]
    pub step: f64,

    /// Which road exits become waypoints of the directions link.
    #[arg(long, value_enum, default_value_t = WaypointMode::All)]
    pub waypoints: WaypointMode,

    /// Directions endpoint of the map service.
    #[arg(long, default_value = DEFAULT_MAPS_URL)]
    pub maps_url: String,

    /// Print the quote as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn quote_options(&self) -> QuoteOptions {
        QuoteOptions {
            fare: Fare::new(self.rate),
            geo: GeoTransform {
                origin_lat: self.origin_lat,
                origin_lng: self.origin_lng,
                step: self.step,
            },
            waypoints: self.waypoints,
            maps_url: self.maps_url.clone(),
        }
    }
}
