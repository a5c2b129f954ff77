//! Directions links for an external map service.

use roadgrid_core::Point;
use url::Url;

use crate::error::InputError;
use crate::geo::GeoTransform;

/// Default directions endpoint.
pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps/dir/";

/// Separator between waypoints in the `waypoints` query parameter.
const WAYPOINT_SEPARATOR: &str = "|";

/// Which road exits become waypoints of the directions link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointMode {
    /// The exit of every road given, in input order.
    #[default]
    All,
    /// Only the exits of roads on the cheapest route, in travel order.
    Route,
}

/// Build a directions link from `origin` to `destination` through
/// `waypoints`, all converted with `geo`.
pub fn directions_url(
    base: &str,
    geo: &GeoTransform,
    origin: Point,
    destination: Point,
    waypoints: &[Point],
) -> Result<Url, InputError> {
    let mut url = Url::parse(base)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("api", "1");
        query.append_pair("origin", &geo.to_latlng(origin).to_string());
        query.append_pair("destination", &geo.to_latlng(destination).to_string());
        if !waypoints.is_empty() {
            let joined = waypoints
                .iter()
                .map(|&p| geo.to_latlng(p).to_string())
                .collect::<Vec<_>>()
                .join(WAYPOINT_SEPARATOR);
            query.append_pair("waypoints", &joined);
        }
    }
    Ok(url)
}
