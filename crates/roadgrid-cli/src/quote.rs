//! A priced trip: solver output plus everything needed to present it.

use std::fmt;

use roadgrid_core::Point;
use roadgrid_paths::{Leg, PathCost, Route, SpecialRoad, shortest_route};

use crate::error::InputError;
use crate::fare::{CURRENCY, Fare};
use crate::geo::GeoTransform;
use crate::maps::{self, DEFAULT_MAPS_URL, WaypointMode};
use crate::parse;

/// Parsed solver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub start: Point,
    pub target: Point,
    pub roads: Vec<SpecialRoad>,
}

impl TripRequest {
    /// Parse the three free-text fields.
    pub fn parse(start: &str, target: &str, roads: &str) -> Result<Self, InputError> {
        Ok(Self {
            start: parse::parse_point("start", start)?,
            target: parse::parse_point("target", target)?,
            roads: parse::parse_roads(roads)?,
        })
    }

    /// Exit points to pass as waypoints.
    fn waypoints(&self, mode: WaypointMode, route: &Route) -> Vec<Point> {
        match mode {
            WaypointMode::All => self.roads.iter().map(|r| r.to).collect(),
            WaypointMode::Route => route.roads().map(|i| self.roads[i].to).collect(),
        }
    }
}

/// Presentation settings for a [`Quote`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteOptions {
    pub fare: Fare,
    pub geo: GeoTransform,
    pub waypoints: WaypointMode,
    pub maps_url: String,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            fare: Fare::default(),
            geo: GeoTransform::default(),
            waypoints: WaypointMode::default(),
            maps_url: DEFAULT_MAPS_URL.to_string(),
        }
    }
}

/// Result of pricing a [`TripRequest`].
///
/// An unreachable target has no price, no route and no map link.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Quote {
    pub start: Point,
    pub target: Point,
    pub roads: Vec<SpecialRoad>,
    pub cost: PathCost,
    pub price: Option<u64>,
    pub route: Vec<Leg>,
    pub map_url: Option<String>,
}

impl Quote {
    pub fn compute(request: &TripRequest, options: &QuoteOptions) -> Result<Self, InputError> {
        let mut quote = Quote {
            start: request.start,
            target: request.target,
            roads: request.roads.clone(),
            cost: PathCost::Unreachable,
            price: None,
            route: Vec::new(),
            map_url: None,
        };

        let Some(route) = shortest_route(request.start, request.target, &request.roads) else {
            log::info!("{} is not reachable from {}", request.target, request.start);
            return Ok(quote);
        };
        log::info!(
            "cost {} from {} to {} using {} of {} roads",
            route.cost,
            request.start,
            request.target,
            route.roads().count(),
            request.roads.len()
        );

        let waypoints = request.waypoints(options.waypoints, &route);
        let url = maps::directions_url(
            &options.maps_url,
            &options.geo,
            request.start,
            request.target,
            &waypoints,
        )?;

        quote.cost = PathCost::Reachable(route.cost);
        quote.price = Some(options.fare.price(route.cost));
        quote.map_url = Some(url.into());
        quote.route = route.legs;
        Ok(quote)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PathCost::Reachable(cost) = self.cost else {
            return writeln!(f, "Target is not reachable");
        };
        writeln!(f, "Minimum cost: {cost} units")?;
        if let Some(price) = self.price {
            writeln!(f, "Estimated price: {CURRENCY}{price}")?;
        }
        if !self.route.is_empty() {
            writeln!(f, "Route:")?;
            for leg in &self.route {
                match *leg {
                    Leg::Walk { from, to, cost } => {
                        writeln!(f, "  walk     {from} -> {to}  cost {cost}")?
                    }
                    Leg::Road {
                        road,
                        from,
                        to,
                        cost,
                    } => writeln!(f, "  road #{:<2} {from} -> {to}  cost {cost}", road + 1)?,
                }
            }
        }
        if let Some(url) = &self.map_url {
            writeln!(f, "Map: {url}")?;
        }
        Ok(())
    }
}
