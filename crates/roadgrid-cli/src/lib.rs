//! Command-line front end for the grid route cost calculator.
//!
//! Turns free-text coordinates and road lists into solver input
//! ([`parse`]), runs the solver, and presents the result: a fare
//! ([`fare`]), geographic coordinates for each grid point ([`geo`]) and a
//! directions link for an external map service ([`maps`]). [`Quote`] ties
//! these together for the `roadgrid` binary.

pub mod config;
pub mod error;
pub mod fare;
pub mod geo;
pub mod maps;
pub mod parse;
pub mod quote;

pub use config::Cli;
pub use error::InputError;
pub use fare::Fare;
pub use geo::{GeoTransform, LatLng};
pub use maps::WaypointMode;
pub use quote::{Quote, QuoteOptions, TripRequest};
