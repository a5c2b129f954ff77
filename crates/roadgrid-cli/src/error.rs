//! Errors raised while turning user text into solver input.

use std::num::ParseIntError;

use thiserror::Error;

/// Malformed user input. The solver is never called when one of these is
/// raised.
#[derive(Error, Debug)]
pub enum InputError {
    /// Wrong number of comma-separated values.
    #[error("{field}: expected {expected} comma-separated integers, found {found}")]
    Arity {
        field: String,
        expected: usize,
        found: usize,
    },

    /// A token that does not parse as an integer.
    #[error("{field}: '{token}' is not an integer")]
    NotInteger {
        field: String,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Road costs must not be negative.
    #[error("{field}: road cost {cost} is negative")]
    NegativeCost { field: String, cost: i64 },

    /// The map service base address could not be parsed.
    #[error("invalid map service url: {0}")]
    MapsUrl(#[from] url::ParseError),
}
