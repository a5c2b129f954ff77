//! Parsing of the free-text fields: points as `x,y`, roads as
//! `x1,y1,x2,y2,cost` separated by `;`.
//!
//! Whitespace around fields and tokens is ignored.

use std::num::ParseIntError;
use std::str::FromStr;

use roadgrid_core::Point;
use roadgrid_paths::SpecialRoad;

use crate::error::InputError;

/// Separator between roads in a road list.
pub const ROAD_SEPARATOR: char = ';';
/// Separator between integers inside a point or road.
pub const VALUE_SEPARATOR: char = ',';

/// Split a field into trimmed tokens. An empty field has no tokens.
fn tokens(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split(VALUE_SEPARATOR).map(str::trim).collect()
}

fn expect_arity(field: &str, tokens: &[&str], expected: usize) -> Result<(), InputError> {
    if tokens.len() != expected {
        return Err(InputError::Arity {
            field: field.to_string(),
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

fn int<T: FromStr<Err = ParseIntError>>(field: &str, token: &str) -> Result<T, InputError> {
    token.parse().map_err(|source| InputError::NotInteger {
        field: field.to_string(),
        token: token.to_string(),
        source,
    })
}

/// Parse a point written as `x,y`. `field` names the input in errors.
pub fn parse_point(field: &str, text: &str) -> Result<Point, InputError> {
    let toks = tokens(text);
    expect_arity(field, &toks, 2)?;
    Ok(Point::new(int(field, toks[0])?, int(field, toks[1])?))
}

/// Parse a single road written as `x1,y1,x2,y2,cost`.
pub fn parse_road(field: &str, text: &str) -> Result<SpecialRoad, InputError> {
    let toks = tokens(text);
    expect_arity(field, &toks, 5)?;
    let from = Point::new(int(field, toks[0])?, int(field, toks[1])?);
    let to = Point::new(int(field, toks[2])?, int(field, toks[3])?);
    let raw: i64 = int(field, toks[4])?;
    let cost = u64::try_from(raw).map_err(|_| InputError::NegativeCost {
        field: field.to_string(),
        cost: raw,
    })?;
    Ok(SpecialRoad::new(from, to, cost))
}

/// Parse a `;`-separated road list. Blank text means no roads; a blank entry
/// between separators is an error.
pub fn parse_roads(text: &str) -> Result<Vec<SpecialRoad>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(ROAD_SEPARATOR)
        .enumerate()
        .map(|(i, item)| parse_road(&format!("road {}", i + 1), item))
        .collect()
}
