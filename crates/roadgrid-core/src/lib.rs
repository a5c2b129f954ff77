//! **roadgrid-core** — core types for the grid route cost calculator.
//!
//! This crate provides the geometry primitive shared by the solver and the
//! command-line front end: an integer grid [`Point`].

pub mod geom;

pub use geom::Point;
