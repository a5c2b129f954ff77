//! Minimum travel cost on an integer grid with special roads.
//!
//! Walking between any two grid points costs their Manhattan distance. A
//! [`SpecialRoad`] is a directed shortcut: after walking to its entry point,
//! the traveller reaches its exit point for a fixed cost. Roads can be
//! chained freely.
//!
//! - [`compute_min_cost`] returns the cheapest total cost as a [`PathCost`].
//! - [`shortest_route`] also reconstructs the [`Route`] that achieves it.
//!
//! Both are Dijkstra searches over an implicit graph: the only tracked points
//! are the start, the target and every road endpoint, and edge weights are
//! computed on demand while relaxing. The `_with` variants accept any
//! [`Walker`], which decides what an ordinary move costs (or forbids it).

mod cost;
mod distance;
mod road;
mod route;
mod search;
mod solver;
mod traits;

pub use cost::PathCost;
pub use distance::manhattan;
pub use road::SpecialRoad;
pub use route::{Leg, Route, shortest_route, shortest_route_with};
pub use solver::{compute_min_cost, compute_min_cost_with};
pub use traits::{ManhattanWalker, Walker};
