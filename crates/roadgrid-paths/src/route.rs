use roadgrid_core::Point;

use crate::road::SpecialRoad;
use crate::search::RoadSearch;
use crate::traits::{ManhattanWalker, Walker};

/// One segment of a [`Route`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Leg {
    /// An ordinary move priced by the walker.
    Walk { from: Point, to: Point, cost: u64 },
    /// A special road; `road` indexes the slice given to the search.
    Road {
        road: usize,
        from: Point,
        to: Point,
        cost: u64,
    },
}

impl Leg {
    #[inline]
    pub fn cost(&self) -> u64 {
        match *self {
            Leg::Walk { cost, .. } | Leg::Road { cost, .. } => cost,
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        match *self {
            Leg::Walk { from, .. } | Leg::Road { from, .. } => from,
        }
    }

    #[inline]
    pub fn end(&self) -> Point {
        match *self {
            Leg::Walk { to, .. } | Leg::Road { to, .. } => to,
        }
    }
}

/// A cheapest way from start to target.
///
/// Legs are contiguous: each leg starts where the previous one ended. The
/// leg costs sum to `cost`. A route from a point to itself has no legs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub cost: u64,
    pub legs: Vec<Leg>,
}

impl Route {
    /// Indices of the roads taken, in travel order.
    pub fn roads(&self) -> impl Iterator<Item = usize> + '_ {
        self.legs.iter().filter_map(|leg| match *leg {
            Leg::Road { road, .. } => Some(road),
            Leg::Walk { .. } => None,
        })
    }

    /// Total cost spent walking rather than riding roads.
    pub fn walked(&self) -> u64 {
        self.legs
            .iter()
            .filter(|leg| matches!(leg, Leg::Walk { .. }))
            .map(Leg::cost)
            .sum()
    }
}

/// Compute a cheapest [`Route`] from `start` to `target`, walking at
/// Manhattan cost.
///
/// The route's cost always equals [`compute_min_cost`](crate::compute_min_cost)
/// for the same input. Returns `None` only if the target is unreachable.
pub fn shortest_route(start: Point, target: Point, roads: &[SpecialRoad]) -> Option<Route> {
    shortest_route_with(&ManhattanWalker, start, target, roads)
}

/// Like [`shortest_route`], with ordinary moves priced by `walker`.
pub fn shortest_route_with<W: Walker>(
    walker: &W,
    start: Point,
    target: Point,
    roads: &[SpecialRoad],
) -> Option<Route> {
    let mut search = RoadSearch::new(start, target, roads);
    let cost = search.run(walker)?;
    Some(search.route(cost))
}

impl RoadSearch<'_> {
    /// Reconstruct the route to the target from the recorded parents.
    ///
    /// Must only be called after `run` settled the target at `cost`.
    pub(crate) fn route(&self, cost: u64) -> Route {
        let mut hops = Vec::new();
        let mut ci = self.target;
        while let Some(parent) = self.parents[ci] {
            hops.push((parent, ci));
            ci = parent.prev;
        }
        hops.reverse();

        let mut legs = Vec::with_capacity(2 * hops.len());
        for (parent, ci) in hops {
            let from = self.points[parent.prev];
            let Some(ri) = parent.road else {
                legs.push(Leg::Walk {
                    from,
                    to: self.points[ci],
                    cost: parent.walk,
                });
                continue;
            };
            let road = self.roads[ri];
            if from != road.from || parent.walk > 0 {
                legs.push(Leg::Walk {
                    from,
                    to: road.from,
                    cost: parent.walk,
                });
            }
            legs.push(Leg::Road {
                road: ri,
                from: road.from,
                to: road.to,
                cost: road.cost,
            });
        }

        Route { cost, legs }
    }
}
