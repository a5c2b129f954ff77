use std::collections::{BinaryHeap, HashMap};

use roadgrid_core::Point;

use crate::road::SpecialRoad;
use crate::traits::Walker;

/// Cost-table value for points not reached yet.
pub(crate) const INFINITY: u64 = u64::MAX;

/// Reference into the point universe, ordered by `cost` for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest entry first.
        // Equal costs fall back to the lower index for reproducible runs.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// How a point received its current best cost.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Parent {
    /// Universe index of the settled point the hop started from.
    pub(crate) prev: usize,
    /// Road taken at the end of the hop, `None` for a direct walk to the target.
    pub(crate) road: Option<usize>,
    /// Walking cost paid before the road (or the whole hop if no road).
    pub(crate) walk: u64,
}

/// One Dijkstra run over the implicit road graph.
///
/// The universe holds the start, the target and every road endpoint. Edges
/// are never stored: each settled point relaxes a direct walk to the target
/// and every road, paying the walker's approach cost to the road entry.
pub(crate) struct RoadSearch<'a> {
    pub(crate) roads: &'a [SpecialRoad],
    pub(crate) points: Vec<Point>,
    /// Universe index of each road's exit point, parallel to `roads`.
    road_exits: Vec<usize>,
    pub(crate) costs: Vec<u64>,
    pub(crate) parents: Vec<Option<Parent>>,
    pub(crate) start: usize,
    pub(crate) target: usize,
    pub(crate) popped: usize,
}

impl<'a> RoadSearch<'a> {
    pub(crate) fn new(start: Point, target: Point, roads: &'a [SpecialRoad]) -> Self {
        let mut points = Vec::with_capacity(2 + 2 * roads.len());
        let mut index: HashMap<Point, usize> = HashMap::with_capacity(points.capacity());
        let mut intern = |p: Point| -> usize {
            *index.entry(p).or_insert_with(|| {
                points.push(p);
                points.len() - 1
            })
        };

        let start_idx = intern(start);
        let target_idx = intern(target);
        let mut road_exits = Vec::with_capacity(roads.len());
        for road in roads {
            intern(road.from);
            road_exits.push(intern(road.to));
        }

        let len = points.len();
        let mut costs = vec![INFINITY; len];
        costs[start_idx] = 0;

        Self {
            roads,
            points,
            road_exits,
            costs,
            parents: vec![None; len],
            start: start_idx,
            target: target_idx,
            popped: 0,
        }
    }

    /// Number of points the search tracks.
    #[inline]
    pub(crate) fn universe_len(&self) -> usize {
        self.points.len()
    }

    /// Run the search. Returns the target cost, or `None` if the frontier
    /// empties first.
    pub(crate) fn run<W: Walker>(&mut self, walker: &W) -> Option<u64> {
        let target_point = self.points[self.target];
        let roads = self.roads;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::with_capacity(self.points.len());
        open.push(NodeRef {
            idx: self.start,
            cost: 0,
        });

        while let Some(current) = open.pop() {
            self.popped += 1;

            if current.idx == self.target {
                log::debug!(
                    "reached {} at cost {} after {} pops over {} points",
                    target_point,
                    current.cost,
                    self.popped,
                    self.universe_len()
                );
                return Some(current.cost);
            }

            // Skip stale entries.
            if current.cost > self.costs[current.idx] {
                continue;
            }

            let cp = self.points[current.idx];
            log::trace!("settled {} at cost {}", cp, current.cost);

            if let Some(walk) = walker.walk(cp, target_point) {
                self.relax(&mut open, current, self.target, walk, None, walk);
            }

            for (ri, road) in roads.iter().enumerate() {
                let Some(approach) = walker.walk(cp, road.from) else {
                    continue;
                };
                let weight = approach.saturating_add(road.cost);
                let exit = self.road_exits[ri];
                self.relax(&mut open, current, exit, weight, Some(ri), approach);
            }
        }

        log::debug!(
            "frontier exhausted after {} pops, {} unreachable",
            self.popped,
            target_point
        );
        None
    }

    fn relax(
        &mut self,
        open: &mut BinaryHeap<NodeRef>,
        from: NodeRef,
        to: usize,
        weight: u64,
        road: Option<usize>,
        walk: u64,
    ) {
        let tentative = from.cost.saturating_add(weight);
        if tentative >= self.costs[to] {
            return;
        }
        self.costs[to] = tentative;
        self.parents[to] = Some(Parent {
            prev: from.idx,
            road,
            walk,
        });
        open.push(NodeRef {
            idx: to,
            cost: tentative,
        });
    }
}
