use roadgrid_core::Point;

use crate::cost::PathCost;
use crate::road::SpecialRoad;
use crate::search::RoadSearch;
use crate::traits::{ManhattanWalker, Walker};

/// Minimum cost of travelling from `start` to `target` by walking at
/// Manhattan cost and taking any number of `roads`.
///
/// Returns [`PathCost::Reachable(0)`](PathCost::Reachable) when `start ==
/// target`. With unrestricted walking the target is always reachable.
pub fn compute_min_cost(start: Point, target: Point, roads: &[SpecialRoad]) -> PathCost {
    compute_min_cost_with(&ManhattanWalker, start, target, roads)
}

/// Like [`compute_min_cost`], with ordinary moves priced by `walker`.
///
/// If the walker forbids every way into the target, the result is
/// [`PathCost::Unreachable`].
pub fn compute_min_cost_with<W: Walker>(
    walker: &W,
    start: Point,
    target: Point,
    roads: &[SpecialRoad],
) -> PathCost {
    RoadSearch::new(start, target, roads).run(walker).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use rand::{Rng, SeedableRng};

    fn road(x0: i32, y0: i32, x1: i32, y1: i32, cost: u64) -> SpecialRoad {
        SpecialRoad::new(Point::new(x0, y0), Point::new(x1, y1), cost)
    }

    fn random_point(rng: &mut impl Rng) -> Point {
        Point::new(rng.random_range(-10..10), rng.random_range(-10..10))
    }

    fn random_roads(rng: &mut impl Rng, n: usize) -> Vec<SpecialRoad> {
        let mut roads = Vec::with_capacity(n);
        for _ in 0..n {
            let from = random_point(rng);
            let to = random_point(rng);
            roads.push(SpecialRoad::new(from, to, rng.random_range(0..15)));
        }
        roads
    }

    /// Eager Bellman-Ford over the same point universe, materializing every
    /// edge up front.
    fn eager_min_cost(start: Point, target: Point, roads: &[SpecialRoad]) -> u64 {
        let mut points = vec![start, target];
        for r in roads {
            points.push(r.from);
            points.push(r.to);
        }
        let mut edges = Vec::new();
        for &p in &points {
            edges.push((p, target, manhattan(p, target)));
            for r in roads {
                edges.push((p, r.to, manhattan(p, r.from) + r.cost));
            }
        }
        let mut best: std::collections::HashMap<Point, u64> =
            points.iter().map(|&p| (p, u64::MAX)).collect();
        best.insert(start, 0);
        loop {
            let mut changed = false;
            for &(a, b, w) in &edges {
                let ca = best[&a];
                if ca == u64::MAX {
                    continue;
                }
                if ca + w < best[&b] {
                    best.insert(b, ca + w);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        best[&target]
    }

    #[test]
    fn identity_is_free() {
        for p in [Point::new(0, 0), Point::new(-5, 12), Point::new(7, -7)] {
            assert_eq!(compute_min_cost(p, p, &[]), PathCost::Reachable(0));
        }
    }

    #[test]
    fn identity_is_free_even_with_roads() {
        let p = Point::new(1, 1);
        let roads = [road(1, 1, 9, 9, 0), road(9, 9, 1, 1, 0)];
        assert_eq!(compute_min_cost(p, p, &roads), PathCost::Reachable(0));
    }

    #[test]
    fn no_roads_is_manhattan() {
        let a = Point::new(-3, 8);
        let b = Point::new(4, -2);
        assert_eq!(compute_min_cost(a, b, &[]), PathCost::Reachable(17));
        assert_eq!(compute_min_cost(b, a, &[]), PathCost::Reachable(17));
    }

    #[test]
    fn chained_roads_beat_walking() {
        let roads = [road(0, 0, 2, 2, 1), road(2, 2, 5, 5, 2)];
        let cost = compute_min_cost(Point::new(0, 0), Point::new(6, 6), &roads);
        assert_eq!(cost, PathCost::Reachable(5));
    }

    #[test]
    fn zero_cost_road_is_free_shortcut() {
        let a = Point::new(0, 0);
        let b = Point::new(40, -25);
        let cost = compute_min_cost(a, b, &[SpecialRoad::new(a, b, 0)]);
        assert_eq!(cost, PathCost::Reachable(0));
    }

    #[test]
    fn road_usable_away_from_its_entry() {
        // Walk 1 to the entry, ride for 1, walk 1 off the exit.
        let roads = [road(1, 0, 10, 0, 1)];
        let cost = compute_min_cost(Point::new(0, 0), Point::new(11, 0), &roads);
        assert_eq!(cost, PathCost::Reachable(3));
    }

    #[test]
    fn dominated_road_has_no_effect() {
        let start = Point::new(0, 0);
        let target = Point::new(3, 4);
        let roads = [road(0, 0, 3, 4, 50), road(1, 1, 3, 3, 9)];
        assert_eq!(
            compute_min_cost(start, target, &roads),
            PathCost::Reachable(manhattan(start, target))
        );
    }

    #[test]
    fn self_loops_and_duplicates_are_harmless() {
        let roads = [
            road(2, 2, 2, 2, 0),
            road(0, 0, 2, 2, 1),
            road(0, 0, 2, 2, 1),
            road(2, 2, 5, 5, 2),
            road(5, 5, 5, 5, 3),
        ];
        let cost = compute_min_cost(Point::new(0, 0), Point::new(6, 6), &roads);
        assert_eq!(cost, PathCost::Reachable(5));
    }

    #[test]
    fn road_leading_away_is_ignored() {
        let roads = [road(0, 0, -20, -20, 0)];
        let cost = compute_min_cost(Point::new(0, 0), Point::new(2, 2), &roads);
        assert_eq!(cost, PathCost::Reachable(4));
    }

    #[test]
    fn road_ending_on_start_is_ignored() {
        let roads = [road(3, 3, 0, 0, 0)];
        let cost = compute_min_cost(Point::new(0, 0), Point::new(3, 3), &roads);
        assert_eq!(cost, PathCost::Reachable(6));
    }

    #[test]
    fn tie_break_order_does_not_change_cost() {
        // Two routes of equal cost 4 via different roads.
        let roads = vec![
            road(0, 0, 4, 0, 2),
            road(4, 0, 4, 4, 2),
            road(0, 0, 0, 4, 2),
            road(0, 4, 4, 4, 2),
        ];
        let start = Point::new(0, 0);
        let target = Point::new(4, 4);
        let expected = compute_min_cost(start, target, &roads);
        assert_eq!(expected, PathCost::Reachable(4));

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut shuffled = roads.clone();
        for _ in 0..20 {
            let i = rng.random_range(0..shuffled.len());
            let j = rng.random_range(0..shuffled.len());
            shuffled.swap(i, j);
            assert_eq!(compute_min_cost(start, target, &shuffled), expected);
        }
    }

    #[test]
    fn adding_a_road_never_increases_cost() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let start = random_point(&mut rng);
            let target = random_point(&mut rng);
            let n = rng.random_range(0..6);
            let mut roads = random_roads(&mut rng, n);
            let before = compute_min_cost(start, target, &roads).cost().unwrap();
            roads.push(SpecialRoad::new(
                random_point(&mut rng),
                random_point(&mut rng),
                rng.random_range(0..15),
            ));
            let after = compute_min_cost(start, target, &roads).cost().unwrap();
            assert!(after <= before, "{after} > {before} for {roads:?}");
            assert!(after <= manhattan(start, target));
        }
    }

    #[test]
    fn lazy_search_matches_eager_graph() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
        for _ in 0..200 {
            let start = random_point(&mut rng);
            let target = random_point(&mut rng);
            let n = rng.random_range(0..8);
            let roads = random_roads(&mut rng, n);
            assert_eq!(
                compute_min_cost(start, target, &roads),
                PathCost::Reachable(eager_min_cost(start, target, &roads)),
                "start {start} target {target} roads {roads:?}"
            );
        }
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let start = Point::new(i32::MIN, i32::MIN);
        let target = Point::new(i32::MAX, i32::MAX);
        let expected = 2 * u64::from(u32::MAX);
        assert_eq!(compute_min_cost(start, target, &[]), PathCost::Reachable(expected));
        let roads = [SpecialRoad::new(start, target, u64::MAX)];
        assert_eq!(compute_min_cost(start, target, &roads), PathCost::Reachable(expected));
    }

    // -----------------------------------------------------------------------
    // Restricted walkers
    // -----------------------------------------------------------------------

    /// Only allows standing still.
    struct Frozen;

    impl Walker for Frozen {
        fn walk(&self, from: Point, to: Point) -> Option<u64> {
            (from == to).then_some(0)
        }
    }

    #[test]
    fn forbidden_walking_is_unreachable() {
        let cost = compute_min_cost_with(&Frozen, Point::new(0, 0), Point::new(1, 0), &[]);
        assert_eq!(cost, PathCost::Unreachable);
    }

    #[test]
    fn forbidden_walking_still_allows_roads_from_where_you_stand() {
        let roads = [road(0, 0, 3, 3, 4), road(3, 3, 7, 1, 2)];
        let cost = compute_min_cost_with(&Frozen, Point::new(0, 0), Point::new(7, 1), &roads);
        assert_eq!(cost, PathCost::Reachable(6));
    }

    #[test]
    fn forbidden_walking_with_broken_chain_is_unreachable() {
        let roads = [road(0, 0, 3, 3, 4), road(3, 4, 7, 1, 2)];
        let cost = compute_min_cost_with(&Frozen, Point::new(0, 0), Point::new(7, 1), &roads);
        assert_eq!(cost, PathCost::Unreachable);
    }

    #[test]
    fn frozen_identity_is_still_free() {
        let p = Point::new(2, 9);
        assert_eq!(compute_min_cost_with(&Frozen, p, p, &[]), PathCost::Reachable(0));
    }

    /// Walking costs double, as if on rough terrain.
    struct Rough;

    impl Walker for Rough {
        fn walk(&self, from: Point, to: Point) -> Option<u64> {
            Some(2 * manhattan(from, to))
        }
    }

    #[test]
    fn custom_walker_prices_the_approach() {
        let roads = [road(1, 0, 10, 0, 1)];
        let cost = compute_min_cost_with(&Rough, Point::new(0, 0), Point::new(11, 0), &roads);
        // 2 to the entry, 1 on the road, 2 off the exit.
        assert_eq!(cost, PathCost::Reachable(5));
    }
}
