use roadgrid_core::Point;

use crate::distance::manhattan;

/// Cost model for ordinary moves between two points.
///
/// The search asks the walker for the direct move to the target and for the
/// approach to every road entry. Returning `None` forbids that move.
pub trait Walker {
    /// Cost of walking from `from` to `to`, or `None` if the walk is not
    /// allowed. Must never be negative, which `u64` already guarantees.
    fn walk(&self, from: Point, to: Point) -> Option<u64>;
}

/// Unrestricted walking at Manhattan cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManhattanWalker;

impl Walker for ManhattanWalker {
    #[inline]
    fn walk(&self, from: Point, to: Point) -> Option<u64> {
        Some(manhattan(from, to))
    }
}

impl<W: Walker + ?Sized> Walker for &W {
    #[inline]
    fn walk(&self, from: Point, to: Point) -> Option<u64> {
        (**self).walk(from, to)
    }
}
