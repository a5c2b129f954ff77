use std::fmt;

use roadgrid_core::Point;

/// A directed shortcut: from anywhere, walk to `from`, then pay `cost` to
/// arrive at `to`, whatever the distance between the two.
///
/// Self-loops, zero costs and duplicate roads are all allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialRoad {
    pub from: Point,
    pub to: Point,
    pub cost: u64,
}

impl SpecialRoad {
    /// Create a new road.
    #[inline]
    pub const fn new(from: Point, to: Point, cost: u64) -> Self {
        Self { from, to, cost }
    }

    /// Whether the road starts and ends on the same point.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for SpecialRoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} @ {}", self.from, self.to, self.cost)
    }
}
