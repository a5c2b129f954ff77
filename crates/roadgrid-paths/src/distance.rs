use roadgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Computed in 64-bit arithmetic, so any pair of `i32` points is safe.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    let (dx, dy) = a.abs_delta(b);
    dx + dy
}
