//! Distance metrics and the uniform 8-way cost model.

use pathgrid_core::Point;

/// Cost of a cardinal (horizontal or vertical) step.
pub const CARDINAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Octile distance between two points.
///
/// The exact path cost between `a` and `b` on an empty grid with cardinal
/// cost 1 and diagonal cost √2; admissible and consistent as an A*/JPS
/// heuristic under that movement model.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    dx + dy + (DIAGONAL_COST - 2.0) * dx.min(dy)
}

/// Euclidean (straight-line) distance between two points.
///
/// For a pure cardinal or diagonal ray this equals the accumulated step
/// cost, which is why JPS can charge a whole jump segment with it.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Cost of a single unit step from `a` to an 8-adjacent `b`.
#[inline]
pub fn step_cost(a: Point, b: Point) -> f64 {
    if a.x != b.x && a.y != b.y {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Total cost of a dense path (sum of unit-step costs).
pub fn path_cost(cells: &[Point]) -> f64 {
    cells.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}
