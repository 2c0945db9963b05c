//! Dense path reconstruction from sparse waypoints.

use pathgrid_core::Point;

/// Expand a waypoint sequence into a contiguous cell-by-cell path.
///
/// Between each consecutive waypoint pair, steps by the per-axis sign of
/// the remaining delta until the next waypoint is reached. JPS produces
/// pure cardinal or diagonal segments, which this fills exactly; dog-leg
/// segments degrade gracefully into a diagonal run followed by a straight
/// run. Inputs with fewer than two waypoints are returned unchanged.
pub fn reconstruct_full_path(waypoints: &[Point]) -> Vec<Point> {
    if waypoints.len() <= 1 {
        return waypoints.to_vec();
    }
    let mut cells = Vec::with_capacity(waypoints.len());
    cells.push(waypoints[0]);
    for w in waypoints.windows(2) {
        let (a, b) = (w[0], w[1]);
        let mut cur = a;
        while cur != b {
            cur = cur + (b - cur).signum();
            cells.push(cur);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_pass_through() {
        assert!(reconstruct_full_path(&[]).is_empty());
        let single = [Point::new(2, 3)];
        assert_eq!(reconstruct_full_path(&single), single);
    }

    #[test]
    fn cardinal_segment() {
        let full = reconstruct_full_path(&[Point::new(0, 0), Point::new(3, 0)]);
        assert_eq!(
            full,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
            ]
        );
    }

    #[test]
    fn diagonal_segment() {
        let full = reconstruct_full_path(&[Point::new(1, 1), Point::new(-1, 3)]);
        assert_eq!(
            full,
            vec![Point::new(1, 1), Point::new(0, 2), Point::new(-1, 3)]
        );
    }

    #[test]
    fn multi_segment_chain() {
        let full = reconstruct_full_path(&[
            Point::new(0, 0),
            Point::new(2, 2),
            Point::new(2, 4),
        ]);
        assert_eq!(
            full,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(2, 3),
                Point::new(2, 4),
            ]
        );
    }

    #[test]
    fn dogleg_goes_diagonal_then_straight() {
        let full = reconstruct_full_path(&[Point::new(0, 0), Point::new(3, 1)]);
        assert_eq!(
            full,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
            ]
        );
    }

    #[test]
    fn every_step_is_a_unit_direction() {
        let full = reconstruct_full_path(&[
            Point::new(0, 0),
            Point::new(4, 4),
            Point::new(4, 7),
            Point::new(1, 7),
        ]);
        for w in full.windows(2) {
            let d = w[1] - w[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != Point::ZERO);
        }
    }
}
