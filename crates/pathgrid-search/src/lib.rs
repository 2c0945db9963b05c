//! Shortest-path search over uniform-cost 8-connected occupancy grids.
//!
//! Two interchangeable strategies over the same movement model (cardinal
//! cost 1, diagonal cost √2):
//!
//! - **A\*** over individual cells ([`PathSearcher::astar_path`])
//! - **Jump Point Search**, which skips symmetric straight/diagonal runs
//!   and expands the sparse result back into a dense path
//!   ([`PathSearcher::jps_path`])
//!
//! Both return the same cost for any query; JPS typically expands far
//! fewer nodes on open maps. Queries go through [`PathSearcher`], which
//! owns and reuses internal caches so repeated searches incur no
//! allocations after warm-up, or through the one-shot [`find_path_astar`] /
//! [`find_path_jps`] wrappers.
//!
//! ```
//! use pathgrid_core::{Grid, Point};
//! use pathgrid_search::find_path_astar;
//!
//! let mut grid = Grid::new(8, 8);
//! grid.set_obstacle(Point::new(3, 3), true);
//! let (path, cost) = find_path_astar(&grid, Point::new(0, 0), Point::new(7, 7));
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert!(cost > 0.0);
//! ```

mod astar;
mod distance;
mod jps;
mod observer;
mod path;
mod searcher;
mod traits;

pub use distance::{CARDINAL_COST, DIAGONAL_COST, euclidean, octile, path_cost, step_cost};
pub use observer::{SearchObserver, SearchProgress};
pub use path::reconstruct_full_path;
pub use searcher::{PathResult, PathSearcher, UNREACHABLE};
pub use traits::TraversableGrid;

use pathgrid_core::Point;

/// One-shot A* query.
///
/// Returns the dense path and its cost. An empty path with cost 0 means no
/// path exists (including out-of-bounds or obstacle endpoints); a
/// single-cell path with cost 0 means `start == goal`.
pub fn find_path_astar<G: TraversableGrid>(
    grid: &G,
    start: Point,
    goal: Point,
) -> (Vec<Point>, f64) {
    let mut searcher = PathSearcher::new(grid.bounds());
    match searcher.astar_path(grid, start, goal) {
        Some(PathResult { cells, cost }) => (cells, cost),
        None => (Vec::new(), 0.0),
    }
}

/// One-shot Jump Point Search query. Same contract as [`find_path_astar`],
/// and always the same cost for the same query.
pub fn find_path_jps<G: TraversableGrid>(grid: &G, start: Point, goal: Point) -> (Vec<Point>, f64) {
    let mut searcher = PathSearcher::new(grid.bounds());
    match searcher.jps_path(grid, start, goal) {
        Some(PathResult { cells, cost }) => (cells, cost),
        None => (Vec::new(), 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::Grid;

    const EPS: f64 = 1e-9;

    /// Check that a dense path is 8-connected, obstacle-free, and that its
    /// summed step costs match the reported cost.
    fn assert_valid_path(grid: &Grid, cells: &[Point], cost: f64) {
        for w in cells.windows(2) {
            let d = w[1] - w[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != Point::ZERO);
        }
        for &c in cells {
            assert!(grid.is_traversable(c), "path crosses obstacle at {c}");
        }
        assert!((path_cost(cells) - cost).abs() < EPS);
    }

    #[test]
    fn no_path_contract_is_empty_and_zero() {
        let grid = Grid::from_fn(4, 4, |p| p.x == 2);
        let (path, cost) = find_path_astar(&grid, Point::new(0, 0), Point::new(3, 3));
        assert!(path.is_empty());
        assert_eq!(cost, 0.0);
        let (path, cost) = find_path_jps(&grid, Point::new(0, 0), Point::new(3, 3));
        assert!(path.is_empty());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn reflexivity() {
        let grid = Grid::new(5, 5);
        let p = Point::new(2, 3);
        assert_eq!(find_path_astar(&grid, p, p), (vec![p], 0.0));
        assert_eq!(find_path_jps(&grid, p, p), (vec![p], 0.0));
    }

    #[test]
    fn diagonal_wall_scenario() {
        // 5×5 grid, obstacles on the main diagonal at (1,1), (2,2), (3,3).
        let mut grid = Grid::new(5, 5);
        for i in 1..4 {
            grid.set_obstacle(Point::new(i, i), true);
        }
        let start = Point::new(0, 0);
        let goal = Point::new(4, 4);

        let (a_path, a_cost) = find_path_astar(&grid, start, goal);
        let (j_path, j_cost) = find_path_jps(&grid, start, goal);

        // Optimal under 8-way movement: slip past the diagonal wall with
        // three diagonal steps and two cardinal ones.
        let expected = 2.0 * CARDINAL_COST + 3.0 * DIAGONAL_COST;
        assert!((a_cost - expected).abs() < EPS);
        assert!((j_cost - a_cost).abs() < EPS);

        assert_valid_path(&grid, &a_path, a_cost);
        assert_valid_path(&grid, &j_path, j_cost);
        assert_eq!(a_path.first(), Some(&start));
        assert_eq!(a_path.last(), Some(&goal));
        assert_eq!(j_path.first(), Some(&start));
        assert_eq!(j_path.last(), Some(&goal));
    }

    #[test]
    fn costs_agree_for_all_reachable_pairs() {
        // A fixed scattering of obstacles; every traversable (start, goal)
        // pair must give the same cost from both algorithms.
        let grid = Grid::from_fn(8, 8, |p| (p.x * 31 + p.y * 17) % 5 == 0 && p.x + p.y > 1);
        let free: Vec<Point> = grid
            .bounds()
            .iter()
            .filter(|&p| grid.is_traversable(p))
            .collect();

        let mut astar = PathSearcher::new(grid.bounds());
        let mut jps = PathSearcher::new(grid.bounds());

        for &s in &free {
            for &g in &free {
                let a = astar.astar_path(&grid, s, g);
                let j = jps.jps_path(&grid, s, g);
                match (a, j) {
                    (Some(a), Some(j)) => {
                        assert!(
                            (a.cost - j.cost).abs() < EPS,
                            "cost mismatch {s}→{g}: astar {} vs jps {}",
                            a.cost,
                            j.cost
                        );
                        assert_valid_path(&grid, &a.cells, a.cost);
                        assert_valid_path(&grid, &j.cells, j.cost);
                    }
                    (None, None) => {}
                    (a, j) => panic!(
                        "reachability mismatch {s}→{g}: astar {:?} vs jps {:?}",
                        a.map(|r| r.cost),
                        j.map(|r| r.cost)
                    ),
                }
            }
        }
    }

    #[test]
    fn costs_agree_on_corridor_map() {
        // Rooms and corridors: walls with door gaps.
        let grid = Grid::from_fn(12, 12, |p| {
            (p.x == 5 && p.y != 2 && p.y != 9) || (p.y == 6 && p.x != 1 && p.x != 10)
        });
        let pairs = [
            (Point::new(0, 0), Point::new(11, 11)),
            (Point::new(11, 0), Point::new(0, 11)),
            (Point::new(2, 3), Point::new(9, 8)),
            (Point::new(0, 11), Point::new(11, 0)),
        ];
        let mut astar = PathSearcher::new(grid.bounds());
        let mut jps = PathSearcher::new(grid.bounds());
        for (s, g) in pairs {
            let a = astar.astar_path(&grid, s, g).unwrap();
            let j = jps.jps_path(&grid, s, g).unwrap();
            assert!((a.cost - j.cost).abs() < EPS, "{s}→{g}");
            assert_valid_path(&grid, &j.cells, j.cost);
        }
    }

    #[test]
    fn one_shot_wrappers_match_searcher_results() {
        let grid = Grid::from_fn(7, 7, |p| p.x == 3 && p.y % 3 != 0);
        let s = Point::new(0, 3);
        let g = Point::new(6, 3);

        let (path, cost) = find_path_astar(&grid, s, g);
        let mut ps = PathSearcher::new(grid.bounds());
        let r = ps.astar_path(&grid, s, g).unwrap();
        assert_eq!(path, r.cells);
        assert_eq!(cost, r.cost);

        let (jpath, jcost) = find_path_jps(&grid, s, g);
        let jr = ps.jps_path(&grid, s, g).unwrap();
        assert_eq!(jpath, jr.cells);
        assert_eq!(jcost, jr.cost);
    }
}
