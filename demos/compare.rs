//! Side-by-side timing comparison of A* and Jump Point Search.
//!
//! Usage:
//!
//! ```text
//! compare [MAP_FILE] [SEED]
//! ```
//!
//! With a `.map` file argument the grid is loaded from disk; otherwise a
//! random 64×64 grid is generated (seeded, so runs are reproducible).
//! Start and goal are the first and last traversable cells in row-major
//! order.

use std::env;
use std::error::Error;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use pathgrid_core::{Grid, Point};
use pathgrid_search::{PathResult, PathSearcher};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const OBSTACLE_DENSITY: f64 = 0.25;

fn random_grid(width: i32, height: i32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_| rng.random_bool(OBSTACLE_DENSITY))
}

fn endpoints(grid: &Grid) -> Option<(Point, Point)> {
    let mut cells = grid.bounds().iter().filter(|&p| grid.is_traversable(p));
    let start = cells.next()?;
    let goal = cells.last()?;
    (start != goal).then_some((start, goal))
}

fn timed(f: impl FnOnce() -> Option<PathResult>) -> (Option<PathResult>, Duration) {
    let t = Instant::now();
    let r = f();
    (r, t.elapsed())
}

fn report(name: &str, result: &Option<PathResult>, elapsed: Duration) {
    match result {
        Some(r) => println!(
            "{name:5}: cost {:.3}, {} cells, {elapsed:?}",
            r.cost,
            r.cells.len()
        ),
        None => println!("{name:5}: no path ({elapsed:?})"),
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let map_file = args.next();
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 0xC0FFEE,
    };

    let grid = match &map_file {
        Some(path) => pathgrid_map::load_map(path)?,
        None => random_grid(64, 64, seed),
    };
    println!(
        "grid {}x{}, {} obstacles",
        grid.width(),
        grid.height(),
        grid.obstacle_count()
    );

    let Some((start, goal)) = endpoints(&grid) else {
        println!("grid has no two traversable cells");
        return Ok(ExitCode::SUCCESS);
    };
    println!("start {start}, goal {goal}");

    let mut searcher = PathSearcher::new(grid.bounds());
    let (astar, astar_time) = timed(|| searcher.astar_path(&grid, start, goal));
    report("A*", &astar, astar_time);

    let mut searcher = PathSearcher::new(grid.bounds());
    let (jps, jps_time) = timed(|| searcher.jps_path(&grid, start, goal));
    report("JPS", &jps, jps_time);

    match (&astar, &jps) {
        (Some(a), Some(j)) => {
            if (a.cost - j.cost).abs() > 1e-9 {
                eprintln!("COST MISMATCH: A* {} vs JPS {}", a.cost, j.cost);
                return Ok(ExitCode::FAILURE);
            }
            let speedup = astar_time.as_secs_f64() / jps_time.as_secs_f64().max(1e-12);
            println!("costs agree; JPS speedup {speedup:.2}x");
        }
        (None, None) => println!("both report no path"),
        _ => {
            eprintln!("REACHABILITY MISMATCH between A* and JPS");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_grid_is_reproducible() {
        let a = random_grid(16, 16, 7);
        let b = random_grid(16, 16, 7);
        assert_eq!(a, b);
        assert!(a.obstacle_count() > 0);
        assert!(a.obstacle_count() < 16 * 16);
    }

    #[test]
    fn endpoints_are_traversable_and_distinct() {
        let grid = random_grid(16, 16, 7);
        let (start, goal) = endpoints(&grid).unwrap();
        assert!(grid.is_traversable(start));
        assert!(grid.is_traversable(goal));
        assert_ne!(start, goal);
    }

    #[test]
    fn endpoints_need_two_free_cells() {
        let mut grid = Grid::new(2, 1);
        grid.fill(true);
        assert_eq!(endpoints(&grid), None);
        grid.set_obstacle(Point::new(0, 0), false);
        assert_eq!(endpoints(&grid), None);
        grid.set_obstacle(Point::new(1, 0), false);
        assert_eq!(endpoints(&grid), Some((Point::new(0, 0), Point::new(1, 0))));
    }
}
