//! Boolean occupancy grid.
//!
//! [`Grid`] is a `rows × cols` field of obstacle flags (`true` = blocked)
//! with row-major flat storage. It is the read-only input of every search:
//! mutation requires `&mut Grid`, so the borrow checker rules out edits
//! while a search holds a shared reference.

use crate::geom::{Point, Range};

/// The eight unit directions, in the fixed enumeration order used for
/// neighbor expansion: E, S, W, N, NW, NE, SW, SE.
///
/// Correctness does not depend on this order, but reproducible tie-breaking
/// between equal-cost paths does.
pub const DIRECTIONS_8: [Point; 8] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// A 2D boolean occupancy map. `true` = obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Range,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell free.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            width: bounds.width() as usize,
            cells: vec![false; bounds.len()],
        }
    }

    /// Create a grid where `f(p)` decides whether each cell is an obstacle.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> bool) -> Self {
        let mut grid = Self::new(width, height);
        for p in grid.bounds.iter() {
            let idx = grid.index(p);
            grid.cells[idx] = f(p);
        }
        grid
    }

    /// The bounding range of the grid, `[0, 0)..(width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Whether `p` is an obstacle. Out-of-bounds cells are not obstacles
    /// (they are simply not traversable).
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.contains(p) && self.cells[self.index(p)]
    }

    /// Whether `p` is inside the grid and free of obstacles.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.contains(p) && !self.cells[self.index(p)]
    }

    /// Mark `p` as an obstacle (`true`) or free (`false`).
    /// Does nothing if out of bounds.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        if self.contains(p) {
            let idx = self.index(p);
            self.cells[idx] = obstacle;
        }
    }

    /// Flip the obstacle flag at `p`. Does nothing if out of bounds.
    pub fn toggle_obstacle(&mut self, p: Point) {
        if self.contains(p) {
            let idx = self.index(p);
            self.cells[idx] = !self.cells[idx];
        }
    }

    /// Set every cell to the given obstacle flag.
    pub fn fill(&mut self, obstacle: bool) {
        self.cells.fill(obstacle);
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Append the traversable 8-way neighbors of `p` into `buf`, in
    /// [`DIRECTIONS_8`] order. The caller clears `buf` beforehand.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in DIRECTIONS_8 {
            let n = p + d;
            if self.is_traversable(n) {
                buf.push(n);
            }
        }
    }
}
