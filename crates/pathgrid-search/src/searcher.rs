//! The [`PathSearcher`] coordinator and its internal node storage.

use pathgrid_core::{Point, Range};

/// Sentinel cost meaning "not yet reached".
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A found path: the dense cell sequence (both endpoints included) and its
/// total cost under the uniform 1/√2 step model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub cells: Vec<Point>,
    pub cost: f64,
}

impl PathResult {
    pub(crate) fn single(p: Point) -> Self {
        Self {
            cells: vec![p],
            cost: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal nodes
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; fall back
        // to index order so ties are deterministic.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathSearcher
// ---------------------------------------------------------------------------

/// Central coordinator for shortest-path queries on a grid rectangle.
///
/// `PathSearcher` owns the per-query scratch state (node array, observer
/// snapshot buffers) so that repeated queries incur no allocations after
/// warm-up. Nodes are invalidated lazily via a generation counter; each
/// query bumps the generation instead of clearing the array.
///
/// A searcher serves one query at a time (`&mut self`); for concurrent
/// comparison runs, give each thread its own searcher over a shared grid.
pub struct PathSearcher {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // Snapshot buffers reused by observer sampling.
    pub(crate) obs_frontier: Vec<Point>,
    pub(crate) obs_visited: Vec<Point>,
}

impl PathSearcher {
    /// Create a new searcher for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            obs_frontier: Vec::new(),
            obs_visited: Vec::new(),
        }
    }

    /// Replace the underlying rectangle.
    ///
    /// If the new area fits within the existing node capacity, the storage
    /// is kept and only the generation counter is bumped so stale entries
    /// are ignored. Otherwise the node array is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Follow parent links from `goal_idx` back to the start and return the
    /// chain in start-to-goal order.
    pub(crate) fn reconstruct_chain(&self, goal_idx: usize) -> Vec<Point> {
        let mut chain = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            chain.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        chain.reverse();
        chain
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_result_round_trip() {
        let r = PathResult {
            cells: vec![Point::new(0, 0), Point::new(1, 1)],
            cost: std::f64::consts::SQRT_2,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
