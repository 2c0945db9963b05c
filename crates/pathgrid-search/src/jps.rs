//! Jump Point Search on uniform-cost 8-connected grids.
//!
//! JPS prunes the symmetric expansions A* performs on open grids: instead
//! of pushing every neighbor, it "jumps" along straight and diagonal rays
//! and only records *jump points* — the goal, cells with a forced
//! neighbor, or diagonal cells whose component cardinal rays hit one.
//! Costs are identical to A*'s; only the set of intermediate nodes
//! examined differs.

use std::collections::BinaryHeap;

use pathgrid_core::{DIRECTIONS_8, Point, Range};

use crate::PathSearcher;
use crate::distance::{euclidean, octile};
use crate::observer::SearchObserver;
use crate::path::reconstruct_full_path;
use crate::searcher::{NodeRef, PathResult};
use crate::traits::TraversableGrid;

impl PathSearcher {
    /// Compute a shortest path from `from` to `to` using Jump Point Search.
    ///
    /// Same contract as [`astar_path`](Self::astar_path): the dense path
    /// and its cost, `None` for unreachable or invalid endpoints, a
    /// single-cell result when `from == to`. The cost always matches the
    /// A* cost for the same query.
    pub fn jps_path<G: TraversableGrid>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
    ) -> Option<PathResult> {
        self.jps_search(grid, from, to, 0, None)
    }

    /// Like [`jps_path`](Self::jps_path), but emits a progress sample to
    /// `obs` every `every` jump-point expansions.
    pub fn jps_path_observed<G: TraversableGrid>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
        every: u64,
        obs: &mut dyn SearchObserver,
    ) -> Option<PathResult> {
        self.jps_search(grid, from, to, every.max(1), Some(obs))
    }

    fn jps_search<G: TraversableGrid>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
        every: u64,
        mut obs: Option<&mut dyn SearchObserver>,
    ) -> Option<PathResult> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if !grid.is_traversable(from) || !grid.is_traversable(to) {
            return None;
        }
        if start_idx == goal_idx {
            return Some(PathResult::single(from));
        }

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.f = octile(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut expansions: u64 = 0;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            if ci == goal_idx {
                break 'search true;
            }
            self.nodes[ci].open = false;

            let cp = self.point(ci);
            let cur_g = self.nodes[ci].g;

            // The start node has no arrival direction and expands all eight
            // directions; every other node expands its pruned set.
            let dirs = if self.nodes[ci].parent == usize::MAX {
                DIRECTIONS_8.to_vec()
            } else {
                let parent = self.point(self.nodes[ci].parent);
                pruned_dirs(grid, cp, parent)
            };

            expansions += 1;
            if let Some(obs) = obs.as_deref_mut() {
                if expansions % every == 0 {
                    self.emit_progress(cur_gen, expansions, cp, obs);
                }
            }

            for dir in dirs {
                let Some(jp) = jump(grid, self.rng, cp, dir, to) else {
                    continue;
                };
                let Some(ji) = self.idx(jp) else {
                    continue;
                };
                // The ray from cp to jp is pure cardinal or diagonal, so the
                // euclidean distance is the exact accumulated step cost.
                let tentative = cur_g + euclidean(cp, jp);
                let jn = &mut self.nodes[ji];
                if jn.generation == cur_gen && tentative >= jn.g {
                    continue;
                }
                jn.generation = cur_gen;
                jn.g = tentative;
                jn.f = tentative + octile(jp, to);
                jn.parent = ci;
                jn.open = true;
                open.push(NodeRef { idx: ji, f: jn.f });
            }
        };

        if !found {
            return None;
        }

        // Jump points only; expand into the dense cell-by-cell path.
        let waypoints = self.reconstruct_chain(goal_idx);
        Some(PathResult {
            cells: reconstruct_full_path(&waypoints),
            cost: self.nodes[goal_idx].g,
        })
    }
}

// ---------------------------------------------------------------------------
// JPS internals
// ---------------------------------------------------------------------------

/// Natural + forced successor directions for a node reached from `parent`.
///
/// The arrival direction is the per-axis sign of `p - parent` (parents are
/// jump points, so the segment between them is a pure ray). The exact
/// reverse direction is never produced.
fn pruned_dirs<G: TraversableGrid>(grid: &G, p: Point, parent: Point) -> Vec<Point> {
    let d = (p - parent).signum();
    let mut dirs = Vec::with_capacity(5);
    let pass = |q: Point| grid.is_traversable(q);

    if d.x != 0 && d.y != 0 {
        // Diagonal arrival: both components and the diagonal are natural.
        if pass(p.shift(0, d.y)) {
            dirs.push(Point::new(0, d.y));
        }
        if pass(p.shift(d.x, 0)) {
            dirs.push(Point::new(d.x, 0));
        }
        if pass(p.shift(d.x, d.y)) {
            dirs.push(Point::new(d.x, d.y));
        }
        // Forced: an obstacle beside the diagonal opens an otherwise-pruned
        // direction.
        if !pass(p.shift(-d.x, 0)) && pass(p.shift(-d.x, d.y)) {
            dirs.push(Point::new(-d.x, d.y));
        }
        if !pass(p.shift(0, -d.y)) && pass(p.shift(d.x, -d.y)) {
            dirs.push(Point::new(d.x, -d.y));
        }
    } else if d.x != 0 {
        // Horizontal arrival.
        if pass(p.shift(d.x, 0)) {
            dirs.push(Point::new(d.x, 0));
        }
        if !pass(p.shift(0, 1)) && pass(p.shift(d.x, 1)) {
            dirs.push(Point::new(d.x, 1));
        }
        if !pass(p.shift(0, -1)) && pass(p.shift(d.x, -1)) {
            dirs.push(Point::new(d.x, -1));
        }
    } else {
        // Vertical arrival.
        if pass(p.shift(0, d.y)) {
            dirs.push(Point::new(0, d.y));
        }
        if !pass(p.shift(1, 0)) && pass(p.shift(1, d.y)) {
            dirs.push(Point::new(1, d.y));
        }
        if !pass(p.shift(-1, 0)) && pass(p.shift(-1, d.y)) {
            dirs.push(Point::new(-1, d.y));
        }
    }
    dirs
}

/// Whether `n`, traversed along `dir`, has a forced neighbor: an adjacent
/// obstacle that makes an otherwise-pruned neighbor mandatory.
fn forced_neighbor<G: TraversableGrid>(grid: &G, n: Point, dir: Point) -> bool {
    let pass = |q: Point| grid.is_traversable(q);
    if dir.x != 0 && dir.y != 0 {
        (!pass(n.shift(-dir.x, 0)) && pass(n.shift(-dir.x, dir.y)))
            || (!pass(n.shift(0, -dir.y)) && pass(n.shift(dir.x, -dir.y)))
    } else if dir.x != 0 {
        (!pass(n.shift(0, 1)) && pass(n.shift(dir.x, 1)))
            || (!pass(n.shift(0, -1)) && pass(n.shift(dir.x, -1)))
    } else {
        (!pass(n.shift(1, 0)) && pass(n.shift(1, dir.y)))
            || (!pass(n.shift(-1, 0)) && pass(n.shift(-1, dir.y)))
    }
}

/// Step along `dir` from `p` until a jump point or a dead end.
///
/// Returns the jump point: the goal, a cell with a forced neighbor, or —
/// for diagonal travel — a cell where either component cardinal ray finds
/// one. `None` if the ray leaves `within` (the searched rectangle), leaves
/// the grid, or hits an obstacle first.
fn jump<G: TraversableGrid>(
    grid: &G,
    within: Range,
    p: Point,
    dir: Point,
    goal: Point,
) -> Option<Point> {
    let mut n = p + dir;
    loop {
        if !within.contains(n) || !grid.is_traversable(n) {
            return None;
        }
        if n == goal || forced_neighbor(grid, n, dir) {
            return Some(n);
        }
        if dir.x != 0
            && dir.y != 0
            && (jump(grid, within, n, Point::new(dir.x, 0), goal).is_some()
                || jump(grid, within, n, Point::new(0, dir.y), goal).is_some())
        {
            return Some(n);
        }
        n = n + dir;
    }
}
