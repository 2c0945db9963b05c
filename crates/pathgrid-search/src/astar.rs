use std::collections::BinaryHeap;

use pathgrid_core::{DIRECTIONS_8, Point};

use crate::PathSearcher;
use crate::distance::{octile, step_cost};
use crate::observer::SearchObserver;
use crate::searcher::{NodeRef, PathResult};
use crate::traits::TraversableGrid;

impl PathSearcher {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the dense path (both endpoints included) and its cost, or
    /// `None` if no path exists. Out-of-bounds or obstacle endpoints count
    /// as unreachable; `from == to` yields a single-cell path of cost 0.
    pub fn astar_path<G: TraversableGrid>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
    ) -> Option<PathResult> {
        self.astar_search(grid, from, to, 0, None)
    }

    /// Like [`astar_path`](Self::astar_path), but emits a progress sample
    /// to `obs` every `every` node expansions.
    pub fn astar_path_observed<G: TraversableGrid>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
        every: u64,
        obs: &mut dyn SearchObserver,
    ) -> Option<PathResult> {
        self.astar_search(grid, from, to, every.max(1), Some(obs))
    }

    fn astar_search<G: TraversableGrid>(
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

        // Bump generation to lazily invalidate all nodes.
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

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            expansions += 1;
            if let Some(obs) = obs.as_deref_mut() {
                if expansions % every == 0 {
                    self.emit_progress(cur_gen, expansions, cp, obs);
                }
            }

            for d in DIRECTIONS_8 {
                let np = cp + d;
                if !grid.is_traversable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + step_cost(cp, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already seen; closed nodes always fail this test too,
                    // since a consistent heuristic finalizes them optimally.
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.f = tentative + octile(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        if !found {
            return None;
        }

        Some(PathResult {
            cells: self.reconstruct_chain(goal_idx),
            cost: self.nodes[goal_idx].g,
        })
    }
}
