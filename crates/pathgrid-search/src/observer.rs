//! One-way search progress notifications.
//!
//! A caller may attach a [`SearchObserver`] to a search together with a
//! sampling interval; every `every` node expansions the search hands it a
//! snapshot of the live frontier and visited sets. The observer is purely
//! a listener (a renderer, a statistics collector): it cannot pause,
//! cancel, or otherwise influence the search.

use pathgrid_core::Point;

use crate::PathSearcher;

/// A sampled view of a search in flight.
///
/// The slices borrow the searcher's internal snapshot buffers and are only
/// valid for the duration of the callback.
#[derive(Debug)]
pub struct SearchProgress<'a> {
    /// Number of nodes expanded so far.
    pub expansions: u64,
    /// The node expanded when the sample was taken.
    pub current: Point,
    /// Cells currently in the open set.
    pub frontier: &'a [Point],
    /// Cells already expanded.
    pub visited: &'a [Point],
}

/// Receiver for [`SearchProgress`] samples.
pub trait SearchObserver {
    fn on_progress(&mut self, progress: &SearchProgress<'_>);
}

impl<F: FnMut(&SearchProgress<'_>)> SearchObserver for F {
    fn on_progress(&mut self, progress: &SearchProgress<'_>) {
        self(progress)
    }
}

impl PathSearcher {
    /// Rebuild the snapshot buffers from the live node array and emit one
    /// progress sample.
    pub(crate) fn emit_progress(
        &mut self,
        cur_gen: u32,
        expansions: u64,
        current: Point,
        obs: &mut dyn SearchObserver,
    ) {
        self.obs_frontier.clear();
        self.obs_visited.clear();
        let width = self.width;
        let min = self.rng.min;
        for (i, n) in self.nodes.iter().enumerate() {
            if n.generation != cur_gen {
                continue;
            }
            let p = Point::new((i % width) as i32 + min.x, (i / width) as i32 + min.y);
            if n.open {
                self.obs_frontier.push(p);
            } else {
                self.obs_visited.push(p);
            }
        }
        obs.on_progress(&SearchProgress {
            expansions,
            current,
            frontier: &self.obs_frontier,
            visited: &self.obs_visited,
        });
    }
}
