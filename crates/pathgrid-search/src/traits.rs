//! The seam between the search engine and map providers.

use pathgrid_core::{Grid, Point, Range};

/// Read-only map interface consumed by the searches.
///
/// Any rectangular occupancy representation can plug in; the engine never
/// needs more than bounds and a traversability test.
pub trait TraversableGrid {
    /// The rectangle of valid coordinates.
    fn bounds(&self) -> Range;

    /// Whether `p` is inside the bounds and free of obstacles.
    fn is_traversable(&self, p: Point) -> bool;
}

impl TraversableGrid for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_traversable(&self, p: Point) -> bool {
        Grid::is_traversable(self, p)
    }
}

impl<T: TraversableGrid + ?Sized> TraversableGrid for &T {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn is_traversable(&self, p: Point) -> bool {
        (**self).is_traversable(p)
    }
}
