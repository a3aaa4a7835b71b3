use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Rect};
use crate::model::Ring;
use crate::segment::Segment;

/// Area bounded by one outer ring with zero or more holes.
///
/// Canonical orientation is counterclockwise for the outer ring and clockwise for the holes, see
/// [`Correct`](crate::Correct).
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polygon<N = f64> {
    /// Outer ring.
    pub outer_ring: Ring<N>,
    /// Holes.
    pub inner_rings: Vec<Ring<N>>,
}

impl<N> Polygon<N> {
    /// Creates a new polygon.
    pub fn new(outer_ring: Ring<N>, inner_rings: Vec<Ring<N>>) -> Self {
        Self {
            outer_ring,
            inner_rings,
        }
    }

    /// Iterates over all rings of the polygon, the outer ring first.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ Ring<N>> {
        std::iter::once(&self.outer_ring).chain(self.inner_rings.iter())
    }
}

impl<N: CoordNum> Polygon<N> {
    /// Iterates over segments of all rings of the polygon.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, N>> {
        self.iter_rings().flat_map(|ring| ring.iter_segments())
    }

    /// Bounding rectangle of the outer ring.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        self.outer_ring.bounding_rect()
    }
}

impl<N> From<Ring<N>> for Polygon<N> {
    fn from(outer_ring: Ring<N>) -> Self {
        Self {
            outer_ring,
            inner_rings: vec![],
        }
    }
}
