use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2, Rect};
use crate::segment::Segment;

/// Closed boundary curve of a polygon.
///
/// A ring that went through [`Correct`](crate::Correct) repeats its first point at the end, so the segment from the
/// last point back to the first one is stored explicitly. Rings that are not closed yet are still iterated as closed
/// curves by [`Ring::iter_segments`].
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ring<N = f64> {
    /// Points of the ring.
    pub points: Vec<Point2<N>>,
}

impl<N> Ring<N> {
    /// Creates a new ring.
    pub fn new(points: Vec<Point2<N>>) -> Self {
        Self { points }
    }
}

impl<N: CoordNum> Ring<N> {
    /// Whether the last point of the ring repeats the first one.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Iterates over the points of the ring, repeating the first point at the end if the ring is not closed.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Point2<N>> {
        let closing = if self.is_closed() {
            None
        } else {
            self.points.first()
        };
        self.points.iter().chain(closing)
    }

    /// Iterates over segments of the ring including the closing one.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, N>> {
        let mut points = self.iter_points_closing();
        let mut prev = points.next();
        std::iter::from_fn(move || {
            let from = prev?;
            let to = points.next()?;
            prev = Some(to);
            Some(Segment(from, to))
        })
    }

    /// Number of distinct points of the ring.
    pub fn distinct_points(&self) -> usize {
        self.points
            .iter()
            .map(|p| p.exact_key())
            .collect::<AHashSet<_>>()
            .len()
    }

    /// A ring with less than 3 distinct points encloses no area and has no orientation.
    pub fn is_degenerate(&self) -> bool {
        self.distinct_points() < 3
    }

    /// Bounding rectangle of the ring. `None` if it has no points.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        Rect::from_points(self.points.iter())
    }

    /// Reverses the direction of the ring.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }
}

impl<N> From<Vec<Point2<N>>> for Ring<N> {
    fn from(points: Vec<Point2<N>>) -> Self {
        Self { points }
    }
}
