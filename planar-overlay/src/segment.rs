//! Straight line segments between two borrowed points.

use crate::cartesian::{CoordNum, Orientation, Point2, Rect};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, N>(pub &'a Point2<N>, pub &'a Point2<N>);

impl<N> Clone for Segment<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Segment<'_, N> {}

impl<'a, N: CoordNum> Segment<'a, N> {
    /// Returns true if both endpoints of the segment are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.0 == self.1
    }

    /// Squared length of the segment.
    pub fn length_sq(&self) -> N {
        self.0.distance_sq(self.1)
    }

    /// Bounding rectangle of the segment.
    pub fn bounding_rect(&self) -> Rect<N> {
        Rect::from_point(self.0).merge(Rect::from_point(self.1))
    }

    /// Position of the orthogonal projection of the point on the segment line, `0` at the start point and `1` at the
    /// end point.
    ///
    /// For a degenerate segment returns `0`.
    pub fn param_of(&self, point: &Point2<N>) -> N {
        let ds = *self.1 - *self.0;
        let len = ds.magnitude_sq();
        if len == N::zero() {
            return N::zero();
        }

        (*point - *self.0).dot(&ds) / len
    }

    /// Point on the segment line at the given parameter (see [`Segment::param_of`]).
    pub fn point_at(&self, param: N) -> Point2<N> {
        *self.0 + (*self.1 - *self.0) * param
    }

    /// Returns true if the point lies on the segment, including its endpoints.
    ///
    /// The test uses exact orientation of the three points, so it never accepts a point just next to the segment
    /// because of a rounding error.
    pub fn contains_point(&self, point: &Point2<N>) -> bool {
        Orientation::triplet(self.0, self.1, point) == Orientation::Collinear
            && self.bounding_rect().contains(point)
    }
}

/// Iterates over consecutive pairs of points as segments.
pub(crate) fn segments<N>(points: &[Point2<N>]) -> impl Iterator<Item = Segment<'_, N>> {
    points.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
}
