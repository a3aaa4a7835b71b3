use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2};
use crate::model::{Polygon, Ring};

/// Axis-aligned rectangle given by its min and max corners.
///
/// A well-formed rectangle has `x_min <= x_max` and `y_min <= y_max`. The type does not enforce it: a negative
/// [`buffer`](crate::buffer::buffer) can invert the rectangle, and [`Correct`](crate::Correct) swaps the values back.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Min x.
    pub x_min: N,
    /// Min y.
    pub y_min: N,
    /// Max x.
    pub x_max: N,
    /// Max y.
    pub y_max: N,
}

impl<N: CoordNum> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a rectangle from its min and max corners.
    pub fn from_corners(min: Point2<N>, max: Point2<N>) -> Self {
        Self::new(min.x(), min.y(), max.x(), max.y())
    }

    /// Min corner.
    pub fn min(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_min)
    }

    /// Max corner.
    pub fn max(&self) -> Point2<N> {
        Point2::new(self.x_max, self.y_max)
    }

    /// Width of the rectangle. Negative for an inverted rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle. Negative for an inverted rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Rectangle containing a single point.
    pub fn from_point(p: &Point2<N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a Point2<N>>) -> Option<Self>
    where
        N: 'a,
    {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }

    /// Returns true if the point is inside the rectangle or on its sides.
    pub fn contains(&self, point: &Point2<N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if the rectangles have at least one common point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }

    /// Counterclockwise closed ring along the sides of the rectangle.
    pub fn to_ring(&self) -> Ring<N> {
        Ring::new(vec![
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
            Point2::new(self.x_min, self.y_min),
        ])
    }

    /// Polygon covering the rectangle.
    pub fn to_polygon(&self) -> Polygon<N> {
        Polygon::new(self.to_ring(), vec![])
    }
}
