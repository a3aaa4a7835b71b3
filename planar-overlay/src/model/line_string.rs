use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2, Rect};
use crate::segment::{segments, Segment};

/// Open curve given by a sequence of points.
///
/// Unlike a [`Ring`](super::Ring), a line string is never implicitly closed: even if the first and the last points
/// are the same, the line string has two endpoints at that location.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineString<N = f64> {
    points: Vec<Point2<N>>,
}

impl<N> std::ops::Deref for LineString<N> {
    type Target = Vec<Point2<N>>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<N> std::ops::DerefMut for LineString<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.points
    }
}

impl<N> LineString<N> {
    /// Creates a new line string.
    pub fn new(points: Vec<Point2<N>>) -> Self {
        Self { points }
    }

    /// Consumes the line string returning its points.
    pub fn into_points(self) -> Vec<Point2<N>> {
        self.points
    }
}

impl<N: CoordNum> LineString<N> {
    /// Iterates over segments of the line string.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, N>> {
        segments(&self.points)
    }

    /// Bounding rectangle of the line string. `None` if it has no points.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        Rect::from_points(self.points.iter())
    }
}

impl<N> From<Vec<Point2<N>>> for LineString<N> {
    fn from(points: Vec<Point2<N>>) -> Self {
        Self { points }
    }
}

impl<N> FromIterator<Point2<N>> for LineString<N> {
    fn from_iter<T: IntoIterator<Item = Point2<N>>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
