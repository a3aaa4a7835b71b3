//! Geometric predicates used by the overlay algorithms.
//!
//! Every predicate is a separate trait, so an alternative coordinate system can replace any of them without touching
//! the algorithms. [`OverlayStrategy`] bundles all of them and is implemented automatically for any type implementing
//! the four predicate traits. [`CartesianStrategy`] implements the predicates for planar cartesian coordinates.

use serde::{Deserialize, Serialize};

use crate::cartesian::Point2;
use crate::model::{Polygon, Ring};
use crate::segment::Segment;

mod cartesian;

pub use cartesian::CartesianStrategy;

/// Position of a point relative to an areal geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Strictly inside the area.
    Inside,
    /// On one of the boundary rings.
    Boundary,
    /// Strictly outside the area.
    Outside,
}

/// Result of intersecting two segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentIntersection<N> {
    /// The segments have no common points.
    Disjoint,
    /// The segments cross at a point inside both of them.
    Crossing(Point2<N>),
    /// An endpoint of one segment lies on the other segment.
    Touching(Point2<N>),
    /// The segments are collinear and share the sub-segment between the two points. The points are ordered in the
    /// direction of the first segment.
    Overlap(Point2<N>, Point2<N>),
}

impl<N> SegmentIntersection<N> {
    /// Returns true if the segments have at least one common point.
    pub fn is_intersecting(&self) -> bool {
        !matches!(self, SegmentIntersection::Disjoint)
    }
}

/// Equality of two points.
pub trait PointInPointStrategy<N> {
    /// Returns true if the points are considered the same point.
    fn points_equal(&self, a: &Point2<N>, b: &Point2<N>) -> bool;
}

/// Position of a point relative to rings and polygons.
pub trait PointInPolygonStrategy<N> {
    /// Position of the point relative to the area enclosed by the ring. The orientation of the ring is irrelevant.
    fn locate_in_ring(&self, point: &Point2<N>, ring: &Ring<N>) -> Location;

    /// Position of the point relative to the polygon. Points inside a hole are outside of the polygon.
    fn locate_in_polygon(&self, point: &Point2<N>, polygon: &Polygon<N>) -> Location {
        match self.locate_in_ring(point, &polygon.outer_ring) {
            Location::Inside => {}
            other => return other,
        }

        for hole in &polygon.inner_rings {
            match self.locate_in_ring(point, hole) {
                Location::Inside => return Location::Outside,
                Location::Boundary => return Location::Boundary,
                Location::Outside => {}
            }
        }

        Location::Inside
    }

    /// Position of the point relative to the union of the polygons.
    fn locate_in_polygons(&self, point: &Point2<N>, polygons: &[Polygon<N>]) -> Location {
        let mut location = Location::Outside;
        for polygon in polygons {
            match self.locate_in_polygon(point, polygon) {
                Location::Inside => return Location::Inside,
                Location::Boundary => location = Location::Boundary,
                Location::Outside => {}
            }
        }

        location
    }
}

/// Intersection of two segments.
pub trait IntersectionStrategy<N> {
    /// Finds common points of two segments.
    fn intersect(&self, a: Segment<'_, N>, b: Segment<'_, N>) -> SegmentIntersection<N>;

    /// Returns true if the point lies on the segment, including its endpoints.
    fn point_on_segment(&self, point: &Point2<N>, segment: Segment<'_, N>) -> bool {
        self.intersect(segment, Segment(point, point))
            .is_intersecting()
    }
}

/// Signed area of rings.
pub trait AreaStrategy<N> {
    /// Signed area of the ring: positive for counterclockwise rings, negative for clockwise ones.
    fn signed_area(&self, ring: &Ring<N>) -> N;
}

/// Full set of predicates required by the overlay engine.
pub trait OverlayStrategy<N>:
    PointInPointStrategy<N> + PointInPolygonStrategy<N> + IntersectionStrategy<N> + AreaStrategy<N>
{
}

impl<N, T> OverlayStrategy<N> for T where
    T: PointInPointStrategy<N>
        + PointInPolygonStrategy<N>
        + IntersectionStrategy<N>
        + AreaStrategy<N>
{
}
