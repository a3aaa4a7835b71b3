use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Orientation, Point2};
use crate::model::Ring;
use crate::segment::Segment;
use crate::strategy::{
    AreaStrategy, IntersectionStrategy, Location, PointInPointStrategy, PointInPolygonStrategy,
    SegmentIntersection,
};

/// Predicates for planar cartesian coordinates.
///
/// Orientation tests compare determinants with exact zero, so a point is on a segment only if it is exactly there.
/// The only tolerance is the one used to compare two points with each other.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianStrategy {
    /// Maximum distance between two points considered equal. Zero means exact comparison.
    #[serde(default)]
    pub tolerance: f64,
}

impl CartesianStrategy {
    /// Strategy with exact point equality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strategy that treats points closer than `tolerance` as equal.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    fn tolerance<N: CoordNum>(&self) -> N {
        N::from_f64(self.tolerance.abs()).unwrap_or_else(N::zero)
    }
}

impl<N: CoordNum> PointInPointStrategy<N> for CartesianStrategy {
    fn points_equal(&self, a: &Point2<N>, b: &Point2<N>) -> bool {
        if a == b {
            return true;
        }

        let tolerance = self.tolerance::<N>();
        tolerance > N::zero() && a.distance_sq(b) <= tolerance * tolerance
    }
}

impl<N: CoordNum> PointInPolygonStrategy<N> for CartesianStrategy {
    fn locate_in_ring(&self, point: &Point2<N>, ring: &Ring<N>) -> Location {
        let mut wn = 0i64;
        let y = point.y();

        for segment in ring.iter_segments() {
            if segment.contains_point(point) {
                return Location::Boundary;
            }

            if segment.0.y() <= y {
                if segment.1.y() > y
                    && Orientation::triplet(segment.0, segment.1, point)
                        == Orientation::Counterclockwise
                {
                    wn += 1;
                }
            } else if segment.1.y() <= y
                && Orientation::triplet(segment.0, segment.1, point) == Orientation::Clockwise
            {
                wn -= 1;
            }
        }

        if wn != 0 {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}

impl<N: CoordNum> IntersectionStrategy<N> for CartesianStrategy {
    fn intersect(&self, a: Segment<'_, N>, b: Segment<'_, N>) -> SegmentIntersection<N> {
        let a_rect = a.bounding_rect();
        let b_rect = b.bounding_rect();
        if !a_rect.intersects(&b_rect) {
            return SegmentIntersection::Disjoint;
        }

        if a.is_degenerate() || b.is_degenerate() {
            let (point, segment) = if a.is_degenerate() { (a.0, b) } else { (b.0, a) };
            return if segment.contains_point(point) {
                SegmentIntersection::Touching(*point)
            } else {
                SegmentIntersection::Disjoint
            };
        }

        let o1 = Orientation::triplet(a.0, a.1, b.0);
        let o2 = Orientation::triplet(a.0, a.1, b.1);
        if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
            return collinear_overlap(a, b);
        }

        for (point, segment) in [(b.0, a), (b.1, a), (a.0, b), (a.1, b)] {
            if segment.contains_point(point) {
                return SegmentIntersection::Touching(*point);
            }
        }

        let o3 = Orientation::triplet(b.0, b.1, a.0);
        let o4 = Orientation::triplet(b.0, b.1, a.1);
        if o1 == o2 || o3 == o4 {
            return SegmentIntersection::Disjoint;
        }

        let da = *a.1 - *a.0;
        let db = *b.1 - *b.0;
        let t = (*b.0 - *a.0).cross(&db) / da.cross(&db);
        let p = a.point_at(t);

        // Keep the computed point inside both segments' boxes. This also makes the point exact when one of the
        // segments is axis-aligned.
        let x_min = a_rect.x_min.max(b_rect.x_min);
        let x_max = a_rect.x_max.min(b_rect.x_max);
        let y_min = a_rect.y_min.max(b_rect.y_min);
        let y_max = a_rect.y_max.min(b_rect.y_max);
        SegmentIntersection::Crossing(Point2::new(
            p.x().max(x_min).min(x_max),
            p.y().max(y_min).min(y_max),
        ))
    }
}

/// Common part of two collinear non-degenerate segments. All returned points are endpoints of the input segments.
fn collinear_overlap<N: CoordNum>(a: Segment<'_, N>, b: Segment<'_, N>) -> SegmentIntersection<N> {
    let d = *a.1 - *a.0;
    let along_x = d.dx().abs() >= d.dy().abs();
    let sign = if (along_x && d.dx() < N::zero()) || (!along_x && d.dy() < N::zero()) {
        -N::one()
    } else {
        N::one()
    };
    let key = |p: &Point2<N>| if along_x { p.x() * sign } else { p.y() * sign };

    let (b_lo, b_hi) = if key(b.0) <= key(b.1) {
        (b.0, b.1)
    } else {
        (b.1, b.0)
    };

    let start = if key(b_lo) > key(a.0) { b_lo } else { a.0 };
    let end = if key(b_hi) < key(a.1) { b_hi } else { a.1 };

    if key(start) > key(end) {
        SegmentIntersection::Disjoint
    } else if key(start) == key(end) {
        SegmentIntersection::Touching(*start)
    } else {
        SegmentIntersection::Overlap(*start, *end)
    }
}

impl<N: CoordNum> AreaStrategy<N> for CartesianStrategy {
    fn signed_area(&self, ring: &Ring<N>) -> N {
        let mut iter = ring.iter_points_closing();
        let mut prev = match iter.next() {
            Some(p) => p,
            None => return N::zero(),
        };

        let mut aggr = N::zero();
        for p in iter {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (N::one() + N::one())
    }
}
