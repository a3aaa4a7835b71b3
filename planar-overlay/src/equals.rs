//! Geometric equality of set operation results.
//!
//! Two geometries are equal if they cover the same point set. The representation does not matter: duplicate
//! points, the start point and direction of lines and rings and intermediate collinear vertices are all ignored.

use std::cmp::Ordering;

use crate::cartesian::{CoordNum, Point2};
use crate::correct::Correct;
use crate::model::{MultiLineString, MultiPoint, MultiPolygon};
use crate::output::Stratified;
use crate::overlay::Overlay;
use crate::segment::Segment;
use crate::strategy::{AreaStrategy, CartesianStrategy};

/// Comparison of the point sets covered by two geometries.
pub trait Equals<N: CoordNum> {
    /// Returns true if the geometries cover the same point set, allowing coordinates to differ by `tolerance`.
    fn equals_within(&self, other: &Self, tolerance: N) -> bool;

    /// Returns true if the geometries cover the same point set up to rounding errors.
    fn equals(&self, other: &Self) -> bool {
        self.equals_within(other, N::epsilon().sqrt())
    }
}

impl<N: CoordNum> Equals<N> for MultiPoint<N> {
    fn equals_within(&self, other: &Self, tolerance: N) -> bool {
        let tolerance_sq = tolerance * tolerance;
        let covered = |points: &[Point2<N>], by: &[Point2<N>]| {
            points
                .iter()
                .all(|p| by.iter().any(|q| p.distance_sq(q) <= tolerance_sq))
        };

        covered(&self.points, &other.points) && covered(&other.points, &self.points)
    }
}

impl<N: CoordNum> Equals<N> for MultiLineString<N> {
    fn equals_within(&self, other: &Self, tolerance: N) -> bool {
        lines_covered(self, other, tolerance) && lines_covered(other, self, tolerance)
    }
}

/// Returns true if every segment of `lines` is covered by the segments of `by`.
fn lines_covered<N: CoordNum>(
    lines: &MultiLineString<N>,
    by: &MultiLineString<N>,
    tolerance: N,
) -> bool {
    let cover: Vec<_> = by
        .iter()
        .flat_map(|line| line.iter_segments())
        .filter(|segment| !segment.is_degenerate())
        .collect();

    lines
        .iter()
        .flat_map(|line| line.iter_segments())
        .filter(|segment| !segment.is_degenerate())
        .all(|segment| segment_covered(segment, &cover, tolerance))
}

fn segment_covered<N: CoordNum>(
    segment: Segment<'_, N>,
    cover: &[Segment<'_, N>],
    tolerance: N,
) -> bool {
    let direction = *segment.1 - *segment.0;
    let length = direction.magnitude_sq().sqrt();
    let off_line = |p: &Point2<N>| direction.cross(&(*p - *segment.0)).abs() / length > tolerance;

    let mut intervals: Vec<_> = cover
        .iter()
        .filter(|other| !off_line(other.0) && !off_line(other.1))
        .map(|other| {
            let t0 = segment.param_of(other.0);
            let t1 = segment.param_of(other.1);
            (t0.min(t1).max(N::zero()), t0.max(t1).min(N::one()))
        })
        .filter(|(lo, hi)| lo <= hi)
        .collect();
    intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let gap = tolerance / length;
    let mut covered_to = N::zero();
    for (lo, hi) in intervals {
        if lo > covered_to + gap {
            return false;
        }
        covered_to = covered_to.max(hi);
    }

    covered_to + gap >= N::one()
}

impl<N: CoordNum> Equals<N> for MultiPolygon<N> {
    fn equals_within(&self, other: &Self, tolerance: N) -> bool {
        let a = self.clone().corrected();
        let b = other.clone().corrected();

        let overlay = Overlay::new();
        let mut a_minus_b = Stratified::new();
        let mut b_minus_a = Stratified::new();
        if overlay.difference(&a, &b, &mut a_minus_b).is_err()
            || overlay.difference(&b, &a, &mut b_minus_a).is_err()
        {
            return false;
        }

        let extra = area(&a_minus_b.polygons) + area(&b_minus_a.polygons);
        extra <= tolerance * (perimeter(&a) + perimeter(&b))
    }
}

fn area<N: CoordNum>(polygons: &MultiPolygon<N>) -> N {
    let strategy = CartesianStrategy::new();
    polygons
        .iter()
        .flat_map(|polygon| polygon.iter_rings())
        .fold(N::zero(), |sum, ring| sum + strategy.signed_area(ring))
}

fn perimeter<N: CoordNum>(polygons: &MultiPolygon<N>) -> N {
    polygons
        .iter()
        .flat_map(|polygon| polygon.iter_segments())
        .fold(N::zero(), |sum, segment| sum + segment.length_sq().sqrt())
}

impl<N: CoordNum> Equals<N> for Stratified<N> {
    fn equals_within(&self, other: &Self, tolerance: N) -> bool {
        self.points.equals_within(&other.points, tolerance)
            && self.lines.equals_within(&other.lines, tolerance)
            && self.polygons.equals_within(&other.polygons, tolerance)
    }
}

impl<N: CoordNum> Equals<N> for (MultiPoint<N>, MultiLineString<N>, MultiPolygon<N>) {
    fn equals_within(&self, other: &Self, tolerance: N) -> bool {
        self.0.equals_within(&other.0, tolerance)
            && self.1.equals_within(&other.1, tolerance)
            && self.2.equals_within(&other.2, tolerance)
    }
}

impl<N: CoordNum> Equals<N> for (MultiPoint<N>, MultiLineString<N>) {
    fn equals_within(&self, other: &Self, tolerance: N) -> bool {
        self.0.equals_within(&other.0, tolerance) && self.1.equals_within(&other.1, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Rect;
    use crate::model::{LineString, Polygon, Ring};

    fn line(coords: &[(f64, f64)]) -> LineString {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    #[test]
    fn points_ignore_duplicates() {
        let a = MultiPoint::new(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)]);
        let b = MultiPoint::new(vec![
            Point2::new(2.0, 2.0),
            Point2::new(1.0, 1.0 + 1e-12),
            Point2::new(1.0, 1.0),
        ]);
        assert!(a.equals(&b));
        assert!(!a.equals(&MultiPoint::new(vec![Point2::new(1.0, 1.0)])));
        assert!(MultiPoint::<f64>::default().equals(&MultiPoint::default()));
    }

    #[test]
    fn lines_ignore_direction_and_vertices() {
        let a = MultiLineString::new(vec![line(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)])]);
        let b = MultiLineString::new(vec![
            line(&[(4.0, 4.0), (4.0, 0.0), (3.0, 0.0)]),
            line(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0)]),
        ]);
        assert!(a.equals(&b));
        assert!(b.equals(&a));

        let shorter = MultiLineString::new(vec![line(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)])]);
        assert!(!a.equals(&shorter));

        let gap = MultiLineString::new(vec![
            line(&[(0.0, 0.0), (1.0, 0.0)]),
            line(&[(2.0, 0.0), (4.0, 0.0), (4.0, 4.0)]),
        ]);
        assert!(!a.equals(&gap));
    }

    #[test]
    fn polygons_ignore_ring_start_and_direction() {
        let a = MultiPolygon::new(vec![Rect::new(0.0, 0.0, 2.0, 2.0).to_polygon()]);
        let b = MultiPolygon::new(vec![Polygon::from(ring(&[
            (2.0, 2.0),
            (2.0, 1.0),
            (2.0, 0.0),
            (0.0, 0.0),
            (0.0, 2.0),
            (2.0, 2.0),
        ]))]);
        assert!(a.equals(&b));

        let c = MultiPolygon::new(vec![Rect::new(0.0, 0.0, 2.0, 2.1).to_polygon()]);
        assert!(!a.equals(&c));
    }

    #[test]
    fn stratified_compares_every_slot() {
        let mut a = Stratified::new();
        a.points.push(Point2::new(5.0, 5.0));
        a.polygons.push(Rect::new(0.0, 0.0, 1.0, 1.0).to_polygon());

        let mut b = a.clone();
        assert!(a.equals(&b));

        b.lines.push(line(&[(0.0, 0.0), (1.0, 1.0)]));
        assert!(!a.equals(&b));
    }
}
