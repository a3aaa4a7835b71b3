//! Algorithms with a point-like subject.

use std::borrow::Cow;

use crate::cartesian::{CoordNum, Point2};
use crate::model::{LineString, Polygon};
use crate::output::Stratified;
use crate::overlay::{push_distinct, Operand, Overlay, OverlayOp, Polarity};
use crate::strategy::{Location, OverlayStrategy};

pub(super) fn points_points<N, S>(
    overlay: &Overlay<S>,
    op: OverlayOp,
    a: &[Point2<N>],
    b: &[Point2<N>],
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: OverlayStrategy<N>,
{
    let strategy = &overlay.strategy;
    let in_b = |p: &Point2<N>| b.iter().any(|other| strategy.points_equal(p, other));

    match op {
        OverlayOp::Difference => {
            for p in a.iter().filter(|p| !in_b(*p)) {
                push_distinct(&mut result.points, *p, strategy);
            }
        }
        OverlayOp::Intersection => {
            for p in a.iter().filter(|p| in_b(*p)) {
                push_distinct(&mut result.points, *p, strategy);
            }
        }
        OverlayOp::Union => {
            for p in a.iter().chain(b) {
                push_distinct(&mut result.points, *p, strategy);
            }
        }
    }
}

pub(super) fn points_lines<N, S>(
    overlay: &Overlay<S>,
    op: OverlayOp,
    points: &[Point2<N>],
    lines: &[LineString<N>],
    polarity: Polarity,
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: OverlayStrategy<N>,
{
    let strategy = &overlay.strategy;
    let lines_operand = Operand::Lines(lines);
    if polarity.keeps_higher(op) {
        lines_operand.emit(strategy, result);
        return;
    }

    let on_lines = |p: &Point2<N>| {
        lines
            .iter()
            .flat_map(|line| line.iter_segments())
            .any(|segment| strategy.point_on_segment(p, segment))
    };

    if op == OverlayOp::Union {
        lines_operand.emit(strategy, result);
    }

    let keep_covered = op == OverlayOp::Intersection;
    for p in points {
        if on_lines(p) == keep_covered {
            push_distinct(&mut result.points, *p, strategy);
        }
    }
}

pub(super) fn points_areas<N, S>(
    overlay: &Overlay<S>,
    op: OverlayOp,
    points: &[Point2<N>],
    areas: &[Polygon<N>],
    polarity: Polarity,
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: OverlayStrategy<N>,
{
    let strategy = &overlay.strategy;
    let areas_operand = Operand::Areas(Cow::Borrowed(areas));
    if polarity.keeps_higher(op) {
        areas_operand.emit(strategy, result);
        return;
    }

    let covers_boundary = overlay.options.boundary.covers_boundary();
    let covered = |p: &Point2<N>| match strategy.locate_in_polygons(p, areas) {
        Location::Inside => true,
        Location::Boundary => covers_boundary,
        Location::Outside => false,
    };

    if op == OverlayOp::Union {
        areas_operand.emit(strategy, result);
    }

    let keep_covered = op == OverlayOp::Intersection;
    for p in points {
        if covered(p) == keep_covered {
            push_distinct(&mut result.points, *p, strategy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Rect;
    use crate::overlay::BoundaryRule;
    use crate::Correct;

    fn points(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    #[test]
    fn duplicates_are_emitted_once() {
        let mut result = Stratified::new();
        points_points(
            &Overlay::new(),
            OverlayOp::Union,
            &points(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            &points(&[(1.0, 1.0), (2.0, 2.0)]),
            &mut result,
        );
        assert_eq!(
            result.points.points,
            points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])
        );
    }

    #[test]
    fn points_on_line_vertices_and_interiors() {
        let line = LineString::new(points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]));
        let subject = points(&[(1.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);

        let mut result = Stratified::new();
        points_lines(
            &Overlay::new(),
            OverlayOp::Difference,
            &subject,
            std::slice::from_ref(&line),
            Polarity::Forward,
            &mut result,
        );
        assert_eq!(result.points.points, points(&[(1.0, 1.0)]));

        let mut result = Stratified::new();
        points_lines(
            &Overlay::new(),
            OverlayOp::Difference,
            &subject,
            std::slice::from_ref(&line),
            Polarity::Reversed,
            &mut result,
        );
        assert!(result.points.is_empty());
        assert_eq!(result.lines.parts, vec![line]);
    }

    #[test]
    fn boundary_rule_decides_points_on_rings() {
        let square = Rect::new(0.0, 0.0, 2.0, 2.0).to_polygon().corrected();
        let subject = points(&[(0.0, 1.0), (1.0, 1.0), (3.0, 1.0)]);

        let run = |overlay: Overlay| {
            let mut result = Stratified::new();
            points_areas(
                &overlay,
                OverlayOp::Intersection,
                &subject,
                std::slice::from_ref(&square),
                Polarity::Forward,
                &mut result,
            );
            result.points.points
        };

        assert_eq!(run(Overlay::new()), points(&[(1.0, 1.0)]));
        assert_eq!(
            run(Overlay::new().with_boundary_rule(BoundaryRule::Closed)),
            points(&[(0.0, 1.0), (1.0, 1.0)])
        );
    }
}
