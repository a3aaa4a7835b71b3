//! Algorithms with a linear subject.
//!
//! Every segment of the subject is cut at all its intersections with the segments of the other operand. Each piece
//! between two successive cuts is then either entirely on the other operand or entirely off it, so one
//! representative point decides the fate of the whole piece. Consecutive retained pieces are merged back into
//! maximal line strings.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::cartesian::{CoordNum, Point2};
use crate::model::{LineString, Polygon};
use crate::output::{Fragment, Stratified};
use crate::overlay::{push_distinct, Operand, Overlay, OverlayOp, Polarity};
use crate::segment::Segment;
use crate::strategy::{
    IntersectionStrategy, Location, OverlayStrategy, PointInPointStrategy, SegmentIntersection,
};

/// Part of a subject segment between two successive cuts.
#[derive(Debug, Clone, PartialEq)]
struct Piece<N> {
    from: Point2<N>,
    to: Point2<N>,
    /// The piece lies on one of the clip segments.
    along_clip: bool,
}

#[derive(Debug)]
struct SplitLine<N> {
    pieces: Vec<Piece<N>>,
    /// All points where the line meets the clip segments, including points at the line's own vertices.
    contacts: Vec<Point2<N>>,
}

fn split_line<N, S>(strategy: &S, line: &LineString<N>, clip: &[Segment<'_, N>]) -> SplitLine<N>
where
    N: CoordNum,
    S: IntersectionStrategy<N>,
{
    let mut pieces = vec![];
    let mut contacts = vec![];

    for segment in line.iter_segments() {
        if segment.is_degenerate() {
            continue;
        }

        let mut cuts = vec![];
        let mut overlaps = vec![];
        for other in clip {
            match strategy.intersect(segment, *other) {
                SegmentIntersection::Disjoint => {}
                SegmentIntersection::Crossing(p) | SegmentIntersection::Touching(p) => {
                    cuts.push((segment.param_of(&p), p));
                    contacts.push(p);
                }
                SegmentIntersection::Overlap(p0, p1) => {
                    let t0 = segment.param_of(&p0);
                    let t1 = segment.param_of(&p1);
                    cuts.push((t0, p0));
                    cuts.push((t1, p1));
                    overlaps.push((t0.min(t1), t0.max(t1)));
                    contacts.push(p0);
                    contacts.push(p1);
                }
            }
        }

        cuts.retain(|(_, p)| p != segment.0 && p != segment.1);
        cuts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        cuts.dedup_by(|a, b| a.1 == b.1);
        cuts.push((N::one(), *segment.1));

        let mut from = (N::zero(), *segment.0);
        for to in cuts {
            if to.1 == from.1 {
                continue;
            }

            let mid = (from.0 + to.0) / (N::one() + N::one());
            pieces.push(Piece {
                from: from.1,
                to: to.1,
                along_clip: overlaps.iter().any(|&(lo, hi)| lo <= mid && mid <= hi),
            });
            from = to;
        }
    }

    SplitLine { pieces, contacts }
}

/// Joins consecutive retained pieces into line strings.
fn merge_pieces<N: CoordNum>(
    pieces: &[Piece<N>],
    keep: impl Fn(&Piece<N>) -> bool,
    result: &mut Stratified<N>,
) {
    fn flush<N>(current: &mut Vec<Point2<N>>, result: &mut Stratified<N>) {
        if current.len() > 1 {
            result.push(Fragment::Line(LineString::new(std::mem::take(current))));
        } else {
            current.clear();
        }
    }

    let mut current = vec![];
    for piece in pieces {
        if !keep(piece) {
            flush(&mut current, result);
            continue;
        }

        if current.last() != Some(&piece.from) {
            flush(&mut current, result);
            current.push(piece.from);
        }
        current.push(piece.to);
    }

    flush(&mut current, result);
}

fn segments_of<N: CoordNum>(lines: &[LineString<N>]) -> Vec<Segment<'_, N>> {
    lines.iter().flat_map(|line| line.iter_segments()).collect()
}

/// Adds the contact points that do not lie on any of the lines.
fn push_isolated_points<N, S>(
    strategy: &S,
    contacts: Vec<Point2<N>>,
    lines: &[LineString<N>],
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: IntersectionStrategy<N> + PointInPointStrategy<N>,
{
    let segments = segments_of(lines);
    for p in contacts {
        if !segments
            .iter()
            .any(|segment| strategy.point_on_segment(&p, *segment))
        {
            push_distinct(&mut result.points, p, strategy);
        }
    }
}

fn subtract_lines<N, S>(
    strategy: &S,
    subject: &[LineString<N>],
    clip: &[LineString<N>],
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: IntersectionStrategy<N>,
{
    let clip = segments_of(clip);
    for line in subject {
        let split = split_line(strategy, line, &clip);
        log::trace!(
            "line of {} points split into {} pieces",
            line.len(),
            split.pieces.len()
        );
        merge_pieces(&split.pieces, |piece| !piece.along_clip, result);
    }
}

pub(super) fn lines_lines<N, S>(
    overlay: &Overlay<S>,
    op: OverlayOp,
    a: &[LineString<N>],
    b: &[LineString<N>],
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: OverlayStrategy<N>,
{
    let strategy = &overlay.strategy;
    match op {
        OverlayOp::Difference => subtract_lines(strategy, a, b, result),
        OverlayOp::Union => {
            Operand::Lines(a).emit(strategy, result);
            subtract_lines(strategy, b, a, result);
        }
        OverlayOp::Intersection => {
            let clip = segments_of(b);
            let mut common = Stratified::new();
            let mut contacts = vec![];
            for line in a {
                let split = split_line(strategy, line, &clip);
                merge_pieces(&split.pieces, |piece| piece.along_clip, &mut common);
                contacts.extend(split.contacts);
            }

            push_isolated_points(strategy, contacts, &common.lines, result);
            result.lines.extend(common.lines);
        }
    }
}

pub(super) fn lines_areas<N, S>(
    overlay: &Overlay<S>,
    op: OverlayOp,
    lines: &[LineString<N>],
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
    let covered = |piece: &Piece<N>| {
        let location = if piece.along_clip {
            Location::Boundary
        } else {
            strategy.locate_in_polygons(&piece.from.midpoint(&piece.to), areas)
        };

        match location {
            Location::Inside => true,
            Location::Boundary => covers_boundary,
            Location::Outside => false,
        }
    };

    if op == OverlayOp::Union {
        areas_operand.emit(strategy, result);
    }

    let clip: Vec<_> = areas
        .iter()
        .flat_map(|polygon| polygon.iter_segments())
        .collect();
    let keep_covered = op == OverlayOp::Intersection;

    let mut kept = Stratified::new();
    let mut contacts = vec![];
    for line in lines {
        let split = split_line(strategy, line, &clip);
        log::trace!(
            "line of {} points split into {} pieces",
            line.len(),
            split.pieces.len()
        );
        merge_pieces(
            &split.pieces,
            |piece| covered(piece) == keep_covered,
            &mut kept,
        );
        contacts.extend(split.contacts);
    }

    if keep_covered && covers_boundary {
        push_isolated_points(strategy, contacts, &kept.lines, result);
    }
    result.lines.extend(kept.lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::CartesianStrategy;

    fn line(coords: &[(f64, f64)]) -> LineString {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    #[test]
    fn split_at_crossings_and_overlaps() {
        let clip_line = line(&[(1.0, -1.0), (1.0, 1.0), (2.0, 0.0), (3.0, 0.0)]);
        let clip = clip_line.iter_segments().collect::<Vec<_>>();
        let split = split_line(
            &CartesianStrategy::new(),
            &line(&[(0.0, 0.0), (4.0, 0.0)]),
            &clip,
        );

        let ends: Vec<_> = split
            .pieces
            .iter()
            .map(|piece| (piece.from.x(), piece.to.x(), piece.along_clip))
            .collect();
        assert_eq!(
            ends,
            vec![
                (0.0, 1.0, false),
                (1.0, 2.0, false),
                (2.0, 3.0, true),
                (3.0, 4.0, false)
            ]
        );
    }

    #[test]
    fn merge_skips_dropped_pieces() {
        let piece = |from: f64, to: f64, along_clip| Piece {
            from: Point2::new(from, 0.0),
            to: Point2::new(to, 0.0),
            along_clip,
        };
        let pieces = [
            piece(0.0, 1.0, false),
            piece(1.0, 2.0, false),
            piece(2.0, 3.0, true),
            piece(3.0, 4.0, false),
        ];

        let mut result = Stratified::new();
        merge_pieces(&pieces, |p| !p.along_clip, &mut result);
        assert_eq!(
            result.lines.parts,
            vec![
                line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
                line(&[(3.0, 0.0), (4.0, 0.0)])
            ]
        );
    }
}
