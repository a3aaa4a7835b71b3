//! Overlay of two areal operands.
//!
//! Boundary edges of both operands are split at every point where they meet any other boundary edge, of either
//! operand. Each resulting sub-edge is then either shared with the other operand or lies strictly inside or outside
//! of it. The operation selects the sub-edges that bound the result and the selected edges are assembled into
//! polygons.

use std::borrow::Cow;
use std::cmp::Ordering;

use ahash::AHashSet;

use crate::cartesian::{CoordNum, Point2, PointKey, Rect};
use crate::model::Polygon;
use crate::output::{Fragment, Stratified};
use crate::overlay::assemble::{assemble_polygons, Edge};
use crate::overlay::{Operand, Overlay, OverlayOp};
use crate::segment::Segment;
use crate::strategy::{
    IntersectionStrategy, Location, OverlayStrategy, PointInPolygonStrategy, SegmentIntersection,
};

/// Boundary edge of an operand with the points where it meets other boundary edges.
#[derive(Debug)]
struct EdgeSplits<N> {
    from: Point2<N>,
    to: Point2<N>,
    cuts: Vec<Point2<N>>,
}

impl<N: CoordNum> EdgeSplits<N> {
    fn segment(&self) -> Segment<'_, N> {
        Segment(&self.from, &self.to)
    }

    fn sub_edges(&self) -> Vec<Edge<N>> {
        let segment = self.segment();
        let mut cuts: Vec<_> = self
            .cuts
            .iter()
            .filter(|p| **p != self.from && **p != self.to)
            .map(|p| (segment.param_of(p), *p))
            .collect();
        cuts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        cuts.dedup_by(|a, b| a.1 == b.1);

        let mut edges = Vec::with_capacity(cuts.len() + 1);
        let mut from = self.from;
        for to in cuts.into_iter().map(|(_, p)| p).chain(Some(self.to)) {
            if to != from {
                edges.push((from, to));
                from = to;
            }
        }

        edges
    }
}

/// Position of a sub-edge relative to the other operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EdgeClass {
    Inside,
    Outside,
    /// Both operands have this edge in the same direction, so their areas are on the same side of it.
    SharedSame,
    /// The operands have this edge in opposite directions.
    SharedOpposite,
}

fn boundary_edges<N: CoordNum>(polygons: &[Polygon<N>]) -> Vec<EdgeSplits<N>> {
    polygons
        .iter()
        .flat_map(|polygon| polygon.iter_rings())
        .filter(|ring| !ring.is_degenerate())
        .flat_map(|ring| ring.iter_segments())
        .filter(|segment| !segment.is_degenerate())
        .map(|segment| EdgeSplits {
            from: *segment.0,
            to: *segment.1,
            cuts: vec![],
        })
        .collect()
}

/// Merges crossing points that are computed separately for the same location.
struct Snap<N> {
    points: Vec<Point2<N>>,
    tolerance_sq: N,
}

impl<N: CoordNum> Snap<N> {
    fn new(edges: &[EdgeSplits<N>]) -> Self {
        let scale = edges.iter().fold(N::one(), |scale, edge| {
            scale.max(edge.from.x().abs()).max(edge.from.y().abs())
        });
        let tolerance = scale * N::epsilon() * N::from_f64(16.0).unwrap_or_else(N::one);

        Self {
            points: edges.iter().map(|edge| edge.from).collect(),
            tolerance_sq: tolerance * tolerance,
        }
    }

    fn point(&mut self, point: Point2<N>) -> Point2<N> {
        if let Some(known) = self
            .points
            .iter()
            .find(|known| known.distance_sq(&point) <= self.tolerance_sq)
        {
            return *known;
        }

        self.points.push(point);
        point
    }
}

/// Cuts every edge at all points where it meets any other edge of the list.
fn cut_arrangement<N, S>(strategy: &S, edges: &mut [EdgeSplits<N>])
where
    N: CoordNum,
    S: IntersectionStrategy<N>,
{
    let mut snap = Snap::new(edges);
    for i in 0..edges.len() {
        let (head, tail) = edges.split_at_mut(i + 1);
        let edge = &mut head[i];
        let rect = edge.segment().bounding_rect();

        for other in tail.iter_mut() {
            if !rect.intersects(&other.segment().bounding_rect()) {
                continue;
            }

            match strategy.intersect(edge.segment(), other.segment()) {
                SegmentIntersection::Disjoint => {}
                SegmentIntersection::Crossing(p) => {
                    let p = snap.point(p);
                    edge.cuts.push(p);
                    other.cuts.push(p);
                }
                SegmentIntersection::Touching(p) => {
                    edge.cuts.push(p);
                    other.cuts.push(p);
                }
                SegmentIntersection::Overlap(p0, p1) => {
                    edge.cuts.extend([p0, p1]);
                    other.cuts.extend([p0, p1]);
                }
            }
        }
    }
}

fn edge_keys<N: CoordNum>(edges: &[Edge<N>]) -> AHashSet<(PointKey, PointKey)> {
    edges
        .iter()
        .map(|(from, to)| (from.exact_key(), to.exact_key()))
        .collect()
}

fn classify<N, S>(
    strategy: &S,
    edge: &Edge<N>,
    other_keys: &AHashSet<(PointKey, PointKey)>,
    other: &[Polygon<N>],
) -> EdgeClass
where
    N: CoordNum,
    S: PointInPolygonStrategy<N>,
{
    let (from, to) = (edge.0.exact_key(), edge.1.exact_key());
    if other_keys.contains(&(from, to)) {
        return EdgeClass::SharedSame;
    }
    if other_keys.contains(&(to, from)) {
        return EdgeClass::SharedOpposite;
    }

    let segment = Segment(&edge.0, &edge.1);
    let quarter = N::from_f64(0.25).unwrap_or_else(N::zero);
    let three_quarters = N::from_f64(0.75).unwrap_or_else(N::one);
    let samples = [
        edge.0.midpoint(&edge.1),
        segment.point_at(quarter),
        segment.point_at(three_quarters),
    ];

    for sample in samples {
        match strategy.locate_in_polygons(&sample, other) {
            Location::Inside => return EdgeClass::Inside,
            Location::Outside => return EdgeClass::Outside,
            Location::Boundary => {}
        }
    }

    let direction = edge.1 - edge.0;
    let along = other
        .iter()
        .flat_map(|polygon| polygon.iter_segments())
        .find(|segment| segment.contains_point(&samples[0]));
    match along {
        Some(segment) if (*segment.1 - *segment.0).dot(&direction) > N::zero() => {
            EdgeClass::SharedSame
        }
        Some(_) => EdgeClass::SharedOpposite,
        None => {
            log::debug!("edge {edge:?} cannot be classified, treated as outside");
            EdgeClass::Outside
        }
    }
}

fn bounding_rect<N: CoordNum>(polygons: &[Polygon<N>]) -> Option<Rect<N>> {
    Rect::from_points(
        polygons
            .iter()
            .flat_map(|polygon| polygon.outer_ring.points.iter()),
    )
}

pub(super) fn areas_areas<N, S>(
    overlay: &Overlay<S>,
    op: OverlayOp,
    a: &[Polygon<N>],
    b: &[Polygon<N>],
    result: &mut Stratified<N>,
) where
    N: CoordNum,
    S: OverlayStrategy<N>,
{
    let strategy = &overlay.strategy;

    if let (Some(rect_a), Some(rect_b)) = (bounding_rect(a), bounding_rect(b)) {
        if !rect_a.intersects(&rect_b) {
            log::trace!("bounding rectangles of areal operands are disjoint");
            match op {
                OverlayOp::Difference => Operand::Areas(Cow::Borrowed(a)).emit(strategy, result),
                OverlayOp::Intersection => {}
                OverlayOp::Union => {
                    Operand::Areas(Cow::Borrowed(a)).emit(strategy, result);
                    Operand::Areas(Cow::Borrowed(b)).emit(strategy, result);
                }
            }
            return;
        }
    }

    let mut edges = boundary_edges(a);
    let count_a = edges.len();
    edges.extend(boundary_edges(b));
    cut_arrangement(strategy, &mut edges);
    let (edges_a, edges_b) = edges.split_at(count_a);

    let sub_a: Vec<_> = edges_a.iter().flat_map(EdgeSplits::sub_edges).collect();
    let sub_b: Vec<_> = edges_b.iter().flat_map(EdgeSplits::sub_edges).collect();
    let keys_a = edge_keys(&sub_a);
    let keys_b = edge_keys(&sub_b);

    let mut selected = vec![];
    for edge in sub_a {
        let keep = match (op, classify(strategy, &edge, &keys_b, b)) {
            (OverlayOp::Difference, EdgeClass::Outside | EdgeClass::SharedOpposite) => true,
            (OverlayOp::Intersection, EdgeClass::Inside | EdgeClass::SharedSame) => true,
            (OverlayOp::Union, EdgeClass::Outside | EdgeClass::SharedSame) => true,
            _ => false,
        };
        if keep {
            selected.push(edge);
        }
    }

    for edge in sub_b {
        match (op, classify(strategy, &edge, &keys_a, a)) {
            (OverlayOp::Difference, EdgeClass::Inside) => selected.push((edge.1, edge.0)),
            (OverlayOp::Intersection, EdgeClass::Inside)
            | (OverlayOp::Union, EdgeClass::Outside) => selected.push(edge),
            _ => {}
        }
    }

    log::trace!("{op:?} selected {} boundary edges", selected.len());
    result.extend(
        assemble_polygons(strategy, &selected)
            .into_iter()
            .map(Fragment::Polygon),
    );
}
