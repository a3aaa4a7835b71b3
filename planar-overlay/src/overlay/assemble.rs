//! Assembling polygons from a soup of directed boundary edges.
//!
//! All edges must have the area they bound on their left side. Closed rings are traced by always taking the
//! sharpest left turn, which walks around the smallest face on the left of the current edge. Rings touching
//! themselves in a vertex are split there. Counterclockwise rings become outer rings, clockwise ones are holes of
//! the smallest outer ring containing them.

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::cartesian::{CoordNum, Point2, PointKey};
use crate::model::{Polygon, Ring};
use crate::segment::Segment;
use crate::strategy::{AreaStrategy, Location, PointInPolygonStrategy};

/// Directed edge with the bounded area on its left.
pub(super) type Edge<N> = (Point2<N>, Point2<N>);

pub(super) fn assemble_polygons<N, S>(strategy: &S, edges: &[Edge<N>]) -> Vec<Polygon<N>>
where
    N: CoordNum,
    S: AreaStrategy<N> + PointInPolygonStrategy<N>,
{
    let mut outers = vec![];
    let mut holes = vec![];
    for points in trace_rings(edges) {
        let ring = Ring::new(points);
        let area = strategy.signed_area(&ring);
        if area > N::zero() {
            outers.push((area, Polygon::from(ring)));
        } else if area < N::zero() {
            holes.push(ring);
        }
    }

    log::trace!(
        "assembled {} outer rings and {} holes from {} edges",
        outers.len(),
        holes.len(),
        edges.len()
    );

    outers.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    for hole in holes {
        match outers
            .iter_mut()
            .find(|(_, outer)| ring_within(strategy, &hole, &outer.outer_ring))
        {
            Some((_, outer)) => outer.inner_rings.push(hole),
            None => log::warn!(
                "hole of {} points is outside of all outer rings",
                hole.points.len()
            ),
        }
    }

    outers.into_iter().map(|(_, polygon)| polygon).collect()
}

/// Traces closed rings through the edges. Each returned ring is closed and simple at its vertices.
fn trace_rings<N: CoordNum>(edges: &[Edge<N>]) -> Vec<Vec<Point2<N>>> {
    let mut outgoing: AHashMap<PointKey, Vec<usize>> = AHashMap::new();
    for (index, (from, _)) in edges.iter().enumerate() {
        outgoing.entry(from.exact_key()).or_default().push(index);
    }

    let mut used = vec![false; edges.len()];
    let mut rings = vec![];

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }

        let start_key = edges[start].0.exact_key();
        let mut chain = vec![edges[start].0];
        let mut current = start;
        loop {
            used[current] = true;
            let (from, to) = edges[current];
            chain.push(to);
            if to.exact_key() == start_key {
                split_at_pinches(chain, &mut rings);
                break;
            }

            let back = from - to;
            let next = outgoing
                .get(&to.exact_key())
                .into_iter()
                .flatten()
                .copied()
                .filter(|&index| !used[index])
                .map(|index| {
                    let dir = edges[index].1 - to;
                    let angle = back.cross(&dir).atan2(back.dot(&dir));
                    (angle < N::zero(), angle, index)
                })
                .max_by(|a, b| {
                    a.0.cmp(&b.0)
                        .then(a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
                });

            match next {
                Some((_, _, index)) => current = index,
                None => {
                    log::warn!("boundary chain of {} points is not closed", chain.len());
                    break;
                }
            }
        }
    }

    rings
}

/// Splits a closed chain that passes some vertex more than once into closed rings without such vertices.
fn split_at_pinches<N: CoordNum>(chain: Vec<Point2<N>>, rings: &mut Vec<Vec<Point2<N>>>) {
    let mut stack: Vec<Point2<N>> = vec![];
    let mut positions: AHashMap<PointKey, usize> = AHashMap::new();

    for point in chain {
        let key = point.exact_key();
        if let Some(&position) = positions.get(&key) {
            let mut ring = stack.split_off(position);
            for removed in &ring[1..] {
                positions.remove(&removed.exact_key());
            }

            ring.push(point);
            stack.push(ring[0]);
            push_ring(ring, rings);
        } else {
            positions.insert(key, stack.len());
            stack.push(point);
        }
    }
}

fn push_ring<N: CoordNum>(mut ring: Vec<Point2<N>>, rings: &mut Vec<Vec<Point2<N>>>) {
    ring.pop();
    drop_collinear(&mut ring);
    if ring.len() < 3 {
        return;
    }

    ring.push(ring[0]);
    rings.push(ring);
}

/// Removes vertices lying on the straight segment between their neighbours. The ring must not repeat its first
/// point at the end.
fn drop_collinear<N: CoordNum>(points: &mut Vec<Point2<N>>) {
    let mut changed = true;
    while changed && points.len() > 3 {
        changed = false;
        let mut i = 0;
        while i < points.len() && points.len() > 3 {
            let n = points.len();
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            if prev != next && Segment(&prev, &next).contains_point(&points[i]) {
                points.remove(i);
                changed = true;
            } else {
                i += 1;
            }
        }
    }
}

/// Returns true if the hole lies inside the outer ring. The rings may touch each other in vertices or along
/// edges.
fn ring_within<N, S>(strategy: &S, hole: &Ring<N>, outer: &Ring<N>) -> bool
where
    N: CoordNum,
    S: PointInPolygonStrategy<N>,
{
    let vertices = hole.points.iter().copied();
    let midpoints = hole.iter_segments().map(|segment| segment.0.midpoint(segment.1));

    vertices
        .chain(midpoints)
        .map(|p| strategy.locate_in_ring(&p, outer))
        .find(|location| *location != Location::Boundary)
        == Some(Location::Inside)
}
