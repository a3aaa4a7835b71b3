//! Dimension-stratified results of set operations.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2};
use crate::error::OverlayError;
use crate::model::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon};

/// Single piece of a set operation result.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<N> {
    /// Dimension 0.
    Point(Point2<N>),
    /// Dimension 1.
    Line(LineString<N>),
    /// Dimension 2.
    Polygon(Polygon<N>),
}

impl<N> Fragment<N> {
    /// Topological dimension of the fragment, which is also the index of the output slot it goes to.
    pub fn dimension(&self) -> usize {
        match self {
            Fragment::Point(_) => 0,
            Fragment::Line(_) => 1,
            Fragment::Polygon(_) => 2,
        }
    }
}

/// Three-slot result of a set operation: slot 0 holds points, slot 1 lines and slot 2 polygons.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratified<N = f64> {
    /// Point-like fragments.
    pub points: MultiPoint<N>,
    /// Linear fragments.
    pub lines: MultiLineString<N>,
    /// Areal fragments.
    pub polygons: MultiPolygon<N>,
}

impl<N> Stratified<N> {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self {
            points: MultiPoint::new(vec![]),
            lines: MultiLineString::new(vec![]),
            polygons: MultiPolygon::new(vec![]),
        }
    }

    /// Appends the fragment to the slot matching its dimension.
    pub fn push(&mut self, fragment: Fragment<N>) {
        match fragment {
            Fragment::Point(v) => self.points.push(v),
            Fragment::Line(v) => self.lines.push(v),
            Fragment::Polygon(v) => self.polygons.push(v),
        }
    }

    /// Returns true if all slots are empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }

    /// Highest dimension of the fragments in the result. `None` if the result is empty.
    pub fn max_dimension(&self) -> Option<usize> {
        if !self.polygons.is_empty() {
            Some(2)
        } else if !self.lines.is_empty() {
            Some(1)
        } else if !self.points.is_empty() {
            Some(0)
        } else {
            None
        }
    }
}

impl<N> Extend<Fragment<N>> for Stratified<N> {
    fn extend<T: IntoIterator<Item = Fragment<N>>>(&mut self, iter: T) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}

/// Container that receives results of set operations.
///
/// The fragments are appended to whatever the output already holds.
pub trait OverlayOutput<N> {
    /// Highest fragment dimension the output can hold.
    const MAX_DIMENSION: usize;

    /// Moves all fragments of `result` into the output.
    ///
    /// Fails with [`OverlayError::OutputArity`] if `result` holds fragments the output has no slot for. In that case
    /// the output is left unchanged.
    fn absorb(&mut self, result: Stratified<N>) -> Result<(), OverlayError>;
}

fn check_capacity<N>(result: &Stratified<N>, capacity: usize) -> Result<(), OverlayError> {
    match result.max_dimension() {
        Some(required) if required > capacity => {
            Err(OverlayError::OutputArity { required, capacity })
        }
        _ => Ok(()),
    }
}

impl<N: CoordNum> OverlayOutput<N> for Stratified<N> {
    const MAX_DIMENSION: usize = 2;

    fn absorb(&mut self, result: Stratified<N>) -> Result<(), OverlayError> {
        self.points.extend(result.points);
        self.lines.extend(result.lines);
        self.polygons.extend(result.polygons);
        Ok(())
    }
}

impl<N: CoordNum> OverlayOutput<N> for (MultiPoint<N>, MultiLineString<N>, MultiPolygon<N>) {
    const MAX_DIMENSION: usize = 2;

    fn absorb(&mut self, result: Stratified<N>) -> Result<(), OverlayError> {
        self.0.extend(result.points);
        self.1.extend(result.lines);
        self.2.extend(result.polygons);
        Ok(())
    }
}

impl<N: CoordNum> OverlayOutput<N> for (MultiPoint<N>, MultiLineString<N>) {
    const MAX_DIMENSION: usize = 1;

    fn absorb(&mut self, result: Stratified<N>) -> Result<(), OverlayError> {
        check_capacity(&result, Self::MAX_DIMENSION)?;
        self.0.extend(result.points);
        self.1.extend(result.lines);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::cartesian::Rect;

    #[test]
    fn fragments_go_to_their_slots() {
        let mut result = Stratified::new();
        result.extend([
            Fragment::Polygon(Rect::new(0.0, 0.0, 1.0, 1.0).to_polygon()),
            Fragment::Point(Point2::new(1.0, 1.0)),
            Fragment::Line(LineString::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
            ])),
            Fragment::Point(Point2::new(2.0, 2.0)),
        ]);

        assert_eq!(result.points.len(), 2);
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(result.max_dimension(), Some(2));
    }

    #[test]
    fn absorb_appends() {
        let mut out = (
            MultiPoint::new(vec![Point2::new(5.0, 5.0)]),
            MultiLineString::default(),
        );
        let mut result = Stratified::new();
        result.push(Fragment::Point(Point2::new(1.0, 1.0)));

        out.absorb(result).unwrap();
        assert_eq!(out.0.len(), 2);
        assert!(out.1.is_empty());
    }

    #[test]
    fn pair_rejects_polygons() {
        let mut out: (MultiPoint, MultiLineString) = Default::default();
        let mut result = Stratified::new();
        result.push(Fragment::Point(Point2::new(1.0, 1.0)));
        let square = Rect::new(0.0, 0.0, 1.0, 1.0).to_polygon();
        result.push(Fragment::Polygon(square));

        assert_matches!(
            out.absorb(result),
            Err(OverlayError::OutputArity {
                required: 2,
                capacity: 1
            })
        );
        assert!(out.0.is_empty());
    }

    #[test]
    fn empty_result() {
        let result = Stratified::<f64>::new();
        assert!(result.is_empty());
        assert_eq!(result.max_dimension(), None);
        assert_eq!(Fragment::Line(LineString::<f64>::default()).dimension(), 1);
    }
}
