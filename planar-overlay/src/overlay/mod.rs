//! Set operations between geometries of any category.
//!
//! An operation first resolves the categories of both operands, checks that the output can hold every fragment
//! the operands can produce and that areal operands are corrected, and then runs one of six algorithms selected by
//! the category pair. Pairs in reverse order (e.g. linear-pointlike) run the same algorithm as their counterpart with
//! the operands swapped and a [`Polarity`] flag telling the algorithm which operand is the subject.
//!
//! The fragments of the result are stratified by dimension: points go to slot 0, lines to slot 1 and polygons to
//! slot 2 of the output, whatever the categories of the operands.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2, Winding};
use crate::error::OverlayError;
use crate::model::MultiPoint;
use crate::output::{OverlayOutput, Stratified};
use crate::strategy::{CartesianStrategy, OverlayStrategy, PointInPointStrategy};

mod areal;
mod assemble;
mod linear;
mod operand;
mod options;
mod pointlike;


pub use operand::{AsOperand, Operand};
pub use options::{BoundaryRule, OverlayOptions};

/// Boolean set operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayOp {
    /// Part of the first operand not covered by the second one.
    Difference,
    /// Part common to both operands.
    Intersection,
    /// Parts covered by any of the operands.
    Union,
}

/// Which operand of a reversed category pair is the subject of the operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Polarity {
    /// The lower-dimension operand is the first operand.
    Forward,
    /// The lower-dimension operand is the second operand.
    Reversed,
}

impl Polarity {
    /// Returns true if the operation leaves the higher-dimension operand unchanged.
    ///
    /// Removing a lower-dimension set from a higher-dimension one never changes the latter.
    fn keeps_higher(self, op: OverlayOp) -> bool {
        op == OverlayOp::Difference && self == Polarity::Reversed
    }
}

/// Set operation engine with a predicate strategy and options.
///
/// ```
/// use planar_overlay::{Correct, MultiPoint, Overlay, Point2, Rect, Stratified};
/// use planar_overlay::overlay::BoundaryRule;
///
/// let points = MultiPoint::new(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 0.0), Point2::new(3.0, 3.0)]);
/// let square = Rect::new(0.0, 0.0, 2.0, 2.0).to_polygon().corrected();
///
/// let mut result = Stratified::new();
/// Overlay::new().difference(&points, &square, &mut result).unwrap();
/// assert_eq!(result.points.len(), 2);
///
/// let mut result = Stratified::new();
/// Overlay::new()
///     .with_boundary_rule(BoundaryRule::Closed)
///     .difference(&points, &square, &mut result)
///     .unwrap();
/// assert_eq!(result.points.points, vec![Point2::new(3.0, 3.0)]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Overlay<S = CartesianStrategy> {
    pub(crate) strategy: S,
    pub(crate) options: OverlayOptions,
}

impl Overlay<CartesianStrategy> {
    /// Engine with the cartesian strategy and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Overlay<S> {
    /// Engine with the given strategy and default options.
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            strategy,
            options: OverlayOptions::default(),
        }
    }

    /// Replaces the options of the engine.
    pub fn with_options(mut self, options: OverlayOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the treatment of points and lines on the boundary of areal operands.
    pub fn with_boundary_rule(mut self, boundary: BoundaryRule) -> Self {
        self.options.boundary = boundary;
        self
    }

    /// Predicate strategy of the engine.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Options of the engine.
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Appends the part of `a` not covered by `b` to `out`.
    pub fn difference<N, A, B, O>(&self, a: &A, b: &B, out: &mut O) -> Result<(), OverlayError>
    where
        N: CoordNum,
        S: OverlayStrategy<N>,
        A: AsOperand<N> + ?Sized,
        B: AsOperand<N> + ?Sized,
        O: OverlayOutput<N>,
    {
        self.apply(OverlayOp::Difference, a, b, out)
    }

    /// Appends the part common to `a` and `b` to `out`.
    pub fn intersection<N, A, B, O>(&self, a: &A, b: &B, out: &mut O) -> Result<(), OverlayError>
    where
        N: CoordNum,
        S: OverlayStrategy<N>,
        A: AsOperand<N> + ?Sized,
        B: AsOperand<N> + ?Sized,
        O: OverlayOutput<N>,
    {
        self.apply(OverlayOp::Intersection, a, b, out)
    }

    /// Appends the union of `a` and `b` to `out`.
    pub fn union<N, A, B, O>(&self, a: &A, b: &B, out: &mut O) -> Result<(), OverlayError>
    where
        N: CoordNum,
        S: OverlayStrategy<N>,
        A: AsOperand<N> + ?Sized,
        B: AsOperand<N> + ?Sized,
        O: OverlayOutput<N>,
    {
        self.apply(OverlayOp::Union, a, b, out)
    }

    /// Runs the operation and appends its result to `out`.
    ///
    /// Nothing is written to `out` if the operation fails.
    pub fn apply<N, A, B, O>(
        &self,
        op: OverlayOp,
        a: &A,
        b: &B,
        out: &mut O,
    ) -> Result<(), OverlayError>
    where
        N: CoordNum,
        S: OverlayStrategy<N>,
        A: AsOperand<N> + ?Sized,
        B: AsOperand<N> + ?Sized,
        O: OverlayOutput<N>,
    {
        let a = a.as_operand()?;
        let b = b.as_operand()?;

        let required = a.category().dimension().max(b.category().dimension());
        if required > O::MAX_DIMENSION {
            return Err(OverlayError::OutputArity {
                required,
                capacity: O::MAX_DIMENSION,
            });
        }

        self.check_corrected(&a)?;
        self.check_corrected(&b)?;

        let mut result = Stratified::new();
        self.run(op, &a, &b, &mut result);
        out.absorb(result)
    }

    fn run<N>(&self, op: OverlayOp, a: &Operand<N>, b: &Operand<N>, result: &mut Stratified<N>)
    where
        N: CoordNum,
        S: OverlayStrategy<N>,
    {
        log::debug!(
            "{op:?} of {:?} and {:?} geometries",
            a.category(),
            b.category()
        );

        match (op, a.is_empty(), b.is_empty()) {
            (OverlayOp::Difference, _, true) | (OverlayOp::Union, _, true) => {
                log::trace!("second operand is empty");
                a.emit(&self.strategy, result);
                return;
            }
            (OverlayOp::Union, true, false) => {
                log::trace!("first operand is empty");
                b.emit(&self.strategy, result);
                return;
            }
            (OverlayOp::Intersection, true, _)
            | (OverlayOp::Intersection, _, true)
            | (OverlayOp::Difference, true, _) => {
                log::trace!("operand is empty");
                return;
            }
            _ => {}
        }

        use Operand::*;
        match (a, b) {
            (Points(a), Points(b)) => pointlike::points_points(self, op, a, b, result),
            (Points(points), Lines(lines)) => {
                pointlike::points_lines(self, op, points, lines, Polarity::Forward, result)
            }
            (Lines(lines), Points(points)) => {
                pointlike::points_lines(self, op, points, lines, Polarity::Reversed, result)
            }
            (Points(points), Areas(areas)) => {
                pointlike::points_areas(self, op, points, areas, Polarity::Forward, result)
            }
            (Areas(areas), Points(points)) => {
                pointlike::points_areas(self, op, points, areas, Polarity::Reversed, result)
            }
            (Lines(a), Lines(b)) => linear::lines_lines(self, op, a, b, result),
            (Lines(lines), Areas(areas)) => {
                linear::lines_areas(self, op, lines, areas, Polarity::Forward, result)
            }
            (Areas(areas), Lines(lines)) => {
                linear::lines_areas(self, op, lines, areas, Polarity::Reversed, result)
            }
            (Areas(a), Areas(b)) => areal::areas_areas(self, op, a, b, result),
        }
    }

    /// Areal operands must have closed rings with canonical orientation. Degenerate rings are ignored.
    fn check_corrected<N>(&self, operand: &Operand<N>) -> Result<(), OverlayError>
    where
        N: CoordNum,
        S: OverlayStrategy<N>,
    {
        let Operand::Areas(polygons) = operand else {
            return Ok(());
        };

        for polygon in polygons.iter() {
            let rings = std::iter::once((&polygon.outer_ring, Winding::CounterClockwise)).chain(
                polygon
                    .inner_rings
                    .iter()
                    .map(|ring| (ring, Winding::Clockwise)),
            );

            for (ring, expected) in rings {
                if ring.is_degenerate() {
                    continue;
                }

                if !ring.is_closed() {
                    return Err(OverlayError::UncorrectedRing("ring is not closed"));
                }

                match Winding::from_signed_area(self.strategy.signed_area(ring)) {
                    Some(winding) if winding != expected => {
                        return Err(OverlayError::UncorrectedRing(match expected {
                            Winding::CounterClockwise => "outer ring is not counterclockwise",
                            Winding::Clockwise => "hole is not clockwise",
                        }));
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

/// Adds the point to the set unless an equal point is already there.
pub(crate) fn push_distinct<N, S>(points: &mut MultiPoint<N>, point: Point2<N>, strategy: &S)
where
    N: CoordNum,
    S: PointInPointStrategy<N>,
{
    if !points.iter().any(|p| strategy.points_equal(p, &point)) {
        points.push(point);
    }
}
