//! Dimension-aware set operations on planar geometries.
//!
//! The crate computes [`difference`], [`intersection`] and [`union`] of any two geometries among points, line
//! strings, polygons and their multi-variants. The result of an operation can contain fragments of different
//! dimensions (e.g. the difference of a line and a polygon is a set of lines, the intersection of two lines can be
//! both points and lines), so it is written into an output with a separate slot per dimension: [`Stratified`] or a
//! tuple of multi-geometries.
//!
//! ```
//! use planar_overlay::{
//!     difference, Correct, LineString, MultiLineString, MultiPoint, MultiPolygon, Point2, Rect,
//! };
//!
//! let line = LineString::new(vec![Point2::new(-1.0, 1.0), Point2::new(3.0, 1.0)]);
//! let square = Rect::new(0.0, 0.0, 2.0, 2.0).to_polygon().corrected();
//!
//! let mut out = (MultiPoint::default(), MultiLineString::default(), MultiPolygon::default());
//! difference(&line, &square, &mut out).unwrap();
//! assert_eq!(out.1.len(), 2);
//! ```
//!
//! Areal operands must be [corrected](Correct) before the operation: outer rings counterclockwise, holes clockwise,
//! all rings closed.
//!
//! Geometric predicates are provided by a [strategy](strategy). The free functions use [`CartesianStrategy`] and
//! default [options](overlay::OverlayOptions), other configurations are available through [`Overlay`].

pub mod buffer;
pub mod cartesian;
mod correct;
pub mod equals;
pub mod error;
pub mod geometry;
mod io;
pub mod model;
pub mod output;
pub mod overlay;
pub mod segment;
pub mod strategy;

pub use buffer::buffer;
pub use cartesian::{CoordNum, Point2, Rect};
pub use correct::Correct;
pub use equals::Equals;
pub use error::OverlayError;
pub use geometry::{Category, Geom};
pub use model::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Ring};
pub use output::{OverlayOutput, Stratified};
pub use overlay::{AsOperand, Overlay, OverlayOp};
pub use strategy::CartesianStrategy;

/// Appends the part of `a` not covered by `b` to `out`.
///
/// Points and lines lying on the boundary of an areal `b` are kept. Use [`Overlay::with_boundary_rule`] to remove
/// them instead.
pub fn difference<N, A, B, O>(a: &A, b: &B, out: &mut O) -> Result<(), OverlayError>
where
    N: CoordNum,
    A: AsOperand<N> + ?Sized,
    B: AsOperand<N> + ?Sized,
    O: OverlayOutput<N>,
{
    Overlay::new().difference(a, b, out)
}

/// Appends the part common to `a` and `b` to `out`.
pub fn intersection<N, A, B, O>(a: &A, b: &B, out: &mut O) -> Result<(), OverlayError>
where
    N: CoordNum,
    A: AsOperand<N> + ?Sized,
    B: AsOperand<N> + ?Sized,
    O: OverlayOutput<N>,
{
    Overlay::new().intersection(a, b, out)
}

/// Appends the union of `a` and `b` to `out`.
pub fn union<N, A, B, O>(a: &A, b: &B, out: &mut O) -> Result<(), OverlayError>
where
    N: CoordNum,
    A: AsOperand<N> + ?Sized,
    B: AsOperand<N> + ?Sized,
    O: OverlayOutput<N>,
{
    Overlay::new().union(a, b, out)
}
