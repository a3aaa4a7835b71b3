use std::borrow::Cow;

use crate::cartesian::{CoordNum, Point2, Rect};
use crate::error::OverlayError;
use crate::geometry::{Category, Geom};
use crate::model::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Ring};
use crate::output::{Fragment, Stratified};
use crate::overlay::push_distinct;
use crate::strategy::PointInPointStrategy;

/// Borrowed view of a geometry as a homogeneous collection of its category.
#[derive(Debug, Clone)]
pub enum Operand<'a, N: CoordNum> {
    /// Point-like geometry.
    Points(&'a [Point2<N>]),
    /// Linear geometry.
    Lines(&'a [LineString<N>]),
    /// Areal geometry.
    Areas(Cow<'a, [Polygon<N>]>),
}

impl<N: CoordNum> Operand<'_, N> {
    /// Category of the operand.
    pub fn category(&self) -> Category {
        match self {
            Operand::Points(_) => Category::Pointlike,
            Operand::Lines(_) => Category::Linear,
            Operand::Areas(_) => Category::Areal,
        }
    }

    /// Returns true if the operand has no members.
    pub fn is_empty(&self) -> bool {
        match self {
            Operand::Points(v) => v.is_empty(),
            Operand::Lines(v) => v.iter().all(|line| line.is_empty()),
            Operand::Areas(v) => v.iter().all(|polygon| polygon.outer_ring.points.is_empty()),
        }
    }

    /// Bounding rectangle of all members.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        match self {
            Operand::Points(v) => Rect::from_points(v.iter()),
            Operand::Lines(v) => Rect::from_points(v.iter().flat_map(|line| line.iter())),
            Operand::Areas(v) => {
                Rect::from_points(
                    v.iter()
                        .flat_map(|polygon| polygon.outer_ring.points.iter()),
                )
            }
        }
    }

    /// Copies all members of the operand into the result. Duplicate points are copied once.
    pub(crate) fn emit<S: PointInPointStrategy<N>>(
        &self,
        strategy: &S,
        result: &mut Stratified<N>,
    ) {
        match self {
            Operand::Points(v) => {
                for p in v.iter() {
                    push_distinct(&mut result.points, *p, strategy);
                }
            }
            Operand::Lines(v) => result.extend(v.iter().map(|line| Fragment::Line(line.clone()))),
            Operand::Areas(v) => {
                result.extend(v.iter().map(|polygon| Fragment::Polygon(polygon.clone())))
            }
        }
    }
}

/// Geometries that can be operands of set operations.
pub trait AsOperand<N: CoordNum> {
    /// Returns the view of the geometry used by the overlay algorithms.
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError>;
}

impl<N: CoordNum> AsOperand<N> for Point2<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Ok(Operand::Points(std::slice::from_ref(self)))
    }
}

impl<N: CoordNum> AsOperand<N> for MultiPoint<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Ok(Operand::Points(&self.points))
    }
}

impl<N: CoordNum> AsOperand<N> for LineString<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Ok(Operand::Lines(std::slice::from_ref(self)))
    }
}

impl<N: CoordNum> AsOperand<N> for MultiLineString<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Ok(Operand::Lines(&self.parts))
    }
}

impl<N: CoordNum> AsOperand<N> for Ring<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        let polygon = Polygon::from(self.clone());
        Ok(Operand::Areas(Cow::Owned(vec![polygon])))
    }
}

impl<N: CoordNum> AsOperand<N> for Polygon<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Ok(Operand::Areas(Cow::Borrowed(std::slice::from_ref(self))))
    }
}

impl<N: CoordNum> AsOperand<N> for MultiPolygon<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Ok(Operand::Areas(Cow::Borrowed(&self.parts)))
    }
}

impl<N: CoordNum> AsOperand<N> for Rect<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        Err(OverlayError::UnsupportedGeometry("Rect"))
    }
}

impl<N: CoordNum> AsOperand<N> for Geom<N> {
    fn as_operand(&self) -> Result<Operand<'_, N>, OverlayError> {
        match self {
            Geom::Point(v) => v.as_operand(),
            Geom::MultiPoint(v) => v.as_operand(),
            Geom::LineString(v) => v.as_operand(),
            Geom::MultiLineString(v) => v.as_operand(),
            Geom::Ring(v) => v.as_operand(),
            Geom::Polygon(v) => v.as_operand(),
            Geom::MultiPolygon(v) => v.as_operand(),
            Geom::Rect(v) => v.as_operand(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn categories() {
        let point = Point2::new(1.0, 1.0);
        assert_eq!(
            point.as_operand().map(|v| v.category()),
            Ok(Category::Pointlike)
        );

        let ring = Rect::new(0.0, 0.0, 1.0, 1.0).to_ring();
        let operand = ring.as_operand().unwrap();
        assert_eq!(operand.category(), Category::Areal);
        assert!(!operand.is_empty());

        let lines = MultiLineString::<f64>::default();
        let operand = lines.as_operand().unwrap();
        assert_eq!(operand.category(), Category::Linear);
        assert!(operand.is_empty());
        assert_eq!(operand.bounding_rect(), None);
    }

    #[test]
    fn rect_is_not_an_operand() {
        let geom: Geom = Rect::new(0.0, 0.0, 1.0, 1.0).into();
        assert_matches!(
            geom.as_operand(),
            Err(OverlayError::UnsupportedGeometry("Rect"))
        );
    }
}
