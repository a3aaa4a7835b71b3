//! Tagged union over all geometry types of the model.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2, Rect};
use crate::model::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Ring};

/// Coarse classification of geometries by their topological dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Points and multipoints, dimension 0.
    Pointlike,
    /// Line strings and multi line strings, dimension 1.
    Linear,
    /// Rings, polygons and multipolygons, dimension 2.
    Areal,
}

impl Category {
    /// Topological dimension of the geometries of the category.
    pub fn dimension(self) -> usize {
        match self {
            Category::Pointlike => 0,
            Category::Linear => 1,
            Category::Areal => 2,
        }
    }
}

/// Any geometry of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<N = f64> {
    /// Point.
    Point(Point2<N>),
    /// MultiPoint.
    MultiPoint(MultiPoint<N>),
    /// LineString.
    LineString(LineString<N>),
    /// MultiLineString.
    MultiLineString(MultiLineString<N>),
    /// Ring.
    Ring(Ring<N>),
    /// Polygon.
    Polygon(Polygon<N>),
    /// MultiPolygon.
    MultiPolygon(MultiPolygon<N>),
    /// Axis-aligned box.
    Rect(Rect<N>),
}

impl<N: CoordNum> Geom<N> {
    /// Category of the geometry. Boxes have no category and cannot take part in set operations.
    pub fn category(&self) -> Option<Category> {
        match self {
            Geom::Point(_) | Geom::MultiPoint(_) => Some(Category::Pointlike),
            Geom::LineString(_) | Geom::MultiLineString(_) => Some(Category::Linear),
            Geom::Ring(_) | Geom::Polygon(_) | Geom::MultiPolygon(_) => Some(Category::Areal),
            Geom::Rect(_) => None,
        }
    }

    /// Name of the geometry type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geom::Point(_) => "Point",
            Geom::MultiPoint(_) => "MultiPoint",
            Geom::LineString(_) => "LineString",
            Geom::MultiLineString(_) => "MultiLineString",
            Geom::Ring(_) => "Ring",
            Geom::Polygon(_) => "Polygon",
            Geom::MultiPolygon(_) => "MultiPolygon",
            Geom::Rect(_) => "Rect",
        }
    }

    /// Bounding rectangle of the geometry. `None` for empty geometries.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        match self {
            Geom::Point(v) => Some(Rect::from_point(v)),
            Geom::MultiPoint(v) => v.bounding_rect(),
            Geom::LineString(v) => v.bounding_rect(),
            Geom::MultiLineString(v) => v.bounding_rect(),
            Geom::Ring(v) => v.bounding_rect(),
            Geom::Polygon(v) => v.bounding_rect(),
            Geom::MultiPolygon(v) => v.bounding_rect(),
            Geom::Rect(v) => Some(*v),
        }
    }
}

impl<N> From<Point2<N>> for Geom<N> {
    fn from(value: Point2<N>) -> Self {
        Self::Point(value)
    }
}

impl<N> From<MultiPoint<N>> for Geom<N> {
    fn from(value: MultiPoint<N>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<N> From<LineString<N>> for Geom<N> {
    fn from(value: LineString<N>) -> Self {
        Self::LineString(value)
    }
}

impl<N> From<MultiLineString<N>> for Geom<N> {
    fn from(value: MultiLineString<N>) -> Self {
        Self::MultiLineString(value)
    }
}

impl<N> From<Ring<N>> for Geom<N> {
    fn from(value: Ring<N>) -> Self {
        Self::Ring(value)
    }
}

impl<N> From<Polygon<N>> for Geom<N> {
    fn from(value: Polygon<N>) -> Self {
        Self::Polygon(value)
    }
}

impl<N> From<MultiPolygon<N>> for Geom<N> {
    fn from(value: MultiPolygon<N>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<N> From<Rect<N>> for Geom<N> {
    fn from(value: Rect<N>) -> Self {
        Self::Rect(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        let point: Geom = Point2::new(1.0, 2.0).into();
        assert_eq!(point.category(), Some(Category::Pointlike));
        assert_eq!(point.category().map(Category::dimension), Some(0));

        let line: Geom = LineString::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).into();
        assert_eq!(line.category(), Some(Category::Linear));

        let ring: Geom = Rect::new(0.0, 0.0, 1.0, 1.0).to_ring().into();
        assert_eq!(ring.category(), Some(Category::Areal));
        assert_eq!(ring.category().map(Category::dimension), Some(2));

        let rect: Geom = Rect::new(0.0, 0.0, 1.0, 1.0).into();
        assert_eq!(rect.category(), None);
        assert_eq!(rect.type_name(), "Rect");
    }
}
