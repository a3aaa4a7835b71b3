use ::geo_types::{coord, Coord, Geometry};

use crate::cartesian::{CoordNum, Point2, Rect};
use crate::error::OverlayError;
use crate::geometry::Geom;
use crate::model::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Ring};

impl<N: CoordNum> From<Coord<N>> for Point2<N> {
    fn from(value: Coord<N>) -> Self {
        Point2::new(value.x, value.y)
    }
}

impl<N: CoordNum> From<Point2<N>> for Coord<N> {
    fn from(value: Point2<N>) -> Self {
        coord!(x: value.x(), y: value.y())
    }
}

impl<N: CoordNum> From<::geo_types::Point<N>> for Point2<N> {
    fn from(value: ::geo_types::Point<N>) -> Self {
        value.0.into()
    }
}

impl<N: CoordNum> From<Point2<N>> for ::geo_types::Point<N> {
    fn from(value: Point2<N>) -> Self {
        ::geo_types::Point(value.into())
    }
}

impl<N: CoordNum> From<::geo_types::LineString<N>> for LineString<N> {
    fn from(value: ::geo_types::LineString<N>) -> Self {
        value.0.into_iter().map(Point2::from).collect()
    }
}

impl<N: CoordNum> From<LineString<N>> for ::geo_types::LineString<N> {
    fn from(value: LineString<N>) -> Self {
        value.into_points().into_iter().map(Coord::from).collect()
    }
}

impl<N: CoordNum> From<::geo_types::LineString<N>> for Ring<N> {
    fn from(value: ::geo_types::LineString<N>) -> Self {
        Ring::new(value.0.into_iter().map(Point2::from).collect())
    }
}

impl<N: CoordNum> From<Ring<N>> for ::geo_types::LineString<N> {
    fn from(value: Ring<N>) -> Self {
        value.points.into_iter().map(Coord::from).collect()
    }
}

impl<N: CoordNum> From<::geo_types::Polygon<N>> for Polygon<N> {
    fn from(value: ::geo_types::Polygon<N>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(Ring::from).collect(),
        )
    }
}

impl<N: CoordNum> From<Polygon<N>> for ::geo_types::Polygon<N> {
    fn from(value: Polygon<N>) -> Self {
        ::geo_types::Polygon::new(
            value.outer_ring.into(),
            value.inner_rings.into_iter().map(Into::into).collect(),
        )
    }
}

impl<N: CoordNum> From<::geo_types::MultiPoint<N>> for MultiPoint<N> {
    fn from(value: ::geo_types::MultiPoint<N>) -> Self {
        value.0.into_iter().map(Point2::from).collect()
    }
}

impl<N: CoordNum> From<MultiPoint<N>> for ::geo_types::MultiPoint<N> {
    fn from(value: MultiPoint<N>) -> Self {
        ::geo_types::MultiPoint(value.into_iter().map(Into::into).collect())
    }
}

impl<N: CoordNum> From<::geo_types::MultiLineString<N>> for MultiLineString<N> {
    fn from(value: ::geo_types::MultiLineString<N>) -> Self {
        value.0.into_iter().map(LineString::from).collect()
    }
}

impl<N: CoordNum> From<MultiLineString<N>> for ::geo_types::MultiLineString<N> {
    fn from(value: MultiLineString<N>) -> Self {
        ::geo_types::MultiLineString(value.into_iter().map(Into::into).collect())
    }
}

impl<N: CoordNum> From<::geo_types::MultiPolygon<N>> for MultiPolygon<N> {
    fn from(value: ::geo_types::MultiPolygon<N>) -> Self {
        value.0.into_iter().map(Polygon::from).collect()
    }
}

impl<N: CoordNum> From<MultiPolygon<N>> for ::geo_types::MultiPolygon<N> {
    fn from(value: MultiPolygon<N>) -> Self {
        ::geo_types::MultiPolygon(value.into_iter().map(Into::into).collect())
    }
}

impl<N: CoordNum> From<::geo_types::Rect<N>> for Rect<N> {
    fn from(value: ::geo_types::Rect<N>) -> Self {
        Rect::from_corners(value.min().into(), value.max().into())
    }
}

impl<N: CoordNum> From<Rect<N>> for ::geo_types::Rect<N> {
    fn from(value: Rect<N>) -> Self {
        ::geo_types::Rect::new(Coord::from(value.min()), Coord::from(value.max()))
    }
}

impl<N: CoordNum> TryFrom<Geometry<N>> for Geom<N> {
    type Error = OverlayError;

    fn try_from(value: Geometry<N>) -> Result<Self, Self::Error> {
        Ok(match value {
            Geometry::Point(v) => Geom::Point(v.into()),
            Geometry::Line(v) => {
                Geom::LineString(LineString::new(vec![v.start.into(), v.end.into()]))
            }
            Geometry::LineString(v) => Geom::LineString(v.into()),
            Geometry::Polygon(v) => Geom::Polygon(v.into()),
            Geometry::MultiPoint(v) => Geom::MultiPoint(v.into()),
            Geometry::MultiLineString(v) => Geom::MultiLineString(v.into()),
            Geometry::MultiPolygon(v) => Geom::MultiPolygon(v.into()),
            Geometry::Rect(v) => Geom::Rect(v.into()),
            Geometry::Triangle(v) => Geom::Polygon(v.to_polygon().into()),
            Geometry::GeometryCollection(_) => {
                return Err(OverlayError::Conversion(
                    "geometry collections are not supported".into(),
                ))
            }
        })
    }
}

impl<N: CoordNum> From<Geom<N>> for Geometry<N> {
    fn from(value: Geom<N>) -> Self {
        match value {
            Geom::Point(v) => Geometry::Point(v.into()),
            Geom::MultiPoint(v) => Geometry::MultiPoint(v.into()),
            Geom::LineString(v) => Geometry::LineString(v.into()),
            Geom::MultiLineString(v) => Geometry::MultiLineString(v.into()),
            Geom::Ring(v) => Geometry::Polygon(Polygon::from(v).into()),
            Geom::Polygon(v) => Geometry::Polygon(v.into()),
            Geom::MultiPolygon(v) => Geometry::MultiPolygon(v.into()),
            Geom::Rect(v) => Geometry::Rect(v.into()),
        }
    }
}
