use geozero::wkt::Wkt;
use geozero::{ToGeo, ToWkt};

use crate::error::OverlayError;
use crate::geometry::Geom;

impl Geom<f64> {
    /// Parses a geometry from its WKT representation.
    ///
    /// Rings are taken as they are written, so areal geometries usually need to be
    /// [corrected](crate::Correct) before they are used in set operations.
    pub fn from_wkt(text: &str) -> Result<Self, OverlayError> {
        let geometry = Wkt(text)
            .to_geo()
            .map_err(|err| OverlayError::Conversion(err.to_string()))?;
        Geom::try_from(geometry)
    }

    /// Writes the geometry as WKT.
    pub fn to_wkt(&self) -> Result<String, OverlayError> {
        ::geo_types::Geometry::from(self.clone())
            .to_wkt()
            .map_err(|err| OverlayError::Conversion(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::cartesian::Point2;
    use crate::geometry::Category;

    #[test]
    fn parse_polygon() {
        let geom = Geom::from_wkt("POLYGON((0 0,0 5,5 5,5 0,0 0),(1 1,4 1,4 4,1 4,1 1))").unwrap();
        assert_eq!(geom.category(), Some(Category::Areal));
        let Geom::Polygon(polygon) = geom else {
            panic!("not a polygon");
        };
        assert_eq!(polygon.outer_ring.points[1], Point2::new(0.0, 5.0));
        assert_eq!(polygon.inner_rings.len(), 1);
    }

    #[test]
    fn parse_multi_point() {
        let geom = Geom::from_wkt("MULTIPOINT(0 0,1 1,2 2)").unwrap();
        assert_matches!(geom, Geom::MultiPoint(points) if points.len() == 3);
    }

    #[test]
    fn write_line() {
        let geom = Geom::from_wkt("LINESTRING(0 0,1 2)").unwrap();
        let text = geom.to_wkt().unwrap();
        assert_eq!(Geom::from_wkt(&text).unwrap(), geom);
    }

    #[test]
    fn invalid_text() {
        assert_matches!(
            Geom::from_wkt("POLYGON((0 0,1"),
            Err(OverlayError::Conversion(_))
        );
    }
}
