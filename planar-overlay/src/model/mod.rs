//! Value types of the geometry model.

mod line_string;
mod multi;
mod polygon;
mod ring;

pub use line_string::LineString;
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use polygon::Polygon;
pub use ring::Ring;
