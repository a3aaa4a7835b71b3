//! Types and functions on geometries in cartesian coordinates.

mod orient;
mod point;
mod rect;

pub use orient::{Orientation, Winding};
pub(crate) use point::PointKey;
pub use point::{CoordNum, Point2, Vector2};
pub use rect::Rect;
