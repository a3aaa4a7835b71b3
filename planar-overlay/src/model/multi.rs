//! Collections of homogeneous geometries.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2, Rect};
use crate::model::{LineString, Polygon};

macro_rules! multi_geometry {
    ($(#[$meta:meta])* $name:ident, $field:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
        pub struct $name<N = f64> {
            /// Members of the collection.
            pub $field: Vec<$item>,
        }

        impl<N> $name<N> {
            /// Creates a new collection.
            pub fn new($field: Vec<$item>) -> Self {
                Self { $field }
            }
        }

        impl<N> std::ops::Deref for $name<N> {
            type Target = Vec<$item>;

            fn deref(&self) -> &Self::Target {
                &self.$field
            }
        }

        impl<N> std::ops::DerefMut for $name<N> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.$field
            }
        }

        impl<N> From<Vec<$item>> for $name<N> {
            fn from($field: Vec<$item>) -> Self {
                Self { $field }
            }
        }

        impl<N> FromIterator<$item> for $name<N> {
            fn from_iter<T: IntoIterator<Item = $item>>(iter: T) -> Self {
                Self {
                    $field: iter.into_iter().collect(),
                }
            }
        }

        impl<N> Extend<$item> for $name<N> {
            fn extend<T: IntoIterator<Item = $item>>(&mut self, iter: T) {
                self.$field.extend(iter)
            }
        }

        impl<N> IntoIterator for $name<N> {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.$field.into_iter()
            }
        }
    };
}

multi_geometry!(
    /// A set of points. Duplicates are allowed.
    MultiPoint,
    points,
    Point2<N>
);

multi_geometry!(
    /// A set of line strings.
    MultiLineString,
    parts,
    LineString<N>
);

multi_geometry!(
    /// A set of polygons. In a valid multipolygon the parts do not overlap.
    MultiPolygon,
    parts,
    Polygon<N>
);

impl<N: CoordNum> MultiPoint<N> {
    /// Bounding rectangle of the points. `None` if the set is empty.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        Rect::from_points(self.points.iter())
    }
}

impl<N: CoordNum> MultiLineString<N> {
    /// Bounding rectangle of all parts. `None` if there are no points.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        Rect::from_points(self.parts.iter().flat_map(|part| part.iter()))
    }
}

impl<N: CoordNum> MultiPolygon<N> {
    /// Bounding rectangle of all parts. `None` if there are no points.
    pub fn bounding_rect(&self) -> Option<Rect<N>> {
        Rect::from_points(
            self.parts
                .iter()
                .flat_map(|part| part.outer_ring.points.iter()),
        )
    }
}
