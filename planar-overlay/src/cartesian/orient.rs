use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CoordNum, Point2};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// Uses the adaptive precision `orient2d` predicate, so the result is exact for the input coordinates: a
    /// point that lies on the line through `p` and `q` is always reported as collinear, and a point next to the
    /// line is never reported as collinear.
    pub fn triplet<Num: CoordNum>(p: &Point2<Num>, q: &Point2<Num>, r: &Point2<Num>) -> Self {
        let det = match (robust_coord(p), robust_coord(q), robust_coord(r)) {
            (Some(p), Some(q), Some(r)) => robust::orient2d(p, q, r),
            _ => {
                let v = (q.x() - p.x()) * (r.y() - p.y()) - (q.y() - p.y()) * (r.x() - p.x());
                v.to_f64().unwrap_or(f64::NAN)
            }
        };

        if det > 0.0 {
            Self::Counterclockwise
        } else if det < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}

fn robust_coord<Num: CoordNum>(p: &Point2<Num>) -> Option<robust::Coord<f64>> {
    Some(robust::Coord {
        x: p.x().to_f64()?,
        y: p.y().to_f64()?,
    })
}

/// Direction in which a closed ring is traversed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise, negative signed area.
    Clockwise,
    /// Counterclockwise, positive signed area.
    CounterClockwise,
}

impl Winding {
    /// Winding of a ring with the given signed area. Zero-area rings have no winding.
    pub fn from_signed_area<Num: CoordNum>(area: Num) -> Option<Self> {
        if area > Num::zero() {
            Some(Self::CounterClockwise)
        } else if area < Num::zero() {
            Some(Self::Clockwise)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triplet() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(1.0, 0.0);

        assert_eq!(
            Orientation::triplet(&p, &q, &Point2::new(1.0, 1.0)),
            Orientation::Counterclockwise
        );
        assert_eq!(
            Orientation::triplet(&p, &q, &Point2::new(1.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            Orientation::triplet(&p, &q, &Point2::new(7.5, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn collinear_with_inexact_coordinates() {
        // (6.425, 1.175) is exactly a quarter of the way from the first point to the second one, but the naive
        // determinant of these values is not zero.
        let p = Point2::new(7.3, 0.5);
        let q = Point2::new(3.8, 3.2);

        assert_eq!(
            Orientation::triplet(&p, &q, &Point2::new(6.425, 1.175)),
            Orientation::Collinear
        );
        assert_eq!(
            Orientation::triplet(&p, &q, &Point2::new(6.425, 1.1750000000000003)),
            Orientation::Clockwise
        );
    }

    #[test]
    fn winding_from_area() {
        assert_eq!(
            Winding::from_signed_area(0.5),
            Some(Winding::CounterClockwise)
        );
        assert_eq!(Winding::from_signed_area(-0.5), Some(Winding::Clockwise));
        assert_eq!(Winding::from_signed_area(0.0), None);
    }
}
