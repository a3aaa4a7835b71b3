//! Normalization of areal geometries.
//!
//! Set operations expect every ring of an areal operand to be closed (the last point repeats the first one) and
//! oriented canonically: outer rings counterclockwise, holes clockwise. [`Correct`] brings a geometry into this form
//! in place. It is never applied implicitly by the overlay functions, which reject uncorrected operands instead.

use crate::cartesian::{CoordNum, Rect, Winding};
use crate::geometry::Geom;
use crate::model::{MultiPolygon, Polygon, Ring};
use crate::strategy::{AreaStrategy, CartesianStrategy};

/// Closes rings and fixes their orientation.
///
/// Rings with less than 3 distinct points are left untouched. Correction is idempotent.
pub trait Correct<N: CoordNum> {
    /// Corrects the geometry in place using the given area strategy to determine ring orientation.
    fn correct_with<S: AreaStrategy<N>>(&mut self, strategy: &S);

    /// Corrects the geometry in place.
    fn correct(&mut self) {
        self.correct_with(&CartesianStrategy::new());
    }

    /// Returns a corrected copy of the geometry.
    fn corrected(mut self) -> Self
    where
        Self: Sized,
    {
        self.correct();
        self
    }
}

pub(crate) fn correct_ring<N, S>(ring: &mut Ring<N>, winding: Winding, strategy: &S)
where
    N: CoordNum,
    S: AreaStrategy<N>,
{
    if ring.is_degenerate() {
        return;
    }

    if !ring.is_closed() {
        if let Some(first) = ring.points.first().copied() {
            ring.points.push(first);
        }
    }

    if let Some(actual) = Winding::from_signed_area(strategy.signed_area(ring)) {
        if actual != winding {
            ring.reverse();
        }
    }
}

impl<N: CoordNum> Correct<N> for Ring<N> {
    fn correct_with<S: AreaStrategy<N>>(&mut self, strategy: &S) {
        correct_ring(self, Winding::CounterClockwise, strategy);
    }
}

impl<N: CoordNum> Correct<N> for Polygon<N> {
    fn correct_with<S: AreaStrategy<N>>(&mut self, strategy: &S) {
        correct_ring(&mut self.outer_ring, Winding::CounterClockwise, strategy);
        for hole in &mut self.inner_rings {
            correct_ring(hole, Winding::Clockwise, strategy);
        }
    }
}

impl<N: CoordNum> Correct<N> for MultiPolygon<N> {
    fn correct_with<S: AreaStrategy<N>>(&mut self, strategy: &S) {
        for polygon in &mut self.parts {
            polygon.correct_with(strategy);
        }
    }
}

impl<N: CoordNum> Correct<N> for Rect<N> {
    fn correct_with<S: AreaStrategy<N>>(&mut self, _strategy: &S) {
        if self.x_min > self.x_max {
            std::mem::swap(&mut self.x_min, &mut self.x_max);
        }
        if self.y_min > self.y_max {
            std::mem::swap(&mut self.y_min, &mut self.y_max);
        }
    }
}

impl<N: CoordNum> Correct<N> for Geom<N> {
    fn correct_with<S: AreaStrategy<N>>(&mut self, strategy: &S) {
        match self {
            Geom::Ring(v) => v.correct_with(strategy),
            Geom::Polygon(v) => v.correct_with(strategy),
            Geom::MultiPolygon(v) => v.correct_with(strategy),
            Geom::Rect(v) => v.correct_with(strategy),
            Geom::Point(_)
            | Geom::MultiPoint(_)
            | Geom::LineString(_)
            | Geom::MultiLineString(_) => {}
        }
    }
}
