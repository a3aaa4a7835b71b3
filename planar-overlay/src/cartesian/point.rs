use std::fmt::Debug;

use approx::AbsDiffEq;
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

/// Numeric type of geometry coordinates.
///
/// All floating point types that can be built from primitives satisfy this trait, `f64` being the default
/// everywhere in the crate.
pub trait CoordNum: Float + FromPrimitive + Debug {}

impl<T: Float + FromPrimitive + Debug> CoordNum for T {}

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num: CoordNum> Point2<Num> {
    /// X coordinate.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.y
    }

    /// Squared euclidean distance between two points.
    pub fn distance_sq(&self, other: &Self) -> Num {
        (*self - *other).magnitude_sq()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        let two = Num::one() + Num::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Key that identifies the exact coordinate values of the point. Two points have equal keys if and only if
    /// their coordinates compare equal (positive and negative zeroes are merged).
    pub(crate) fn exact_key(&self) -> PointKey {
        fn decode<N: Float>(v: N) -> (u64, i16, i8) {
            if v == N::zero() {
                N::zero().integer_decode()
            } else {
                v.integer_decode()
            }
        }

        (decode(self.x), decode(self.y))
    }
}

pub(crate) type PointKey = ((u64, i16, i8), (u64, i16, i8));

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: CoordNum> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> Num {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Z component of the cross product. Positive if `other` points to the left of `self`.
    pub fn cross(&self, other: &Self) -> Num {
        self.dx * other.dy - self.dy * other.dx
    }
}

impl<Num: CoordNum> std::ops::Sub<Point2<Num>> for Point2<Num> {
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num: CoordNum> std::ops::Add<Vector2<Num>> for Point2<Num> {
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num: CoordNum> std::ops::Neg for Vector2<Num> {
    type Output = Vector2<Num>;

    fn neg(self) -> Self::Output {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl<Num: CoordNum> std::ops::Mul<Num> for Vector2<Num> {
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num> From<(Num, Num)> for Point2<Num> {
    fn from((x, y): (Num, Num)) -> Self {
        Self { x, y }
    }
}

impl<Num> From<[Num; 2]> for Point2<Num> {
    fn from([x, y]: [Num; 2]) -> Self {
        Self { x, y }
    }
}
