//! Offset of axis-aligned rectangles.

use crate::cartesian::{CoordNum, Rect};

/// Returns the rectangle grown by `distance` on every side.
///
/// A negative distance shrinks the rectangle. Shrinking by more than half of the width or height inverts the
/// rectangle, which is not checked here. Use [`Correct`](crate::Correct) to swap the sides back if needed.
///
/// ```
/// use planar_overlay::{buffer, Rect};
///
/// let rect = buffer(&Rect::new(0.0, 0.0, 4.0, 2.0), 1.0);
/// assert_eq!(rect, Rect::new(-1.0, -1.0, 5.0, 3.0));
/// ```
pub fn buffer<N: CoordNum>(rect: &Rect<N>, distance: N) -> Rect<N> {
    Rect {
        x_min: rect.x_min - distance,
        y_min: rect.y_min - distance,
        x_max: rect.x_max + distance,
        y_max: rect.y_max + distance,
    }
}

impl<N: CoordNum> Rect<N> {
    /// Grows the rectangle by `distance` on every side, see [`buffer`].
    pub fn buffer_in_place(&mut self, distance: N) {
        *self = buffer(self, distance);
    }
}
