use nalgebra::Vector2;

use super::types::Measurements;

/// Planar points for rendering: origin, `(b·cos C, b·sin C)`, `(a, 0)`.
///
/// Side `a` lies on the positive x-axis and side `b` leaves the origin at
/// angle `C`, so point 1 sits in the upper half-plane for valid input.
#[inline]
pub fn coordinates(m: &Measurements) -> [Vector2<f64>; 3] {
    let [a, b, _] = m.sides;
    let gamma = m.angles[2];
    [
        Vector2::zeros(),
        Vector2::new(b * gamma.cos(), b * gamma.sin()),
        Vector2::new(a, 0.0),
    ]
}
