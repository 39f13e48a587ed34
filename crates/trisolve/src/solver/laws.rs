//! Law of sines and law of cosines.
//!
//! Pure numeric helpers. Out-of-domain arguments are not clamped: `asin`/`acos`
//! of a value outside [-1, 1] returns NaN and a zero reference sine divides to
//! inf, both of which the geometry check rejects downstream.

/// Side opposite `angle`, from a known pair (`ref_side` opposite `ref_angle`).
#[inline]
pub fn sine_side(angle: f64, ref_side: f64, ref_angle: f64) -> f64 {
    (angle.sin() * ref_side) / ref_angle.sin()
}

/// Angle opposite `side`, from a known pair (`ref_side` opposite `ref_angle`).
///
/// Returns the principal (acute) solution; the obtuse one is `π − result`.
#[inline]
pub fn sine_angle(side: f64, ref_side: f64, ref_angle: f64) -> f64 {
    ((side * ref_angle.sin()) / ref_side).asin()
}

/// Angle opposite `opposite`, enclosed by sides `s1` and `s2`.
///
/// Sides are divided by the largest one first, so squaring cannot overflow
/// for any finite input.
#[inline]
pub fn cosine_angle(opposite: f64, s1: f64, s2: f64) -> f64 {
    let k = unit_scale(opposite.abs().max(s1.abs()).max(s2.abs()));
    let (o, u, v) = (opposite / k, s1 / k, s2 / k);
    ((u * u + v * v - o * o) / (2.0 * u * v)).acos()
}

/// Side opposite the angle `included` between sides `s1` and `s2`.
#[inline]
pub fn cosine_side(s1: f64, s2: f64, included: f64) -> f64 {
    let k = unit_scale(s1.abs().max(s2.abs()));
    let (u, v) = (s1 / k, s2 / k);
    k * (u * u + v * v - 2.0 * u * v * included.cos()).sqrt()
}

// Zero and non-finite magnitudes are left unscaled.
#[inline]
fn unit_scale(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max
    } else {
        1.0
    }
}
