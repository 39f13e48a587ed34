//! Input shape checks, in a fixed order (first failure wins).

use std::f64::consts::PI;

use super::{cfg::SolveCfg, error::TriangleError, types::TriangleInput};

/// Validate with default tolerances.
#[inline]
pub fn validate(input: &TriangleInput) -> Result<(), TriangleError> {
    validate_with(input, &SolveCfg::default())
}

/// Check that `input` names a solvable combination of measurements.
///
/// Order: non-finite, negative, zero, no side, count ≠ 3, angle ≥ π, two
/// angles summing to exactly π, triangle inequality (three sides only).
pub fn validate_with(input: &TriangleInput, cfg: &SolveCfg) -> Result<(), TriangleError> {
    if input.present().any(|v| !v.is_finite()) {
        return Err(TriangleError::InvalidNumber);
    }
    if input.present().any(|v| v < 0.0) {
        return Err(TriangleError::NegativeValue);
    }
    if input.present().any(|v| v == 0.0) {
        return Err(TriangleError::ZeroValue);
    }

    let sides = input.side_count();
    if sides == 0 {
        return Err(TriangleError::NoSideGiven);
    }
    if sides + input.angle_count() != 3 {
        return Err(TriangleError::WrongCount);
    }

    let angles: Vec<f64> = input.angles.iter().flatten().copied().collect();
    if angles.iter().any(|&t| t >= PI) {
        return Err(TriangleError::AngleTooLarge);
    }
    // Exact equality only; near-π sums are caught by the geometry check.
    for i in 0..angles.len() {
        for j in (i + 1)..angles.len() {
            if angles[i] + angles[j] == PI {
                return Err(TriangleError::DegenerateAngleSum);
            }
        }
    }

    if let [Some(a), Some(b), Some(c)] = input.sides {
        let eps = cfg.eps;
        if a + b <= c + eps || b + c <= a + eps || c + a <= b + eps {
            return Err(TriangleError::TriangleInequalityViolated);
        }
    }
    Ok(())
}
