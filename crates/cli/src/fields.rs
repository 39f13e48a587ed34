//! Raw text fields → `TriangleInput`.
//!
//! Conventions
//! - Empty (or whitespace) means "not provided".
//! - Unparsable text becomes NaN so the solver reports `InvalidNumber`
//!   instead of the CLI rejecting the request on its own.
//! - `"0"` is a present zero unless `zero_is_unset` is set.
//! - Angles are degrees unless `radians` is set.

use trisolve::TriangleInput;

/// How raw fields are read.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldMode {
    pub radians: bool,
    pub zero_is_unset: bool,
}

pub fn parse_field(raw: &str, zero_is_unset: bool) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let v = text.parse::<f64>().unwrap_or(f64::NAN);
    if zero_is_unset && v == 0.0 {
        None
    } else {
        Some(v)
    }
}

/// Build the solver input from `[a, b, c]` and `[A, B, C]` text fields.
pub fn build_input(sides: [&str; 3], angles: [&str; 3], mode: FieldMode) -> TriangleInput {
    let sides = sides.map(|s| parse_field(s, mode.zero_is_unset));
    let angles = angles.map(|s| {
        let v = parse_field(s, mode.zero_is_unset)?;
        Some(if mode.radians { v } else { v.to_radians() })
    });
    TriangleInput::new(sides, angles)
}
