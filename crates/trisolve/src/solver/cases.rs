//! Case classification and per-case solving.
//!
//! - `classify`: which congruence case (SSS, AAS/ASA, SAS, SSA) the input is.
//! - `solve_case`: fill in the missing measurements (no validity checks).
//! - `is_ambiguous`: SSA with the given angle opposite the shorter given side.
//!
//! Indices follow the crate convention (`0 = a/A`, `1 = b/B`, `2 = c/C`), so
//! each case is written once and covers every rotation/reflection of it.

use std::f64::consts::PI;

use super::laws::{cosine_angle, cosine_side, sine_angle, sine_side};
use super::types::{Measurements, TriangleInput};

/// Congruence case of a three-measurement input. Fields are indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    /// Three sides.
    Sss,
    /// Two angles and one side (`side`); covers ASA.
    Aas { side: usize },
    /// Two sides and the angle between them (`angle`, its side is unknown).
    Sas { angle: usize },
    /// Angle `angle` with its opposite side, plus side `other`.
    Ssa { angle: usize, other: usize },
}

impl Case {
    /// Short label (`"SSS"`, `"AAS"`, `"SAS"`, `"SSA"`).
    pub fn label(&self) -> &'static str {
        match self {
            Case::Sss => "SSS",
            Case::Aas { .. } => "AAS",
            Case::Sas { .. } => "SAS",
            Case::Ssa { .. } => "SSA",
        }
    }
}

/// Result of solving one case.
///
/// `alternate == primary` unless `ambiguous` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseSolution {
    pub case: Case,
    pub primary: Measurements,
    pub ambiguous: bool,
    pub alternate: Measurements,
}

#[inline]
fn third(i: usize, j: usize) -> usize {
    3 - i - j
}

/// Classify by counts of present sides/angles. `None` for shapes no case covers.
pub fn classify(input: &TriangleInput) -> Option<Case> {
    match (input.side_count(), input.angle_count()) {
        (3, 0) => Some(Case::Sss),
        (1, 2) => {
            let side = input.sides.iter().position(Option::is_some)?;
            Some(Case::Aas { side })
        }
        (2, 1) => {
            let angle = input.angles.iter().position(Option::is_some)?;
            if input.sides[angle].is_none() {
                return Some(Case::Sas { angle });
            }
            let other = (0..3).find(|&k| k != angle && input.sides[k].is_some())?;
            Some(Case::Ssa { angle, other })
        }
        _ => None,
    }
}

/// Predict whether the input admits two distinct triangles.
///
/// Only a prediction: the outcome check demotes it when the second solution
/// collapses onto the first or does not exist.
pub fn is_ambiguous(input: &TriangleInput) -> bool {
    match classify(input) {
        Some(Case::Ssa { angle, other }) => match (input.sides[angle], input.sides[other]) {
            (Some(opposite), Some(adjacent)) => opposite < adjacent,
            _ => false,
        },
        _ => false,
    }
}

/// Solve the classified case. Returns `None` when the input fits no case.
///
/// Values may come out NaN, infinite or non-positive for inputs that describe
/// no triangle; callers check the geometry.
pub fn solve_case(input: &TriangleInput) -> Option<CaseSolution> {
    let case = classify(input)?;
    let mut sides = [f64::NAN; 3];
    let mut angles = [f64::NAN; 3];
    for k in 0..3 {
        if let Some(s) = input.sides[k] {
            sides[k] = s;
        }
        if let Some(t) = input.angles[k] {
            angles[k] = t;
        }
    }

    match case {
        Case::Sss => {
            // Anchor at the longest side: the only angle that can be obtuse is
            // solved by cosines, the sine-law angle is then acute.
            let l = (0..3).fold(0, |best, k| if sides[k] > sides[best] { k } else { best });
            let (m, n) = ((l + 1) % 3, (l + 2) % 3);
            angles[l] = cosine_angle(sides[l], sides[m], sides[n]);
            angles[m] = sine_angle(sides[m], sides[l], angles[l]);
            angles[n] = PI - angles[l] - angles[m];
        }
        Case::Aas { side } => {
            let missing = input.angles.iter().position(Option::is_none)?;
            let (p, q) = ((missing + 1) % 3, (missing + 2) % 3);
            angles[missing] = PI - angles[p] - angles[q];
            for k in (0..3).filter(|&k| k != side) {
                sides[k] = sine_side(angles[k], sides[side], angles[side]);
            }
        }
        Case::Sas { angle } => {
            let (j, k) = ((angle + 1) % 3, (angle + 2) % 3);
            sides[angle] = cosine_side(sides[j], sides[k], angles[angle]);
            // The angle opposite the shorter given side is acute.
            let (short, long) = if sides[j] <= sides[k] { (j, k) } else { (k, j) };
            angles[short] = sine_angle(sides[short], sides[angle], angles[angle]);
            angles[long] = PI - angles[angle] - angles[short];
        }
        Case::Ssa { angle, other } => {
            let k = third(angle, other);
            angles[other] = sine_angle(sides[other], sides[angle], angles[angle]);
            angles[k] = PI - angles[angle] - angles[other];
            sides[k] = sine_side(angles[k], sides[angle], angles[angle]);

            let primary = Measurements::new(sides, angles);
            if sides[angle] < sides[other] {
                let mut alt_angles = angles;
                alt_angles[other] = PI - angles[other];
                alt_angles[k] = PI - angles[angle] - alt_angles[other];
                let mut alt_sides = sides;
                alt_sides[k] = sine_side(alt_angles[k], sides[angle], angles[angle]);
                return Some(CaseSolution {
                    case,
                    primary,
                    ambiguous: true,
                    alternate: Measurements::new(alt_sides, alt_angles),
                });
            }
        }
    }

    let primary = Measurements::new(sides, angles);
    Some(CaseSolution {
        case,
        primary,
        ambiguous: false,
        alternate: primary,
    })
}
