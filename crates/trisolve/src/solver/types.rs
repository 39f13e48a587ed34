//! Input and result types.
//!
//! - `TriangleInput`: six optional measurements (explicit presence).
//! - `Measurements`: a fully solved set of sides and angles.
//! - `SolvedTriangle`: measurements plus their planar points.
//! - `SolutionPair`: primary/alternate solutions (identical unless ambiguous).

use nalgebra::Vector2;

use super::coords::coordinates;

/// Up to six measurements; `None` means "not provided".
///
/// Invariants (checked by `validate`, not by construction):
/// - exactly three fields present, at least one of them a side;
/// - present values are finite and strictly positive, angles `< π`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriangleInput {
    pub sides: [Option<f64>; 3],
    pub angles: [Option<f64>; 3],
}

impl TriangleInput {
    #[inline]
    pub fn new(sides: [Option<f64>; 3], angles: [Option<f64>; 3]) -> Self {
        Self { sides, angles }
    }

    /// Three sides, no angles.
    #[inline]
    pub fn from_sides(a: f64, b: f64, c: f64) -> Self {
        Self::new([Some(a), Some(b), Some(c)], [None; 3])
    }

    /// Zero-sentinel convention: a field equal to `0.0` is treated as absent.
    ///
    /// Order is `[a, b, c, A, B, C]`. NaN and negative values stay present so
    /// the validator can report them.
    pub fn from_zero_sentinel(raw: [f64; 6]) -> Self {
        let present = |v: f64| if v == 0.0 { None } else { Some(v) };
        Self::new(
            [present(raw[0]), present(raw[1]), present(raw[2])],
            [present(raw[3]), present(raw[4]), present(raw[5])],
        )
    }

    /// Equilateral default used when the request cannot be solved.
    #[inline]
    pub fn fallback(side: f64) -> Self {
        Self::from_sides(side, side, side)
    }

    #[inline]
    pub fn a(mut self, v: f64) -> Self {
        self.sides[0] = Some(v);
        self
    }
    #[inline]
    pub fn b(mut self, v: f64) -> Self {
        self.sides[1] = Some(v);
        self
    }
    #[inline]
    pub fn c(mut self, v: f64) -> Self {
        self.sides[2] = Some(v);
        self
    }
    #[inline]
    pub fn angle_a(mut self, v: f64) -> Self {
        self.angles[0] = Some(v);
        self
    }
    #[inline]
    pub fn angle_b(mut self, v: f64) -> Self {
        self.angles[1] = Some(v);
        self
    }
    #[inline]
    pub fn angle_c(mut self, v: f64) -> Self {
        self.angles[2] = Some(v);
        self
    }

    /// Number of sides provided.
    #[inline]
    pub fn side_count(&self) -> usize {
        self.sides.iter().flatten().count()
    }

    /// Number of angles provided.
    #[inline]
    pub fn angle_count(&self) -> usize {
        self.angles.iter().flatten().count()
    }

    /// All present values, sides first.
    pub(crate) fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.sides.iter().chain(self.angles.iter()).flatten().copied()
    }
}

/// Fully solved sides `(a, b, c)` and angles `(A, B, C)` in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub sides: [f64; 3],
    pub angles: [f64; 3],
}

impl Measurements {
    #[inline]
    pub fn new(sides: [f64; 3], angles: [f64; 3]) -> Self {
        Self { sides, angles }
    }

    /// Equilateral triangle with side `s`.
    pub fn equilateral(s: f64) -> Self {
        let third = std::f64::consts::FRAC_PI_3;
        Self::new([s; 3], [third; 3])
    }

    /// Sum of the three angles.
    #[inline]
    pub fn angle_sum(&self) -> f64 {
        self.angles.iter().sum()
    }

    /// Values in `[a, b, c, A, B, C]` order.
    #[inline]
    pub fn values(&self) -> [f64; 6] {
        let [a, b, c] = self.sides;
        let [aa, bb, cc] = self.angles;
        [a, b, c, aa, bb, cc]
    }

    /// Largest absolute side difference against `other`.
    #[inline]
    pub(crate) fn side_gap(&self, other: &Measurements) -> f64 {
        (0..3)
            .map(|i| (self.sides[i] - other.sides[i]).abs())
            .fold(0.0, f64::max)
    }
}

/// One solved case with its rendering coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolvedTriangle {
    pub measurements: Measurements,
    pub points: [Vector2<f64>; 3],
}

impl SolvedTriangle {
    pub fn new(measurements: Measurements) -> Self {
        Self {
            measurements,
            points: coordinates(&measurements),
        }
    }
}

/// Primary and alternate solutions. Equal members mean "not ambiguous".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolutionPair {
    pub primary: SolvedTriangle,
    pub alternate: SolvedTriangle,
}

impl SolutionPair {
    /// Degenerate pair: both members are `t`.
    #[inline]
    pub fn single(t: SolvedTriangle) -> Self {
        Self {
            primary: t,
            alternate: t,
        }
    }

    /// Pair with members exchanged.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            primary: self.alternate,
            alternate: self.primary,
        }
    }

    /// True when the members differ.
    #[inline]
    pub fn is_distinct(&self) -> bool {
        self.primary != self.alternate
    }
}
