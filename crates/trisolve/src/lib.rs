//! Triangle solving from three of six measurements.
//!
//! Conventions
//! - Sides and angles are indexed `0 = a/A`, `1 = b/B`, `2 = c/C`; side `a`
//!   is opposite angle `A`.
//! - Angles are radians. Degree conversion belongs to callers (see the CLI).
//! - Presence is explicit: an absent measurement is `None`, never `0.0`.
//!
//! Entry points
//! - `solve` / `solve_with`: validate, solve, check, fall back once.
//! - `flip`: swap the two solutions of an ambiguous (SSA) outcome.

pub mod rand;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use solver::{
    classify, coordinates, flip, is_ambiguous, laws, solve, solve_case, solve_with, validate,
    validate_with, Case, CaseSolution, Measurements, SolutionPair, SolveCfg, SolveOutcome,
    SolvedTriangle, TriangleError, TriangleInput,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_triangle, mask, CaseKind, ReplayToken, SampleCfg};
    pub use crate::solver::{
        flip, solve, solve_with, Measurements, SolutionPair, SolveCfg, SolveOutcome,
        SolvedTriangle, TriangleError, TriangleInput,
    };
    pub use nalgebra::Vector2 as Vec2;
}
