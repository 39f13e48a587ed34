//! Triangle solver (validate → classify → solve → check → fall back).
//!
//! Purpose
//! - Turn any legal choice of three measurements (at least one side) into a
//!   complete triangle with renderable coordinates.
//! - Report the side-side-angle ambiguous case with both solutions.
//!
//! Assumptions and conventions
//! - Inputs are plain values; nothing here allocates or touches shared state.
//! - Numeric domain errors (`asin`/`acos` outside [-1, 1], division by a zero
//!   sine) are not propagated. They surface as NaN/inf and the geometry check
//!   rejects them, which triggers the single fallback pass.
//! - Tolerances live in `cfg`; the default `ε = 1e-5`.

mod cases;
mod cfg;
mod coords;
mod error;
pub mod laws;
mod outcome;
mod types;
mod validate;

pub use cases::{classify, is_ambiguous, solve_case, Case, CaseSolution};
pub use cfg::SolveCfg;
pub use coords::coordinates;
pub use error::TriangleError;
pub use outcome::{flip, solve, solve_with, SolveOutcome};
pub use types::{Measurements, SolutionPair, SolvedTriangle, TriangleInput};
pub use validate::{validate, validate_with};

#[cfg(test)]
mod tests;
