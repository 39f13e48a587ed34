//! Tolerance defaults for the solver.
//!
//! Policy
//! - Defaults are fixed constants; `SolveCfg` exists so callers (CLI, tests)
//!   can override them without touching call sites.

/// Tolerance for the triangle inequality, the angle sum and ambiguity dedup.
pub(crate) const EPS: f64 = 1e-5;
/// Side length of the equilateral fallback triangle.
pub(crate) const FALLBACK_SIDE: f64 = 1.0;

/// Solver configuration (tolerances and fallback).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    pub eps: f64,
    pub fallback_side: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            eps: EPS,
            fallback_side: FALLBACK_SIDE,
        }
    }
}
