//! Solve requests end to end: validation, the fallback pass, and flipping.
//!
//! Flow
//! - Invalid input is replaced by the equilateral fallback before solving.
//! - A solved triangle that fails `check_geometry` triggers exactly one more
//!   pass on the fallback. The two passes are explicit; there is no loop.
//! - Ambiguity is predicted by the case solver and confirmed here: an
//!   alternate that collapses onto the primary or is itself degenerate is
//!   dropped and the pair becomes two copies of the primary.

use std::f64::consts::PI;

use super::cases::solve_case;
use super::cfg::SolveCfg;
use super::error::TriangleError;
use super::types::{Measurements, SolutionPair, SolvedTriangle, TriangleInput};
use super::validate::validate_with;

/// Result of one solve request.
///
/// - `is_valid_input`: the request passed validation.
/// - `is_valid`: the first solve pass produced usable geometry (no retry).
/// - `error`: the last error seen; the pair then holds the fallback triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveOutcome {
    pub is_valid_input: bool,
    pub is_valid: bool,
    pub ambiguous: bool,
    pub error: Option<TriangleError>,
    pub pair: SolutionPair,
}

impl SolveOutcome {
    /// User-facing error text, empty when the request solved cleanly.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    #[inline]
    pub fn primary(&self) -> &SolvedTriangle {
        &self.pair.primary
    }

    #[inline]
    pub fn alternate(&self) -> &SolvedTriangle {
        &self.pair.alternate
    }

    /// Same outcome with the two solutions exchanged.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            pair: self.pair.swapped(),
            ..*self
        }
    }
}

/// Exchange primary and alternate. No effect on non-ambiguous outcomes.
#[inline]
pub fn flip(outcome: &SolveOutcome) -> SolveOutcome {
    outcome.flipped()
}

/// Solve with default tolerances.
#[inline]
pub fn solve(input: &TriangleInput) -> SolveOutcome {
    solve_with(input, SolveCfg::default())
}

/// Solve `input`, falling back to the equilateral default when needed.
///
/// Always returns a renderable triangle.
pub fn solve_with(input: &TriangleInput, cfg: SolveCfg) -> SolveOutcome {
    let fallback = TriangleInput::fallback(cfg.fallback_side);
    let validation = validate_with(input, &cfg);
    let first = match validation {
        Ok(()) => *input,
        Err(err) => {
            tracing::debug!(%err, ?input, "input rejected; solving fallback triangle");
            fallback
        }
    };

    let mut error = validation.err();
    let (pass, is_valid) = match attempt(&first, &cfg) {
        Ok(pass) => (pass, true),
        Err(err) => {
            tracing::debug!(%err, ?first, "solved geometry rejected; retrying with fallback");
            error = Some(err);
            let pass = attempt(&fallback, &cfg).unwrap_or_else(|_| Pass::equilateral(&cfg));
            (pass, false)
        }
    };

    SolveOutcome {
        is_valid_input: validation.is_ok(),
        is_valid,
        ambiguous: pass.ambiguous,
        error,
        pair: pass.pair,
    }
}

/// One solve pass after ambiguity reconciliation.
struct Pass {
    pair: SolutionPair,
    ambiguous: bool,
}

impl Pass {
    fn equilateral(cfg: &SolveCfg) -> Self {
        let t = SolvedTriangle::new(Measurements::equilateral(cfg.fallback_side));
        Self {
            pair: SolutionPair::single(t),
            ambiguous: false,
        }
    }
}

fn attempt(input: &TriangleInput, cfg: &SolveCfg) -> Result<Pass, TriangleError> {
    let sol = solve_case(input).ok_or(TriangleError::DegenerateGeometry)?;
    let primary = SolvedTriangle::new(sol.primary);
    check_geometry(&primary, cfg)?;

    if sol.ambiguous {
        let alternate = SolvedTriangle::new(sol.alternate);
        let distinct = sol.primary.side_gap(&sol.alternate) >= cfg.eps;
        if distinct && check_geometry(&alternate, cfg).is_ok() {
            return Ok(Pass {
                pair: SolutionPair { primary, alternate },
                ambiguous: true,
            });
        }
        tracing::trace!(alternate = ?sol.alternate, "predicted ambiguity dropped");
    }
    Ok(Pass {
        pair: SolutionPair::single(primary),
        ambiguous: false,
    })
}

/// Reject NaN/inf, non-positive values, angles ≥ π, a broken angle sum, and
/// coincident points (exact comparison).
fn check_geometry(t: &SolvedTriangle, cfg: &SolveCfg) -> Result<(), TriangleError> {
    let m = &t.measurements;
    let finite_positive = m.values().iter().all(|v| v.is_finite() && *v > 0.0);
    if !finite_positive {
        return Err(TriangleError::DegenerateGeometry);
    }
    if m.angles.iter().any(|&a| a >= PI) || (m.angle_sum() - PI).abs() > cfg.eps {
        return Err(TriangleError::DegenerateGeometry);
    }
    let [p0, p1, p2] = t.points;
    if p0 == p1 || p1 == p2 || p0 == p2 {
        return Err(TriangleError::DegenerateGeometry);
    }
    Ok(())
}
