//! End-to-end checks of `solve` / `flip` on the documented scenarios,
//! plus property tests over random valid triangles.

use super::*;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn deg(d: f64) -> f64 {
    d.to_radians()
}

fn points_distinct(t: &SolvedTriangle) -> bool {
    let [p0, p1, p2] = t.points;
    p0 != p1 && p1 != p2 && p0 != p2
}

fn assert_fallback(out: &SolveOutcome) {
    assert!(!out.ambiguous);
    assert!(!out.pair.is_distinct());
    let m = out.primary().measurements;
    assert_eq!(m.sides, [1.0, 1.0, 1.0]);
    for a in m.angles {
        assert!((a - PI / 3.0).abs() < 1e-9);
    }
}

#[test]
fn sss_right_triangle() {
    let out = solve(&TriangleInput::from_sides(3.0, 4.0, 5.0));
    assert!(out.is_valid_input && out.is_valid && !out.ambiguous);
    assert!(out.error.is_none());
    assert_eq!(out.error_message(), "");
    let m = out.primary().measurements;
    assert!((m.angles[2] - FRAC_PI_2).abs() < 1e-12);
    assert!((m.angle_sum() - PI).abs() < 1e-5);
    assert!(points_distinct(out.primary()));
}

#[test]
fn ssa_ambiguous_case() {
    let input = TriangleInput::default().a(5.0).b(8.0).angle_a(deg(30.0));
    let out = solve(&input);
    assert!(out.is_valid_input && out.is_valid);
    assert!(out.ambiguous);
    let b1 = out.primary().measurements.angles[1];
    let b2 = out.alternate().measurements.angles[1];
    assert!((b1 - b2).abs() > 1e-3);
    assert!((b1 + b2 - PI).abs() < 1e-9);
    assert!(points_distinct(out.primary()));
    assert!(points_distinct(out.alternate()));

    let once = flip(&out);
    assert_eq!(once.primary(), out.alternate());
    assert_eq!(once.alternate(), out.primary());
    assert_eq!(once.ambiguous, out.ambiguous);
    assert_eq!(once.error, out.error);
    assert_eq!(flip(&once), out);
}

#[test]
fn ssa_angle_opposite_longer_side_is_unique() {
    let input = TriangleInput::default().a(8.0).b(5.0).angle_a(deg(30.0));
    let out = solve(&input);
    assert!(out.is_valid);
    assert!(!out.ambiguous);
    assert_eq!(flip(&out), out);
}

#[test]
fn ssa_right_angle_boundary_collapses_ambiguity() {
    // a = b·sin A: both solutions meet at B = 90°.
    let angle = deg(30.0);
    let input = TriangleInput::default()
        .a(2.0 * angle.sin())
        .b(2.0)
        .angle_a(angle);
    let out = solve(&input);
    assert!(out.is_valid);
    assert!(!out.ambiguous);
    assert!(!out.pair.is_distinct());
}

#[test]
fn ssa_without_solution_falls_back() {
    let input = TriangleInput::default().a(5.0).b(8.0).angle_a(deg(80.0));
    let out = solve(&input);
    assert!(out.is_valid_input);
    assert!(!out.is_valid);
    assert_eq!(out.error, Some(TriangleError::DegenerateGeometry));
    assert_eq!(
        out.error_message(),
        "Invalid triangle, please check your values."
    );
    assert_fallback(&out);
}

#[test]
fn ssa_obtuse_angle_opposite_shorter_side_has_no_triangle() {
    // sin B < 1 but A + B > π, so C comes out negative.
    let input = TriangleInput::default().a(5.0).b(5.5).angle_a(deg(120.0));
    let out = solve(&input);
    assert!(!out.is_valid);
    assert_fallback(&out);
}

#[test]
fn triangle_inequality_violation_falls_back() {
    let out = solve(&TriangleInput::from_sides(3.0, 4.0, 10.0));
    assert!(!out.is_valid_input);
    assert!(out.is_valid);
    assert_eq!(out.error, Some(TriangleError::TriangleInequalityViolated));
    assert_eq!(
        out.error_message(),
        "Sum of two sides must not be greater than or equal to the third side."
    );
    assert_fallback(&out);
}

#[test]
fn wrong_count_and_negative() {
    let out = solve(&TriangleInput::default().a(3.0).b(4.0));
    assert_eq!(out.error, Some(TriangleError::WrongCount));
    assert!(!out.is_valid_input);
    assert_fallback(&out);

    let out = solve(&TriangleInput::from_sides(-1.0, 2.0, 2.0));
    assert_eq!(out.error, Some(TriangleError::NegativeValue));
    assert_fallback(&out);
}

#[test]
fn two_right_angles_never_solve() {
    let input = TriangleInput::default()
        .c(5.0)
        .angle_a(FRAC_PI_2)
        .angle_b(FRAC_PI_2);
    let out = solve(&input);
    assert!(!out.is_valid_input);
    assert!(matches!(
        out.error,
        Some(TriangleError::AngleTooLarge) | Some(TriangleError::DegenerateAngleSum)
    ));
    assert_fallback(&out);
}

#[test]
fn angles_over_pi_are_caught_after_solving() {
    let input = TriangleInput::default()
        .c(5.0)
        .angle_a(deg(100.0))
        .angle_b(deg(100.0));
    let out = solve(&input);
    assert!(out.is_valid_input);
    assert!(!out.is_valid);
    assert_fallback(&out);
}

#[test]
fn zero_sentinel_parity() {
    // [a, b, c, A, B, C]; zeros are "not provided".
    let input = TriangleInput::from_zero_sentinel([5.0, 8.0, 0.0, deg(30.0), 0.0, 0.0]);
    assert_eq!(input.side_count(), 2);
    assert_eq!(input.angle_count(), 1);
    assert!(solve(&input).ambiguous);

    // Explicit presence: a true zero is rejected rather than ignored.
    let explicit = TriangleInput::from_sides(0.0, 8.0, 5.0);
    assert_eq!(solve(&explicit).error, Some(TriangleError::ZeroValue));
}

#[test]
fn custom_fallback_side() {
    let cfg = SolveCfg {
        fallback_side: 2.5,
        ..SolveCfg::default()
    };
    let out = solve_with(&TriangleInput::default(), cfg);
    assert_eq!(out.error, Some(TriangleError::NoSideGiven));
    assert_eq!(out.primary().measurements.sides, [2.5; 3]);
}

#[test]
fn huge_sides_still_solve() {
    let out = solve(&TriangleInput::from_sides(1e200, 1e200, 1e200));
    assert!(out.is_valid, "{:?}", out.error);
    assert_eq!(out.error, None);
    let t = out.primary();
    for angle in t.measurements.angles {
        assert!((angle - PI / 3.0).abs() < 1e-9);
    }
    assert!(points_distinct(t));

    let sas = TriangleInput::default()
        .a(3e200)
        .b(4e200)
        .angle_c(FRAC_PI_2);
    let out = solve(&sas);
    assert!(out.is_valid, "{:?}", out.error);
    assert!((out.primary().measurements.sides[2] / 5e200 - 1.0).abs() < 1e-9);
}

/// Three sides with a strict triangle-inequality margin.
fn sss_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.5f64..10.0, 0.5f64..10.0).prop_flat_map(|(x, y)| {
        let lo = (x - y).abs() + 0.05;
        let hi = x + y - 0.05;
        (Just(x), Just(y), lo..hi)
    })
}

proptest! {
    #[test]
    fn sss_angles_sum_to_pi((a, b, c) in sss_strategy()) {
        let out = solve(&TriangleInput::from_sides(a, b, c));
        prop_assert!(out.is_valid_input && out.is_valid);
        let m = out.primary().measurements;
        prop_assert!((m.angle_sum() - PI).abs() < 1e-5);
        prop_assert!(points_distinct(out.primary()));
        // Coordinates reproduce the side lengths.
        let [p0, p1, p2] = out.primary().points;
        prop_assert!(((p2 - p1).norm() - c).abs() < 1e-6);
        prop_assert!(((p1 - p0).norm() - b).abs() < 1e-6);
    }

    #[test]
    fn sss_then_aas_round_trip((a, b, c) in sss_strategy()) {
        let sss = solve(&TriangleInput::from_sides(a, b, c)).primary().measurements;
        let aas = TriangleInput::default()
            .a(sss.sides[0])
            .angle_a(sss.angles[0])
            .angle_b(sss.angles[1]);
        let out = solve(&aas);
        prop_assert!(out.is_valid);
        let m = out.primary().measurements;
        prop_assert!((m.sides[0] - a).abs() < 1e-3);
        prop_assert!((m.sides[1] - b).abs() < 1e-3);
        prop_assert!((m.sides[2] - c).abs() < 1e-3);
    }

    #[test]
    fn sss_then_sas_round_trip((a, b, c) in sss_strategy()) {
        let sss = solve(&TriangleInput::from_sides(a, b, c)).primary().measurements;
        let sas = TriangleInput::default().a(a).b(b).angle_c(sss.angles[2]);
        let m = solve(&sas).primary().measurements;
        prop_assert!((m.sides[2] - c).abs() < 1e-3);
        for k in 0..3 {
            prop_assert!((m.angles[k] - sss.angles[k]).abs() < 1e-3);
        }
    }

    #[test]
    fn every_outcome_is_renderable(
        raw in proptest::array::uniform6(prop_oneof![Just(0.0f64), -1.0f64..12.0])
    ) {
        let out = solve(&TriangleInput::from_zero_sentinel(raw));
        prop_assert!(points_distinct(out.primary()));
        prop_assert!(points_distinct(out.alternate()));
        prop_assert_eq!(out.ambiguous, out.pair.is_distinct());
        prop_assert_eq!(out.error.is_none(), out.is_valid_input && out.is_valid);
    }
}
