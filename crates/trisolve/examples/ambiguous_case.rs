//! Walk through the side-side-angle ambiguous case.
//!
//! a = 5, b = 8, A = 30°: the angle sits opposite the shorter given side, so
//! two triangles fit. Print both, then flip back and forth.

use trisolve::{flip, solve, SolvedTriangle, TriangleInput};

fn describe(label: &str, t: &SolvedTriangle) {
    let m = t.measurements;
    let [a, b, c] = m.sides;
    let [aa, bb, cc] = m.angles.map(f64::to_degrees);
    println!("{label}: a={a:.4} b={b:.4} c={c:.4} A={aa:.2}° B={bb:.2}° C={cc:.2}°");
    for (k, p) in t.points.iter().enumerate() {
        println!("  p{k} = ({:.4}, {:.4})", p.x, p.y);
    }
}

fn main() {
    let input = TriangleInput::default()
        .a(5.0)
        .b(8.0)
        .angle_a(30f64.to_radians());
    let out = solve(&input);
    println!("ambiguous={} valid={}", out.ambiguous, out.is_valid);
    describe("primary", out.primary());
    describe("alternate", out.alternate());

    let flipped = flip(&out);
    describe("after flip", flipped.primary());
    assert_eq!(flip(&flipped), out, "double flip restores the first outcome");
}
