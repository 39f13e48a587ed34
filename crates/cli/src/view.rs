//! Serializable and printable views of solver results.

use serde::Serialize;
use trisolve::{classify, SolveOutcome, SolvedTriangle, TriangleInput};

#[derive(Debug, Serialize)]
pub struct TriangleView {
    pub sides: [f64; 3],
    pub angles_rad: [f64; 3],
    pub angles_deg: [f64; 3],
    pub points: [[f64; 2]; 3],
}

impl From<&SolvedTriangle> for TriangleView {
    fn from(t: &SolvedTriangle) -> Self {
        let m = t.measurements;
        Self {
            sides: m.sides,
            angles_rad: m.angles,
            angles_deg: m.angles.map(f64::to_degrees),
            points: t.points.map(|p| [p.x, p.y]),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OutcomeView {
    /// Case of the request as entered; `None` when it fits no case.
    pub case: Option<&'static str>,
    pub is_valid_input: bool,
    pub is_valid: bool,
    pub ambiguous: bool,
    pub error_kind: Option<String>,
    pub error_message: String,
    /// `"validation"` or `"geometry"`: which stage rejected the request.
    pub rejected_by: Option<&'static str>,
    pub primary: TriangleView,
    pub alternate: TriangleView,
}

impl OutcomeView {
    pub fn new(input: &TriangleInput, out: &SolveOutcome) -> Self {
        Self {
            case: classify(input).map(|c| c.label()),
            is_valid_input: out.is_valid_input,
            is_valid: out.is_valid,
            ambiguous: out.ambiguous,
            error_kind: out.error.map(|e| format!("{e:?}")),
            error_message: out.error_message(),
            rejected_by: out.error.map(|e| {
                if e.is_input_error() {
                    "validation"
                } else {
                    "geometry"
                }
            }),
            primary: out.primary().into(),
            alternate: out.alternate().into(),
        }
    }
}

fn triangle_lines(label: &str, t: &TriangleView) -> String {
    let [a, b, c] = t.sides;
    let [aa, bb, cc] = t.angles_deg;
    let pts: Vec<String> = t
        .points
        .iter()
        .map(|[x, y]| format!("({x:.6}, {y:.6})"))
        .collect();
    format!(
        "{label}: a={a:.6} b={b:.6} c={c:.6}  A={aa:.4}° B={bb:.4}° C={cc:.4}°\n  points: {}\n",
        pts.join(" ")
    )
}

/// Human-readable multi-line rendering.
pub fn render_text(view: &OutcomeView) -> String {
    let mut buf = format!(
        "case={} valid_input={} valid={} ambiguous={}\n",
        view.case.unwrap_or("-"),
        view.is_valid_input,
        view.is_valid,
        view.ambiguous
    );
    if !view.error_message.is_empty() {
        buf.push_str(&format!("error: {}\n", view.error_message));
        if !(view.is_valid_input && view.is_valid) {
            let stage = view.rejected_by.unwrap_or("-");
            buf.push_str(&format!("showing fallback triangle (rejected by {stage})\n"));
        }
    }
    buf.push_str(&triangle_lines("primary", &view.primary));
    if view.ambiguous {
        buf.push_str(&triangle_lines("alternate", &view.alternate));
    }
    buf
}
