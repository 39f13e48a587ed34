//! Seeded random triangles (angle draw + scale, replay tokens).
//!
//! Purpose
//! - Feed the CLI `sample` command, benches and randomized tests with valid
//!   triangles whose full measurements are known, so a solve can be compared
//!   against the hidden truth.
//!
//! Model
//! - Draw two angles uniformly subject to every angle `>= min_angle`, derive
//!   the third from the angle sum, draw a circumdiameter in
//!   `[scale_min, scale_max]`, and set each side to `diameter · sin(angle)`.
//! - `mask` hides three of the six values according to a `CaseKind`, picking
//!   which rotation of the case to use from the same replay token.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::solver::{Measurements, TriangleInput};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Smallest allowed angle (radians). Clamped to `(0, π/3)`.
    pub min_angle: f64,
    /// Circumdiameter range; sides are `diameter · sin(angle)`.
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            min_angle: 0.05,
            scale_min: 0.5,
            scale_max: 20.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index).
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Which congruence case `mask` should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Sss,
    Aas,
    Sas,
    Ssa,
}

impl CaseKind {
    pub const ALL: [CaseKind; 4] = [CaseKind::Sss, CaseKind::Aas, CaseKind::Sas, CaseKind::Ssa];
}

/// Draw a valid triangle. Identical tokens give identical triangles.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Measurements {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min_angle.clamp(1e-6, PI / 3.0 - 1e-6);
    // First angle leaves room for two more of at least `lo`.
    let alpha = rng.gen_range(lo..(PI - 2.0 * lo));
    let beta = rng.gen_range(lo..(PI - alpha - lo).max(lo + 1e-9));
    let gamma = PI - alpha - beta;
    let (s_lo, s_hi) = if cfg.scale_min < cfg.scale_max {
        (cfg.scale_min.max(1e-9), cfg.scale_max)
    } else {
        (cfg.scale_min.max(1e-9), cfg.scale_min.max(1e-9) + 1.0)
    };
    let diameter = rng.gen_range(s_lo..s_hi);
    let angles = [alpha, beta, gamma];
    Measurements::new(angles.map(|t| diameter * t.sin()), angles)
}

/// Hide three values of `m`, keeping a `kind`-shaped input.
///
/// The rotation (which side/angle indices are kept) is drawn from `tok`.
/// For `Ssa` the kept angle may sit opposite either the shorter or the longer
/// kept side, so both ambiguous and unique inputs show up.
pub fn mask(m: &Measurements, kind: CaseKind, tok: ReplayToken) -> TriangleInput {
    let mut rng = tok.to_std_rng();
    let i: usize = rng.gen_range(0..3);
    let (j, k) = ((i + 1) % 3, (i + 2) % 3);
    let mut input = TriangleInput::default();
    match kind {
        CaseKind::Sss => {
            input.sides = m.sides.map(Some);
        }
        CaseKind::Aas => {
            // side i, angles j and k (ASA) or i and j (AAS)
            input.sides[i] = Some(m.sides[i]);
            let (p, q) = if rng.gen_bool(0.5) { (j, k) } else { (i, j) };
            input.angles[p] = Some(m.angles[p]);
            input.angles[q] = Some(m.angles[q]);
        }
        CaseKind::Sas => {
            input.sides[j] = Some(m.sides[j]);
            input.sides[k] = Some(m.sides[k]);
            input.angles[i] = Some(m.angles[i]);
        }
        CaseKind::Ssa => {
            let other = if rng.gen_bool(0.5) { j } else { k };
            input.sides[i] = Some(m.sides[i]);
            input.sides[other] = Some(m.sides[other]);
            input.angles[i] = Some(m.angles[i]);
        }
    }
    input
}
