mod fields;
mod view;

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing_subscriber::fmt::SubscriberBuilder;
use trisolve::rand::{draw_triangle, mask, CaseKind, ReplayToken, SampleCfg};
use trisolve::{flip, solve_with, Measurements, SolveCfg};

use fields::{build_input, FieldMode};
use view::{render_text, OutcomeView};

#[derive(Parser)]
#[command(name = "trisolve-cli")]
#[command(about = "Solve triangles from three of six measurements")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one triangle from raw field values (empty = not provided)
    Solve(SolveArgs),
    /// Solve seeded random triangles and compare against the hidden truth
    Sample {
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Restrict to one case; default cycles through all four
        #[arg(long, value_enum)]
        case: Option<CaseArg>,
        #[arg(long)]
        json: bool,
    },
    /// Print a small version JSON block
    Report,
}

// Field values may be negative numbers; the solver reports them.
#[derive(Args)]
struct SolveArgs {
    /// Side a (opposite angle A)
    #[arg(
        short = 'a',
        long = "side-a",
        default_value = "",
        allow_negative_numbers = true
    )]
    side_a: String,
    /// Side b (opposite angle B)
    #[arg(
        short = 'b',
        long = "side-b",
        default_value = "",
        allow_negative_numbers = true
    )]
    side_b: String,
    /// Side c (opposite angle C)
    #[arg(
        short = 'c',
        long = "side-c",
        default_value = "",
        allow_negative_numbers = true
    )]
    side_c: String,
    /// Angle A (degrees unless --radians)
    #[arg(
        short = 'A',
        long = "angle-a",
        default_value = "",
        allow_negative_numbers = true
    )]
    angle_a: String,
    /// Angle B
    #[arg(
        short = 'B',
        long = "angle-b",
        default_value = "",
        allow_negative_numbers = true
    )]
    angle_b: String,
    /// Angle C
    #[arg(
        short = 'C',
        long = "angle-c",
        default_value = "",
        allow_negative_numbers = true
    )]
    angle_c: String,
    /// Read angles as radians
    #[arg(long)]
    radians: bool,
    /// Treat "0" as "not provided" (form-style input)
    #[arg(long)]
    zero_is_unset: bool,
    /// Show the other solution of an ambiguous case first
    #[arg(long)]
    alternate: bool,
    #[arg(long)]
    json: bool,
    /// Tolerance for the triangle inequality and angle-sum checks
    #[arg(long)]
    eps: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Sss,
    Aas,
    Sas,
    Ssa,
}

impl From<CaseArg> for CaseKind {
    fn from(c: CaseArg) -> Self {
        match c {
            CaseArg::Sss => CaseKind::Sss,
            CaseArg::Aas => CaseKind::Aas,
            CaseArg::Sas => CaseKind::Sas,
            CaseArg::Ssa => CaseKind::Ssa,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(args) => solve_cmd(args),
        Action::Sample {
            count,
            seed,
            case,
            json,
        } => sample(count, seed, case.map(CaseKind::from), json),
        Action::Report => report(),
    }
}

fn solve_cmd(args: SolveArgs) -> Result<()> {
    let mut cfg = SolveCfg::default();
    if let Some(eps) = args.eps {
        ensure!(eps.is_finite() && eps >= 0.0, "--eps must be a finite non-negative number");
        cfg.eps = eps;
    }
    let mode = FieldMode {
        radians: args.radians,
        zero_is_unset: args.zero_is_unset,
    };
    let input = build_input(
        [&args.side_a, &args.side_b, &args.side_c],
        [&args.angle_a, &args.angle_b, &args.angle_c],
        mode,
    );
    tracing::info!(?input, eps = cfg.eps, "solve");

    let mut out = solve_with(&input, cfg);
    if args.alternate {
        out = flip(&out);
    }
    if !out.is_valid_input || !out.is_valid {
        tracing::info!(error = %out.error_message(), "fallback triangle returned");
    }

    let view = OutcomeView::new(&input, &out);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

#[derive(Default, Serialize)]
struct Tally {
    total: u64,
    recovered: u64,
    ambiguous: u64,
    fallback: u64,
}

fn matches_truth(got: &Measurements, truth: &Measurements) -> bool {
    let scale = truth.sides.iter().copied().fold(1.0, f64::max);
    (0..3).all(|k| {
        (got.sides[k] - truth.sides[k]).abs() <= 1e-6 * scale
            && (got.angles[k] - truth.angles[k]).abs() <= 1e-6
    })
}

fn sample(count: u64, seed: u64, case: Option<CaseKind>, json: bool) -> Result<()> {
    tracing::info!(count, seed, case = ?case, "sample");
    let cfg = SampleCfg::default();
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for index in 0..count {
        let kind = case.unwrap_or(CaseKind::ALL[(index % 4) as usize]);
        let truth = draw_triangle(cfg, ReplayToken::new(seed, index));
        let input = mask(&truth, kind, ReplayToken::new(seed.wrapping_add(1), index));
        let out = solve_with(&input, SolveCfg::default());

        let tally = tallies.entry(format!("{kind:?}")).or_default();
        tally.total += 1;
        if out.ambiguous {
            tally.ambiguous += 1;
        }
        if !out.is_valid {
            tally.fallback += 1;
            tracing::debug!(index, ?input, "sample fell back");
        }
        let recovered = matches_truth(&out.primary().measurements, &truth)
            || (out.ambiguous && matches_truth(&out.alternate().measurements, &truth));
        if recovered {
            tally.recovered += 1;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tallies)?);
    } else {
        for (kind, t) in &tallies {
            println!(
                "{kind}: total={} recovered={} ambiguous={} fallback={}",
                t.total, t.recovered, t.ambiguous, t.fallback
            );
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "trisolve": trisolve::VERSION,
        "defaults": {
            "eps": SolveCfg::default().eps,
            "fallback_side": SolveCfg::default().fallback_side,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
