//! Solve a dense linear system from a JSON file with both methods
//!
//! Input format:
//!
//! ```json
//! { "a": [[2.0, 1.0], [1.0, 3.0]], "b": [3.0, 5.0], "solver": { "absolute_tolerance": 1e-8 } }
//! ```
//!
//! Usage:
//!     cargo run --bin linsys-solve -- math-linsys/data/system_2x2.json

use anyhow::{Context, Result};
use clap::Parser;
use math_audio_linsys::{
    ComparisonReport, Consistency, Matrix, SolutionResult, SolverConfig, Vector,
    cross_validate_with_config, invert_with_config, residual,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "linsys-solve",
    about = "Solve A x = b by matrix inversion and by Gaussian elimination, then cross-check"
)]
struct Cli {
    /// JSON file holding the system (`a`, `b` and an optional `solver` section)
    input: PathBuf,

    /// Override the pivot magnitude below which the system is singular
    #[arg(long)]
    singularity_threshold: Option<f64>,

    /// Override the absolute agreement tolerance
    #[arg(long)]
    atol: Option<f64>,

    /// Override the relative agreement tolerance
    #[arg(long)]
    rtol: Option<f64>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct SystemFile {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    #[serde(default)]
    solver: SolverConfig,
}

impl SystemFile {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read system file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let system = SystemFile::from_file(&cli.input)?;
    let mut config = system.solver;
    if let Some(threshold) = cli.singularity_threshold {
        config = config.with_singularity_threshold(threshold);
    }
    if let Some(atol) = cli.atol {
        config = config.with_absolute_tolerance(atol);
    }
    if let Some(rtol) = cli.rtol {
        config = config.with_relative_tolerance(rtol);
    }

    let a = Matrix::from_rows(&system.a).context("Invalid coefficient matrix")?;
    let b = Vector::new(system.b);

    let report = cross_validate_with_config(&a, &b, &config)?;

    if cli.json {
        let value = report_json(&a, &b, &report)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_report(&a, &b, &config, &report)?;
    }

    if matches!(report.consistency(), Consistency::Disagree { .. }) {
        process::exit(2);
    }
    Ok(())
}

fn print_report(
    a: &Matrix,
    b: &Vector,
    config: &SolverConfig,
    report: &ComparisonReport,
) -> Result<()> {
    println!("System to solve:");
    println!("A =\n{}", a);
    println!("b = {}", b);
    println!("{}", "-".repeat(30));

    println!("Matrix inversion method:");
    match invert_with_config(a, config) {
        Ok(inverse) => println!("A^-1 =\n{}", inverse),
        Err(e) if e.is_singular() => println!("A is not invertible"),
        Err(e) => return Err(e.into()),
    }
    print_solution(report.inversion());
    println!("{}", "-".repeat(30));

    println!("Gaussian elimination method:");
    print_solution(report.elimination());
    println!("{}", "-".repeat(30));

    println!("Interpretation: {}", report.interpretation());
    if let Some(x) = report.solution() {
        let r = residual(a, x, b)?;
        println!("Residual max |A x - b| = {:.3e}", r.max_abs());
    }
    Ok(())
}

fn print_solution(result: &SolutionResult) {
    match result {
        SolutionResult::Solved(x) => println!("x = {}", x),
        SolutionResult::Singular { step } => {
            println!("singular system (pivot below threshold at step {})", step)
        }
    }
}

fn solution_json(result: &SolutionResult) -> serde_json::Value {
    match result {
        SolutionResult::Solved(x) => serde_json::json!({
            "status": "solved",
            "x": x.to_vec(),
        }),
        SolutionResult::Singular { step } => serde_json::json!({
            "status": "singular",
            "step": step,
        }),
    }
}

fn report_json(a: &Matrix, b: &Vector, report: &ComparisonReport) -> Result<serde_json::Value> {
    let consistency = match report.consistency() {
        Consistency::Agree { .. } => "agree",
        Consistency::Disagree { .. } => "disagree",
        Consistency::PartialFailure { .. } => "partial_failure",
        Consistency::BothSingular => "both_singular",
    };
    let residual_max = match report.solution() {
        Some(x) => Some(residual(a, x, b)?.max_abs()),
        None => None,
    };

    Ok(serde_json::json!({
        "inversion": solution_json(report.inversion()),
        "elimination": solution_json(report.elimination()),
        "agree": report.agree(),
        "consistency": consistency,
        "interpretation": report.interpretation(),
        "solution": report.solution().map(Vector::to_vec),
        "residual_max": residual_max,
    }))
}
