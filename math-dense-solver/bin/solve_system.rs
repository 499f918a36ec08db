//! Solve dense linear systems from JSON files
//!
//! Usage:
//!     cargo run --bin solve-system -- --input system.json
//!     cargo run --bin solve-system -- --scenarios --json

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use math_audio_dense_solver::{
    DeterminantMethod, LinearSystemConfig, SolveMethod, SymmetryCheck, solve_with_config,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solve-system",
    about = "Solve Ax = b with Cholesky or Doolittle LU, chosen from the matrix properties"
)]
struct Cli {
    /// JSON file describing the system (matrix, rhs, optional solver settings)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Solve the built-in reference systems
    #[arg(long)]
    scenarios: bool,

    /// Force a factorization instead of probing the matrix
    #[arg(long, value_enum)]
    method: Option<MethodChoice>,

    /// Determinant algorithm for the positive-definiteness probe
    #[arg(long, value_enum)]
    determinant: Option<DeterminantChoice>,

    /// Relative tolerance for the symmetry test (exact comparison when omitted)
    #[arg(long)]
    symmetry_tolerance: Option<f64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MethodChoice {
    Cholesky,
    Doolittle,
}

impl From<MethodChoice> for SolveMethod {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Cholesky => SolveMethod::Cholesky,
            MethodChoice::Doolittle => SolveMethod::Doolittle,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DeterminantChoice {
    Auto,
    Cofactor,
    Lu,
}

impl From<DeterminantChoice> for DeterminantMethod {
    fn from(choice: DeterminantChoice) -> Self {
        match choice {
            DeterminantChoice::Auto => DeterminantMethod::Auto,
            DeterminantChoice::Cofactor => DeterminantMethod::CofactorExpansion,
            DeterminantChoice::Lu => DeterminantMethod::LuProduct,
        }
    }
}

#[derive(Debug, Serialize)]
struct SolveReport {
    name: String,
    method: SolveMethod,
    x: Vec<f64>,
    residual: f64,
}

fn solve_one(system: &LinearSystemConfig, args: &Cli) -> anyhow::Result<SolveReport> {
    let (a, b) = system
        .to_system()
        .with_context(|| format!("Invalid system '{}'", system.label()))?;

    let mut config = system.solver.to_solver_config()?;
    if let Some(method) = args.method {
        config.force_method = Some(method.into());
    }
    if let Some(determinant) = args.determinant {
        config.determinant = determinant.into();
    }
    if let Some(tol) = args.symmetry_tolerance {
        if !tol.is_finite() || tol < 0.0 {
            bail!("--symmetry-tolerance must be a non-negative finite number, got {tol}");
        }
        config.symmetry = SymmetryCheck::Tolerance(tol);
    }

    let solution = solve_with_config(&a, &b, &config)
        .with_context(|| format!("Failed to solve '{}'", system.label()))?;

    Ok(SolveReport {
        name: system.label().to_string(),
        method: solution.method,
        x: solution.x.to_vec(),
        residual: solution.residual,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();

    let systems = match (&args.input, args.scenarios) {
        (Some(path), false) => vec![
            LinearSystemConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
        ],
        (None, true) => LinearSystemConfig::scenarios(),
        (Some(_), true) => bail!("--input and --scenarios are mutually exclusive"),
        (None, false) => bail!("either --input <file> or --scenarios must be provided"),
    };

    let mut reports = Vec::with_capacity(systems.len());
    for system in &systems {
        reports.push(solve_one(system, &args)?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{} ({} method)", report.name, report.method);
            println!("  x = {:?}", report.x);
            println!("  residual = {:.3e}", report.residual);
        }
    }

    Ok(())
}
