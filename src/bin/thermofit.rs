//! thermofit CLI.
//!
//! Fits every core of a raw CPU temperature dump with piecewise linear
//! interpolation, a natural cubic spline and a least-squares line, and
//! writes one file per core.
//!
//! ## Usage
//!
//! ```bash
//! thermofit data/sensors-2019.01.26.txt
//! thermofit data/sensors-2019.01.26.txt --output-dir fits --format json -v
//! thermofit data/sensors-2019.01.26.txt --pivot abs-max --spline tridiagonal
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use thermofit::cpu_temps::{run, DriverCfg, FitOptions, OutputFormat};
use thermofit::interpolation::spline::SplineRecurrence;
use thermofit::linalg::{PivotStrategy, SolverCfg, DEFAULT_PIVOT_TOL};


#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One `start <= x < end; label = poly; kind` line per piece.
    Text,
    /// Pretty-printed JSON array of pieces.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PivotArg {
    /// Largest signed value (reproduces historical output).
    RawMax,
    /// Largest magnitude.
    AbsMax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SplineArg {
    /// Neighbour-only second-derivative estimate (reproduces historical output).
    Decoupled,
    /// Exact natural spline via the tridiagonal system (dense, O(n²) memory).
    Tridiagonal,
}


#[derive(Parser, Debug)]
#[command(name = "thermofit")]
#[command(about = "Piecewise linear, cubic spline and least-squares fits of per-core CPU temperatures")]
struct Args {
    /// Raw temperature dump, one line per timestep, one column per core.
    input: PathBuf,

    /// Directory for the per-core output files.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Seconds between consecutive readings.
    #[arg(long, default_value_t = 30.0)]
    step_size: f64,

    /// Output file format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Pivot selection in the least-squares solver.
    #[arg(long, value_enum, default_value_t = PivotArg::RawMax)]
    pivot: PivotArg,

    /// Relative pivot threshold below which the system counts as singular.
    #[arg(long, default_value_t = DEFAULT_PIVOT_TOL)]
    pivot_tol: f64,

    /// Interior second-derivative recurrence for the spline.
    #[arg(long, value_enum, default_value_t = SplineArg::Decoupled)]
    spline: SplineArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}


fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}


fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    anyhow::ensure!(
        args.step_size.is_finite() && args.step_size > 0.0,
        "--step-size must be finite and > 0, got {}",
        args.step_size
    );

    let pivot = match args.pivot {
        PivotArg::RawMax => PivotStrategy::RawMax,
        PivotArg::AbsMax => PivotStrategy::AbsMax,
    };
    let solver = SolverCfg::new()
        .with_pivot(pivot)
        .set_pivot_tol(args.pivot_tol)
        .context("invalid --pivot-tol")?;
    let recurrence = match args.spline {
        SplineArg::Decoupled   => SplineRecurrence::Decoupled,
        SplineArg::Tridiagonal => SplineRecurrence::Tridiagonal,
    };
    let format = match args.format {
        FormatArg::Text => OutputFormat::Text,
        FormatArg::Json => OutputFormat::Json,
    };

    let cfg = DriverCfg::new(&args.input)
        .with_output_dir(&args.output_dir)
        .with_step_size(args.step_size)
        .with_format(format)
        .with_options(FitOptions { solver, recurrence });

    info!(pivot = pivot.strategy_name(), ?recurrence, "starting run");
    let written = run(&cfg)
        .with_context(|| format!("processing {}", args.input.display()))?;

    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
