//! Per-core fitting and output.
//!
//! [`run`] reads a raw dump, fits every core with all three algorithms and
//! writes `{basename}-core-{core}.txt` (or `.json`) into the output
//! directory. Records in each file are ordered linear, spline, least squares.
//!
//! Cores are independent: [`fit_all_cores`] maps them in parallel (feature
//! `parallel`) and a failing algorithm on one core only drops that
//! algorithm's records for that core.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator;
use tracing::{debug, info, warn};

use crate::cpu_temps::errors::DriverError;
use crate::cpu_temps::format::write_records;
use crate::cpu_temps::parse::{parse_raw_temps, Series, DEFAULT_STEP_SIZE};
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::least_squares::{self, LeastSquaresCfg};
use crate::interpolation::linear::{self, LinearCfg};
use crate::interpolation::piecewise::PiecewiseFunction;
use crate::interpolation::spline::natural::{self, NaturalSplineCfg, SplineRecurrence};
use crate::linalg::SolverCfg;


#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}


/// Numerical knobs shared by every core.
#[derive(Debug, Copy, Clone, Default)]
pub struct FitOptions {
    pub solver: SolverCfg,
    pub recurrence: SplineRecurrence,
}


/// Driver configuration
///
/// # Fields
/// - `input`      : raw temperature dump
/// - `output_dir` : destination directory, created if missing
/// - `step_size`  : seconds between readings, [`DEFAULT_STEP_SIZE`] by default
/// - `format`     : [`OutputFormat`]
/// - `options`    : [`FitOptions`]
#[derive(Debug, Clone)]
pub struct DriverCfg {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub step_size: f64,
    pub format: OutputFormat,
    pub options: FitOptions,
}

impl DriverCfg {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("output"),
            step_size: DEFAULT_STEP_SIZE,
            format: OutputFormat::default(),
            options: FitOptions::default(),
        }
    }

    pub fn with_output_dir(mut self, v: impl Into<PathBuf>) -> Self { self.output_dir = v.into(); self }
    pub fn with_step_size(mut self, v: f64) -> Self { self.step_size = v; self }
    pub fn with_format(mut self, v: OutputFormat) -> Self { self.format = v; self }
    pub fn with_options(mut self, v: FitOptions) -> Self { self.options = v; self }
}


/// All three fits of one core; each succeeds or fails on its own.
#[derive(Debug)]
pub struct CoreFits {
    pub core: usize,
    pub linear: Result<Vec<PiecewiseFunction>, InterpolationError>,
    pub spline: Result<Vec<PiecewiseFunction>, InterpolationError>,
    pub least_squares: Result<PiecewiseFunction, InterpolationError>,
}

impl CoreFits {
    /// Successful records in output order.
    pub fn records(&self) -> Vec<&PiecewiseFunction> {
        let mut out = Vec::new();
        if let Ok(pieces) = &self.linear { out.extend(pieces); }
        if let Ok(pieces) = &self.spline { out.extend(pieces); }
        if let Ok(line)   = &self.least_squares { out.push(line); }
        out
    }

    pub fn failures(&self) -> Vec<(Algorithm, &InterpolationError)> {
        let mut out = Vec::new();
        if let Err(e) = &self.linear        { out.push((Algorithm::Linear, e)); }
        if let Err(e) = &self.spline        { out.push((Algorithm::CubicSpline, e)); }
        if let Err(e) = &self.least_squares { out.push((Algorithm::LeastSquares, e)); }
        out
    }
}


/// Runs the three algorithms on one core's `(x, y)`.
pub fn fit_core(core: usize, x: &[f64], y: &[f64], opts: &FitOptions) -> CoreFits {
    let linear = LinearCfg::new()
        .set_x(x)
        .and_then(|c| c.set_y(y))
        .and_then(linear::interpolate);

    let spline = NaturalSplineCfg::new()
        .with_recurrence(opts.recurrence)
        .with_solver(opts.solver)
        .set_x(x)
        .and_then(|c| c.set_y(y))
        .and_then(natural::interpolate);

    let least_squares = LeastSquaresCfg::new()
        .with_solver(opts.solver)
        .set_x(x)
        .and_then(|c| c.set_y(y))
        .and_then(least_squares::approximate);

    CoreFits { core, linear, spline, least_squares }
}


/// Fits every core of `series`, ordered by core index.
pub fn fit_all_cores(series: &Series, opts: &FitOptions) -> Vec<CoreFits> {
    let times = series.times();

    crate::iter_maybe_parallel!(0..series.num_cores())
        .map(|core| {
            let temps = series.core(core);
            fit_core(core, &times, &temps, opts)
        })
        .collect()
}


/// `sensors-2019.01.26.txt` -> `sensors-2019.01.26`
fn basename(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(".txt") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}


fn write_core(path: &Path, fits: &CoreFits, format: OutputFormat) -> Result<(), DriverError> {
    let write_err = |source| DriverError::WriteOutput { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    let records = fits.records();

    match format {
        OutputFormat::Text => write_records(&mut out, records).map_err(write_err)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)
                .map_err(|source| DriverError::Serialize { core: fits.core, source })?;
            writeln!(out).map_err(write_err)?;
        }
    }
    out.flush().map_err(write_err)
}


/// Parses `cfg.input`, fits all cores and writes one file per core.
///
/// # Returns
/// Paths of the written files, by core index.
///
/// # Errors
/// - [`DriverError::ReadInput`] / [`DriverError::Parse`] for unreadable input
/// - [`DriverError::EmptySeries`] if the dump holds no readings
/// - [`DriverError::WriteOutput`] / [`DriverError::Serialize`] on output failure
///
/// Per-core numerical failures are logged and skipped, not returned.
pub fn run(cfg: &DriverCfg) -> Result<Vec<PathBuf>, DriverError> {
    let input = &cfg.input;
    let file = File::open(input)
        .map_err(|source| DriverError::ReadInput { path: input.clone(), source })?;
    let series = parse_raw_temps(BufReader::new(file), cfg.step_size)
        .map_err(|source| DriverError::Parse { path: input.clone(), source })?;

    if series.is_empty() || series.num_cores() == 0 {
        return Err(DriverError::EmptySeries { path: input.clone() });
    }
    info!(
        input = %input.display(),
        samples = series.len(),
        cores = series.num_cores(),
        "parsed temperature series"
    );

    let fits = fit_all_cores(&series, &cfg.options);

    fs::create_dir_all(&cfg.output_dir)
        .map_err(|source| DriverError::WriteOutput { path: cfg.output_dir.clone(), source })?;

    let base = basename(input);
    let mut written = Vec::with_capacity(fits.len());
    for core_fits in &fits {
        for (algorithm, err) in core_fits.failures() {
            warn!(core = core_fits.core, %algorithm, error = %err, "fit failed; skipping");
        }

        let path = cfg.output_dir.join(format!(
            "{base}-core-{}.{}",
            core_fits.core,
            cfg.format.extension()
        ));
        write_core(&path, core_fits, cfg.format)?;

        debug!(core = core_fits.core, records = core_fits.records().len(), "core fitted");
        info!(path = %path.display(), "wrote core fits");
        written.push(path);
    }

    Ok(written)
}
