use std::fs;

use thermofit::cpu_temps::{
    fit_all_cores, fit_core, run, DriverCfg, DriverError, FitOptions, OutputFormat, Sample, Series,
};
use thermofit::{Algorithm, InterpolationError, SolverError};

const RAW: &str = "\
+61.0°C +63.0°C
+80.0°C +81.0°C
+62.0°C +63.0°C
+83.0°C +80.0°C
";

#[test]
fn fit_core_runs_all_three() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 3.0, 4.0];

    let fits = fit_core(0, &x, &y, &FitOptions::default());

    assert_eq!(fits.linear.as_ref().unwrap().len(), 3);
    assert_eq!(fits.spline.as_ref().unwrap().len(), 3);
    assert!(fits.least_squares.is_ok());
    assert!(fits.failures().is_empty());

    let kinds: Vec<Algorithm> = fits.records().iter().map(|p| p.kind).collect();
    assert_eq!(kinds, [
        Algorithm::Linear, Algorithm::Linear, Algorithm::Linear,
        Algorithm::CubicSpline, Algorithm::CubicSpline, Algorithm::CubicSpline,
        Algorithm::LeastSquares,
    ]);
}

#[test]
fn failures_stay_per_algorithm() {
    let fits = fit_core(1, &[0.0, 30.0], &[50.0, 55.0], &FitOptions::default());

    assert!(fits.linear.is_ok());
    assert!(fits.least_squares.is_ok());
    assert!(matches!(fits.spline, Err(InterpolationError::InsufficientPoints { got: 2, need: 3 })));

    let failures = fits.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, Algorithm::CubicSpline);
    assert_eq!(fits.records().len(), 2);
}

#[test]
fn singular_least_squares_reported() {
    let fits = fit_core(0, &[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], &FitOptions::default());

    assert!(matches!(
        fits.least_squares,
        Err(InterpolationError::Solver(SolverError::SingularSystem { .. }))
    ));
    assert!(matches!(fits.linear, Err(InterpolationError::ZeroWidthSegment { idx: 0, .. })));
    assert!(fits.records().is_empty());
}

#[test]
fn fit_all_cores_in_core_order() {
    let series = Series::from(vec![
        Sample { time: 0.0,  values: vec![61.0, 10.0, 40.0] },
        Sample { time: 30.0, values: vec![80.0, 20.0, 42.0] },
        Sample { time: 60.0, values: vec![62.0, 30.0, 41.0] },
    ]);

    let fits = fit_all_cores(&series, &FitOptions::default());

    assert_eq!(fits.len(), 3);
    for (i, f) in fits.iter().enumerate() {
        assert_eq!(f.core, i);
        assert!(f.failures().is_empty());
    }
    let slope = fits[1].least_squares.as_ref().unwrap().coefficients[1];
    assert!((slope - 1.0 / 3.0).abs() < 1e-10);
}

#[test]
fn fit_all_cores_matches_per_core_fits() {
    // same results with or without the `parallel` feature
    let samples: Vec<Sample> = (0..40)
        .map(|i| {
            let t = i as f64 * 30.0;
            Sample { time: t, values: (0..6).map(|c| 50.0 + c as f64 + (t / 300.0).sin()).collect() }
        })
        .collect();
    let series = Series::from(samples);
    let opts = FitOptions::default();

    let fits = fit_all_cores(&series, &opts);

    assert_eq!(fits.len(), series.num_cores());
    let times = series.times();
    for (core, f) in fits.iter().enumerate() {
        let expected = fit_core(core, &times, &series.core(core), &opts);
        assert_eq!(f.core, core);
        assert_eq!(f.records(), expected.records());
    }
}

#[test]
fn run_writes_one_text_file_per_core() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sensors-2019.01.26.txt");
    fs::write(&input, RAW).unwrap();
    let out_dir = dir.path().join("output");

    let cfg = DriverCfg::new(&input).with_output_dir(&out_dir);
    let written = run(&cfg).unwrap();

    assert_eq!(written, vec![
        out_dir.join("sensors-2019.01.26-core-0.txt"),
        out_dir.join("sensors-2019.01.26-core-1.txt"),
    ]);

    let text = fs::read_to_string(&written[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // 3 linear + 3 spline + 1 least squares
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "0.0 <= x < 30.0; y0 = 61.0000 + 0.6333x; linear_interpolation");
    assert!(lines[3].ends_with("; cubic_spline_interpolation"));
    assert!(lines[6].starts_with("0.0 <= x < 90.0; y = "));
    assert!(lines[6].ends_with("; least_squares"));
}

#[test]
fn run_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("temps.txt");
    fs::write(&input, RAW).unwrap();

    let cfg = DriverCfg::new(&input)
        .with_output_dir(dir.path())
        .with_format(OutputFormat::Json);
    let written = run(&cfg).unwrap();

    assert_eq!(written[1], dir.path().join("temps-core-1.json"));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[1]).unwrap()).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0]["output_label"], "y0");
    assert_eq!(records[0]["kind"], "linear_interpolation");
    assert_eq!(records[3]["kind"], "cubic_spline_interpolation");
    assert_eq!(records[6]["kind"], "least_squares");
    assert_eq!(records[0]["kind"], Algorithm::Linear.algorithm_name());
}

#[test]
fn run_rejects_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "\n\n").unwrap();

    let err = run(&DriverCfg::new(&input).with_output_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DriverError::EmptySeries { .. }));
}

#[test]
fn run_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DriverCfg::new(dir.path().join("missing.txt")).with_output_dir(dir.path());

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, DriverError::ReadInput { .. }));
}

#[test]
fn run_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "1 2\n3\n").unwrap();

    let err = run(&DriverCfg::new(&input).with_output_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DriverError::Parse { .. }));
}
