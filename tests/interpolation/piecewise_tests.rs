use thermofit::interpolation::errors::InterpolationError;
use thermofit::{
    cubic_spline_interpolate, least_squares_approximate, linear_interpolate,
    Algorithm, Interpolator, PiecewiseCurve, PiecewiseFunction,
};

type FitResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-10;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

const X: [f64; 5] = [0.0, 30.0, 60.0, 90.0, 120.0];
const Y: [f64; 5] = [61.0, 80.0, 62.0, 83.0, 58.0];

#[test]
fn ascending_reverses_spline_only() {
    let line = PiecewiseFunction::new(Algorithm::Linear, 0.0, 1.0, "y0", vec![1.0, 2.0]);
    let cubic = PiecewiseFunction::new(Algorithm::CubicSpline, 0.0, 1.0, "y0", vec![4.0, 3.0, 2.0, 1.0]);

    assert_eq!(line.ascending(), vec![1.0, 2.0]);
    assert_eq!(cubic.ascending(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn spline_piece_evaluates_in_local_frame() -> FitResult {
    // d + c t + b t^2 + a t^3 with t = x - 10
    let p = PiecewiseFunction::new(Algorithm::CubicSpline, 10.0, 12.0, "y3", vec![1.0, -1.0, 2.0, 5.0]);

    assert!(approx_eq(p.eval(10.0)?, 5.0));
    assert!(approx_eq(p.eval(12.0)?, 5.0 + 4.0 - 4.0 + 8.0));
    Ok(())
}

#[test]
fn records_reproduce_domain_start() -> FitResult {
    for pieces in [linear_interpolate(&X, &Y)?, cubic_spline_interpolate(&X, &Y)?] {
        for (i, p) in pieces.iter().enumerate() {
            assert!(approx_eq(p.eval(p.domain_start)?, Y[i]), "{} y{i}", p.kind);
        }
    }
    Ok(())
}

#[test]
fn curve_evaluates_between_knots() -> FitResult {
    let curve = PiecewiseCurve::new(linear_interpolate(&X, &Y)?)?;

    assert_eq!(curve.pieces().len(), X.len() - 1);
    assert_eq!((curve.x_min(), curve.x_max()), (0.0, 120.0));
    let vals = curve.eval_many(&[0.0, 15.0, 30.0, 75.0, 120.0])?;
    let expected = [61.0, 70.5, 80.0, 72.5, 58.0];
    for (v, e) in vals.iter().zip(expected) {
        assert!(approx_eq(*v, e));
    }
    Ok(())
}

#[test]
fn curve_of_spline_hits_knots() -> FitResult {
    let curve = PiecewiseCurve::new(cubic_spline_interpolate(&X, &Y)?)?;

    for (x, y) in X.iter().zip(Y) {
        assert!(approx_eq(curve.eval(*x)?, y));
    }
    Ok(())
}

#[test]
fn single_piece_curve() -> FitResult {
    let line = least_squares_approximate(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0])?;
    let curve = PiecewiseCurve::new(vec![line])?;

    assert!(approx_eq(curve.eval(1.5)?, 2.5));
    Ok(())
}

#[test]
fn curve_out_of_bounds() {
    let curve = PiecewiseCurve::new(linear_interpolate(&X, &Y).unwrap()).unwrap();

    let err = curve.eval(120.5).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, x_min, x_max }
        if got == 120.5 && (x_min, x_max) == (0.0, 120.0)));

    let err = curve.eval(-0.1).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { .. }));
}

#[test]
fn empty_curve_rejected() {
    let err = PiecewiseCurve::new(Vec::new()).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}
