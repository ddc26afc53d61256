use proptest::prelude::*;

use thermofit::{cubic_spline_interpolate, least_squares_approximate, linear_interpolate};

/// Strictly increasing knots from positive steps.
fn knots(steps: &[f64]) -> Vec<f64> {
    let mut x = Vec::with_capacity(steps.len() + 1);
    let mut t = 0.0;
    x.push(t);
    for s in steps {
        t += s;
        x.push(t);
    }
    x
}

proptest! {
    #[test]
    fn linear_reproduces_samples(
        steps in prop::collection::vec(0.1f64..50.0, 1..60),
        seed in prop::collection::vec(-100.0f64..100.0, 61),
    ) {
        let x = knots(&steps);
        let y = &seed[..x.len()];

        let pieces = linear_interpolate(&x, y).unwrap();
        prop_assert_eq!(pieces.len(), x.len() - 1);

        for (i, p) in pieces.iter().enumerate() {
            let (c0, c1) = (p.coefficients[0], p.coefficients[1]);
            let scale = 1.0 + c0.abs() + (c1 * x[i + 1]).abs();
            prop_assert!((c0 + c1 * x[i] - y[i]).abs() <= 1e-12 * scale);
            prop_assert!((c0 + c1 * x[i + 1] - y[i + 1]).abs() <= 1e-12 * scale);
        }
    }

    #[test]
    fn least_squares_recovers_line(
        n in 2usize..50,
        x0 in -1e4f64..1e4,
        step in 1.0f64..60.0,
        k in -5.0f64..5.0,
        b in -50.0f64..50.0,
    ) {
        let x: Vec<f64> = (0..n).map(|i| x0 + i as f64 * step).collect();
        let y: Vec<f64> = x.iter().map(|&t| k * t + b).collect();

        let line = least_squares_approximate(&x, &y).unwrap();
        let (c0, c1) = (line.coefficients[0], line.coefficients[1]);

        prop_assert!((c1 - k).abs() <= 1e-5 * (1.0 + k.abs()));
        // intercept error scales with the distance of the data from x = 0
        prop_assert!((c0 - b).abs() <= 1e-5 * (1.0 + x0.abs()) * (1.0 + k.abs()));
        for (&xi, &yi) in x.iter().zip(&y) {
            prop_assert!((c0 + c1 * xi - yi).abs() <= 1e-6 * (1.0 + yi.abs()));
        }
    }

    #[test]
    fn spline_flat_on_collinear_input(
        steps in prop::collection::vec(0.1f64..10.0, 2..40),
        k in -5.0f64..5.0,
        b in -50.0f64..50.0,
    ) {
        let x = knots(&steps);
        let y: Vec<f64> = x.iter().map(|&t| k * t + b).collect();

        for p in cubic_spline_interpolate(&x, &y).unwrap() {
            prop_assert!(p.coefficients[0].abs() <= 1e-8);
            prop_assert!(p.coefficients[1].abs() <= 1e-8);
            prop_assert!((p.coefficients[2] - k).abs() <= 1e-8);
        }
    }
}
