//! Text rendering of fitted pieces.
//!
//! One line per [`PiecewiseFunction`]:
//!
//! ```text
//! 0.0 <= x < 30.0; y0 = 61.0000 + 0.6333x; linear_interpolation
//! 0.0 <= x < 30.0; y0 = 61.0000 + 0.6411x + 0.0000x^2 + -0.0000x^3; cubic_spline_interpolation
//! ```
//!
//! Terms are written in ascending power whatever the coefficient order of
//! the record's kind; coefficients use 4 decimals.

use std::io::{self, Write};

use crate::interpolation::piecewise::PiecewiseFunction;


#[inline]
fn power_suffix(power: usize) -> String {
    match power {
        0 => String::new(),
        1 => "x".to_string(),
        p => format!("x^{p}"),
    }
}

/// `c0 + c1x + c2x^2 + ...`
fn polynomial(coeffs: &[f64]) -> String {
    coeffs.iter()
        .enumerate()
        .map(|(power, c)| format!("{c:.4}{}", power_suffix(power)))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Renders one record without a trailing newline.
pub fn format_record(piece: &PiecewiseFunction) -> String {
    format!(
        "{:?} <= x < {:?}; {} = {}; {}",
        piece.domain_start,
        piece.domain_end,
        piece.output_label,
        polynomial(&piece.ascending()),
        piece.kind.algorithm_name(),
    )
}

pub fn write_records<'p, W, I>(mut out: W, pieces: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'p PiecewiseFunction>,
{
    for piece in pieces {
        writeln!(out, "{}", format_record(piece))?;
    }
    Ok(())
}
