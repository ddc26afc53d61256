//! Raw temperature dump reader.
//!
//! Input is one line per timestep and one whitespace-separated column per
//! core, as written by periodic `sensors` sampling:
//!
//! ```text
//! +61.0°C +63.0°C +50.0°C +58.0°C
//! +80.0°C +81.0°C +68.0°C +77.0°C
//! ```
//!
//! Sign and unit decoration around each reading is dropped. Line `k`
//! (counting non-blank lines from 0) is stamped with time `k * step_size`.

use std::io::BufRead;

use serde::Serialize;

use crate::cpu_temps::errors::ParseError;

/// Seconds between consecutive readings.
pub const DEFAULT_STEP_SIZE: f64 = 30.0;


/// One timestep: time and one reading per core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,
    pub values: Vec<f64>,
}


/// Ordered samples sharing one core count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self { Self { samples } }
}

impl Series {
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn num_cores(&self) -> usize {
        self.samples.first().map_or(0, |s| s.values.len())
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Readings of a single core over time.
    ///
    /// # Panics
    /// Panics if `core >= num_cores()`.
    pub fn core(&self, core: usize) -> Vec<f64> {
        self.samples.iter().map(|s| s.values[core]).collect()
    }
}


/// Strips everything before the first and after the last numeric character.
/// `"+61.0°C"` -> `"61.0"`, `"-3.5"` -> `"-3.5"`.
#[inline]
fn strip_decoration(token: &str) -> &str {
    let is_num = |c: char| c.is_ascii_digit() || c == '.';
    let start = match token.find(is_num) {
        Some(i) => i,
        None => return "",
    };
    // keep a minus sign directly in front of the number
    let start = if start > 0 && token[..start].ends_with('-') { start - 1 } else { start };
    let end = token.rfind(is_num).map_or(start, |i| i + 1);
    &token[start..end]
}


fn parse_line(line_no: usize, line: &str) -> Result<Vec<f64>, ParseError> {
    line.split_whitespace()
        .map(|token| {
            strip_decoration(token)
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidReading { line: line_no, token: token.to_string() })
        })
        .collect()
}


/// Reads a raw temperature dump into a [`Series`].
///
/// # Arguments
/// - `reader`    : source of the dump, one timestep per line
/// - `step_size` : seconds between timesteps ([`DEFAULT_STEP_SIZE`] upstream)
///
/// # Errors
/// - [`ParseError::InvalidReading`] for a token without a number
/// - [`ParseError::RaggedRow`] if a line's core count differs from the first
/// - [`ParseError::Io`] on read failure
pub fn parse_raw_temps<R: BufRead>(reader: R, step_size: f64) -> Result<Series, ParseError> {
    let mut samples: Vec<Sample> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let values = parse_line(line_no, &line)?;
        if let Some(first) = samples.first() {
            let expected = first.values.len();
            if values.len() != expected {
                return Err(ParseError::RaggedRow { line: line_no, expected, got: values.len() });
            }
        }

        let time = samples.len() as f64 * step_size;
        samples.push(Sample { time, values });
    }

    Ok(Series { samples })
}
