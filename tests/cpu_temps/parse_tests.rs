use std::io::Cursor;

use thermofit::cpu_temps::{parse_raw_temps, ParseError, DEFAULT_STEP_SIZE};

type ParseResult = Result<(), ParseError>;

const RAW: &str = "\
+61.0°C +63.0°C +50.0°C +58.0°C
+80.0°C +81.0°C +68.0°C +77.0°C
+62.0°C +63.0°C +52.0°C +60.0°C
";

#[test]
fn reads_sensor_dump() -> ParseResult {
    let series = parse_raw_temps(Cursor::new(RAW), DEFAULT_STEP_SIZE)?;

    assert_eq!(series.len(), 3);
    assert_eq!(series.num_cores(), 4);
    assert_eq!(series.times(), vec![0.0, 30.0, 60.0]);
    assert_eq!(series.core(0), vec![61.0, 80.0, 62.0]);
    assert_eq!(series.core(3), vec![58.0, 77.0, 60.0]);
    Ok(())
}

#[test]
fn plain_numbers_and_custom_step() -> ParseResult {
    let series = parse_raw_temps(Cursor::new("1 2\n3.5 -4\n"), 0.5)?;

    assert_eq!(series.times(), vec![0.0, 0.5]);
    assert_eq!(series.core(1), vec![2.0, -4.0]);
    Ok(())
}

#[test]
fn blank_lines_do_not_advance_time() -> ParseResult {
    let series = parse_raw_temps(Cursor::new("10 20\n\n   \n30 40\n"), 30.0)?;

    assert_eq!(series.times(), vec![0.0, 30.0]);
    assert_eq!(series.core(0), vec![10.0, 30.0]);
    Ok(())
}

#[test]
fn empty_input_is_empty_series() -> ParseResult {
    let series = parse_raw_temps(Cursor::new(""), 30.0)?;

    assert!(series.is_empty());
    assert_eq!(series.num_cores(), 0);
    Ok(())
}

#[test]
fn ragged_row() {
    let err = parse_raw_temps(Cursor::new("1 2 3\n4 5\n"), 30.0).unwrap_err();
    assert!(matches!(err, ParseError::RaggedRow { line: 2, expected: 3, got: 2 }));
}

#[test]
fn invalid_reading() {
    let err = parse_raw_temps(Cursor::new("+61.0°C N/A\n"), 30.0).unwrap_err();
    assert!(matches!(err, ParseError::InvalidReading { line: 1, ref token } if token == "N/A"));
}
