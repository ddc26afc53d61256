pub mod errors;
pub mod parse;
pub mod format;
pub mod driver;

pub use driver::{fit_all_cores, fit_core, run, CoreFits, DriverCfg, FitOptions, OutputFormat};
pub use errors::{DriverError, ParseError};
pub use format::{format_record, write_records};
pub use parse::{parse_raw_temps, Sample, Series, DEFAULT_STEP_SIZE};
