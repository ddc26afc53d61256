pub(crate) mod helpers;
pub mod natural;

pub use natural::SplineRecurrence;
