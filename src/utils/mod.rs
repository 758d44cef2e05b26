pub mod constants;
pub mod filename;
pub mod parse;
pub mod progress;
pub mod year;

pub use constants::*;
pub use filename::safe_location_name;
pub use progress::ProgressReporter;
