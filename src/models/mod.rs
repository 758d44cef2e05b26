pub mod locations;
pub mod measurement;
pub mod pollutant;
pub mod year;

pub use locations::LocationTable;
pub use measurement::{DailyMeasurement, Extraction, MonthlyMeasurement, Record};
pub use pollutant::{Pollutant, OZONE, PM25};
pub use year::ReportYear;
