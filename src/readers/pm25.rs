use std::path::Path;

use regex::Regex;

use crate::error::Result;
use crate::models::{DailyMeasurement, Extraction};
use crate::readers::pdf_text;
use crate::utils::constants::{AGGREGATION_DAILY_AVERAGE, PM25_LOCATIONS, UNIT_UG_M3};
use crate::utils::parse::{parse_report_date, parse_value};

/// Reader for the PM2.5 daily-average tables in ARSO annual reports.
///
/// Data rows are date-prefixed: `DD.MM.YY` followed by one value per
/// station, in a fixed column order. There is no per-row location label;
/// values pair with stations positionally.
pub struct Pm25Reader {
    locations: Vec<String>,
    date_pattern: Regex,
}

impl Pm25Reader {
    pub fn new() -> Self {
        Self::with_locations(PM25_LOCATIONS)
    }

    pub fn with_locations(locations: &[&str]) -> Self {
        Self {
            locations: locations.iter().map(|s| s.to_string()).collect(),
            // A stray space before the final dot shows up in some report
            // years; tolerate it.
            date_pattern: Regex::new(r"^\d{1,2}\.\d{1,2}\s*\.\d{2}").expect("valid date pattern"),
        }
    }

    /// Extract all measurements from one PDF report.
    pub fn read_document(&self, path: &Path) -> Result<Extraction<DailyMeasurement>> {
        Ok(self.read_pages(pdf_text::extract_pages(path)?))
    }

    /// Extract measurements from already-linearized page text.
    pub fn read_pages<I>(&self, pages: I) -> Extraction<DailyMeasurement>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Extraction::new();
        for page in pages {
            for line in page.lines() {
                self.scan_line(line.trim(), &mut out);
            }
        }
        out
    }

    fn scan_line(&self, line: &str, out: &mut Extraction<DailyMeasurement>) {
        let Some(found) = self.date_pattern.find(line) else {
            return;
        };
        let Some(date) = parse_report_date(found.as_str()) else {
            return;
        };

        // Values follow the date in the fixed station column order; extra
        // trailing tokens belong to stations we do not track.
        let values = line[found.end()..].split_whitespace();
        for (location, token) in self.locations.iter().zip(values) {
            if let Some(value) = parse_value(token) {
                out.push(DailyMeasurement {
                    date,
                    location: location.clone(),
                    value,
                    unit: UNIT_UG_M3.to_string(),
                    aggregation: AGGREGATION_DAILY_AVERAGE.to_string(),
                });
            }
        }
    }
}

impl Default for Pm25Reader {
    fn default() -> Self {
        Self::new()
    }
}
