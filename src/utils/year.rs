use std::path::Path;

use chrono::Datelike;
use regex::Regex;

use crate::models::{Record, ReportYear};
use crate::utils::parse::expand_two_digit_year;

/// Resolve the reporting year for output naming.
///
/// Data wins over the file name: the earliest observation date (when the
/// variant carries dates at all), then a four-digit year anywhere in the
/// file name, then a two-digit year directly before the literal `slo` in
/// ARSO's historical naming, century-expanded.
pub fn detect_year<T: Record>(records: &[T], source: &Path) -> ReportYear {
    if let Some(year) = year_from_data(records) {
        return ReportYear::Known(year);
    }
    if let Some(year) = year_from_filename(&source.to_string_lossy()) {
        return ReportYear::Known(year);
    }
    ReportYear::Unknown
}

/// Year of the earliest dated observation, if any record carries a date.
pub fn year_from_data<T: Record>(records: &[T]) -> Option<i32> {
    records
        .iter()
        .filter_map(Record::observed_date)
        .min()
        .map(|date| date.year())
}

/// Year encoded in a file name, either as `19xx`/`20xx` or as two digits
/// immediately before `slo`.
pub fn year_from_filename(name: &str) -> Option<i32> {
    let four_digit = Regex::new(r"20\d{2}|19\d{2}").expect("valid year pattern");
    if let Some(found) = four_digit.find(name) {
        return found.as_str().parse().ok();
    }

    let two_digit = Regex::new(r"(\d{2})slo").expect("valid year pattern");
    if let Some(caps) = two_digit.captures(name) {
        let yy: u32 = caps[1].parse().ok()?;
        return Some(expand_two_digit_year(yy));
    }

    None
}
