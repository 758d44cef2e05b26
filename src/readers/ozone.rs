use std::path::Path;

use crate::error::Result;
use crate::models::{Extraction, LocationTable, MonthlyMeasurement};
use crate::readers::pdf_text;
use crate::utils::constants::{
    DETAIL_8H_EXCEEDANCE, DETAIL_HOURLY_EXCEEDANCE, MONTHS_PER_ROW, OZONE_ALIASES,
    OZONE_LOCATIONS, OZONE_SECTION_SWITCH, UNIT_UG_M3,
};
use crate::utils::parse::parse_value;

/// Reader for the ozone exceedance tables in ARSO annual reports.
///
/// Data rows are label-prefixed: a location name followed by twelve monthly
/// values. The detail classification of a row depends on its position in the
/// document, not on the row itself: rows after the "Preglednica 2" heading
/// describe the 8-hour threshold instead of the hourly one. The switch is
/// one-way and resets at the start of each document.
pub struct OzoneReader {
    locations: LocationTable,
}

impl OzoneReader {
    pub fn new() -> Self {
        Self {
            locations: LocationTable::new(OZONE_LOCATIONS, OZONE_ALIASES),
        }
    }

    pub fn with_locations(locations: &[&str]) -> Self {
        Self {
            locations: LocationTable::new(locations, OZONE_ALIASES),
        }
    }

    /// Extract all measurements from one PDF report.
    pub fn read_document(&self, path: &Path) -> Result<Extraction<MonthlyMeasurement>> {
        Ok(self.read_pages(pdf_text::extract_pages(path)?))
    }

    /// Extract measurements from already-linearized page text.
    pub fn read_pages<I>(&self, pages: I) -> Extraction<MonthlyMeasurement>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Extraction::new();
        let mut detail = DETAIL_HOURLY_EXCEEDANCE;
        for page in pages {
            for line in page.lines() {
                detail = self.scan_line(line.trim(), detail, &mut out);
            }
        }
        out
    }

    /// Process one line, returning the detail classification in effect for
    /// the lines that follow it. Lines that are not data rows are skipped
    /// without error.
    fn scan_line(
        &self,
        line: &str,
        detail: &'static str,
        out: &mut Extraction<MonthlyMeasurement>,
    ) -> &'static str {
        if line.starts_with(OZONE_SECTION_SWITCH) {
            return DETAIL_8H_EXCEEDANCE;
        }

        let Some((label, canonical)) = self.locations.match_line(line) else {
            return detail;
        };

        let mut rest = line[label.len()..].trim_start();
        if let Some(stripped) = rest.strip_prefix('*') {
            rest = stripped.trim_start();
        }
        // A ':' right after the label marks a header or footer, not data.
        if rest.starts_with(':') {
            return detail;
        }

        let tokens: Vec<&str> = rest.split_whitespace().collect();
        if tokens.len() < MONTHS_PER_ROW {
            return detail;
        }

        for (month, token) in tokens.iter().take(MONTHS_PER_ROW).enumerate() {
            if let Some(value) = parse_value(token) {
                out.push(MonthlyMeasurement {
                    month: month as u32,
                    location: canonical.to_string(),
                    value,
                    unit: UNIT_UG_M3.to_string(),
                    detail: detail.to_string(),
                });
            }
        }

        detail
    }
}

impl Default for OzoneReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(pages: &[&str]) -> Extraction<MonthlyMeasurement> {
        OzoneReader::new().read_pages(pages.iter().map(|p| p.to_string()))
    }

    #[test]
    fn full_row_yields_one_measurement_per_month() {
        let out = read(&["Ljubljana Bežigrad 1 2 3 4 5 6 7 8 9 10 11 12"]);

        assert_eq!(out.len(), 12);
        let months: Vec<u32> = out.all.iter().map(|m| m.month).collect();
        assert_eq!(months, (0..12).collect::<Vec<_>>());
        assert!(out.all.iter().all(|m| m.location == "Ljubljana Bežigrad"));
        assert_eq!(out.all[0].value, 1.0);
        assert_eq!(out.all[11].value, 12.0);
        assert_eq!(out.all[0].unit, UNIT_UG_M3);
        assert_eq!(out.all[0].detail, DETAIL_HOURLY_EXCEEDANCE);
    }

    #[test]
    fn alias_resolves_to_canonical_location() {
        let out = read(&["LJ Bežigrad 1 2 3 4 5 6 7 8 9 10 11 12"]);

        assert_eq!(out.len(), 12);
        assert!(out.by_location.contains_key("Ljubljana Bežigrad"));
        assert!(!out.by_location.contains_key("LJ Bežigrad"));
    }

    #[test]
    fn short_row_is_rejected_entirely() {
        let out = read(&["Celje 1 2 3 4 5 6 7 8 9 10 11"]);
        assert!(out.is_empty());
    }

    #[test]
    fn header_row_after_label_is_skipped() {
        let out = read(&["Celje: število preseganj 1 2 3 4 5 6 7 8 9 10 11 12"]);
        assert!(out.is_empty());
    }

    #[test]
    fn star_marker_and_absent_cells_are_tolerated() {
        let out = read(&["Koper * 10 20* - / 40 50 60 70 80 90 100 110"]);

        assert_eq!(out.len(), 10);
        assert_eq!(out.all[0].value, 10.0);
        assert_eq!(out.all[1].value, 20.0);
        // Months 2 and 3 carried no measurement.
        let months: Vec<u32> = out.all.iter().map(|m| m.month).collect();
        assert!(!months.contains(&2));
        assert!(!months.contains(&3));
    }

    #[test]
    fn section_heading_switches_detail_for_following_rows() {
        let out = read(&[
            "Celje 1 1 1 1 1 1 1 1 1 1 1 1\nPreglednica 2: Število dni s preseganji\nKoper 2 2 2 2 2 2 2 2 2 2 2 2",
            "Iskrba 3 3 3 3 3 3 3 3 3 3 3 3",
        ]);

        assert_eq!(out.by_location["Celje"][0].detail, DETAIL_HOURLY_EXCEEDANCE);
        assert_eq!(out.by_location["Koper"][0].detail, DETAIL_8H_EXCEEDANCE);
        // The switch carries across pages of the same document.
        assert_eq!(out.by_location["Iskrba"][0].detail, DETAIL_8H_EXCEEDANCE);
    }

    #[test]
    fn switch_resets_between_documents() {
        let reader = OzoneReader::new();
        let first = reader.read_pages(vec![
            "Preglednica 2: nadaljevanje\nCelje 1 1 1 1 1 1 1 1 1 1 1 1".to_string(),
        ]);
        assert_eq!(first.all[0].detail, DETAIL_8H_EXCEEDANCE);

        let second = reader.read_pages(vec!["Celje 1 1 1 1 1 1 1 1 1 1 1 1".to_string()]);
        assert_eq!(second.all[0].detail, DETAIL_HOURLY_EXCEEDANCE);
    }

    #[test]
    fn unrelated_lines_are_silently_ignored() {
        let out = read(&["Kakovost zraka v Sloveniji\n\nLeto 2013\nstran 42"]);
        assert!(out.is_empty());
    }
}
