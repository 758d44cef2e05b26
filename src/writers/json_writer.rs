use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Extraction, Pollutant, Record, ReportYear};
use crate::processors::MeasurementMerger;
use crate::utils::constants::LOCATION_DIR_PREFIX;
use crate::utils::filename::safe_location_name;

/// Top-level document for the per-source "all measurements" file.
#[derive(Debug, Serialize, Deserialize)]
pub struct AllDataFile<T> {
    pub source: String,
    pub pollutant: String,
    pub year: ReportYear,
    pub total_measurements: usize,
    pub data: Vec<T>,
}

/// Top-level document for a cumulative per-location file.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationFile<T> {
    pub location: String,
    pub pollutant: String,
    pub year: ReportYear,
    pub total_measurements: usize,
    pub data: Vec<T>,
}

/// Existing per-location files are read for their data only; a missing
/// `data` field is treated as empty.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
struct ExistingData<T> {
    #[serde(default)]
    data: Vec<T>,
}

/// Outcome of persisting one report, for the command layer's summary.
#[derive(Debug)]
pub struct WriteSummary {
    pub all_file: PathBuf,
    pub total_measurements: usize,
    pub location_files: usize,
}

/// Writes extraction output as JSON under `<output>/<tag>_<year>/`.
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Persist one report's extraction: the per-source file plus the
    /// cumulative per-location files.
    pub fn write_report<T: Record>(
        &self,
        pollutant: Pollutant,
        year: ReportYear,
        source: &Path,
        extraction: &Extraction<T>,
    ) -> Result<WriteSummary> {
        let report_dir = self
            .output_dir
            .join(format!("{}_{}", pollutant.file_tag, year));
        fs::create_dir_all(&report_dir)?;

        let all_file = self.write_all_file(&report_dir, pollutant, year, source, &extraction.all)?;
        let location_files =
            self.write_location_files(&report_dir, pollutant, year, &extraction.by_location)?;

        Ok(WriteSummary {
            all_file,
            total_measurements: extraction.len(),
            location_files,
        })
    }

    /// Every measurement from this source, unsorted and never merged with
    /// prior runs: the file is rewritten in full each time.
    fn write_all_file<T: Record>(
        &self,
        report_dir: &Path,
        pollutant: Pollutant,
        year: ReportYear,
        source: &Path,
        data: &[T],
    ) -> Result<PathBuf> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        let path = report_dir.join(format!("{}_{}_all_{}.json", pollutant.file_tag, year, stem));

        let document = AllDataFile {
            source: source.to_string_lossy().into_owned(),
            pollutant: pollutant.name.to_string(),
            year,
            total_measurements: data.len(),
            data: data.to_vec(),
        };
        write_json(&path, &document)?;
        Ok(path)
    }

    /// One cumulative file per location: read what previous runs stored,
    /// union with the new records, rewrite the whole file. Never a partial
    /// or append-only write.
    fn write_location_files<T: Record>(
        &self,
        report_dir: &Path,
        pollutant: Pollutant,
        year: ReportYear,
        by_location: &BTreeMap<String, Vec<T>>,
    ) -> Result<usize> {
        let location_dir = report_dir.join(format!("{}_{}", LOCATION_DIR_PREFIX, year));
        fs::create_dir_all(&location_dir)?;

        let merger = MeasurementMerger::new();
        let mut written = 0;
        for (location, records) in by_location {
            if records.is_empty() {
                continue;
            }
            let path = location_dir.join(format!("{}.json", safe_location_name(location)));

            let existing = read_existing_data(&path)?;
            let merged = merger.merge(existing, records.clone());

            let document = LocationFile {
                location: location.clone(),
                pollutant: pollutant.name.to_string(),
                year,
                total_measurements: merged.len(),
                data: merged,
            };
            write_json(&path, &document)?;
            written += 1;
        }
        Ok(written)
    }
}

fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), document)?;
    Ok(())
}

fn read_existing_data<T: Record>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let existing: ExistingData<T> = serde_json::from_reader(BufReader::new(file))?;
    Ok(existing.data)
}
