use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::models::{pollutant, Extraction, Pollutant, Record};
use crate::readers::{OzoneReader, Pm25Reader};
use crate::utils::constants::DEFAULT_PDF_PATTERN;
use crate::utils::year::detect_year;
use crate::writers::JsonWriter;

/// Aggregate outcome of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub successful: usize,
    pub failed: usize,
}

/// Run the per-file function over every input, trapping failures so one bad
/// document cannot abort the rest of the batch.
pub fn run_batch<F>(files: &[PathBuf], mut process: F) -> BatchReport
where
    F: FnMut(&Path) -> Result<bool>,
{
    let mut report = BatchReport::default();
    for file in files {
        match process(file) {
            Ok(true) => report.successful += 1,
            Ok(false) => report.failed += 1,
            Err(err) => {
                warn!(file = %file.display(), error = %err, "processing failed");
                println!("Error processing {}: {}", file.display(), err);
                report.failed += 1;
            }
        }
    }
    report
}

/// Extract and persist one ozone report. Soft failures (missing file,
/// nothing extracted) return `Ok(false)` so the batch moves on.
pub fn process_ozone_file(path: &Path, output_dir: &Path) -> Result<bool> {
    if !check_exists(path) {
        return Ok(false);
    }
    println!("\nExtracting {}...", path.display());
    let extraction = OzoneReader::new().read_document(path)?;
    persist(pollutant::OZONE, path, output_dir, extraction)
}

/// Extract and persist one PM2.5 report.
pub fn process_pm25_file(path: &Path, output_dir: &Path) -> Result<bool> {
    if !check_exists(path) {
        return Ok(false);
    }
    println!("\nExtracting {}...", path.display());
    let extraction = Pm25Reader::new().read_document(path)?;
    persist(pollutant::PM25, path, output_dir, extraction)
}

fn check_exists(path: &Path) -> bool {
    if path.exists() {
        return true;
    }
    warn!(file = %path.display(), "input file does not exist");
    println!("Warning: file {} does not exist", path.display());
    false
}

fn persist<T: Record>(
    pollutant: Pollutant,
    path: &Path,
    output_dir: &Path,
    extraction: Extraction<T>,
) -> Result<bool> {
    if extraction.is_empty() {
        warn!(file = %path.display(), "no measurements found");
        println!("Warning: no measurements found in {}", path.display());
        return Ok(false);
    }

    let year = detect_year(&extraction.all, path);
    println!(
        "Found {} measurements across {} locations (year: {})",
        extraction.len(),
        extraction.location_count(),
        year
    );

    let writer = JsonWriter::new(output_dir);
    let summary = writer.write_report(pollutant, year, path, &extraction)?;
    println!(
        "Saved {} ({} measurements, {} location files)",
        summary.all_file.display(),
        summary.total_measurements,
        summary.location_files
    );

    Ok(true)
}

/// Discover input PDFs in a directory, sorted, optionally with a custom
/// glob pattern.
pub fn find_pdf_files(directory: &Path, pattern: Option<&str>) -> Result<Vec<PathBuf>> {
    let full_pattern = directory.join(pattern.unwrap_or(DEFAULT_PDF_PATTERN));
    let mut files: Vec<PathBuf> = glob::glob(&full_pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    Ok(files)
}
