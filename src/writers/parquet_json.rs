use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use arrow::json::ArrayWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::{ExtractError, Result};

/// Convert every parquet file directly inside `input_dir` (not recursive)
/// into a JSON array of records named `<stem>.json` under `output_dir`.
/// Returns the written paths in input order.
pub fn convert_directory(input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "parquet"))
        .collect();
    inputs.sort();

    let mut converted = Vec::with_capacity(inputs.len());
    for input in inputs {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ExtractError::InvalidFormat(format!("invalid parquet path: {}", input.display()))
            })?;
        let output = output_dir.join(format!("{}.json", stem));
        convert_file(&input, &output)?;
        converted.push(output);
    }

    Ok(converted)
}

/// Convert one parquet file to a JSON array of records.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut writer = ArrayWriter::new(BufWriter::new(File::create(output)?));
    for batch in reader {
        let batch = batch?;
        writer.write(&batch)?;
    }
    writer.finish()?;

    Ok(())
}
