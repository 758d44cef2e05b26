//! Download of the EEA historical air-quality dataset.
//!
//! The EEA download service answers a country/pollutant selection with a
//! list of parquet file URLs, which are then fetched one by one. The
//! service owns retries and availability; a failed file is logged and the
//! remaining files are still downloaded.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use serde_json::json;
use tracing::warn;

use crate::error::{ExtractError, Result};
use crate::utils::progress::ProgressReporter;

/// EEA Air Quality Download Service endpoint returning parquet file URLs.
const DOWNLOAD_API_URL: &str =
    "https://eeadmz1-downloads-api-appservice.azurewebsites.net/ParquetFile/urls";

/// Vocabulary base for pollutant codes, as the download API expects them.
const POLLUTANT_VOCABULARY: &str = "http://dd.eionet.europa.eu/vocabulary/aq/pollutant";

/// Historical (Airbase) dataset identifier.
const DATASET_HISTORICAL: u8 = 3;

/// Pollutants fetched when none are specified.
pub const DEFAULT_POLLUTANTS: &[&str] =
    &["O3", "C6H6", "CO", "NO2", "NOx", "PM10", "PM2.5", "SO2"];

pub struct FetchOptions {
    pub country: String,
    pub pollutants: Vec<String>,
    pub output_dir: PathBuf,
}

/// Download every historical parquet file for the selection. Returns the
/// number of files written.
pub async fn fetch_dataset(options: &FetchOptions) -> Result<usize> {
    fs::create_dir_all(&options.output_dir)?;

    let mut pollutant_urls = Vec::with_capacity(options.pollutants.len());
    for notation in &options.pollutants {
        let code = vocabulary_code(notation).ok_or_else(|| {
            ExtractError::Download(format!("unknown pollutant notation: {}", notation))
        })?;
        pollutant_urls.push(format!("{}/{}", POLLUTANT_VOCABULARY, code));
    }

    let body = json!({
        "countries": [options.country],
        "cities": [],
        "pollutants": pollutant_urls,
        "dataset": DATASET_HISTORICAL,
        "source": "API",
    });

    let client = reqwest::Client::new();

    let progress = ProgressReporter::new_spinner("Requesting file list...", false);
    let listing = client
        .post(DOWNLOAD_API_URL)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let urls: Vec<&str> = listing
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .collect();
    progress.finish_with_message(&format!("{} files available", urls.len()));

    if urls.is_empty() {
        return Ok(0);
    }

    let mut downloaded = 0;
    for url in urls {
        match download_file(&client, url, &options.output_dir).await {
            Ok(path) => {
                downloaded += 1;
                println!("Saved {}", path.display());
            }
            Err(err) => warn!(url, error = %err, "download failed"),
        }
    }

    Ok(downloaded)
}

async fn download_file(
    client: &reqwest::Client,
    url: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ExtractError::Download(format!("no file name in URL: {}", url)))?;
    let path = output_dir.join(name);

    let response = client.get(url).send().await?.error_for_status()?;
    let total = response.content_length().unwrap_or(0);
    let progress = ProgressReporter::new_bytes(total, name, false);

    let mut file = File::create(&path)?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        progress.inc(chunk.len() as u64);
    }
    progress.finish();

    Ok(path)
}

/// Eionet vocabulary code for a pollutant notation.
fn vocabulary_code(notation: &str) -> Option<u32> {
    match notation {
        "SO2" => Some(1),
        "PM10" => Some(5),
        "O3" => Some(7),
        "NO2" => Some(8),
        "NOx" => Some(9),
        "CO" => Some(10),
        "C6H6" => Some(20),
        "PM2.5" => Some(6001),
        _ => None,
    }
}
