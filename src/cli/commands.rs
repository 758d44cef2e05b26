use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands, ExtractArgs};
use crate::error::Result;
use crate::fetch::{self, FetchOptions};
use crate::processors::batch;
use crate::writers::parquet_json;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ozone { input } => run_extraction(input, batch::process_ozone_file),

        Commands::Pm25 { input } => run_extraction(input, batch::process_pm25_file),

        Commands::Fetch {
            country,
            pollutants,
            output,
        } => {
            let pollutants = if pollutants.is_empty() {
                fetch::DEFAULT_POLLUTANTS
                    .iter()
                    .map(|p| p.to_string())
                    .collect()
            } else {
                pollutants
            };

            let options = FetchOptions {
                country,
                pollutants,
                output_dir: output,
            };
            let downloaded = fetch::fetch_dataset(&options).await?;
            println!(
                "Downloaded {} files to {}",
                downloaded,
                options.output_dir.display()
            );
            Ok(())
        }

        Commands::Convert {
            parquet_dir,
            output_dir,
        } => {
            let converted = parquet_json::convert_directory(&parquet_dir, &output_dir)?;
            for path in &converted {
                println!("Converted: {}", path.display());
            }
            println!("Converted {} files", converted.len());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_extraction(
    args: ExtractArgs,
    process: fn(&Path, &Path) -> Result<bool>,
) -> Result<()> {
    let ExtractArgs {
        pdf_files,
        directory,
        pattern,
        output,
    } = args;

    let files = if pdf_files.is_empty() {
        batch::find_pdf_files(&directory, pattern.as_deref())?
    } else {
        pdf_files
    };

    if files.is_empty() {
        println!("No PDF files found in {}", directory.display());
        if let Some(pattern) = &pattern {
            println!("Pattern: {}", pattern);
        }
        return Ok(());
    }

    println!("Found {} PDF files to process:", files.len());
    for file in &files {
        println!("  - {}", file.display());
    }

    let report = batch::run_batch(&files, |path| process(path, &output));

    println!();
    println!("Done!");
    println!("Successful: {}", report.successful);
    println!("Failed: {}", report.failed);
    Ok(())
}
