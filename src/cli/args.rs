use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(name = "arso-extractor")]
#[command(about = "ARSO air-quality report extraction tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract ozone exceedance tables from ARSO report PDFs
    Ozone {
        #[command(flatten)]
        input: ExtractArgs,
    },

    /// Extract PM2.5 daily-average tables from ARSO report PDFs
    Pm25 {
        #[command(flatten)]
        input: ExtractArgs,
    },

    /// Download the EEA historical air-quality dataset
    Fetch {
        #[arg(short, long, default_value = "SI", help = "ISO country code")]
        country: String,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Pollutant notations (default: the full ARSO set)"
        )]
        pollutants: Vec<String>,

        #[arg(
            short,
            long,
            default_value = "data/EEA_historical_data/raw",
            help = "Download directory"
        )]
        output: PathBuf,
    },

    /// Convert a directory of parquet files to JSON
    Convert {
        #[arg(help = "Directory containing parquet files")]
        parquet_dir: PathBuf,

        #[arg(help = "Directory to save JSON files")]
        output_dir: PathBuf,
    },
}

#[derive(Args)]
pub struct ExtractArgs {
    #[arg(help = "PDF files to process (default: every PDF in the search directory)")]
    pub pdf_files: Vec<PathBuf>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory to search for PDF files"
    )]
    pub directory: PathBuf,

    #[arg(
        short,
        long,
        help = "Glob pattern for PDF discovery (e.g. 'Ozone_*.pdf')"
    )]
    pub pattern: Option<String>,

    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for JSON files"
    )]
    pub output: PathBuf,
}
