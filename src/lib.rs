//! imgmanifest: a tolerant reader for CSV image manifests.
//!
//! A manifest names images by path, optionally with a crop rectangle. The
//! reader keeps going past bad records, collecting them as warnings, and
//! only gives up when the CSV itself is broken.
//!
//! # Modules
//!
//! - [`manifest`]: Record types, the manifest reader and writer
//! - [`error`]: Error types for imgmanifest operations

pub mod error;
pub mod manifest;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use error::ManifestError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "IMGMANIFEST_LOG";

/// The imgmanifest CLI application.
#[derive(Parser)]
#[command(name = "imgmanifest")]
#[command(version, about)]
struct Cli {
    /// Manifest file to read.
    #[arg(default_value = "./test/list.csv")]
    manifest: PathBuf,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Log parser decisions (same as IMGMANIFEST_LOG=debug).
    #[arg(short, long)]
    verbose: bool,
}

/// Report formats understood by `--output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(name: &str) -> Result<Self, ManifestError> {
        match name {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ManifestError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            ))),
        }
    }
}

/// Run the imgmanifest CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ManifestError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_report(cli)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Read the manifest and print what was found.
fn run_report(args: Cli) -> Result<(), ManifestError> {
    let format = OutputFormat::parse(&args.output)?;
    let manifest = manifest::io_manifest_csv::read_manifest(&args.manifest)?;

    if !manifest.warnings.is_empty() {
        tracing::warn!(
            "warnings for image CSV file {}",
            args.manifest.display()
        );
        for warning in &manifest.warnings {
            tracing::warn!("{}", warning);
        }
    }

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&manifest).map_err(ManifestError::ReportJson)?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", manifest),
    }

    if args.strict && !manifest.warnings.is_empty() {
        Err(ManifestError::WarningsPresent {
            warning_count: manifest.warnings.len(),
        })
    } else {
        Ok(())
    }
}
