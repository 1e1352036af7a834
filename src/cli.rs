//! Command-line interface for the ICARTT processor.
//!
//! Thin invocation surface over the library: converts a single `.ict` file
//! or every `.ict` file under a directory to CSV or Parquet.

use crate::constants::{CSV_EXTENSION, ICT_EXTENSION, PARQUET_EXTENSION};
use crate::reader::IcarttReader;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use walkdir::WalkDir;

/// CLI arguments for the ICARTT processor
///
/// Converts ICARTT (.ict) atmospheric research data files to CSV or
/// optimized Parquet files for downstream analysis workflows.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "icartt-processor",
    version,
    about = "Convert ICARTT (.ict) atmospheric data files to CSV or Parquet"
)]
pub struct Args {
    /// Input .ict file, or a directory to scan recursively for .ict files
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (single-file input) or output directory (directory input).
    /// Defaults to the input path with the export extension.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short = 'f', long = "format", value_enum, default_value = "parquet")]
    pub format: ExportFormat,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_EXTENSION,
            ExportFormat::Parquet => PARQUET_EXTENSION,
        }
    }
}

/// Run the converter for the parsed arguments.
pub fn run(args: Args) -> Result<()> {
    setup_logging(args.verbose);

    let files = discover_inputs(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("no .ict files found under {}", args.input.display());
    }

    if files.len() == 1 && args.input.is_file() {
        let out_path = convert_file(&files[0], args.output.as_deref(), args.format)
            .with_context(|| format!("failed to convert {}", files[0].display()))?;
        info!("Converted {} -> {}", files[0].display(), out_path.display());
        return Ok(());
    }

    convert_directory(&files, args.output.as_deref(), args.format)
}

fn convert_directory(
    files: &[PathBuf],
    output_dir: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Converting files");

    let mut converted = 0usize;
    let mut failed = 0usize;

    for file in files {
        if let Some(file_name) = file.file_name() {
            pb.set_message(format!("Converting: {}", file_name.to_string_lossy()));
        }

        let destination = output_dir.map(|dir| {
            dir.join(file.file_name().unwrap_or_default())
                .with_extension(format.extension())
        });

        match convert_file(file, destination.as_deref(), format) {
            Ok(out_path) => {
                debug!("Converted {} -> {}", file.display(), out_path.display());
                converted += 1;
            }
            Err(e) => {
                error!("Failed to convert {}: {:#}", file.display(), e);
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!("{} converted, {} failed", converted, failed));

    if converted == 0 {
        anyhow::bail!("all {} files failed to convert", failed);
    }
    Ok(())
}

fn convert_file(
    path: &Path,
    destination: Option<&Path>,
    format: ExportFormat,
) -> crate::error::Result<PathBuf> {
    let reader = IcarttReader::open(path)?;
    match format {
        ExportFormat::Csv => reader.export_csv(destination),
        ExportFormat::Parquet => reader.export_parquet(destination),
    }
}

/// Collect input files: the path itself when it is a file, otherwise every
/// `.ict` file beneath it in deterministic order.
fn discover_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case(ICT_EXTENSION))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    debug!("Discovered {} .ict files under {}", files.len(), input.display());
    Ok(files)
}

/// Set up structured logging to stderr.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("icartt_processor={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
