// crates/bundle-report/src/main.rs
// bundle-report - write a static size report for a built dist/ directory

use anyhow::{Context, Result};
use bundle_report::{generate, ReportMode, ReportOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bundle-report")]
#[command(about = "Write a static size report for a built front-end bundle")]
#[command(version)]
struct Cli {
    /// Directory containing the built bundle
    #[arg(short, long, default_value = "dist")]
    dist: PathBuf,

    /// Report output path (default: <dist>/report.html, or report.json in json mode)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportMode::Static)]
    mode: ReportMode,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let opts = ReportOptions {
        dist: cli.dist,
        report: cli.report,
        mode: cli.mode,
    };

    info!(dist = %opts.dist.display(), mode = ?opts.mode, "Analyzing bundle");

    let report = generate(&opts)
        .with_context(|| format!("Failed to write bundle report for {}", opts.dist.display()))?;

    println!(
        "{} assets, {} bytes -> {}",
        report.assets.len(),
        report.total_size,
        opts.report_path().display()
    );
    Ok(())
}
