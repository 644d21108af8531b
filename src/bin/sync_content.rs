// Content Synchronizer Binary
//
// Purpose: Generate the frontend's static content module from data/data.md
// Usage: cargo run --bin sync_content -- --input data/data.md --output frontend/src/data/content.ts

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use portfolio_content::sync::{self, OutputFormat, SyncOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a static content module from the portfolio markdown file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Markdown content file
    #[arg(short, long, default_value = "data/data.md")]
    input: PathBuf,

    /// Generated module path
    #[arg(short, long, default_value = "frontend/src/data/content.ts")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ts)]
    format: Format,

    /// Fail when the front matter is missing instead of warning
    #[arg(long)]
    strict: bool,

    /// Print every skipped line
    #[arg(long)]
    report: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Ts,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ts => OutputFormat::TypeScript,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_content=info,sync_content=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let options = SyncOptions {
        format: cli.format.into(),
        strict: cli.strict,
    };

    let report = sync::sync_file(&cli.input, &cli.output, &options)
        .with_context(|| format!("failed to sync {}", cli.input.display()))?;

    tracing::info!("Synced content to {}", report.output.display());
    tracing::info!(
        "  {} paragraphs, {} skills, {} education, {} experience, {} projects",
        report.paragraphs,
        report.skills,
        report.education,
        report.experience,
        report.projects
    );

    if !report.diagnostics.is_empty() {
        tracing::warn!("{} line(s) skipped", report.diagnostics.len());
        if cli.report {
            for skipped in report.diagnostics.skipped() {
                println!(
                    "{}:{}: {} ({})",
                    cli.input.display(),
                    skipped.line,
                    skipped.text,
                    skipped.reason.as_str()
                );
            }
        }
    }

    Ok(())
}
