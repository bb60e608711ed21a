// SPDX-License-Identifier: MIT
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use envarc::{extract_all, Archive, Report, Summary};

/// Decode an ENV document archive and extract its payloads
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the archive file
    archive: PathBuf,

    /// Directory to extract payloads into
    #[arg(default_value = "extracted")]
    output_dir: PathBuf,

    /// Print the summary as JSON instead of the plain report
    #[arg(long)]
    json: bool,

    /// Only summarize the archive; do not write any files
    #[arg(long)]
    no_extract: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    info!(archive = %cli.archive.display(), "parsing archive");
    let archive = Archive::from_file(&cli.archive)?;

    if cli.json {
        let summary = Summary::from_archive(&archive);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", Report(&archive));
    }

    if !cli.no_extract {
        info!(output_dir = %cli.output_dir.display(), "extracting files");
        let written = extract_all(&archive, &cli.output_dir)?;
        info!(written, "extraction completed");
    }

    Ok(())
}
