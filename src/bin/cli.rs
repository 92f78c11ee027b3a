use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clusteval::{evaluate_file, Params};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clusteval")]
#[command(about = "Homogeneity, completeness and V-measure of a cluster assignment file")]
struct Cli {
    /// Label file with one `item,cluster` pair per line
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = evaluate_file(&cli.path, &Params::default())
        .with_context(|| format!("Failed to evaluate {}", cli.path.display()))?;
    println!("{result}");
    Ok(())
}
