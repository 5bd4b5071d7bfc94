use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

use enum_export::config::{Config, DEFAULT_CONFIG_FILE};
use enum_export::exporter::Exporter;

#[derive(Parser)]
#[command(name = "enum-export")]
#[command(about = "Export Java enums and constants as TypeScript declarations")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to ./enum-export.toml, then built-in paths)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the backend source root
    #[arg(long)]
    backend: Option<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("Failed to load config from {}", DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };

    if let Some(backend) = &cli.backend {
        config.project.backend_root = backend.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let start = Instant::now();

    let report = Exporter::new(&config).export_all().with_context(|| {
        format!(
            "Export from {:?} to {:?} failed",
            config.project.backend_root, config.output.path
        )
    })?;

    tracing::debug!(
        "Wrote {} files and {:?} in {:?}",
        report.files.len(),
        report.index_path,
        start.elapsed()
    );

    Ok(())
}
