use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use matterstamp::{process_config, Config, ConfigDocument, StdoutSink, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "matterstamp", version, about, long_about = None)]
struct Cli {
    /// Configuration file with `folder_path` and `yaml_front_matter`
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let document = ConfigDocument::load(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;
    let config = Config::from_document(&document)
        .with_context(|| format!("invalid configuration {}", cli.config.display()))?;

    let summary = process_config(&config, &mut StdoutSink)
        .with_context(|| format!("failed to process {}", config.folder_path.display()))?;

    info!("Done: {} added, {} skipped", summary.added, summary.skipped);
    Ok(())
}
