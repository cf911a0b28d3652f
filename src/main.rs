//! protopath command-line entry point.

use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use protopath::{
    cli::{CliContext, CliService, formatting::format_error},
    config::Config,
    tracing_config,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "protopath")]
#[command(about = "Version handling for protocol-buffer source paths")]
struct Cli {
    /// Configuration file to use instead of the XDG default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command category (path, config, help)
    category: Option<String>,

    /// Command within the category
    command: Option<String>,

    /// Command arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", format_error("Error"), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    tracing_config::init(config.general.log_level)?;
    debug!(config_file = ?cli.config, "Configuration loaded");

    let cli_service = CliService::new(CliContext::new(config)?);

    let category = cli.category.as_deref().unwrap_or("help");
    let command = cli.command.as_deref().unwrap_or("");

    let output = cli_service.execute_command(category, command, &cli.args)?;
    if !output.trim().is_empty() {
        println!("{output}");
    }

    Ok(())
}
