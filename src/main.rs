//! passgen - Main entry point
//!
//! Parses flags, resolves the generator settings, and prints the generated
//! password with its rating. Any failure exits with status 1 and a message on
//! stderr; clap handles usage errors itself.

use anyhow::{Context, Result};
use tracing::{debug, info};

use passgen::cli::Cli;
use passgen::{GeneratorConfig, PassgenError, StrengthTier, logging, runner};

fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);
    info!("passgen starting up");
    debug!(?cli, "CLI arguments parsed");

    if let Err(e) = run(&cli) {
        debug!(error = ?e, "passgen failed");
        eprintln!("error: {:#}", e);
        if let Some(PassgenError::Configuration(_)) = e.downcast_ref::<PassgenError>() {
            if cli.strength == Some(StrengthTier::Weak) {
                eprintln!("hint: the weak tier enables no character class; use medium or strong");
            }
        }
        std::process::exit(1);
    }
}

/// Resolve settings, generate, and print the report
fn run(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            GeneratorConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration from {:?}", path))?
        }
        None => GeneratorConfig::default(),
    };

    let config = base.merge(cli.length, cli.strength, cli.max_attempts);
    config.validate()?;
    debug!(?config, "Effective configuration");

    if let Some(save_path) = &cli.save_config {
        config
            .save_to_file(save_path)
            .with_context(|| format!("Failed to write configuration to {:?}", save_path))?;
        info!("Configuration saved to: {:?}", save_path);
    }

    let report = runner::run(&config)?;
    print!("{report}");
    Ok(())
}
