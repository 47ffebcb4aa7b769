use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::types::StrengthTier;

/// passgen - Generate a random password and rate its strength
#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(about = "Generate a secure password with customizable options")]
#[command(version)]
pub struct Cli {
    /// Length of the password (default: 12)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Character classes to enable (default: strong).
    ///
    /// medium enables uppercase, lowercase and digits; strong adds
    /// punctuation. weak enables no class at all and therefore always fails
    /// with a configuration error.
    #[arg(short, long, value_enum)]
    pub strength: Option<StrengthTier>,

    /// Maximum number of redraws after denylist collisions (default: 100)
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Load generator settings from a JSON file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Save the effective generator settings to a JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
