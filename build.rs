//! Build script rendering the man page and shell completions
//!
//! Compiles the real CLI definition so the generated artifacts can never
//! drift from the parser. Output lands in `OUT_DIR`.

use clap::CommandFactory;
use clap_complete::{Shell, generate_to};
use std::env;
use std::fs;
use std::io::Error;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/types.rs"]
mod types;

#[allow(dead_code)]
#[path = "src/cli.rs"]
mod cli;

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };

    let mut cmd = cli::Cli::command();

    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("passgen.1"), buffer)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, "passgen", &out_dir)?;
    }

    Ok(())
}
