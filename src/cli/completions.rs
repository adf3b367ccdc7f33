//! Static shell completion generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::error::Result;

/// Write a completion script for `shell` to `out`
pub fn write(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

/// Print a completion script for `shell` to stdout
pub fn run(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout())
}
