//! sitesecrets CLI - list the Customer Secrets attached to a hosted site

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests print to stdout and succeed; usage
            // errors share the exit code of every other failure.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if err.is_not_found() {
            eprintln!("Check the site name or UUID and that your token can access it.");
        }
        std::process::exit(1);
    }
}

/// Warnings always reach stderr; `--verbose` adds this crate's debug output.
/// `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,sitesecrets=debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::CustomerSecretsList { site_id, debug } => {
            cli::secret::list(&opts, &site_id, debug).await
        }
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("sitesecrets version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
