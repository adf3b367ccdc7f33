//! Status command implementation

use colored::Colorize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::platform::DEFAULT_API_BASE_URL;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "sitesecrets Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            if opts.token.is_some() {
                println!("{} Machine token supplied via --token/SITESECRETS_TOKEN", "✓".green());
            } else if config.validate_auth().is_ok() {
                println!("{} Machine token configured", "✓".green());
            } else {
                println!("{} Machine token not configured", "✗".red());
                println!("  → Run 'sitesecrets init' to configure");
            }

            let host = opts
                .api_host_ref()
                .or(config.api_host.as_deref())
                .unwrap_or(DEFAULT_API_BASE_URL);
            println!("{} API host: {}", "○".dimmed(), host.cyan());

            let format = config
                .preferences
                .format
                .as_deref()
                .and_then(OutputFormat::from_name)
                .unwrap_or_default();
            println!("{} Default format: {:?}", "○".dimmed(), format);
            println!(
                "{} Request timeout: {}s",
                "○".dimmed(),
                config.preferences.timeout_secs
            );

            println!();
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "✗".red());
            println!("  Looked in: {}", config_path.display());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "sitesecrets init".cyan()
            );
            println!();
        }
        Err(e) => {
            println!("{} Configuration could not be read", "✗".red());
            println!("  File: {}", config_path.display());
            println!("  {}", e);
            println!();
        }
    }

    Ok(())
}
