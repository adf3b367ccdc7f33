//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for a machine token and stores it, keeping any other settings
/// already present in the config file.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to sitesecrets!".bold().green());
    println!("Let's store your machine token.\n");

    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your machine token")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Token must not be empty")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    config.token = Some(token.trim().to_string());
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "sitesecrets status".cyan());
    println!(
        "  {} - List secrets for a site",
        "sitesecrets customer-secrets:list <SITE>".cyan()
    );

    Ok(())
}
