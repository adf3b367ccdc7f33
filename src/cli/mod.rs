//! CLI command definitions and handlers

use clap::{Parser, Subcommand, builder::NonEmptyStringValueParser};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod init;
pub mod secret;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// sitesecrets - list the Customer Secrets attached to a hosted site
#[derive(Parser, Debug)]
#[command(name = "sitesecrets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, yaml)
    #[arg(
        long,
        global = true,
        env = "SITESECRETS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "SITESECRETS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "SITESECRETS_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Machine token (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "SITESECRETS_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(
        long,
        short = 'v',
        global = true,
        env = "SITESECRETS_VERBOSE",
        hide_env = true
    )]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists secrets for a specific site
    #[command(
        name = "customer-secrets:list",
        visible_alias = "customer-secrets",
        after_help = "EXAMPLES:\n  \
            sitesecrets customer-secrets:list my-site          # Lists all secrets for the site\n  \
            sitesecrets customer-secrets:list my-site --debug  # Same, in debug mode\n  \
            sitesecrets customer-secrets my-site --format json # JSON for scripting"
    )]
    CustomerSecretsList {
        /// The name or UUID of a site to retrieve information on
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        site_id: String,

        /// Run command in debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Save a machine token to the config file
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   sitesecrets completion bash > /etc/bash_completion.d/sitesecrets
  zsh:    sitesecrets completion zsh > \"${fpath[1]}/_sitesecrets\"
  fish:   sitesecrets completion fish > ~/.config/fish/completions/sitesecrets.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
