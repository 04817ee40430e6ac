// Command-line interface definitions and parsing for apifix

use crate::config::CliConfig;
use crate::core::constants::{defaults, output_formats};
use crate::core::types::Pass;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Rewrite Options
    /// File extensions to process (default: jsx)
    #[arg(
        long,
        value_name = "EXTENSIONS",
        global = true,
        help_heading = "Rewrite Options"
    )]
    pub ext: Option<String>,

    /// Host to replace (default: http://localhost:3000)
    #[arg(long, value_name = "URL", global = true, help_heading = "Rewrite Options")]
    pub host: Option<String>,

    /// Expression interpolated in place of the host (default: config.API_URL)
    #[arg(
        long,
        value_name = "EXPR",
        global = true,
        help_heading = "Rewrite Options"
    )]
    pub expression: Option<String>,

    /// Report what would change without writing any file
    #[arg(long, global = true, help_heading = "Rewrite Options")]
    pub dry_run: bool,

    /// Write files in place instead of through a temporary file
    #[arg(long, global = true, help_heading = "Rewrite Options")]
    pub no_atomic: bool,

    // Output & Verbosity
    /// Output format [default: text]
    #[arg(
        long,
        value_name = "FORMAT",
        global = true,
        value_parser = output_formats::ALL,
        help_heading = "Output & Verbosity"
    )]
    pub format: Option<String>,

    /// Only print errors
    #[arg(short, long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Print debug logs
    #[arg(short, long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        help_heading = "Configuration"
    )]
    pub config: Option<String>,

    /// Skip config file discovery
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the hard-coded host with the template expression
    Urls {
        /// Directory (or single file) to process
        #[arg(default_value = defaults::ROOT)]
        root: PathBuf,
    },
    /// Close template expressions that end with a single quote
    Quotes {
        /// Directory (or single file) to process
        #[arg(default_value = defaults::ROOT)]
        root: PathBuf,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// The pass and root to run, `None` for non-rewrite commands
    pub fn pass(&self) -> Option<(Pass, &PathBuf)> {
        match self {
            Commands::Urls { root } => Some((Pass::Urls, root)),
            Commands::Quotes { root } => Some((Pass::Quotes, root)),
            Commands::CompletionGenerate { .. } => None,
        }
    }
}

/// Split a comma-separated extension list, tolerating leading dots
pub fn parse_extensions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Convert parsed arguments into the CLI layer of the configuration
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        extensions: cli.ext.as_deref().map(parse_extensions),
        host: cli.host.clone(),
        expression: cli.expression.clone(),
        dry_run: cli.dry_run,
        no_atomic: cli.no_atomic,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
