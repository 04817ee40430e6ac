use apifix::config::{CliConfig, Config};
use apifix::core::Pass;
use apifix::reporting::logging;
use apifix::ui::{Cli, Commands, ConsoleReporter, cli_to_config, print_completions};
use apifix::{RunSummary, Runner};
use clap::{CommandFactory, Parser};

use std::path::Path;

fn main() {
    let cli = Cli::parse();

    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_apifix_logic(&cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Commands::CompletionGenerate { shell } => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Load config, then run the requested pass
pub fn run_apifix_logic(cli: &Cli) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    if let Some(warning) = ignored_config_warning(&cli_config) {
        eprintln!("Warning: {warning}");
    }

    // The config decides verbosity, so the logger starts after it is loaded
    let config = load_and_merge_config(&cli_config)?;
    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);

    let (pass, root) = cli
        .command
        .pass()
        .ok_or("Expected a rewrite command (urls or quotes)")?;

    logging::log_config_info(&config, cli_config.dry_run);
    Ok(run_pass(pass, root, &config, &cli_config)?)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> apifix::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI arguments take precedence over the file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Warning for a `--config` file that `--no-config` overrides, unless quiet
pub fn ignored_config_warning(cli_config: &CliConfig) -> Option<String> {
    match (&cli_config.config_file, cli_config.no_config && !cli_config.quiet) {
        (Some(config_file), true) => Some(format!(
            "Ignoring config file '{config_file}' because --no-config is set"
        )),
        _ => None,
    }
}

/// Run one pass over `root`, printing progress to stdout
pub fn run_pass(
    pass: Pass,
    root: &Path,
    config: &Config,
    cli_config: &CliConfig,
) -> apifix::Result<RunSummary> {
    let runner = Runner::from_config(pass, config, cli_config.dry_run)?;
    let mut reporter =
        ConsoleReporter::stdout(config.output_format(), cli_config.quiet, cli_config.dry_run);

    runner.run(root, &mut reporter)
}
