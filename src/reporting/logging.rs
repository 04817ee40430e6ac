use crate::config::Config;
use crate::core::constants::display;
use crate::core::types::{FileOutcome, Pass, RunSummary};
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

/// Level forced over `RUST_LOG`, or `None` to keep its directives.
///
/// `quiet` always wins; `verbose` only applies when `RUST_LOG` is unset.
pub fn level_override(
    verbose: bool,
    quiet: bool,
    rust_log_set: bool,
) -> Option<log::LevelFilter> {
    if quiet {
        Some(log::LevelFilter::Off)
    } else if rust_log_set {
        None
    } else if verbose {
        Some(log::LevelFilter::Debug)
    } else {
        Some(log::LevelFilter::Off) // Only show structured logs in verbose mode
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level_override(verbose, quiet, rust_log_set) {
        builder.filter_level(level);
    }
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // A logger may already be installed when the library is driven twice in one process
    if builder.try_init().is_err() {
        return;
    }

    debug!("Logger initialized with level: {:?}", log::max_level());
}

/// Log configuration information
pub fn log_config_info(config: &Config, dry_run: bool) {
    info!(
        "Configuration: extensions={:?}, host={}, expression={}",
        config.extensions(),
        config.host.as_deref().unwrap_or_default(),
        config.expression.as_deref().unwrap_or_default()
    );
    info!(
        "Writes: atomic={}, dry_run={dry_run}, format={}",
        config.atomic_writes(),
        config.output_format()
    );
}

/// Log the start of a pass
pub fn log_pass_start(pass: Pass, root: &Path, rule_count: usize) {
    info!(
        "Running {pass} pass over '{}' with {rule_count} rule(s)",
        root.display()
    );
}

/// Log what happened to one file
pub fn log_file_outcome(outcome: &FileOutcome) {
    let path = outcome.path.display();
    match (outcome.changed, outcome.written) {
        (true, true) => debug!("✓ {path} rewritten ({})", outcome.rules_applied.join(", ")),
        (true, false) => debug!("~ {path} would change ({})", outcome.rules_applied.join(", ")),
        (false, true) => debug!("= {path} written unchanged"),
        (false, false) => debug!("= {path} unchanged"),
    }
}

/// Log pass completion
pub fn log_pass_complete(summary: &RunSummary, duration_ms: u128) {
    info!(
        "{} pass complete: {}/{} file(s) changed, {} written ({}ms)",
        summary.pass,
        summary.files_changed,
        summary.files_scanned,
        summary.files_written,
        duration_ms
    );

    let changed: Vec<_> = summary.changed().collect();
    for (i, outcome) in changed.iter().take(display::MAX_FILES_TO_LOG).enumerate() {
        debug!("  {}. {}", i + 1, outcome.path.display());
    }
    if changed.len() > display::MAX_FILES_TO_LOG {
        debug!(
            "  ... and {} more",
            changed.len() - display::MAX_FILES_TO_LOG
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn outcome(changed: bool, written: bool) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from("src/App.jsx"),
            changed,
            written,
            rules_applied: if changed {
                vec!["single_quoted_url"]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn test_logger_initialization_twice() {
        // The second call must not panic even though a logger is installed
        init_logger(true, false);
        init_logger(false, true);
    }

    #[test]
    fn test_level_override() {
        use log::LevelFilter;

        assert_eq!(level_override(false, false, false), Some(LevelFilter::Off));
        assert_eq!(level_override(true, false, false), Some(LevelFilter::Debug));
        assert_eq!(level_override(false, false, true), None);
        assert_eq!(level_override(true, false, true), None);
        assert_eq!(level_override(true, true, true), Some(LevelFilter::Off));
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default(), false);
        let config = Config {
            host: None,
            expression: None,
            ..Default::default()
        };
        log_config_info(&config, true);
    }

    #[test]
    fn test_log_file_outcome_all_states() {
        log_file_outcome(&outcome(true, true));
        log_file_outcome(&outcome(true, false));
        log_file_outcome(&outcome(false, true));
        log_file_outcome(&outcome(false, false));
    }

    #[test]
    fn test_log_pass_complete_truncates() {
        let mut summary = RunSummary::new(Pass::Urls, PathBuf::from("src"), false);
        for _ in 0..(display::MAX_FILES_TO_LOG + 5) {
            summary.record(outcome(true, true));
        }
        log_pass_complete(&summary, 12);
    }

    #[test]
    fn test_log_pass_start() {
        log_pass_start(Pass::Quotes, Path::new("frontend/src"), 2);
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        log_error("Failed to read file", Some(&io_error));
        log_error("Something went wrong", None);
        log_warning("Configuration fallback used");
    }
}
