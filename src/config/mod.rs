//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, defaults, output_formats};
use crate::core::error::{ApifixError, Result};
use crate::rewrite::Template;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File extensions to rewrite, without the leading dot
    pub extensions: Option<Vec<String>>,

    /// Hard-coded host to replace
    pub host: Option<String>,

    /// Expression interpolated in place of the host
    pub expression: Option<String>,

    /// Write through a temporary file and rename it over the original
    pub atomic_writes: Option<bool>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Some(vec![defaults::EXTENSION.to_string()]),
            host: Some(defaults::HOST.to_string()),
            expression: Some(defaults::EXPRESSION.to_string()),
            atomic_writes: Some(defaults::ATOMIC_WRITES),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file. Unset keys keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ApifixError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let loaded: Config = toml::from_str(&content).map_err(|e| {
            ApifixError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::default().overlay(loaded);
        config.validate()?;
        Ok(config)
    }

    /// Look for `.apifix.toml` in `start` and up to three of its parents
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .take(config_files::MAX_PARENT_LEVELS + 1)
            .map(|dir| dir.join(config_files::FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config file from the current directory upwards,
    /// falling back to defaults when there is none
    pub fn load_from_standard_locations() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match Self::find_config_file(&cwd) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Values set in `other` win over the ones in `self`
    fn overlay(mut self, other: Config) -> Self {
        if other.extensions.is_some() {
            self.extensions = other.extensions;
        }
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.expression.is_some() {
            self.expression = other.expression;
        }
        if other.atomic_writes.is_some() {
            self.atomic_writes = other.atomic_writes;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        self
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref extensions) = cli_config.extensions {
            self.extensions = Some(extensions.clone());
        }
        if let Some(ref host) = cli_config.host {
            self.host = Some(host.clone());
        }
        if let Some(ref expression) = cli_config.expression {
            self.expression = Some(expression.clone());
        }
        if cli_config.no_atomic {
            self.atomic_writes = Some(false);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Build the host/expression pair the rewrite rules are compiled from
    pub fn template(&self) -> Result<Template> {
        Template::new(
            self.host.as_deref().unwrap_or(defaults::HOST),
            self.expression.as_deref().unwrap_or(defaults::EXPRESSION),
        )
    }

    pub fn extensions(&self) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| vec![defaults::EXTENSION.to_string()])
    }

    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes.unwrap_or(defaults::ATOMIC_WRITES)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref extensions) = self.extensions {
            if extensions.is_empty() {
                return Err(ApifixError::Config(
                    "Extension list cannot be empty. Expected at least one, e.g. [\"jsx\"]."
                        .to_string(),
                ));
            }
            for ext in extensions {
                if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
                    return Err(ApifixError::Config(format!(
                        "Invalid extension '{ext}'. Expected a bare suffix such as 'jsx'."
                    )));
                }
            }
        }

        if let Some(ref host) = self.host
            && host.trim().is_empty()
        {
            return Err(ApifixError::Config("Host cannot be empty.".to_string()));
        }

        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(ApifixError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        // Expression rules live with the template
        self.template()
            .map_err(|e| ApifixError::Config(e.to_string()))?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    // Rewrite
    pub extensions: Option<Vec<String>>, // --ext
    pub host: Option<String>,            // --host
    pub expression: Option<String>,      // --expression

    // Behavior
    pub dry_run: bool,   // --dry-run
    pub no_atomic: bool, // --no-atomic

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
