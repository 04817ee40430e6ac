//! Runs a rewrite pass over a directory tree
//!
//! Files are handled one at a time: read whole, rewritten in memory,
//! written back according to the pass's write policy. The first error
//! stops the run; files already processed keep their new content.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::{FileOutcome, Pass, RunSummary, WritePolicy};
use crate::discovery::SourceWalker;
use crate::fsio::{read_source, write_source};
use crate::reporting::logging;
use crate::rewrite::{RuleSet, Template, rules_for};

/// Receives progress while a pass runs
pub trait Reporter {
    /// Called after each file has been processed (and written, if it was)
    fn file_processed(&mut self, pass: Pass, outcome: &FileOutcome) -> io::Result<()>;

    /// Called once after the whole tree was walked
    fn finished(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Reporter that discards everything
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn file_processed(&mut self, _pass: Pass, _outcome: &FileOutcome) -> io::Result<()> {
        Ok(())
    }

    fn finished(&mut self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Transform and report, never write
    pub dry_run: bool,
    /// Write through a temporary file renamed over the original
    pub atomic: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            atomic: true,
        }
    }
}

pub struct Runner {
    pass: Pass,
    rules: RuleSet,
    extensions: Vec<String>,
    options: RunOptions,
}

impl Runner {
    pub fn new(
        pass: Pass,
        template: &Template,
        extensions: Vec<String>,
        options: RunOptions,
    ) -> Result<Self> {
        Ok(Self {
            pass,
            rules: rules_for(pass, template)?,
            extensions,
            options,
        })
    }

    pub fn from_config(pass: Pass, config: &Config, dry_run: bool) -> Result<Self> {
        Self::new(
            pass,
            &config.template()?,
            config.extensions(),
            RunOptions {
                dry_run,
                atomic: config.atomic_writes(),
            },
        )
    }

    /// Rewrite one file
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let original = read_source(path)?;
        let rewrite = self.rules.apply(&original);
        let changed = rewrite.changed_from(&original);

        let written = !self.options.dry_run
            && match self.pass.write_policy() {
                WritePolicy::Always => true,
                WritePolicy::WhenChanged => changed,
            };
        if written {
            write_source(path, &rewrite.text, self.options.atomic)?;
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            changed,
            written,
            rules_applied: rewrite.rules_applied,
        })
    }

    /// Walk `root` and rewrite every matching file
    pub fn run<R: Reporter>(&self, root: &Path, reporter: &mut R) -> Result<RunSummary> {
        let start_time = Instant::now();
        logging::log_pass_start(self.pass, root, self.rules.len());
        if self.options.dry_run {
            logging::log_warning("Dry run: no file will be written");
        }

        let mut summary = RunSummary::new(self.pass, PathBuf::from(root), self.options.dry_run);
        for path in SourceWalker::new(root, &self.extensions)? {
            let path = path?;
            let outcome = self.process_file(&path).inspect_err(|e| {
                logging::log_error(&format!("Could not process '{}'", path.display()), Some(e));
            })?;

            logging::log_file_outcome(&outcome);
            reporter.file_processed(self.pass, &outcome)?;
            summary.record(outcome);
        }

        logging::log_pass_complete(&summary, start_time.elapsed().as_millis());
        reporter.finished(&summary)?;
        Ok(summary)
    }
}
