use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One of the two rewrite passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    /// Replace the hard-coded host with the template expression
    Urls,
    /// Close backtick-opened template expressions left with a `'`
    Quotes,
}

/// When a pass writes a processed file back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Every processed file is written, changed or not
    Always,
    /// Only files whose content changed are written
    WhenChanged,
}

impl Pass {
    pub fn write_policy(self) -> WritePolicy {
        match self {
            Pass::Urls => WritePolicy::Always,
            Pass::Quotes => WritePolicy::WhenChanged,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pass::Urls => "urls",
            Pass::Quotes => "quotes",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened to a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// The transformed text differs from what was read
    pub changed: bool,
    /// The file was written back
    pub written: bool,
    /// Names of the rules that matched, in application order
    pub rules_applied: Vec<&'static str>,
}

/// Result of running one pass over a directory tree
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub pass: Pass,
    pub root: PathBuf,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_changed: usize,
    pub files_written: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn new(pass: Pass, root: PathBuf, dry_run: bool) -> Self {
        Self {
            pass,
            root,
            dry_run,
            files_scanned: 0,
            files_changed: 0,
            files_written: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.files_scanned += 1;
        if outcome.changed {
            self.files_changed += 1;
        }
        if outcome.written {
            self.files_written += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Outcomes whose content changed
    pub fn changed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.changed)
    }
}
