//! Console output for rewrite runs

use std::io::{self, Write};

use crate::core::constants::{messages, output_formats};
use crate::core::types::{FileOutcome, Pass, RunSummary};
use crate::runner::Reporter;
use crate::ui::color::{Colors, colorize};

/// Prints per-file lines as files are processed and a completion line at the end
pub struct ConsoleReporter<W: Write> {
    out: W,
    format: String,
    quiet: bool,
    dry_run: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(format: &str, quiet: bool, dry_run: bool) -> Self {
        Self::new(io::stdout(), format, quiet, dry_run)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, format: &str, quiet: bool, dry_run: bool) -> Self {
        Self {
            out,
            format: format.to_string(),
            quiet,
            dry_run,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.format == output_formats::TEXT {
            colorize(text, color)
        } else {
            text.to_string()
        }
    }

    fn is_line_format(&self) -> bool {
        !self.quiet && self.format != output_formats::JSON
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn file_processed(&mut self, pass: Pass, outcome: &FileOutcome) -> io::Result<()> {
        if !self.is_line_format() || !outcome.changed {
            return Ok(());
        }

        let path = outcome.path.display().to_string();
        if self.dry_run {
            let label = self.paint(messages::WOULD_FIX, Colors::YELLOW);
            writeln!(self.out, "{label} {path}")?;
        } else if pass == Pass::Quotes {
            let label = self.paint(messages::FIXED_QUOTES_IN, Colors::GREEN);
            writeln!(self.out, "{label} {path}")?;
        }
        Ok(())
    }

    fn finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.format == output_formats::JSON {
            let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
            writeln!(self.out, "{json}")?;
            return Ok(());
        }

        let line = completion_line(summary);
        let line = self.paint(&line, Colors::BOLD);
        writeln!(self.out, "{line}")
    }
}

/// The closing line printed once a pass has walked the whole tree
pub fn completion_line(summary: &RunSummary) -> String {
    if summary.dry_run {
        return format!(
            "Dry run: {} of {} file(s) would change",
            summary.files_changed, summary.files_scanned
        );
    }

    match summary.pass {
        Pass::Urls => format!(
            "{} ({} of {} file(s) changed)",
            messages::URLS_FIXED,
            summary.files_changed,
            summary.files_scanned
        ),
        Pass::Quotes => format!(
            "{} ({} file(s) changed)",
            messages::QUOTES_FIXED,
            summary.files_changed
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn outcome(path: &str, changed: bool) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from(path),
            changed,
            written: changed,
            rules_applied: vec![],
        }
    }

    fn summary(pass: Pass, dry_run: bool) -> RunSummary {
        let mut summary = RunSummary::new(pass, PathBuf::from("src"), dry_run);
        summary.record(outcome("src/A.jsx", true));
        summary.record(outcome("src/B.jsx", false));
        summary
    }

    fn run(reporter: &mut ConsoleReporter<Vec<u8>>, summary: &RunSummary) {
        for outcome in &summary.outcomes {
            reporter.file_processed(summary.pass, outcome).unwrap();
        }
        reporter.finished(summary).unwrap();
    }

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_quotes_pass_lists_changed_files_only() {
        let mut reporter = ConsoleReporter::new(Vec::new(), "text", false, false);
        run(&mut reporter, &summary(Pass::Quotes, false));

        assert_eq!(
            output(reporter),
            "Fixed mixed quotes in: src/A.jsx\nAll mixed quotes fixed! (1 file(s) changed)\n"
        );
    }

    #[test]
    fn test_urls_pass_prints_completion_only() {
        let mut reporter = ConsoleReporter::new(Vec::new(), "minimal", false, false);
        run(&mut reporter, &summary(Pass::Urls, false));

        assert_eq!(
            output(reporter),
            "All files fixed! (1 of 2 file(s) changed)\n"
        );
    }

    #[test]
    fn test_dry_run_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new(), "text", false, true);
        run(&mut reporter, &summary(Pass::Urls, true));

        assert_eq!(
            output(reporter),
            "Would fix: src/A.jsx\nDry run: 1 of 2 file(s) would change\n"
        );
    }

    #[test]
    fn test_quiet_prints_nothing() {
        let mut reporter = ConsoleReporter::new(Vec::new(), "text", true, false);
        run(&mut reporter, &summary(Pass::Quotes, false));

        assert!(output(reporter).is_empty());
    }

    #[test]
    fn test_json_prints_summary_only() {
        let mut reporter = ConsoleReporter::new(Vec::new(), "json", false, false);
        run(&mut reporter, &summary(Pass::Quotes, false));

        let value: serde_json::Value = serde_json::from_str(&output(reporter)).unwrap();
        assert_eq!(value["pass"], "quotes");
        assert_eq!(value["files_changed"], 1);
        assert_eq!(value["outcomes"].as_array().unwrap().len(), 2);
    }
}
