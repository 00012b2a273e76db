use std::io::Write;
use std::path::Path;

use super::{CheckRunner, RunOutcome, finish};
use crate::adapter::{CheckOutcome, CheckerAdapter};
use crate::error::Result;
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};

/// Runs an external linter over every candidate file of one language.
///
/// A runner built without an adapter (the tool could not be resolved)
/// soft-skips: it logs a notice and never counts toward failure.
pub struct LintRunner<A: CheckerAdapter> {
    label: &'static str,
    tool_name: String,
    scanner: DirectoryScanner<SuffixFilter>,
    adapter: Option<A>,
    quiet: bool,
}

impl<A: CheckerAdapter> LintRunner<A> {
    #[must_use]
    pub fn new(
        label: &'static str,
        tool_name: impl Into<String>,
        filter: SuffixFilter,
        adapter: Option<A>,
        quiet: bool,
    ) -> Self {
        Self {
            label,
            tool_name: tool_name.into(),
            scanner: DirectoryScanner::new(filter),
            adapter,
            quiet,
        }
    }
}

impl<A: CheckerAdapter> CheckRunner for LintRunner<A> {
    fn run(&self, root: &Path, out: &mut dyn Write) -> Result<RunOutcome> {
        if !self.quiet {
            writeln!(out, "Checking {} source files...", self.label)?;
        }

        let Some(adapter) = &self.adapter else {
            writeln!(
                out,
                "{} not found on PATH; skipping {} checks.",
                self.tool_name, self.label
            )?;
            return Ok(RunOutcome::Skipped {
                reason: format!("{} not found", self.tool_name),
            });
        };

        let files = self.scanner.scan(root)?;
        let mut violations = 0;

        for file in &files {
            match adapter.check(file) {
                CheckOutcome::Passed => {}
                CheckOutcome::Violation { diagnostic } => {
                    violations += 1;
                    write!(out, "{diagnostic}")?;
                    if !diagnostic.ends_with('\n') {
                        writeln!(out)?;
                    }
                }
                CheckOutcome::LaunchFailed { message } => {
                    violations += 1;
                    writeln!(
                        out,
                        "{}: failed to run {}: {message}",
                        file.display(),
                        self.tool_name
                    )?;
                }
            }
        }

        finish(out, files.len(), violations, self.quiet)
    }
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
