mod exec_bit;
mod lint;
mod newline;

pub use exec_bit::ExecBitRunner;
pub use lint::LintRunner;
pub use newline::NewlineRunner;

use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Terminal state of one check category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every discovered file passed.
    Clean { checked: usize },
    /// At least one violation was found; the run still covered every file.
    Dirty { checked: usize, violations: usize },
    /// The check could not be performed (missing tool). Logged, never
    /// counted as a failure.
    Skipped { reason: String },
}

impl RunOutcome {
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty { .. })
    }
}

/// One check category end to end: discovery, per-file evaluation,
/// aggregation. Diagnostics stream to `out` as they are found.
pub trait CheckRunner {
    /// # Errors
    /// Returns an error only if the root cannot be traversed at all or
    /// the output stream fails.
    fn run(&self, root: &Path, out: &mut dyn Write) -> Result<RunOutcome>;
}

fn finish(
    out: &mut dyn Write,
    checked: usize,
    violations: usize,
    quiet: bool,
) -> Result<RunOutcome> {
    if violations == 0 {
        if !quiet {
            writeln!(out, "Successfully checked {checked} files.")?;
        }
        Ok(RunOutcome::Clean { checked })
    } else {
        Ok(RunOutcome::Dirty {
            checked,
            violations,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
