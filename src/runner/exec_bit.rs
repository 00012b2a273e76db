use std::fs;
use std::io::Write;
use std::path::Path;

use super::{CheckRunner, RunOutcome, finish};
use crate::error::Result;
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};

/// Flags files of inherently non-executable types (docs, markup, images,
/// fonts, data) that carry an execute permission bit. Unlike the other
/// runners, finding the condition is itself the violation.
pub struct ExecBitRunner {
    scanner: DirectoryScanner<SuffixFilter>,
    quiet: bool,
}

impl ExecBitRunner {
    #[must_use]
    pub const fn new(filter: SuffixFilter, quiet: bool) -> Self {
        Self {
            scanner: DirectoryScanner::new(filter),
            quiet,
        }
    }
}

impl CheckRunner for ExecBitRunner {
    fn run(&self, root: &Path, out: &mut dyn Write) -> Result<RunOutcome> {
        if !self.quiet {
            writeln!(out, "Checking for execute bits...")?;
        }

        let files = self.scanner.scan(root)?;
        let mut violations = 0;

        for file in &files {
            match fs::metadata(file) {
                Ok(metadata) if has_execute_bit(&metadata) => {
                    violations += 1;
                    writeln!(out, "{}: Execute bit set; please remove.", file.display())?;
                }
                Ok(_) => {}
                Err(e) => {
                    violations += 1;
                    writeln!(out, "{}: failed to read: {e}", file.display())?;
                }
            }
        }

        let outcome = finish(out, files.len(), violations, self.quiet)?;
        if !self.quiet {
            writeln!(out, "Done.")?;
        }
        Ok(outcome)
    }
}

#[cfg(unix)]
fn has_execute_bit(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
const fn has_execute_bit(_metadata: &fs::Metadata) -> bool {
    false
}

#[cfg(test)]
#[path = "exec_bit_tests.rs"]
mod tests;
