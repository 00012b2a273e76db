use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::{CheckRunner, RunOutcome, finish};
use crate::error::Result;
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};

/// Verifies that every candidate file ends in a newline byte.
///
/// An empty file fails: there is no trailing newline to find.
pub struct NewlineRunner {
    scanner: DirectoryScanner<SuffixFilter>,
    quiet: bool,
}

impl NewlineRunner {
    #[must_use]
    pub const fn new(filter: SuffixFilter, quiet: bool) -> Self {
        Self {
            scanner: DirectoryScanner::new(filter),
            quiet,
        }
    }
}

impl CheckRunner for NewlineRunner {
    fn run(&self, root: &Path, out: &mut dyn Write) -> Result<RunOutcome> {
        if !self.quiet {
            writeln!(out, "Checking for trailing newlines...")?;
        }

        let files = self.scanner.scan(root)?;
        let mut violations = 0;

        for file in &files {
            match ends_with_newline(file) {
                Ok(true) => {}
                Ok(false) => {
                    violations += 1;
                    writeln!(out, "{}: No new line at end of file", file.display())?;
                }
                Err(e) => {
                    violations += 1;
                    writeln!(out, "{}: failed to read: {e}", file.display())?;
                }
            }
        }

        finish(out, files.len(), violations, self.quiet)
    }
}

fn ends_with_newline(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
#[path = "newline_tests.rs"]
mod tests;
