use std::path::{Path, PathBuf};
use std::process::Command;

use super::{CheckOutcome, CheckerAdapter};

/// Shells out to an external linter: fixed config arguments first, then
/// the target file. Exit code 0 is the only success contract.
pub struct ExternalLinter {
    program: PathBuf,
    config_args: Vec<String>,
}

impl ExternalLinter {
    #[must_use]
    pub fn new(program: PathBuf, config_args: Vec<String>) -> Self {
        Self {
            program,
            config_args,
        }
    }
}

impl CheckerAdapter for ExternalLinter {
    fn check(&self, file: &Path) -> CheckOutcome {
        let output = match Command::new(&self.program)
            .args(&self.config_args)
            .arg(file)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                return CheckOutcome::LaunchFailed {
                    message: format!("{}: {e}", self.program.display()),
                };
            }
        };

        if output.status.success() {
            return CheckOutcome::Passed;
        }

        let mut diagnostic = String::from_utf8_lossy(&output.stdout).into_owned();
        diagnostic.push_str(&String::from_utf8_lossy(&output.stderr));
        CheckOutcome::Violation { diagnostic }
    }
}

#[cfg(test)]
#[path = "external_tests.rs"]
mod tests;
