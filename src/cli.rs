use std::path::PathBuf;

use clap::Parser;

/// Which check categories to run in one invocation.
///
/// The mode argument is parsed leniently: an absent or unrecognized mode
/// runs every category, so stale wrapper scripts keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Python sources through the external Python linter.
    Python,
    /// JavaScript sources through the external JS linter.
    Js,
    /// Execute-bit audit of non-executable file types.
    Exc,
    /// Trailing-newline check on markup and script files.
    Nl,
    /// All categories, in the fixed order python, js, exc, nl.
    All,
}

impl Mode {
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("python") => Self::Python,
            Some("js") => Self::Js,
            Some("exc") => Self::Exc,
            Some("nl") => Self::Nl,
            _ => Self::All,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "repocheck")]
#[command(author, version, about = "Repository-wide static checks with a single exit status")]
#[command(long_about = "Runs external linters and in-process policy checks over a source tree.\n\n\
    Exit codes:\n  \
    0 - All executed checks passed\n  \
    1 - At least one check recorded a failure\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Check category to run (python, js, exc, nl); anything else runs all
    pub mode: Option<String>,

    /// Root directory to check
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Suppress progress and summary lines (violations still print)
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
