mod external;
mod resolve;

pub use external::ExternalLinter;
pub use resolve::{resolve, resolve_in};

use std::path::Path;

/// Per-file result of one checker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The tool ran and reported the file clean.
    Passed,
    /// The tool ran and reported violations; the diagnostic is its
    /// captured output, passed through verbatim.
    Violation { diagnostic: String },
    /// The tool could not be started at all.
    LaunchFailed { message: String },
}

impl CheckOutcome {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Boundary trait wrapping one external linter invocation.
///
/// Runner logic only sees this trait, so tools can be swapped or mocked
/// without touching the runners.
pub trait CheckerAdapter {
    fn check(&self, file: &Path) -> CheckOutcome;
}
