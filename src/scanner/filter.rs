use std::path::Path;

use crate::config::ExcludeConfig;

/// Decides whether a root-relative path is a check candidate.
pub trait FileFilter {
    fn should_include(&self, relative: &Path) -> bool;
}

/// One exclusion pattern. Evaluated against the normalized (forward-slash)
/// root-relative path; exclusion always dominates inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludeRule {
    /// Matches when the relative path starts with the pattern.
    Prefix(String),
    /// Matches when the relative path contains the pattern anywhere.
    Substring(String),
}

impl ExcludeRule {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Prefix(prefix) => normalized.starts_with(prefix),
            Self::Substring(needle) => normalized.contains(needle),
        }
    }
}

/// An ordered list of exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: Vec<ExcludeRule>,
}

impl ExclusionSet {
    #[must_use]
    pub const fn new(rules: Vec<ExcludeRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let normalized = relative.to_string_lossy().replace('\\', "/");
        self.rules.iter().any(|rule| rule.matches(&normalized))
    }
}

impl From<&ExcludeConfig> for ExclusionSet {
    fn from(config: &ExcludeConfig) -> Self {
        let mut rules = Vec::with_capacity(config.prefixes.len() + config.substrings.len());
        rules.extend(config.prefixes.iter().cloned().map(ExcludeRule::Prefix));
        rules.extend(config.substrings.iter().cloned().map(ExcludeRule::Substring));
        Self::new(rules)
    }
}

/// Filters by file-name suffix plus an exclusion set.
///
/// Suffixes match the file name's tail rather than `Path::extension`, so
/// both `.py` and extension-less names like `README` work uniformly.
pub struct SuffixFilter {
    suffixes: Vec<String>,
    case_insensitive: bool,
    exclusions: ExclusionSet,
}

impl SuffixFilter {
    #[must_use]
    pub fn new<S: Into<String>>(
        suffixes: impl IntoIterator<Item = S>,
        case_insensitive: bool,
        exclusions: ExclusionSet,
    ) -> Self {
        let mut suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        if case_insensitive {
            for suffix in &mut suffixes {
                *suffix = suffix.to_ascii_lowercase();
            }
        }
        Self {
            suffixes,
            case_insensitive,
            exclusions,
        }
    }

    fn matches_suffix(&self, relative: &Path) -> bool {
        let Some(name) = relative.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if self.suffixes.is_empty() {
            return true;
        }

        if self.case_insensitive {
            let lowered = name.to_ascii_lowercase();
            self.suffixes.iter().any(|s| lowered.ends_with(s))
        } else {
            self.suffixes.iter().any(|s| name.ends_with(s))
        }
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.matches_suffix(relative) && !self.exclusions.is_excluded(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
