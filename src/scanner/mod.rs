mod filter;

pub use filter::{ExcludeRule, ExclusionSet, FileFilter, SuffixFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{RepocheckError, Result};

/// Trait for scanning directories and finding candidate files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// Each call re-walks the tree; nothing is cached between calls.
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be accessed. Entries
    /// below the root that fail to read are skipped.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| {
                p.strip_prefix(root)
                    .is_ok_and(|rel| self.filter.should_include(rel))
            })
            .collect();
        // Fixed order for a given filesystem snapshot.
        files.sort_unstable();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        std::fs::metadata(root).map_err(|source| RepocheckError::RootAccess {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
