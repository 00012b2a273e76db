#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given bytes, parents included.
    pub fn create_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    #[cfg(unix)]
    pub fn set_mode(&self, relative_path: &str, mode: u32) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(relative_path);
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a repocheck config file in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".repocheck.toml", content.as_bytes());
    }
}
