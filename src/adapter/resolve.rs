use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolve the first candidate binary name found on `PATH`.
///
/// Candidates are probed strictly in order, so a preferred flavor
/// (e.g. `pylint2`) wins over a generic fallback (`pylint`).
#[must_use]
pub fn resolve(candidates: &[String]) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    resolve_in(&path_var, candidates)
}

/// `resolve` against an explicit search path value.
#[must_use]
pub fn resolve_in(path_var: &OsStr, candidates: &[String]) -> Option<PathBuf> {
    for name in candidates {
        for dir in env::split_paths(path_var) {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
