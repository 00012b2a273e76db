use std::path::PathBuf;

use super::*;

#[test]
fn config_error_display() {
    let err = RepocheckError::Config("missing tool entry".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing tool entry");
}

#[test]
fn root_access_error_includes_path() {
    let err = RepocheckError::RootAccess {
        path: PathBuf::from("/no/such/root"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.to_string().contains("/no/such/root"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: RepocheckError = io.into();
    assert!(matches!(err, RepocheckError::Io(_)));
}
