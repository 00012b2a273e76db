use super::*;

#[test]
fn default_tools_probe_pylint2_first() {
    let config = Config::default();
    assert_eq!(config.tools.pylint, vec!["pylint2", "pylint"]);
    assert_eq!(config.tools.jshint, vec!["jshint"]);
}

#[test]
fn default_excludes_cover_venv_and_vendored_code() {
    let config = Config::default();
    assert!(config.exclude.prefixes.contains(&"env/".to_string()));
    assert!(config.exclude.substrings.contains(&".min.js".to_string()));
    assert!(
        config
            .exclude
            .substrings
            .contains(&"bower_components".to_string())
    );
}

#[test]
fn default_exec_suffixes_include_docs_and_assets() {
    let config = Config::default();
    let suffixes = &config.exec.non_executable_suffixes;
    assert!(suffixes.contains(&"readme".to_string()));
    assert!(suffixes.contains(&".png".to_string()));
    assert!(suffixes.contains(&".css".to_string()));
}

#[test]
fn partial_toml_keeps_defaults_for_missing_sections() {
    let config: Config = toml::from_str(
        r#"
[exclude]
prefixes = ["build/"]
"#,
    )
    .unwrap();

    assert_eq!(config.exclude.prefixes, vec!["build/"]);
    // Unset sections fall back to defaults.
    assert_eq!(config.tools.pylint, vec!["pylint2", "pylint"]);
    assert!(!config.exec.non_executable_suffixes.is_empty());
}

#[test]
fn tools_section_overrides_binaries() {
    let config: Config = toml::from_str(
        r#"
[tools]
pylint = ["pylint3"]
pylint_config = "lint/pylintrc"
"#,
    )
    .unwrap();

    assert_eq!(config.tools.pylint, vec!["pylint3"]);
    assert_eq!(
        config.tools.pylint_config,
        std::path::PathBuf::from("lint/pylintrc")
    );
    assert_eq!(config.tools.jshint, vec!["jshint"]);
}

#[test]
fn load_missing_explicit_file_is_an_error() {
    let result = Config::load(Some(std::path::Path::new("/no/such/config.toml")), false);
    assert!(matches!(result, Err(RepocheckError::Config(_))));
}

#[test]
fn load_no_config_returns_defaults() {
    let config = Config::load(Some(std::path::Path::new("/no/such/config.toml")), true).unwrap();
    assert_eq!(config.tools.jshint, vec!["jshint"]);
}

#[test]
fn load_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[tools\npylint = 3").unwrap();

    let result = Config::load(Some(&path), false);
    assert!(matches!(result, Err(RepocheckError::TomlParse(_))));
}
