use super::*;

#[test]
fn single_modes_build_one_runner() {
    let config = Config::default();
    assert_eq!(build_runners(Mode::Python, &config, false).len(), 1);
    assert_eq!(build_runners(Mode::Js, &config, false).len(), 1);
    assert_eq!(build_runners(Mode::Exc, &config, false).len(), 1);
    assert_eq!(build_runners(Mode::Nl, &config, false).len(), 1);
}

#[test]
fn default_mode_builds_all_four_runners() {
    let config = Config::default();
    assert_eq!(build_runners(Mode::All, &config, false).len(), 4);
}
