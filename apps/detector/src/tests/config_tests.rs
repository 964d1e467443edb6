use super::{apply_env, apply_file, Settings};

use std::{collections::HashMap, fs, path::PathBuf};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_point_at_local_service() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:8000");
    assert_eq!(settings.save_dir, None);
}

#[test]
fn missing_config_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut settings = Settings::default();

    apply_file(&mut settings, &dir.path().join("absent.toml")).expect("missing file is fine");

    assert_eq!(settings, Settings::default());
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("detector.toml");
    fs::write(
        &path,
        "server_url = \"http://claims.internal:9000\"\nsave_dir = \"results\"\n",
    )
    .expect("write config");
    let mut settings = Settings::default();

    apply_file(&mut settings, &path).expect("load");

    assert_eq!(settings.server_url, "http://claims.internal:9000");
    assert_eq!(settings.save_dir, Some(PathBuf::from("results")));
}

#[test]
fn malformed_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("detector.toml");
    fs::write(&path, "server_url = [").expect("write config");

    let err = apply_file(&mut Settings::default(), &path).expect_err("must fail");

    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("detector.toml");
    fs::write(&path, "server = \"http://typo\"\n").expect("write config");

    assert!(apply_file(&mut Settings::default(), &path).is_err());
}

#[test]
fn app_prefixed_env_wins_over_detector_prefix() {
    let mut settings = Settings::default();

    apply_env(
        &mut settings,
        env_from(&[
            ("DETECTOR_SERVER_URL", "http://first:1"),
            ("APP__SERVER_URL", "http://second:2"),
            ("DETECTOR_SAVE_DIR", "/tmp/analyses"),
        ]),
    );

    assert_eq!(settings.server_url, "http://second:2");
    assert_eq!(settings.save_dir, Some(PathBuf::from("/tmp/analyses")));
}

#[test]
fn empty_environment_changes_nothing() {
    let mut settings = Settings::default();
    apply_env(&mut settings, env_from(&[]));
    assert_eq!(settings, Settings::default());
}
