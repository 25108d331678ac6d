use qhub_kernel::config::{ConfigError, load_config};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TestConfig {
    port: u16,
    name: String,
}

#[test]
fn loads_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "port = 9090\nname = \"intake\"\n").expect("write config");

    let base: PathBuf = dir.path().join("server");
    let cfg: TestConfig = load_config(Some(&base)).expect("load config");
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.name, "intake");
}

#[test]
fn missing_file_is_an_error() {
    let err =
        load_config::<TestConfig>(Some("definitely/not/here")).expect_err("should not load");
    assert!(matches!(err, ConfigError::Config { .. }));
}
