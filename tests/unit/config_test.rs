//! Config file loading and saving

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use txa::Config;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.service.timeout(), Duration::from_secs(30));
    assert_eq!(config.analysis.min_text_length, 10);
    assert_eq!(config.export.file_name, "text-analysis-report.pdf");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[service]\nbase_url = \"https://analysis.example.com\"\n\n[analysis]\nmin_text_length = 25\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.service.base_url, "https://analysis.example.com");
    assert_eq!(config.service.timeout_secs, 30);
    assert_eq!(config.analysis.min_text_length, 25);
    assert_eq!(config.export.directory, ".");
}

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.service.timeout_secs = 5;
    config.export.directory = "/tmp/reports".into();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn malformed_toml_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[service\nbase_url = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[service]\nbase_url = \"localhost:8000\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("http://"));
}

#[test]
fn to_toml_has_every_section() {
    let toml = Config::default().to_toml().unwrap();
    assert!(toml.contains("[service]"));
    assert!(toml.contains("[analysis]"));
    assert!(toml.contains("[export]"));
}

#[test]
fn export_directory_expands_home() {
    let mut config = Config::default();
    config.export.directory = "~/reports".into();
    let expected = dirs::home_dir().map(|home| home.join("reports"));
    if let Some(expected) = expected {
        assert_eq!(config.export.directory_path(), expected);
    }

    config.export.directory = "/srv/reports".into();
    assert_eq!(config.export.directory_path(), PathBuf::from("/srv/reports"));
}
