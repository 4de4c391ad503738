use crate::conf::{ConfigError, EdgewayConfig, load_config, load_config_or_default};
use crate::logging::{LogFormat, LogLevel};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_full_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgeway.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "edgeway_core=debug,info"
format = "pretty"
transitions = "debug"

[normalizer]
index_document = "default.htm"
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.logging.level, "edgeway_core=debug,info");
    assert_eq!(cfg.logging.format, Some(LogFormat::Pretty));
    assert_eq!(cfg.logging.transitions, LogLevel::Debug);
    assert_eq!(cfg.normalizer.index_document, "default.htm");
}

#[test]
fn empty_file_yields_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgeway.toml");
    fs::write(&path, "").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg, EdgewayConfig::default());
    assert_eq!(cfg.normalizer.index_document, "index.html");
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.logging.format, None);
}

#[test]
fn partial_table_keeps_other_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgeway.toml");
    fs::write(&path, "[logging]\nformat = \"json\"\n").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.logging.format, Some(LogFormat::Json));
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.normalizer.index_document, "index.html");
}

#[test]
fn missing_explicit_file_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    // Act
    let result = load_config_or_default(Some(path.as_path()));

    // Assert
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn unknown_field_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgeway.toml");
    fs::write(&path, "[normalizer]\nindex = \"index.html\"\n").unwrap();

    // Act
    let result = load_config(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn invalid_format_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgeway.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    // Act
    let result = load_config(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn parse_error_names_the_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[logging\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(err.to_string().contains("broken.toml"));
}
