use crate::conf::{ConfigError, EdgewayConfig, validate_config};

fn with_index(index_document: &str) -> EdgewayConfig {
    let mut cfg = EdgewayConfig::default();
    cfg.normalizer.index_document = index_document.to_string();
    cfg
}

fn assert_invalid_index(index_document: &str) {
    let result = validate_config(&with_index(index_document));

    match result {
        Err(ConfigError::InvalidIndexDocument { value, .. }) => {
            assert_eq!(value, index_document);
        }
        other => panic!("Expected InvalidIndexDocument, got {:?}", other),
    }
}

#[test]
fn defaults_are_valid() {
    assert!(validate_config(&EdgewayConfig::default()).is_ok());
}

#[test]
fn custom_index_document_is_valid() {
    assert!(validate_config(&with_index("default.htm")).is_ok());
}

#[test]
fn empty_index_document_is_invalid() {
    assert_invalid_index("");
}

#[test]
fn index_document_path_is_invalid() {
    assert_invalid_index("docs/index.html");
}

#[test]
fn index_document_without_extension_is_invalid() {
    assert_invalid_index("index");
}

#[test]
fn bad_level_directive_is_invalid() {
    // Arrange
    let mut cfg = EdgewayConfig::default();
    cfg.logging.level = "edgeway=verbose".to_string();

    // Act
    let result = validate_config(&cfg);

    // Assert
    assert!(matches!(result, Err(ConfigError::InvalidLogLevel { .. })));
}
