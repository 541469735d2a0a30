//! Tests for configuration validation

use std::time::Duration;

use model_rotator::config::{ModelConfig, RotatorConfig, DEFAULT_WINDOW};
use model_rotator::core::RotatorError;
use model_rotator::util::Priority;

#[test]
fn test_model_config_validation() {
    let valid = ModelConfig::new("model1", Priority::High, 30);
    let model = valid.validate(0).expect("valid model");
    assert_eq!(model.name, "model1");
    assert_eq!(model.priority, Priority::High);
    assert_eq!(model.limit, 30);
}

#[test]
fn test_model_config_missing_priority() {
    let invalid = ModelConfig {
        name: Some("model1".to_string()),
        priority: None,
        limit: Some(5),
    };
    assert_eq!(
        invalid.validate(2),
        Err(RotatorError::MissingField {
            index: 2,
            field: "priority"
        })
    );
}

#[test]
fn test_model_config_invalid_priority() {
    let invalid = ModelConfig {
        name: Some("model1".to_string()),
        priority: Some("urgent".to_string()),
        limit: Some(5),
    };
    assert_eq!(
        invalid.validate(0),
        Err(RotatorError::InvalidPriority("urgent".to_string()))
    );
}

#[test]
fn test_model_config_empty_name() {
    let invalid = ModelConfig::new("", Priority::Low, 5);
    assert_eq!(invalid.validate(4), Err(RotatorError::EmptyName { index: 4 }));
}

#[test]
fn test_rotator_config_empty_models() {
    let config = RotatorConfig::default();
    assert_eq!(config.validate(), Err(RotatorError::EmptyPool));
}

#[test]
fn test_rotator_config_from_json() {
    let json = r#"{
        "models": [
            {"name": "model1", "priority": "high", "limit": 30},
            {"name": "model2", "priority": "medium", "limit": 20}
        ],
        "window_secs": 120
    }"#;

    let config = RotatorConfig::from_json_str(json).expect("valid config");
    assert_eq!(config.models.len(), 2);
    assert_eq!(config.window(), Duration::from_secs(120));
}

#[test]
fn test_rotator_config_default_window() {
    let json = r#"{"models": [{"name": "m", "priority": "low", "limit": 1}]}"#;
    let config = RotatorConfig::from_json_str(json).expect("valid config");
    assert_eq!(config.window(), DEFAULT_WINDOW);
}

#[test]
fn test_rotator_config_missing_limit_in_json() {
    let json = r#"{"models": [{"name": "m", "priority": "high"}]}"#;
    assert_eq!(
        RotatorConfig::from_json_str(json),
        Err(RotatorError::MissingField {
            index: 0,
            field: "limit"
        })
    );
}

#[test]
fn test_rotator_config_malformed_json() {
    let result = RotatorConfig::from_json_str("{\"models\": [");
    assert!(matches!(result, Err(RotatorError::Parse(_))));
}

#[test]
fn test_rotator_config_from_missing_file() {
    let path = std::env::temp_dir().join("model-rotator-does-not-exist.json");
    let err = RotatorConfig::from_json_file(&path).unwrap_err();
    assert!(err.to_string().contains("reading rotator config"));
}

#[test]
fn test_rotator_config_from_file() {
    let path = std::env::temp_dir().join(format!(
        "model-rotator-config-{}.json",
        std::process::id()
    ));
    let config = RotatorConfig {
        models: vec![ModelConfig::new("model1", Priority::Medium, 3)],
        window_secs: None,
    };
    std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = RotatorConfig::from_json_file(&path).expect("config loads");
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, config);
}
