//! Tests for builder modules

use std::time::Duration;

use model_rotator::builders::RotatorBuilder;
use model_rotator::config::{ModelConfig, RotatorConfig};
use model_rotator::core::RotatorError;
use model_rotator::util::{ManualClock, Priority};

#[test]
fn test_rotator_builder_defaults() {
    let builder = RotatorBuilder::new()
        .model("model1", Priority::High, 10)
        .model("model2", Priority::Low, 5);
    assert_eq!(builder.model_configs().len(), 2);

    let rotator = builder.build().expect("valid rotator");
    assert_eq!(rotator.len(), 2);
    assert_eq!(rotator.window(), Duration::from_secs(60));
}

#[test]
fn test_rotator_builder_rejects_empty() {
    assert_eq!(RotatorBuilder::new().build().unwrap_err(), RotatorError::EmptyPool);
}

#[test]
fn test_rotator_builder_validates_raw_configs() {
    let err = RotatorBuilder::new()
        .model("ok", Priority::High, 1)
        .config(ModelConfig {
            name: Some("bad".to_string()),
            priority: Some("urgent".to_string()),
            limit: Some(1),
        })
        .build()
        .unwrap_err();
    assert_eq!(err, RotatorError::InvalidPriority("urgent".to_string()));
}

#[test]
fn test_rotator_builder_custom_window_and_clock() {
    let clock = ManualClock::new();
    let mut rotator = RotatorBuilder::new()
        .model("model1", Priority::Medium, 1)
        .window(Duration::from_secs(10))
        .clock(clock.clone())
        .build()
        .expect("valid rotator");

    assert_eq!(rotator.get_next_model(), Some("model1"));
    assert_eq!(rotator.get_next_model(), None);

    clock.advance(Duration::from_secs(10));
    assert_eq!(rotator.get_next_model(), Some("model1"));
}

#[test]
fn test_rotator_builder_from_config() {
    let config = RotatorConfig {
        models: vec![ModelConfig::new("model1", Priority::High, 2)],
        window_secs: Some(30),
    };
    let shared = RotatorBuilder::from_config(&config)
        .build_shared()
        .expect("valid rotator");

    assert_eq!(shared.get_next_model().as_deref(), Some("model1"));
    assert_eq!(shared.get_state()[0].current_usage, 1);
}
