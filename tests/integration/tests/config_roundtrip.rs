//! Config save/load roundtrip integration tests.

use courier_core::config::{Config, TransportKind};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.transport.kind, config.transport.kind);
    assert_eq!(loaded.transport.timeout_secs, config.transport.timeout_secs);
    assert_eq!(
        loaded.channels.telegram.large_video_threshold,
        config.channels.telegram.large_video_threshold
    );
    assert_eq!(loaded.channels.enabled_count(), 4);
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");

    let mut config = Config::default();
    config.transport.kind = TransportKind::Webhook;
    config.transport.webhook_url = Some("https://hooks.example.com/courier".to_string());
    config.channels.facebook.enabled = false;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.transport.kind, TransportKind::Webhook);
    assert!(!loaded.channels.facebook.enabled);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/courier.json5"));
    assert!(result.is_err());
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json");
    assert!(result.is_err());
}

#[test]
fn test_saved_config_builds_router() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");

    let mut config = Config::default();
    config.channels.instagram.enabled = false;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    let router = courier_channels::Router::from_config(&loaded).unwrap();
    assert_eq!(router.channels(), vec!["facebook", "telegram", "whatsapp"]);
}
