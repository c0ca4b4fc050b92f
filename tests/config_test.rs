//! Config file loading tests
//! Run with: cargo test --test config_test

use classroom_manager::application::errors::ConfigError;
use classroom_manager::application::services::RemovalPolicy;
use classroom_manager::infrastructure::config::Config;

fn temp_config(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("classroom-config-{}.yaml", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("Should write temp config");
    path
}

#[test]
fn test_load_from_file() {
    let path = temp_config(
        "manager:\n  name: room-101\n  prompt: \"101> \"\n  greeting: false\nregistry:\n  removal-policy: retain\nlogging:\n  level: debug\n",
    );

    let config = Config::load(&path).expect("Should load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.manager.name, "room-101");
    assert_eq!(config.manager.prompt, "101> ");
    assert!(!config.manager.greeting);
    assert_eq!(config.registry.removal_policy, RemovalPolicy::Retain);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join(format!("missing-{}.yaml", uuid::Uuid::new_v4()));
    assert!(matches!(Config::load(&path), Err(ConfigError::Read(_))));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let path = temp_config("manager: [not, a, map\n");
    let result = Config::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
