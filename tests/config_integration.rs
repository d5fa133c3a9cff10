//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use volcast::config::AppConfig;
use volcast_core::Technique;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("VOLCAST_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("VOLCAST_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_numeric() {
    std::env::set_var("VOLCAST_RENDERING__NUM_SAMPLES", "250");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.rendering.num_samples, 250);
    std::env::remove_var("VOLCAST_RENDERING__NUM_SAMPLES");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("VOLCAST_WINDOW__TITLE");
    std::env::remove_var("VOLCAST_RENDERING__NUM_SAMPLES");

    let config = AppConfig::load().unwrap();
    assert!(config.window.width > 0);
    assert!(config.window.height > 0);
    assert_eq!(config.rendering.technique(), Technique::Mip);
    assert!(config.rendering.sample_range_start <= config.rendering.sample_range_end);
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    std::env::remove_var("VOLCAST_WINDOW__TITLE");

    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.camera.fov, 60.0);
}
