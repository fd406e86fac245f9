//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use touchpad_controls::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TPC_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("TPC_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_joystick_scale() {
    std::env::set_var("TPC_JOYSTICK__SCALE", "0.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.joystick.scale, 0.5);
    std::env::remove_var("TPC_JOYSTICK__SCALE");
}

#[test]
#[serial]
fn test_env_zero_joystick_scale_rejected() {
    std::env::set_var("TPC_JOYSTICK__SCALE", "0.0");
    let result = AppConfig::load();
    std::env::remove_var("TPC_JOYSTICK__SCALE");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("joystick.scale"));
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("TPC_WINDOW__TITLE");
    std::env::remove_var("TPC_JOYSTICK__SCALE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.window.height, 720);
    assert_eq!(config.joystick.scale, 0.33);
}
