//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TPC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Virtual joystick configuration
    #[serde(default)]
    pub joystick: JoystickConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TPC_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TPC_JOYSTICK__SCALE=0.4 -> joystick.scale = 0.4
        figment = figment.merge(Env::prefixed("TPC_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the touch controls cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.joystick.scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::invalid(format!(
                "joystick.scale must be a positive number, got {}",
                scale
            )));
        }
        if self.window.height == 0 {
            return Err(ConfigError::invalid("window.height must be greater than 0"));
        }
        Ok(())
    }
}

/// Window configuration
///
/// `width` and `height` are the content-scale size the touch layout is built for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Content width in logical pixels
    pub width: u32,
    /// Content height in logical pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Touchpad Controls".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Virtual joystick configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoystickConfig {
    /// Base diameter as a fraction of the window height
    pub scale: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            scale: touchpad_input::DEFAULT_JOYSTICK_SCALE,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show joystick and touchpad outputs in the window title
    pub show_overlay: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_overlay: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.joystick.scale, 0.33);
        assert!(config.debug.show_overlay);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("scale"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("[joystick]\nscale = 0.5\n").unwrap();
        assert_eq!(config.joystick.scale, 0.5);
        assert_eq!(config.window.title, "Touchpad Controls");
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_missing_directory_yields_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        for scale in [0.0, -0.33, f32::NAN, f32::INFINITY] {
            let mut config = AppConfig::default();
            config.joystick.scale = scale;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("joystick.scale"), "scale {} accepted", scale);
        }
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let mut config = AppConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError { message: "bad value".to_string() };
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
