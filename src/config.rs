//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VOLCAST_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use volcast_core::Technique;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera projection configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Volume dataset configuration
    #[serde(default)]
    pub volume: VolumeConfig,
    /// Transfer function configuration
    #[serde(default)]
    pub transfer_function: TransferFunctionConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`VOLCAST_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // VOLCAST_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("VOLCAST_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "volcast".to_string(),
            width: 1024,
            height: 768,
            vsync: true,
        }
    }
}

/// Camera projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b]
    pub background_color: [f32; 3],
    /// Ray sample count at rest
    pub num_samples: u32,
    /// Normalized segment parameter where sampling starts
    pub sample_range_start: f32,
    /// Normalized segment parameter where sampling ends
    pub sample_range_end: f32,
    /// Compositing technique: "mip", "alpha" or "average"
    pub technique: String,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0],
            num_samples: 100,
            sample_range_start: 0.0,
            sample_range_end: 1.0,
            technique: "mip".to_string(),
        }
    }
}

impl RenderingConfig {
    /// Parse the configured technique name, falling back to MIP
    pub fn technique(&self) -> Technique {
        Technique::from_name(&self.technique).unwrap_or_else(|| {
            log::warn!("Unknown technique '{}', using mip", self.technique);
            Technique::Mip
        })
    }
}

/// Volume dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Path to a raw 8-bit dataset; when absent a synthetic demo volume is used
    pub path: Option<String>,
    /// Dimensions of the raw dataset [width, height, depth]
    pub dimensions: [u32; 3],
    /// Edge length of the synthetic demo volume
    pub synthetic_size: u32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            path: None,
            dimensions: [256, 256, 256],
            synthetic_size: 128,
        }
    }
}

/// Transfer function configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransferFunctionConfig {
    /// Path to an RGB image whose first row is the lookup table;
    /// when absent the built-in flame preset is used
    pub path: Option<String>,
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
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
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.camera.fov, 60.0);
        assert_eq!(config.rendering.num_samples, 100);
        assert!(config.volume.path.is_none());
        assert!(config.transfer_function.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("num_samples"));
    }

    #[test]
    fn test_technique_parsing() {
        let mut rendering = RenderingConfig::default();
        assert_eq!(rendering.technique(), Technique::Mip);
        rendering.technique = "average".to_string();
        assert_eq!(rendering.technique(), Technique::Average);
        rendering.technique = "ALPHA".to_string();
        assert_eq!(rendering.technique(), Technique::Alpha);
        rendering.technique = "bogus".to_string();
        assert_eq!(rendering.technique(), Technique::Mip);
    }
}
