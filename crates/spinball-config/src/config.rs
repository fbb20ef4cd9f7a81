//! Settings structs with defaults, RON persistence and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spinball_orient::{PitchDescriptor, SurfaceConvention};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map HUD placement.
    pub hud: HudConfig,
    /// Mollweide solve settings.
    pub projection: ProjectionConfig,
    /// Ball frame and animation settings.
    pub ball: BallConfig,
    /// Pitch shown at startup.
    pub pitch: PitchDescriptor,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// HUD box in client pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Mollweide projection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Newton updates for the auxiliary angle. One matches the reference
    /// display; larger values converge to the exact projection.
    pub newton_steps: u32,
}

/// Ball-local frame and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    /// How surface latitude/longitude map onto the mesh axes.
    pub surface_convention: SurfaceConvention,
    /// Length of the drawn spin-axis indicator, in ball radii.
    pub arrow_length: f64,
    /// Spin rate in revolutions per minute.
    pub spin_rpm: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the platform log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            left: 16.0,
            top: 16.0,
            width: 320.0,
            height: 160.0,
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { newton_steps: 1 }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            surface_convention: SurfaceConvention::XForward,
            arrow_length: 3.0,
            spin_rpm: 2200.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl Config {
    /// Reject values that would make the HUD or animation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hud.width > 0.0 && self.hud.height > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "hud",
                reason: "width and height must be positive",
            });
        }
        if !(self.ball.arrow_length.is_finite() && self.ball.arrow_length >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "ball.arrow_length",
                reason: "must be a finite non-negative length",
            });
        }
        if !self.ball.spin_rpm.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "ball.spin_rpm",
                reason: "must be finite",
            });
        }
        if !self.pitch.gyro_degrees.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "pitch.gyro_degrees",
                reason: "must be finite",
            });
        }
        let (lat, lon) = (self.pitch.surface_lat, self.pitch.surface_lon);
        if !((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)) {
            return Err(ConfigError::InvalidValue {
                field: "pitch",
                reason: "surface point must lie in [-90, 90] x [-180, 180]",
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
