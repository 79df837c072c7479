//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level Terra configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe orientation, time scaling and cloud settings.
    pub globe: GlobeConfig,
    /// Camera pilot settings.
    pub pilot: PilotConfig,
    /// Day/night shading settings.
    pub shading: ShadingConfig,
    /// Default marker location.
    pub marker: MarkerConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Globe configuration: everything the orientation synchronizer is built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Multiplier on elapsed real time (0.0 freezes the simulated clock).
    pub time_scale: f64,
    /// Static rotation about the body's +Y axis aligning the texture seam
    /// with the prime meridian, in degrees.
    pub texture_longitude_offset_deg: f64,
    /// Static tilt about the body's +Z axis, in degrees.
    pub axial_tilt_deg: f64,
    /// Period of one full cloud-shell revolution before the speed multiplier, in hours.
    pub cloud_period_hours: f64,
    /// Speed multiplier applied to the cloud-shell angular rate.
    pub cloud_speed_multiplier: f64,
    /// Fixed world-space direction toward the light source. Normalized on use.
    pub world_sun_direction: [f64; 3],
    /// Radius of the planet sphere in scene units.
    pub planet_radius: f64,
}

/// Camera pilot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PilotConfig {
    /// Distance above the sphere surface at which the camera parks.
    pub standoff: f32,
    /// Distance to the destination below which the arrival callback fires.
    pub arrival_threshold: f32,
    /// Re-enable orbit controls once a flight completes.
    pub reenable_controls: bool,
    /// Initial camera position in world space.
    pub start_position: [f32; 3],
}

/// Day/night shading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShadingConfig {
    /// Ambient floor light level on the night side (0.0 - 1.0).
    pub ambient: f32,
    /// Duration of the startup fade-in in seconds.
    pub fade_in_seconds: f64,
}

/// Default marker location, used until a geolocation resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
    /// Height of the marker above the planet surface in scene units.
    pub altitude: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log the subsolar point every N frames (0 disables).
    pub log_sun_every_frames: u32,
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            texture_longitude_offset_deg: 0.0,
            axial_tilt_deg: 0.0,
            cloud_period_hours: 24.0,
            cloud_speed_multiplier: 120.0,
            world_sun_direction: [1.0, 0.0, 0.0],
            planet_radius: 1.5,
        }
    }
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            standoff: 1.0,
            arrival_threshold: 0.05,
            reenable_controls: true,
            start_position: [0.0, 0.0, 4.2],
        }
    }
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.12,
            fade_in_seconds: 1.2,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        // New Delhi.
        Self {
            latitude: 28.6139,
            longitude: 77.2088,
            altitude: 0.017,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_sun_every_frames: 120,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::file_path(config_dir);

        if config_path.exists() {
            let config = Self::read_file(&config_path)?;
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
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = Self::file_path(config_dir);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path,
            source,
        })?;
        Ok(())
    }

    /// Returns `Some(new_config)` if the file on disk differs from `self`, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read_file(&Self::file_path(config_dir))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read_file(config_path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.to_path_buf(),
                source,
            })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: config_path.to_path_buf(),
            source,
        })
    }
}
