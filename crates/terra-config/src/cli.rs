//! Command-line argument parsing for Terra.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terra", about = "Real-time sunlit globe with camera flights")]
pub struct CliArgs {
    /// Multiplier on elapsed real time (0 freezes the sun).
    #[arg(long)]
    pub time_scale: Option<f64>,

    /// Marker latitude in degrees (stands in for a resolved geolocation).
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Marker longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Number of frames to run before exiting (runs until the flight completes if omitted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// `--lat`/`--lon` are not applied here: a geolocation replaces the
    /// marker at runtime rather than changing its configured default.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(scale) = args.time_scale {
            self.globe.time_scale = scale;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            time_scale: Some(600.0),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.globe.time_scale, 600.0);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.globe.planet_radius, 1.5);
        assert_eq!(config.shading.ambient, 0.12);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_geolocation_does_not_touch_marker_default() {
        let mut config = Config::default();
        let args = CliArgs {
            lat: Some(51.5074),
            lon: Some(-0.1278),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.marker, crate::MarkerConfig::default());
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let args = CliArgs::try_parse_from([
            "terra", "--lat", "-33.87", "--lon", "-70.5", "--frames", "10",
        ])
        .unwrap();
        assert_eq!(args.lat, Some(-33.87));
        assert_eq!(args.lon, Some(-70.5));
        assert_eq!(args.frames, Some(10));
    }
}
