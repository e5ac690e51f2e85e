use crate::core::{
    DEFAULT_ALTITUDE_OFFSET_M, DEFAULT_MARKER_HEIGHT_M, DEFAULT_RING_POINTS, DEFAULT_RING_RADIUS_M,
    MAX_RING_POINTS, MAX_RING_RADIUS_M,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Defaults used when drawing a ring around a marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Ring radius (meters)
    pub radius_m: f64,
    /// Points per ring
    pub point_count: usize,
    /// Ring altitude above the marker target (meters)
    pub altitude_offset_m: f64,
    /// Height given to newly placed markers (meters)
    pub default_height_m: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RING_RADIUS_M,
            point_count: DEFAULT_RING_POINTS,
            altitude_offset_m: DEFAULT_ALTITUDE_OFFSET_M,
            default_height_m: DEFAULT_MARKER_HEIGHT_M,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(parameter: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Holds the active ring configuration and its backing file
pub struct ConfigurationManager {
    config: RingConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self {
            config: RingConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Check every field of a configuration
    pub fn validate(config: &RingConfig) -> Result<(), ConfigError> {
        if !config.radius_m.is_finite() || config.radius_m <= 0.0 {
            return Err(ConfigError::invalid("radius_m", config.radius_m, "radius must be positive"));
        }
        if config.radius_m > MAX_RING_RADIUS_M {
            return Err(ConfigError::invalid(
                "radius_m",
                config.radius_m,
                "radius too large for flat-earth point placement",
            ));
        }
        if config.point_count == 0 || config.point_count > MAX_RING_POINTS {
            return Err(ConfigError::invalid(
                "point_count",
                config.point_count,
                "point count must be between 1 and 4096",
            ));
        }
        if !config.altitude_offset_m.is_finite() {
            return Err(ConfigError::invalid(
                "altitude_offset_m",
                config.altitude_offset_m,
                "altitude offset must be finite",
            ));
        }
        if !config.default_height_m.is_finite() || config.default_height_m < 0.0 {
            return Err(ConfigError::invalid(
                "default_height_m",
                config.default_height_m,
                "marker height must be zero or positive",
            ));
        }
        Ok(())
    }

    /// Replace the configuration after validation
    pub fn update(&mut self, config: RingConfig) -> Result<(), ConfigError> {
        Self::validate(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    ///
    /// Missing fields fall back to defaults.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        let config: RingConfig = serde_json::from_str(&content)?;
        Self::validate(&config)?;

        info!("loaded ring config from {}", path_str);
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = serde_json::to_string_pretty(&self.config)?;

        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::invalid(
                "config_file_path",
                "none",
                "no file path set for saving configuration",
            )),
        }
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Update ring radius, returning the previous value
    pub fn set_radius(&mut self, radius_m: f64) -> Result<f64, ConfigError> {
        let candidate = RingConfig { radius_m, ..self.config.clone() };
        Self::validate(&candidate)?;

        let old_value = self.config.radius_m;
        self.config.radius_m = radius_m;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update points per ring, returning the previous value
    pub fn set_point_count(&mut self, point_count: usize) -> Result<usize, ConfigError> {
        let candidate = RingConfig { point_count, ..self.config.clone() };
        Self::validate(&candidate)?;

        let old_value = self.config.point_count;
        self.config.point_count = point_count;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update ring altitude offset, returning the previous value
    pub fn set_altitude_offset(&mut self, altitude_offset_m: f64) -> Result<f64, ConfigError> {
        let candidate = RingConfig { altitude_offset_m, ..self.config.clone() };
        Self::validate(&candidate)?;

        let old_value = self.config.altitude_offset_m;
        self.config.altitude_offset_m = altitude_offset_m;
        self.is_modified = true;
        Ok(old_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = RingConfig::default();
        assert_eq!(config.radius_m, 30.0);
        assert_eq!(config.point_count, 16);
        assert_eq!(config.altitude_offset_m, 5.0);
        assert_eq!(config.default_height_m, 60.0);
        assert!(ConfigurationManager::validate(&config).is_ok());
    }

    #[test]
    fn test_manager_creation() {
        let manager = ConfigurationManager::new();
        assert_eq!(manager.config(), &RingConfig::default());
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_invalid_config() {
        let bad_radius = RingConfig { radius_m: -1.0, ..Default::default() };
        let huge_radius = RingConfig { radius_m: 50_000.0, ..Default::default() };
        let no_points = RingConfig { point_count: 0, ..Default::default() };
        let negative_height = RingConfig { default_height_m: -3.0, ..Default::default() };

        for config in [bad_radius, huge_radius, no_points, negative_height] {
            assert!(matches!(
                ConfigurationManager::validate(&config),
                Err(ConfigError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_runtime_setters() {
        let mut manager = ConfigurationManager::new();

        assert_eq!(manager.set_radius(45.0).unwrap(), 30.0);
        assert_eq!(manager.set_point_count(8).unwrap(), 16);
        assert_eq!(manager.set_altitude_offset(-2.0).unwrap(), 5.0);
        assert!(manager.is_modified());

        assert!(manager.set_radius(0.0).is_err());
        assert!(manager.set_point_count(MAX_RING_POINTS + 1).is_err());
        assert_eq!(manager.config().radius_m, 45.0);
        assert_eq!(manager.config().point_count, 8);
    }

    #[test]
    fn test_config_file_round_trip() {
        let mut manager = ConfigurationManager::new();
        manager.set_radius(50.0).unwrap();
        manager.set_point_count(24).unwrap();

        let temp_path = std::env::temp_dir().join(format!("camera_ring_config_{}.json", std::process::id()));
        manager.save_to_file(&temp_path).unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_file(&temp_path).unwrap();
        assert_eq!(loaded.config().radius_m, 50.0);
        assert_eq!(loaded.config().point_count, 24);

        let _ = fs::remove_file(temp_path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_path = std::env::temp_dir().join(format!("camera_ring_partial_{}.json", std::process::id()));
        fs::write(&temp_path, r#"{ "radius_m": 12.5 }"#).unwrap();

        let loaded = ConfigurationManager::from_file(&temp_path).unwrap();
        assert_eq!(loaded.config().radius_m, 12.5);
        assert_eq!(loaded.config().point_count, 16);

        let _ = fs::remove_file(temp_path);
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigurationManager::from_file(PathBuf::from("/nonexistent/camera_ring.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_save_without_path() {
        let mut manager = ConfigurationManager::new();
        assert!(manager.save().is_err());
    }
}
