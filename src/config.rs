//! Run configuration: plot parameters, room targets, feature toggles.
//!
//! The interactive form upstream is expected to deliver range-clamped
//! values; `clamped()` re-applies the same ranges defensively so the
//! engine never sees an out-of-range count.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compass::Facing;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or misses required fields
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional-room toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub pooja: bool,
    pub balcony: bool,
    pub parking: bool,
    pub store: bool,
}

impl Features {
    /// Enable every optional room
    pub fn all() -> Self {
        Self {
            pooja: true,
            balcony: true,
            parking: true,
            store: true,
        }
    }
}

/// Immutable input for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Plot width in feet
    pub plot_width: f64,
    /// Plot depth in feet
    pub plot_depth: f64,
    /// Direction of the road-adjacent edge
    pub facing: Facing,
    /// Number of floors including the ground floor
    #[serde(default = "default_floors")]
    pub floors: u32,
    /// Total bedrooms across all floors
    #[serde(default = "default_bedrooms")]
    pub bedrooms: u32,
    /// Total bathrooms across all floors
    #[serde(default = "default_bathrooms")]
    pub bathrooms: u32,
    #[serde(default)]
    pub features: Features,
}

fn default_floors() -> u32 {
    1
}

fn default_bedrooms() -> u32 {
    2
}

fn default_bathrooms() -> u32 {
    1
}

impl PlanConfig {
    /// Create a configuration with default room targets
    pub fn new(plot_width: f64, plot_depth: f64, facing: Facing) -> Self {
        Self {
            plot_width,
            plot_depth,
            facing,
            floors: default_floors(),
            bedrooms: default_bedrooms(),
            bathrooms: default_bathrooms(),
            features: Features::default(),
        }
    }

    /// Set the floor count
    pub fn with_floors(mut self, floors: u32) -> Self {
        self.floors = floors;
        self
    }

    /// Set the bedroom target
    pub fn with_bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    /// Set the bathroom target
    pub fn with_bathrooms(mut self, bathrooms: u32) -> Self {
        self.bathrooms = bathrooms;
        self
    }

    /// Set the feature toggles
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PlanConfig = toml::from_str(source)?;
        Ok(config)
    }

    /// Re-apply the upstream form's ranges: plot 18-80 ft, floors 1-3,
    /// bedrooms 1-6, bathrooms 1-(bedrooms+1).
    pub fn clamped(&self) -> Self {
        let mut c = self.clone();
        c.plot_width = c.plot_width.clamp(18.0, 80.0);
        c.plot_depth = c.plot_depth.clamp(18.0, 80.0);
        c.floors = c.floors.clamp(1, 3);
        c.bedrooms = c.bedrooms.clamp(1, 6);
        c.bathrooms = c.bathrooms.clamp(1, c.bedrooms + 1);
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let config = PlanConfig::new(30.0, 30.0, Facing::East)
            .with_floors(2)
            .with_bedrooms(3)
            .with_bathrooms(2)
            .with_features(Features::all());

        assert_eq!(config.floors, 2);
        assert_eq!(config.bedrooms, 3);
        assert_eq!(config.bathrooms, 2);
        assert!(config.features.pooja);
        assert!(config.features.parking);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = PlanConfig::from_toml_str(
            r#"
            plot_width = 30
            plot_depth = 30
            facing = "east"
            floors = 2
            bedrooms = 3
            bathrooms = 3

            [features]
            pooja = true
            balcony = true
            parking = true
            store = true
        "#,
        )
        .unwrap();

        assert_eq!(config.plot_width, 30.0);
        assert_eq!(config.facing, Facing::East);
        assert_eq!(config.floors, 2);
        assert_eq!(config.features, Features::all());
    }

    #[test]
    fn test_parse_minimal_toml_uses_defaults() {
        let config = PlanConfig::from_toml_str(
            r#"
            plot_width = 24
            plot_depth = 36
            facing = "N"
        "#,
        )
        .unwrap();

        assert_eq!(config.facing, Facing::North);
        assert_eq!(config.floors, 1);
        assert_eq!(config.bedrooms, 2);
        assert_eq!(config.bathrooms, 1);
        assert_eq!(config.features, Features::default());
    }

    #[test]
    fn test_parse_rejects_missing_facing() {
        let result = PlanConfig::from_toml_str("plot_width = 24\nplot_depth = 36");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_clamped_ranges() {
        let config = PlanConfig::new(120.0, 10.0, Facing::South)
            .with_floors(9)
            .with_bedrooms(40)
            .with_bathrooms(40)
            .clamped();

        assert_eq!(config.plot_width, 80.0);
        assert_eq!(config.plot_depth, 18.0);
        assert_eq!(config.floors, 3);
        assert_eq!(config.bedrooms, 6);
        assert_eq!(config.bathrooms, 7);
    }

    #[test]
    fn test_clamped_keeps_valid_values() {
        let config = PlanConfig::new(30.0, 40.0, Facing::West)
            .with_floors(2)
            .with_bedrooms(3)
            .with_bathrooms(2);
        assert_eq!(config.clamped(), config);
    }
}
