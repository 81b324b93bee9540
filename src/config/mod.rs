use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::EngineError;

/// Posture engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Landmarks whose visibility is below this are treated as missing
    #[serde(default)]
    pub min_visibility: f32,

    #[serde(default)]
    pub squat: SquatThresholds,

    #[serde(default)]
    pub pushup: PushUpThresholds,
}

/// Squat classification thresholds (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquatThresholds {
    #[serde(default = "default_knee_error_above")]
    pub knee_error_above: f32,

    #[serde(default = "default_knee_good_below")]
    pub knee_good_below: f32,

    #[serde(default = "default_squat_back_error_above")]
    pub back_error_above: f32,

    #[serde(default = "default_squat_back_good_below")]
    pub back_good_below: f32,
}

/// Push-up classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushUpThresholds {
    /// Degrees
    #[serde(default = "default_elbow_error_above")]
    pub elbow_error_above: f32,

    /// Degrees
    #[serde(default = "default_elbow_good_below")]
    pub elbow_good_below: f32,

    /// Alignment deviation in [0, 1]
    #[serde(default = "default_back_deviation_error_above")]
    pub back_deviation_error_above: f32,
}

// Default value functions
fn default_knee_error_above() -> f32 {
    150.0
}

fn default_knee_good_below() -> f32 {
    80.0
}

fn default_squat_back_error_above() -> f32 {
    45.0
}

fn default_squat_back_good_below() -> f32 {
    30.0
}

fn default_elbow_error_above() -> f32 {
    120.0
}

fn default_elbow_good_below() -> f32 {
    70.0
}

fn default_back_deviation_error_above() -> f32 {
    0.05
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_visibility: 0.0,
            squat: SquatThresholds::default(),
            pushup: PushUpThresholds::default(),
        }
    }
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self {
            knee_error_above: default_knee_error_above(),
            knee_good_below: default_knee_good_below(),
            back_error_above: default_squat_back_error_above(),
            back_good_below: default_squat_back_good_below(),
        }
    }
}

impl Default for PushUpThresholds {
    fn default() -> Self {
        Self {
            elbow_error_above: default_elbow_error_above(),
            elbow_good_below: default_elbow_good_below(),
            back_deviation_error_above: default_back_deviation_error_above(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(contents).context("Failed to parse engine config")?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config {}", path.display()))?;

        Self::from_toml_str(&contents)
    }

    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(EngineError::InvalidConfig(format!(
                "min_visibility must be within [0, 1], got {}",
                self.min_visibility
            )));
        }

        check_band(
            "squat.knee",
            self.squat.knee_good_below,
            self.squat.knee_error_above,
        )?;
        check_band(
            "squat.back",
            self.squat.back_good_below,
            self.squat.back_error_above,
        )?;
        check_band(
            "pushup.elbow",
            self.pushup.elbow_good_below,
            self.pushup.elbow_error_above,
        )?;

        let deviation = self.pushup.back_deviation_error_above;
        if !(0.0..=1.0).contains(&deviation) {
            return Err(EngineError::InvalidConfig(format!(
                "pushup.back_deviation_error_above must be within [0, 1], got {}",
                deviation
            )));
        }

        Ok(())
    }
}

fn check_band(name: &str, good_below: f32, error_above: f32) -> Result<(), EngineError> {
    if !good_below.is_finite() || !error_above.is_finite() {
        return Err(EngineError::InvalidConfig(format!(
            "{name} thresholds must be finite"
        )));
    }

    if good_below > error_above {
        return Err(EngineError::InvalidConfig(format!(
            "{name} good threshold {good_below} is above error threshold {error_above}"
        )));
    }

    Ok(())
}
