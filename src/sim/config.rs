//! Engine configuration
//!
//! Supplied explicitly at construction; loadable from JSON so several
//! engines can run side by side with different settings.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::SimError;
use crate::consts::*;

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SimError),
}

/// Fixed-step engine settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Refresh interval in seconds
    pub dt: f64,
    /// Acceleration field applied to newly built bodies
    pub gravity: DVec2,
    /// Floor line (+y is down, bodies live at y <= ground_y)
    pub ground_y: f64,
    /// Impacts resolved per body per tick before settling it on the floor
    #[serde(default = "default_max_bounces")]
    pub max_bounces_per_tick: u32,
}

fn default_max_bounces() -> u32 {
    DEFAULT_MAX_BOUNCES_PER_TICK
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravity: DEFAULT_GRAVITY,
            ground_y: DEFAULT_GROUND_Y,
            max_bounces_per_tick: DEFAULT_MAX_BOUNCES_PER_TICK,
        }
    }
}

impl EngineConfig {
    /// Default settings with a different timestep
    pub fn with_dt(dt: f64) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    /// Reject settings the engine cannot step with
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "dt must be a positive number of seconds, got {}",
                self.dt
            )));
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidConfiguration(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !self.ground_y.is_finite() {
            return Err(SimError::InvalidConfiguration(format!(
                "ground_y must be finite, got {}",
                self.ground_y
            )));
        }
        if self.max_bounces_per_tick == 0 {
            return Err(SimError::InvalidConfiguration(
                "max_bounces_per_tick must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
