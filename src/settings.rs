//! Demo construction parameters
//!
//! Fixed per demo instance. Loaded from JSON; any field left out keeps its
//! default, so a settings file only needs the values it changes.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{LeverClass, YAxis};

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Channel arm parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmSettings {
    /// Channel half-length and link length
    pub max_reach: f64,
    /// Magnitude of the downward load
    pub weight: f64,
    /// Grab radius of the joint handle
    pub handle_radius: f64,
    /// Display length multiplier for force vectors
    pub force_scale: f64,
}

impl Default for ArmSettings {
    fn default() -> Self {
        Self {
            max_reach: ARM_MAX_REACH,
            weight: ARM_WEIGHT,
            handle_radius: HANDLE_RADIUS,
            force_scale: ARM_FORCE_SCALE,
        }
    }
}

/// Lever parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeverSettings {
    /// Anchor relative to the viewport center
    pub anchor_offset: DVec2,
    pub length: f64,
    pub fulcrum: f64,
    pub effort: f64,
    pub load: f64,
    /// Effort applied when sampling the output force
    pub effort_force: f64,
    /// Display length of the output arrow per unit of force
    pub output_scale: f64,
}

impl Default for LeverSettings {
    fn default() -> Self {
        Self {
            anchor_offset: DVec2::new(-LEVER_LENGTH / 2.0, 0.0),
            length: LEVER_LENGTH,
            fulcrum: 0.0,
            effort: 0.5,
            load: 1.0,
            effort_force: 1.0,
            output_scale: LEVER_OUTPUT_SCALE,
        }
    }
}

/// Circular contact parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Circle center relative to the viewport center
    pub center_offset: DVec2,
    pub radius: f64,
    /// Constant applied force
    pub force: DVec2,
    /// Compass angle (degrees) of the initial contact
    pub initial_angle: f64,
    /// Display length multiplier for force and torque vectors
    pub force_scale: f64,
    /// Where the torque readout is drawn
    pub readout_position: DVec2,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            center_offset: DVec2::new(-150.0, -150.0),
            radius: CONTACT_RADIUS,
            force: DVec2::new(0.0, -1.0),
            initial_angle: 0.0,
            force_scale: CONTACT_FORCE_SCALE,
            readout_position: DVec2::new(500.0, 100.0),
        }
    }
}

/// Settings for all demos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Orientation of the host surface's Y axis
    pub y_axis: YAxis,
    /// Center of the host surface
    pub viewport_center: DVec2,
    /// Host tick rate, used by the headless driver
    pub tick_rate_hz: u32,
    pub arm: ArmSettings,
    pub lever: LeverSettings,
    pub contact: ContactSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            y_axis: YAxis::Up,
            viewport_center: DVec2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0),
            tick_rate_hz: TICK_RATE_HZ,
            arm: ArmSettings::default(),
            lever: LeverSettings::default(),
            contact: ContactSettings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject parameters no demo can be built from
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(name: &str, value: f64) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        positive("arm.max_reach", self.arm.max_reach)?;
        positive("arm.handle_radius", self.arm.handle_radius)?;
        positive("lever.length", self.lever.length)?;
        positive("contact.radius", self.contact.radius)?;

        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid("tick_rate_hz must be non-zero".into()));
        }

        let (fulcrum, effort, load) = (self.lever.fulcrum, self.lever.effort, self.lever.load);
        for (name, ratio) in [("fulcrum", fulcrum), ("effort", effort), ("load", load)] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(SettingsError::Invalid(format!(
                    "lever.{name} must be within [0, 1], got {ratio}"
                )));
            }
        }
        if LeverClass::classify(fulcrum, effort, load).is_none() {
            return Err(SettingsError::Invalid(
                "lever fulcrum, effort and load must be different".into(),
            ));
        }

        Ok(())
    }

    /// Seconds per host tick
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate_hz as f64
    }
}
