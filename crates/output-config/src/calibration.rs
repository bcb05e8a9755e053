//! Calibration requests against a live configuration
//!
//! Calibration is a read-modify-write of a single channel's flux
//! and/or chromaticity, leaving the channel-to-endpoint mapping and
//! all other channels untouched.

use crate::error::ConfigError;
use serde::Deserialize;

/// Fields to overwrite in one channel; absent fields are left as-is
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelPatch {
    pub flux: Option<u8>,
    /// CIE x as a real coordinate in [0, 1]
    pub x: Option<f64>,
    /// CIE y as a real coordinate in [0, 1]
    pub y: Option<f64>,
}

/// User-facing calibration request, deserialized from the JSON field
/// `{ "channel": 1..6, "x"?: 0..1, "y"?: 0..1, "flux"?: 0..254 }`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationRequest {
    /// Physical channel to calibrate, 1-based
    pub channel: u8,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub flux: Option<u8>,
}

impl CalibrationRequest {
    /// Validate field ranges, naming the offending field on failure
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidCalibration`] for an out-of-range
    /// channel, chromaticity, or flux value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=6).contains(&self.channel) {
            return Err(ConfigError::InvalidCalibration(format!(
                "channel must be 1..=6, got {}",
                self.channel
            )));
        }
        for (name, value) in [("x", self.x), ("y", self.y)] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::InvalidCalibration(format!(
                        "{name} must be within 0..=1, got {v}"
                    )));
                }
            }
        }
        if let Some(flux) = self.flux {
            if flux > 254 {
                return Err(ConfigError::InvalidCalibration(format!(
                    "flux must be within 0..=254, got {flux}"
                )));
            }
        }
        Ok(())
    }

    /// The per-channel patch described by this request
    #[must_use]
    pub fn patch(&self) -> ChannelPatch {
        ChannelPatch {
            flux: self.flux,
            x: self.x,
            y: self.y,
        }
    }
}
