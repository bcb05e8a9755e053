//! Converter for the LD6 LED controller
//!
//! The LD6 stores its channel-to-endpoint mapping in a manufacturer-
//! specific attribute. Fields exposed to the gateway:
//!
//! - `output_configuration`: select a named mode from the catalog
//! - `output_configuration_raw`: write an arbitrary configuration as
//!   hex; also reflects the last decoded configuration on reads
//! - `calibration`: JSON object patching one channel's flux and/or
//!   chromaticity in place

use crate::definition::Definition;
use crate::error::ConverterError;
use crate::expose::Expose;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};
use ubisys_output_config::{
    codec, mired_range, CalibrationRequest, Catalog, ChannelDescriptor, ChannelFunction,
    Identified,
};
use ubisys_zcl::cluster::{device_setup_attrs, id};
use ubisys_zcl::DeviceEndpoint;

/// Model identifier reported by the Basic cluster
pub const MODEL: &str = "LD6";

/// The device re-enumerates its light endpoints after a configuration
/// write and needs to settle before they respond; callers wait this
/// long after a successful mode switch
pub const SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Writable fields handled by this converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedField {
    OutputConfiguration,
    OutputConfigurationRaw,
    Calibration,
}

impl LedField {
    /// Map a user-facing state key to a field
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "output_configuration" => Some(Self::OutputConfiguration),
            "output_configuration_raw" => Some(Self::OutputConfigurationRaw),
            "calibration" => Some(Self::Calibration),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::OutputConfiguration => "output_configuration",
            Self::OutputConfigurationRaw => "output_configuration_raw",
            Self::Calibration => "calibration",
        }
    }
}

/// State published after a refresh
#[derive(Debug, Clone, Serialize)]
pub struct LedState {
    /// Catalog mode name, or "custom" when the buffer matches no entry
    pub output_configuration: String,
    /// Raw configuration as read from the device, hex-encoded
    pub output_configuration_raw: String,
    /// Light exposes rebuilt from the decoded configuration
    pub exposes: Vec<Expose>,
}

/// LD6 field converter
pub struct LedController {
    catalog: Catalog,
}

impl Default for LedController {
    fn default() -> Self {
        Self::new()
    }
}

impl LedController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::standard(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a Set request for one field and return the refreshed state
    ///
    /// # Errors
    /// Propagates catalog, codec, calibration and attribute access
    /// errors; never retries.
    pub async fn apply_set<D: DeviceEndpoint>(
        &self,
        device: &D,
        field: LedField,
        value: &serde_json::Value,
    ) -> Result<LedState, ConverterError> {
        match field {
            LedField::OutputConfiguration => {
                let name = value
                    .as_str()
                    .ok_or(ConverterError::ExpectedType("string"))?;
                self.set_mode(device, name).await
            }
            LedField::OutputConfigurationRaw => {
                let hex_str = value
                    .as_str()
                    .ok_or(ConverterError::ExpectedType("string"))?;
                self.set_raw(device, hex_str).await
            }
            LedField::Calibration => self.calibrate(device, value).await,
        }
    }

    /// Switch to a named catalog mode
    pub async fn set_mode<D: DeviceEndpoint>(
        &self,
        device: &D,
        name: &str,
    ) -> Result<LedState, ConverterError> {
        let config = self.catalog.get(name)?;
        info!(model = MODEL, mode = name, "writing output configuration");
        self.write_configuration(device, &config.encoded()).await?;
        self.refresh(device).await
    }

    /// Write an arbitrary configuration supplied as hex
    pub async fn set_raw<D: DeviceEndpoint>(
        &self,
        device: &D,
        hex_str: &str,
    ) -> Result<LedState, ConverterError> {
        let buffer = hex::decode(hex_str)?;
        info!(model = MODEL, len = buffer.len(), "writing raw output configuration");
        self.write_configuration(device, &buffer).await?;
        self.refresh(device).await
    }

    /// Patch one channel's calibration fields in place
    ///
    /// Read-modify-write against the live buffer; the host runtime
    /// serializes configuration writes per device, so no locking here.
    pub async fn calibrate<D: DeviceEndpoint>(
        &self,
        device: &D,
        value: &serde_json::Value,
    ) -> Result<LedState, ConverterError> {
        let request: CalibrationRequest = serde_json::from_value(value.clone())
            .map_err(|e| {
                ubisys_output_config::ConfigError::InvalidCalibration(e.to_string())
            })?;
        request.validate()?;

        let current = device
            .read_attribute(id::DEVICE_SETUP, device_setup_attrs::OUTPUT_CONFIGURATIONS)
            .await?;
        let patched = codec::patch_channel(&current, request.channel, &request.patch())?;

        info!(model = MODEL, channel = request.channel, "writing channel calibration");
        device
            .write_attribute(
                id::DEVICE_SETUP,
                device_setup_attrs::OUTPUT_CONFIGURATIONS,
                &patched,
            )
            .await?;

        self.refresh(device).await
    }

    /// Read back the live configuration and rebuild the exposed state
    pub async fn refresh<D: DeviceEndpoint>(
        &self,
        device: &D,
    ) -> Result<LedState, ConverterError> {
        let raw = device
            .read_attribute(id::DEVICE_SETUP, device_setup_attrs::OUTPUT_CONFIGURATIONS)
            .await?;

        let channels = codec::decode(&raw)?;
        if channels.len() < codec::CHANNEL_COUNT {
            warn!(
                model = MODEL,
                decoded = channels.len(),
                "truncated configuration report, decoded partially"
            );
        }

        let mode = match self.catalog.identify(&raw) {
            Identified::Known(config) => config.name.to_string(),
            Identified::Custom => "custom".to_string(),
        };
        debug!(model = MODEL, %mode, "decoded output configuration");

        Ok(LedState {
            output_configuration: mode,
            output_configuration_raw: hex::encode(&raw),
            exposes: build_exposes(&channels),
        })
    }

    async fn write_configuration<D: DeviceEndpoint>(
        &self,
        device: &D,
        buffer: &[u8],
    ) -> Result<(), ConverterError> {
        device
            .write_attribute(
                id::DEVICE_SETUP,
                device_setup_attrs::OUTPUT_CONFIGURATIONS,
                buffer,
            )
            .await?;
        // Physical settling time before the new endpoints answer;
        // belongs to the caller side of the codec, not the codec
        tokio::time::sleep(SETTLE_DELAY).await;
        Ok(())
    }
}

/// Rebuild the light exposes from a decoded channel set
///
/// One light per distinct nonzero endpoint; xy color when the full
/// red/green/blue triple is present, a tunable-white range when both
/// white channels are.
fn build_exposes(channels: &[ChannelDescriptor]) -> Vec<Expose> {
    let mut endpoints: Vec<u8> = channels
        .iter()
        .map(|c| c.endpoint)
        .filter(|&ep| ep != 0)
        .collect();
    endpoints.sort_unstable();
    endpoints.dedup();

    endpoints
        .into_iter()
        .map(|endpoint| {
            let has = |function: ChannelFunction| {
                channels
                    .iter()
                    .any(|c| c.endpoint == endpoint && c.function == function)
            };
            let color_xy = has(ChannelFunction::Red)
                && has(ChannelFunction::Green)
                && has(ChannelFunction::Blue);
            let color_temp = (has(ChannelFunction::CoolWhite)
                && has(ChannelFunction::WarmWhite))
            .then(|| mired_range(channels, endpoint));

            Expose::Light {
                endpoint,
                brightness: true,
                color_xy,
                color_temp,
            }
        })
        .collect()
}

/// Static definition for the supported-device table
#[must_use]
pub fn definition() -> Definition {
    let controller = LedController::new();
    // Factory default is one tunable-white light
    let baseline = controller
        .catalog
        .entries()
        .first()
        .map(|config| build_exposes(&config.channels))
        .unwrap_or_default();

    Definition {
        model: MODEL,
        vendor: "ubisys",
        description: "LED controller LD6",
        endpoints: HashMap::from([
            ("light_1", 1),
            ("light_2", 2),
            ("light_3", 3),
            ("light_4", 4),
            ("light_5", 5),
            ("light_6", 6),
        ]),
        supports_ota: true,
        exposes: baseline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockDevice;
    use serde_json::json;
    use ubisys_output_config::MiredRange;

    fn device_with_mode(name: &str) -> MockDevice {
        let catalog = Catalog::standard();
        let device = MockDevice::new();
        device.seed(
            id::DEVICE_SETUP,
            device_setup_attrs::OUTPUT_CONFIGURATIONS,
            catalog.get(name).unwrap().encoded().to_vec(),
        );
        device
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_mode_writes_canonical_buffer() {
        let controller = LedController::new();
        let device = device_with_mode("1x_cct");

        let state = controller.set_mode(&device, "2x_cct").await.unwrap();

        let written = device.last_write().unwrap();
        assert_eq!(written.0, id::DEVICE_SETUP);
        assert_eq!(written.2.len(), codec::BUFFER_LEN);
        assert_eq!(state.output_configuration, "2x_cct");
        assert_eq!(state.exposes.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_unknown_mode_lists_valid_names() {
        let controller = LedController::new();
        let device = device_with_mode("1x_cct");

        let err = controller
            .apply_set(&device, LedField::OutputConfiguration, &json!("nope"))
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("1x_cct"));
        assert!(message.contains("6x_mono"));
        // Nothing was written
        assert!(device.last_write().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_exposes_cct_range() {
        let controller = LedController::new();
        let device = device_with_mode("1x_cct");

        let state = controller.refresh(&device).await.unwrap();
        assert_eq!(state.output_configuration, "1x_cct");
        match &state.exposes[0] {
            Expose::Light {
                endpoint,
                color_xy,
                color_temp: Some(MiredRange { min, max }),
                ..
            } => {
                assert_eq!(*endpoint, 1);
                assert!(!*color_xy);
                assert!((152..=155).contains(min));
                assert!((365..=372).contains(max));
            }
            other => panic!("unexpected expose {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_rgb_has_no_cct() {
        let controller = LedController::new();
        let device = device_with_mode("1x_rgb");

        let state = controller.refresh(&device).await.unwrap();
        assert_eq!(
            state.exposes,
            vec![Expose::Light {
                endpoint: 1,
                brightness: true,
                color_xy: true,
                color_temp: None,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_calibration_yields_custom_mode() {
        let controller = LedController::new();
        let device = device_with_mode("1x_cct");

        let state = controller
            .apply_set(
                &device,
                LedField::Calibration,
                &json!({"channel": 1, "x": 0.31, "y": 0.33}),
            )
            .await
            .unwrap();

        // Fine-tuned buffers no longer match any catalog entry
        assert_eq!(state.output_configuration, "custom");
        // Mapping survives, so the expose set is unchanged
        assert_eq!(state.exposes.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calibration_validation_rejects_before_io() {
        let controller = LedController::new();
        let device = device_with_mode("1x_cct");

        let err = controller
            .calibrate(&device, &json!({"channel": 7, "flux": 10}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("channel"));
        assert!(device.last_write().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_raw_round_trips_hex() {
        let controller = LedController::new();
        let device = device_with_mode("1x_cct");
        let raw_hex = hex::encode(Catalog::standard().get("6x_mono").unwrap().encoded());

        let state = controller
            .apply_set(&device, LedField::OutputConfigurationRaw, &json!(raw_hex))
            .await
            .unwrap();

        assert_eq!(state.output_configuration, "6x_mono");
        assert_eq!(state.output_configuration_raw, raw_hex);
        assert_eq!(state.exposes.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_truncated_report_degrades() {
        let controller = LedController::new();
        let device = MockDevice::new();
        let full = Catalog::standard().get("2x_cct").unwrap().encoded();
        device.seed(
            id::DEVICE_SETUP,
            device_setup_attrs::OUTPUT_CONFIGURATIONS,
            full[..20].to_vec(),
        );

        let state = controller.refresh(&device).await.unwrap();
        assert_eq!(state.output_configuration, "custom");
        // Only the first two channels survived the cut
        assert_eq!(state.exposes.len(), 1);
    }
}
