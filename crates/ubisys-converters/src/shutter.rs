//! Converter for the J1 shutter/meter controller
//!
//! Fixed-table field conversions only: lift/tilt percentages from the
//! Window Covering cluster and power/energy from the metering
//! clusters. Calibration sequencing is driven by the host runtime and
//! not handled here.

use crate::definition::{try_read, Definition};
use crate::error::ConverterError;
use crate::expose::Expose;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;
use ubisys_zcl::cluster::{electrical_attrs, id, metering_attrs, window_covering_attrs};
use ubisys_zcl::value::{read_i16_le, read_u24_le, read_u48_le};
use ubisys_zcl::DeviceEndpoint;

/// Model identifier reported by the Basic cluster
pub const MODEL: &str = "J1";

/// State published after a refresh
#[derive(Debug, Clone, Serialize)]
pub struct ShutterState {
    /// Cover position, 100 = fully open
    pub position: Option<u8>,
    /// Tilt position, 100 = fully open
    pub tilt: Option<u8>,
    /// Active power in watts
    pub power_w: Option<f64>,
    /// Delivered energy in kWh
    pub energy_kwh: Option<f64>,
}

/// ZCL lift/tilt percentages count 0 = open, the user-facing position
/// counts 100 = open
#[must_use]
pub fn position_from_percentage(percentage: u8) -> u8 {
    100u8.saturating_sub(percentage.min(100))
}

/// Inverse of [`position_from_percentage`] for Set requests
#[must_use]
pub fn percentage_from_position(position: u8) -> u8 {
    100u8.saturating_sub(position.min(100))
}

/// Read the cover and meter state
///
/// Position and tilt are mandatory on the J1; the metering values are
/// capability-probed because not every firmware revision exposes the
/// electrical measurement cluster.
///
/// # Errors
/// Propagates attribute access failures for the mandatory cover
/// attributes.
pub async fn refresh<D: DeviceEndpoint>(device: &D) -> Result<ShutterState, ConverterError> {
    let lift = device
        .read_attribute(
            id::WINDOW_COVERING,
            window_covering_attrs::CURRENT_POSITION_LIFT_PERCENTAGE,
        )
        .await?;
    let tilt = device
        .read_attribute(
            id::WINDOW_COVERING,
            window_covering_attrs::CURRENT_POSITION_TILT_PERCENTAGE,
        )
        .await?;

    let power_w = try_read(device, id::ELECTRICAL_MEASUREMENT, electrical_attrs::ACTIVE_POWER)
        .await
        .and_then(|payload| read_i16_le(&payload))
        .map(f64::from);

    let energy_kwh = match try_read(
        device,
        id::METERING,
        metering_attrs::CURRENT_SUMM_DELIVERED,
    )
    .await
    .and_then(|payload| read_u48_le(&payload))
    {
        Some(summ) => {
            let divisor = try_read(device, id::METERING, metering_attrs::DIVISOR)
                .await
                .and_then(|payload| read_u24_le(&payload))
                .filter(|&d| d != 0)
                .unwrap_or(1000);
            Some(summ as f64 / f64::from(divisor))
        }
        None => None,
    };

    debug!(model = MODEL, "refreshed shutter state");

    Ok(ShutterState {
        position: lift.first().map(|&p| position_from_percentage(p)),
        tilt: tilt.first().map(|&p| position_from_percentage(p)),
        power_w,
        energy_kwh,
    })
}

/// Static definition for the supported-device table
#[must_use]
pub fn definition() -> Definition {
    Definition {
        model: MODEL,
        vendor: "ubisys",
        description: "Shutter control J1 (with power metering)",
        endpoints: HashMap::from([("cover", 1), ("meter", 3)]),
        supports_ota: true,
        exposes: vec![
            Expose::Cover {
                endpoint: 1,
                position: true,
                tilt: true,
            },
            Expose::Numeric {
                name: "power",
                unit: "W",
            },
            Expose::Numeric {
                name: "energy",
                unit: "kWh",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockDevice;

    fn seeded_device() -> MockDevice {
        let device = MockDevice::new();
        device.seed(
            id::WINDOW_COVERING,
            window_covering_attrs::CURRENT_POSITION_LIFT_PERCENTAGE,
            vec![25],
        );
        device.seed(
            id::WINDOW_COVERING,
            window_covering_attrs::CURRENT_POSITION_TILT_PERCENTAGE,
            vec![100],
        );
        device
    }

    #[test]
    fn test_position_inversion() {
        assert_eq!(position_from_percentage(0), 100);
        assert_eq!(position_from_percentage(100), 0);
        assert_eq!(percentage_from_position(position_from_percentage(42)), 42);
    }

    #[tokio::test]
    async fn test_refresh_without_metering() {
        let state = refresh(&seeded_device()).await.unwrap();
        assert_eq!(state.position, Some(75));
        assert_eq!(state.tilt, Some(0));
        // Probes degraded to absent capabilities, not errors
        assert_eq!(state.power_w, None);
        assert_eq!(state.energy_kwh, None);
    }

    #[tokio::test]
    async fn test_refresh_with_metering() {
        let device = seeded_device();
        device.seed(
            id::ELECTRICAL_MEASUREMENT,
            electrical_attrs::ACTIVE_POWER,
            vec![0x2C, 0x01],
        );
        device.seed(
            id::METERING,
            metering_attrs::CURRENT_SUMM_DELIVERED,
            vec![0xD0, 0x07, 0x00, 0x00, 0x00, 0x00],
        );
        device.seed(id::METERING, metering_attrs::DIVISOR, vec![0xE8, 0x03, 0x00]);

        let state = refresh(&device).await.unwrap();
        assert_eq!(state.power_w, Some(300.0));
        assert_eq!(state.energy_kwh, Some(2.0));
    }

    #[tokio::test]
    async fn test_refresh_requires_cover_cluster() {
        let device = MockDevice::new();
        assert!(refresh(&device).await.is_err());
    }
}
