//! Converter for the C4 control unit
//!
//! Four stateless inputs that emit action events. The input microcode
//! (which ZCL commands each input sends) lives in manufacturer-
//! specific attributes; reading them is a best-effort capability
//! probe, since older firmware revisions reject the read.

use crate::definition::{try_read, Definition};
use crate::expose::Expose;
use std::collections::HashMap;
use tracing::debug;
use ubisys_zcl::cluster::{device_setup_attrs, id};
use ubisys_zcl::DeviceEndpoint;

/// Model identifier reported by the Basic cluster
pub const MODEL: &str = "C4";

/// Physical inputs on the unit
pub const INPUT_COUNT: usize = 4;

/// Raw input setup as read from the Device Setup cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCapability {
    /// Per-input configuration flags
    pub configurations: Vec<u8>,
    /// Input action microcode blob, empty when unreadable
    pub actions: Vec<u8>,
}

/// Probe the input setup
///
/// `None` means the device does not expose its input configuration,
/// not that an operation failed; callers fall back to the static
/// action list.
pub async fn probe_inputs<D: DeviceEndpoint>(device: &D) -> Option<InputCapability> {
    let configurations = try_read(
        device,
        id::DEVICE_SETUP,
        device_setup_attrs::INPUT_CONFIGURATIONS,
    )
    .await?;
    let actions = try_read(device, id::DEVICE_SETUP, device_setup_attrs::INPUT_ACTIONS)
        .await
        .unwrap_or_default();

    debug!(
        model = MODEL,
        inputs = configurations.len(),
        "read input configuration"
    );
    Some(InputCapability {
        configurations,
        actions,
    })
}

/// Static definition for the supported-device table
#[must_use]
pub fn definition() -> Definition {
    Definition {
        model: MODEL,
        vendor: "ubisys",
        description: "Control unit C4",
        endpoints: HashMap::from([("in1", 1), ("in2", 2), ("in3", 3), ("in4", 4)]),
        supports_ota: true,
        exposes: vec![Expose::Action {
            values: vec![
                "1_toggle", "1_on", "1_off", "2_toggle", "2_on", "2_off", "3_toggle", "3_on",
                "3_off", "4_toggle", "4_on", "4_off",
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockDevice;

    #[tokio::test]
    async fn test_probe_absent_capability() {
        let device = MockDevice::new();
        assert_eq!(probe_inputs(&device).await, None);
    }

    #[tokio::test]
    async fn test_probe_reads_configuration() {
        let device = MockDevice::new();
        device.seed(
            id::DEVICE_SETUP,
            device_setup_attrs::INPUT_CONFIGURATIONS,
            vec![0x00, 0x00, 0x00, 0x00],
        );

        let capability = probe_inputs(&device).await.unwrap();
        assert_eq!(capability.configurations.len(), INPUT_COUNT);
        // Actions attribute missing degrades to an empty blob
        assert!(capability.actions.is_empty());
    }

    #[test]
    fn test_definition_covers_all_inputs() {
        let definition = definition();
        assert_eq!(definition.endpoints.len(), INPUT_COUNT);
        match &definition.exposes[0] {
            Expose::Action { values } => assert_eq!(values.len(), INPUT_COUNT * 3),
            other => panic!("unexpected expose {other:?}"),
        }
    }
}
