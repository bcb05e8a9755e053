//! Capability descriptors published to the user-facing layer

use serde::Serialize;
use ubisys_output_config::MiredRange;

/// One exposed capability of a device
///
/// Serialized for the frontend; the tag tells the UI which widget to
/// render. Light exposes are rebuilt from the decoded output
/// configuration on every refresh, the rest are static per model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expose {
    /// A dimmable light endpoint, optionally with xy color and/or a
    /// tunable-white range
    Light {
        endpoint: u8,
        brightness: bool,
        color_xy: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        color_temp: Option<MiredRange>,
    },
    /// A window covering with lift and optionally tilt
    Cover {
        endpoint: u8,
        position: bool,
        tilt: bool,
    },
    /// A numeric measurement (power, energy)
    Numeric {
        name: &'static str,
        unit: &'static str,
    },
    /// Input action events emitted by stateless controls
    Action { values: Vec<&'static str> },
}
