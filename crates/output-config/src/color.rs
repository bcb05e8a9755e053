//! Color-temperature range derivation
//!
//! A tunable-white endpoint is driven by a cool-white and a warm-white
//! channel. The user-facing mired range is derived from those two
//! channels' chromaticities every time the configuration is read; it
//! is never cached across configuration writes.

use crate::channel::{fraction_from_raw, ChannelDescriptor, ChannelFunction};
use serde::Serialize;

/// Color-temperature range in mireds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MiredRange {
    pub min: u16,
    pub max: u16,
}

/// Fallback when an endpoint has no usable cool/warm pair,
/// roughly 6500 K down to 1800 K
pub const DEFAULT_MIRED_RANGE: MiredRange = MiredRange { min: 153, max: 555 };

/// McCamy approximation of correlated color temperature in kelvin
/// from a CIE 1931 xy coordinate
#[must_use]
pub fn mccamy_cct(x: f64, y: f64) -> f64 {
    let n = (x - 0.3320) / (0.1858 - y);
    449.0 * n.powi(3) + 3525.0 * n.powi(2) + 6823.3 * n + 5520.33
}

/// Color temperature of one channel in mireds, if it carries a
/// chromaticity yielding a finite positive temperature
fn channel_mireds(channel: &ChannelDescriptor) -> Option<u16> {
    let x = fraction_from_raw(channel.x?);
    let y = fraction_from_raw(channel.y?);
    let cct = mccamy_cct(x, y);
    if !cct.is_finite() || cct <= 0.0 {
        return None;
    }
    let mireds = (1_000_000.0 / cct).round();
    if mireds < 1.0 || mireds > f64::from(u16::MAX) {
        return None;
    }
    Some(mireds as u16)
}

/// Derive the mired range exposed for one light endpoint
///
/// Scans the decoded channels for the cool-white and warm-white
/// channels assigned to `endpoint`. Falls back to
/// [`DEFAULT_MIRED_RANGE`] unless both are present with usable
/// chromaticities.
#[must_use]
pub fn mired_range(channels: &[ChannelDescriptor], endpoint: u8) -> MiredRange {
    let mireds_of = |function: ChannelFunction| {
        channels
            .iter()
            .find(|c| c.endpoint == endpoint && c.function == function)
            .and_then(channel_mireds)
    };

    match (
        mireds_of(ChannelFunction::CoolWhite),
        mireds_of(ChannelFunction::WarmWhite),
    ) {
        (Some(cool), Some(warm)) => MiredRange {
            min: cool.min(warm),
            max: cool.max(warm),
        },
        _ => DEFAULT_MIRED_RANGE,
    }
}
