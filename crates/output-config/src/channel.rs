//! Physical channel descriptors

use serde::{Deserialize, Serialize};

/// Role of one physical PWM output
///
/// Wire codes occupy the low nibble of the packed endpoint/function
/// byte: 0 is shared by `Unused` and `Mono` (disambiguated by the
/// endpoint index), 1..=8 are the named functions, 9 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelFunction {
    Unused,
    Mono,
    CoolWhite,
    WarmWhite,
    Red,
    Green,
    Blue,
    Amber,
    Turquoise,
    Violet,
    /// Reserved code 9 or any other unassigned nibble value
    Unknown,
}

impl ChannelFunction {
    /// Wire code for the low nibble of the packed byte
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Unused | Self::Mono => 0,
            Self::CoolWhite => 1,
            Self::WarmWhite => 2,
            Self::Red => 3,
            Self::Green => 4,
            Self::Blue => 5,
            Self::Amber => 6,
            Self::Turquoise => 7,
            Self::Violet => 8,
            Self::Unknown => 9,
        }
    }

    /// Map a wire code back to a function
    ///
    /// Code 0 is structurally overloaded between "no function" and
    /// "single-channel dimmer": an unassigned channel (endpoint 0)
    /// reads as `Unused`, anything bound to a real endpoint reads as
    /// `Mono`. The firmware documentation does not spell this out;
    /// observed device behavior matches the endpoint-based reading.
    #[must_use]
    pub fn from_code(code: u8, endpoint: u8) -> Self {
        match code {
            0 if endpoint == 0 => Self::Unused,
            0 => Self::Mono,
            1 => Self::CoolWhite,
            2 => Self::WarmWhite,
            3 => Self::Red,
            4 => Self::Green,
            5 => Self::Blue,
            6 => Self::Amber,
            7 => Self::Turquoise,
            8 => Self::Violet,
            _ => Self::Unknown,
        }
    }

    /// Whether this function carries a chromaticity coordinate
    #[must_use]
    pub fn has_chromaticity(self) -> bool {
        !matches!(self, Self::Unused | Self::Mono | Self::Unknown)
    }
}

/// One physical PWM channel's assignment
///
/// Chromaticity is stored in raw 16-bit fixed point (1/65536 units of
/// the CIE 1931 coordinate); `None` is the wire sentinel 0xFFFF for
/// functions that carry no color. Flux `None` is the wire sentinel
/// 0xFF meaning device-default relative luminous output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    /// Logical light endpoint this channel drives, 0 = unassigned
    pub endpoint: u8,
    pub function: ChannelFunction,
    /// Relative flux 0..=254, `None` = device default
    pub flux: Option<u8>,
    /// CIE x in 1/65536 units, `None` = no chromaticity
    pub x: Option<u16>,
    /// CIE y in 1/65536 units, `None` = no chromaticity
    pub y: Option<u16>,
}

impl ChannelDescriptor {
    /// An unassigned channel
    #[must_use]
    pub const fn unused() -> Self {
        Self {
            endpoint: 0,
            function: ChannelFunction::Unused,
            flux: None,
            x: None,
            y: None,
        }
    }

    /// A single-color dimmer channel with no chromaticity
    #[must_use]
    pub const fn mono(endpoint: u8) -> Self {
        Self {
            endpoint,
            function: ChannelFunction::Mono,
            flux: None,
            x: None,
            y: None,
        }
    }

    /// A color primary at the given CIE 1931 coordinate
    #[must_use]
    pub fn color(endpoint: u8, function: ChannelFunction, x: f64, y: f64) -> Self {
        Self {
            endpoint,
            function,
            flux: None,
            x: Some(raw_from_fraction(x)),
            y: Some(raw_from_fraction(y)),
        }
    }
}

/// Convert a real coordinate in [0, 1] to raw 1/65536 fixed point,
/// clamped to 16 bits
#[must_use]
pub fn raw_from_fraction(value: f64) -> u16 {
    let raw = (value * 65536.0).round();
    if raw <= 0.0 {
        0
    } else if raw >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        raw as u16
    }
}

/// Convert raw 1/65536 fixed point back to a real coordinate
#[must_use]
pub fn fraction_from_raw(raw: u16) -> f64 {
    f64::from(raw) / 65536.0
}
