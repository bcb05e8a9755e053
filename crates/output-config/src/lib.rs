//! Output configuration handling for the ubisys LD6 LED controller
//!
//! The LD6 drives six physical PWM channels. A manufacturer-specific
//! attribute describes how those channels map onto logical light
//! endpoints and color primaries (CIE 1931 xy plus relative flux per
//! channel). This crate implements the binary wire format for that
//! attribute, a catalog of named factory layouts, and the color-science
//! math that derives a color-temperature range from a decoded layout.

pub mod calibration;
pub mod catalog;
pub mod channel;
pub mod codec;
pub mod color;
pub mod error;

pub use calibration::{CalibrationRequest, ChannelPatch};
pub use catalog::{Catalog, Identified, OutputConfiguration};
pub use channel::{ChannelDescriptor, ChannelFunction};
pub use codec::{decode, encode, patch_channel, BUFFER_LEN, CHANNEL_COUNT, HEADER};
pub use color::{mired_range, MiredRange, DEFAULT_MIRED_RANGE};
pub use error::ConfigError;
