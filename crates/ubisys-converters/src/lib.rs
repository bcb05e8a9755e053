//! Device converters for ubisys Zigbee hardware
//!
//! Extends the gateway's supported-device table with the ubisys LED
//! controller (LD6), shutter/meter controller (J1) and control-unit
//! switch (C4). Each converter maps between wire-level ZCL attributes
//! and the gateway's user-facing state keys and declares the device's
//! static metadata (endpoint map, exposed capabilities, OTA support).

pub mod definition;
pub mod error;
pub mod expose;
pub mod led;
pub mod shutter;
pub mod switch;

pub use definition::{Definition, Registry};
pub use error::ConverterError;
pub use expose::Expose;
pub use led::LedController;

#[cfg(test)]
pub(crate) mod testutil;
