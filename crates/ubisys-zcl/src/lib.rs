//! ZCL surface for ubisys devices
//!
//! Cluster and attribute identifiers used by the converters, ubisys
//! manufacturer-specific additions, and the attribute access interface
//! the host gateway runtime provides per device endpoint.

pub mod cluster;
pub mod endpoint;
pub mod value;

pub use cluster::MANUFACTURER_CODE;
pub use endpoint::{DeviceEndpoint, ZclError};
