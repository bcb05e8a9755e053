//! Attribute access interface provided by the host runtime
//!
//! The gateway runtime owns device discovery, ZCL framing, transport
//! retries and timeouts. Converters only see one endpoint of one
//! device and speak to it through this trait; every call is a suspend
//! point bounded by the runtime's own timeout policy.

use std::future::Future;
use thiserror::Error;

/// Attribute access errors surfaced by the host runtime
#[derive(Error, Debug)]
pub enum ZclError {
    #[error("attribute {attribute:#06X} not supported on cluster {cluster:#06X}")]
    UnsupportedAttribute { cluster: u16, attribute: u16 },

    #[error("device returned ZCL status {0:#04X}")]
    DeviceStatus(u8),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timeout")]
    Timeout,
}

/// One addressable endpoint of one Zigbee device
///
/// Manufacturer-specific attributes are qualified with the code from
/// [`manufacturer_code`](DeviceEndpoint::manufacturer_code) by the
/// runtime; converters never build ZCL frames themselves.
pub trait DeviceEndpoint {
    /// Manufacturer code applied to manufacturer-specific attributes
    fn manufacturer_code(&self) -> Option<u16>;

    /// Read one attribute, returning its raw payload bytes
    fn read_attribute(
        &self,
        cluster: u16,
        attribute: u16,
    ) -> impl Future<Output = Result<Vec<u8>, ZclError>> + Send;

    /// Write one attribute from raw payload bytes
    fn write_attribute(
        &self,
        cluster: u16,
        attribute: u16,
        payload: &[u8],
    ) -> impl Future<Output = Result<(), ZclError>> + Send;
}
