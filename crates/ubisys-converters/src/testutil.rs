//! In-memory device endpoint for converter tests

use std::collections::HashMap;
use std::sync::Mutex;
use ubisys_zcl::{DeviceEndpoint, ZclError, MANUFACTURER_CODE};

/// Mock device holding attributes in a map and recording writes
pub struct MockDevice {
    attrs: Mutex<HashMap<(u16, u16), Vec<u8>>>,
    writes: Mutex<Vec<(u16, u16, Vec<u8>)>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            attrs: Mutex::new(HashMap::new()),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Preload an attribute value
    pub fn seed(&self, cluster: u16, attribute: u16, payload: Vec<u8>) {
        self.attrs
            .lock()
            .unwrap()
            .insert((cluster, attribute), payload);
    }

    /// Most recent write, if any
    pub fn last_write(&self) -> Option<(u16, u16, Vec<u8>)> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl DeviceEndpoint for MockDevice {
    fn manufacturer_code(&self) -> Option<u16> {
        Some(MANUFACTURER_CODE)
    }

    async fn read_attribute(&self, cluster: u16, attribute: u16) -> Result<Vec<u8>, ZclError> {
        self.attrs
            .lock()
            .unwrap()
            .get(&(cluster, attribute))
            .cloned()
            .ok_or(ZclError::UnsupportedAttribute { cluster, attribute })
    }

    async fn write_attribute(
        &self,
        cluster: u16,
        attribute: u16,
        payload: &[u8],
    ) -> Result<(), ZclError> {
        self.attrs
            .lock()
            .unwrap()
            .insert((cluster, attribute), payload.to_vec());
        self.writes
            .lock()
            .unwrap()
            .push((cluster, attribute, payload.to_vec()));
        Ok(())
    }
}
