//! Converter definitions and the supported-device table

use crate::error::ConverterError;
use crate::expose::Expose;
use crate::{led, shutter, switch};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use ubisys_zcl::{DeviceEndpoint, ZclError};

/// Static metadata for one supported device model
#[derive(Debug, Clone, Serialize)]
pub struct Definition {
    /// Model identifier as reported by the Basic cluster
    pub model: &'static str,
    pub vendor: &'static str,
    pub description: &'static str,
    /// Friendly endpoint name to endpoint ID
    pub endpoints: HashMap<&'static str, u8>,
    /// Whether the OTA subsystem should offer updates to this model
    pub supports_ota: bool,
    /// Baseline capability list; the LD6 converter rebuilds its light
    /// exposes dynamically from the decoded output configuration
    pub exposes: Vec<Expose>,
}

/// Supported-device table, keyed by model identifier
pub struct Registry {
    definitions: DashMap<&'static str, Arc<Definition>>,
}

impl Registry {
    /// Registry seeded with all ubisys definitions
    #[must_use]
    pub fn standard() -> Self {
        let registry = Self {
            definitions: DashMap::new(),
        };
        registry.register(led::definition());
        registry.register(shutter::definition());
        registry.register(switch::definition());
        registry
    }

    /// Add or replace a definition
    pub fn register(&self, definition: Definition) {
        self.definitions
            .insert(definition.model, Arc::new(definition));
    }

    /// Look up a definition by model identifier
    ///
    /// # Errors
    /// Returns [`ConverterError::UnknownModel`] when the model is not
    /// in the table.
    pub fn get(&self, model: &str) -> Result<Arc<Definition>, ConverterError> {
        self.definitions
            .get(model)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| ConverterError::UnknownModel(model.to_string()))
    }

    /// All registered model identifiers
    #[must_use]
    pub fn models(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|entry| *entry.key()).collect()
    }
}

/// Best-effort attribute read for capability probing
///
/// Devices differ in which optional attributes they implement; a
/// failed probe means "capability absent", never an error for the
/// caller.
pub(crate) async fn try_read<D: DeviceEndpoint>(
    device: &D,
    cluster: u16,
    attribute: u16,
) -> Option<Vec<u8>> {
    match device.read_attribute(cluster, attribute).await {
        Ok(payload) => Some(payload),
        Err(ZclError::UnsupportedAttribute { .. }) => None,
        Err(e) => {
            debug!(cluster, attribute, "capability probe failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_has_all_models() {
        let registry = Registry::standard();
        let mut models = registry.models();
        models.sort_unstable();
        assert_eq!(models, vec!["C4", "J1", "LD6"]);
    }

    #[test]
    fn test_unknown_model() {
        let registry = Registry::standard();
        let err = registry.get("S1").unwrap_err();
        assert!(matches!(err, ConverterError::UnknownModel(_)));
    }
}
