//! Error types for the converter layer

use thiserror::Error;
use ubisys_output_config::ConfigError;
use ubisys_zcl::ZclError;

/// Errors that can occur while applying or refreshing converter fields
#[derive(Error, Debug)]
pub enum ConverterError {
    /// No converter registered for this model identifier
    #[error("unsupported model: {0}")]
    UnknownModel(String),

    /// Field key not handled by this converter
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Field value had the wrong JSON type
    #[error("expected a {0} value")]
    ExpectedType(&'static str),

    /// Output configuration error (catalog, codec or calibration)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Attribute access failed in the host runtime
    #[error("attribute access failed: {0}")]
    Zcl(#[from] ZclError),

    /// Raw configuration field was not valid hex
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
