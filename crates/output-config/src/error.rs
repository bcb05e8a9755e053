//! Error types for output configuration handling

use thiserror::Error;

/// Output configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Requested mode name is not in the catalog. The message carries
    /// the full list of valid names; callers surface it verbatim.
    #[error("unknown output configuration \"{name}\", valid modes are: {valid}")]
    UnknownMode { name: String, valid: String },

    /// A configuration must describe exactly six physical channels
    #[error("expected exactly 6 channel descriptors, got {0}")]
    InvalidChannelCount(usize),

    /// Channel indices are 1-based and bounded by the channel count
    #[error("channel index {0} out of range 1..=6")]
    ChannelIndexOutOfRange(u8),

    /// Buffer is shorter than the structure being read from it
    #[error("configuration buffer too short: {0} bytes")]
    BufferTooShort(usize),

    /// Calibration request failed validation; names the offending field
    #[error("invalid calibration request: {0}")]
    InvalidCalibration(String),
}
