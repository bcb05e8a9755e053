//! Wire codec for the output configuration attribute
//!
//! Buffer format (46 bytes for a full configuration):
//! ```text
//! [Array type: 1 byte = 0x48]
//! [Element type: 1 byte = 0x41] (octet string)
//! [Element count: 2 bytes LE = 6]
//! 6 x [Length: 1 byte = 6]
//!     [Endpoint/function: 1 byte] (endpoint high nibble, function low)
//!     [Flux: 1 byte] (0xFF = device default)
//!     [CIE x: 2 bytes LE] (0xFFFF = no chromaticity)
//!     [CIE y: 2 bytes LE]
//! ```

use crate::calibration::ChannelPatch;
use crate::channel::{raw_from_fraction, ChannelDescriptor, ChannelFunction};
use crate::error::ConfigError;
use bytes::{BufMut, Bytes, BytesMut};

/// ZCL array of octet strings, six elements, count little-endian
pub const HEADER: [u8; 4] = [0x48, 0x41, 0x06, 0x00];

/// Physical PWM channels on the device
pub const CHANNEL_COUNT: usize = 6;

/// Payload bytes per channel element (excluding the length prefix)
pub const ELEMENT_LEN: usize = 6;

/// Total size of a complete configuration buffer
pub const BUFFER_LEN: usize = HEADER.len() + CHANNEL_COUNT * (1 + ELEMENT_LEN);

/// Encode exactly six channel descriptors into the wire format
///
/// # Errors
/// Returns [`ConfigError::InvalidChannelCount`] unless `channels` has
/// exactly six entries.
pub fn encode(channels: &[ChannelDescriptor]) -> Result<Bytes, ConfigError> {
    let fixed: &[ChannelDescriptor; CHANNEL_COUNT] = channels
        .try_into()
        .map_err(|_| ConfigError::InvalidChannelCount(channels.len()))?;
    Ok(encode_exact(fixed))
}

/// Encode a fixed six-channel array; infallible by construction
#[must_use]
pub fn encode_exact(channels: &[ChannelDescriptor; CHANNEL_COUNT]) -> Bytes {
    let mut buf = BytesMut::with_capacity(BUFFER_LEN);
    buf.put_slice(&HEADER);

    for ch in channels {
        buf.put_u8(ELEMENT_LEN as u8);
        buf.put_u8(ch.endpoint << 4 | ch.function.code());
        buf.put_u8(ch.flux.unwrap_or(0xFF));
        buf.put_u16_le(ch.x.unwrap_or(0xFFFF));
        buf.put_u16_le(ch.y.unwrap_or(0xFFFF));
    }

    buf.freeze()
}

/// Decode a configuration buffer into channel descriptors
///
/// Truncated buffers decode partially: elements are consumed until a
/// length prefix would read past the end, and whatever was decoded so
/// far is returned. A device report cut short mid-array therefore
/// degrades to fewer channels instead of failing the caller.
///
/// # Errors
/// Returns [`ConfigError::BufferTooShort`] only when the buffer cannot
/// hold the 4-byte header.
pub fn decode(buffer: &[u8]) -> Result<Vec<ChannelDescriptor>, ConfigError> {
    if buffer.len() < HEADER.len() {
        return Err(ConfigError::BufferTooShort(buffer.len()));
    }

    let count = u16::from_le_bytes([buffer[2], buffer[3]]) as usize;
    let mut channels = Vec::with_capacity(CHANNEL_COUNT);
    let mut offset = HEADER.len();

    for _ in 0..count.min(CHANNEL_COUNT) {
        if offset >= buffer.len() {
            break;
        }
        let len = buffer[offset] as usize;
        offset += 1;
        if len < ELEMENT_LEN || offset + len > buffer.len() {
            break;
        }
        channels.push(decode_element(&buffer[offset..offset + ELEMENT_LEN]));
        offset += len;
    }

    Ok(channels)
}

fn decode_element(payload: &[u8]) -> ChannelDescriptor {
    let endpoint = payload[0] >> 4;
    let function = ChannelFunction::from_code(payload[0] & 0x0F, endpoint);

    let flux = match payload[1] {
        0xFF => None,
        v => Some(v),
    };
    let x = match u16::from_le_bytes([payload[2], payload[3]]) {
        0xFFFF => None,
        v => Some(v),
    };
    let y = match u16::from_le_bytes([payload[4], payload[5]]) {
        0xFFFF => None,
        v => Some(v),
    };

    ChannelDescriptor {
        endpoint,
        function,
        flux,
        x,
        y,
    }
}

/// Overwrite calibration fields of a single channel in an existing
/// buffer, echoing every other byte unchanged
///
/// Chromaticity inputs are real coordinates in [0, 1], converted to
/// raw fixed point. Unlike decode, which treats 0xFFFF as the
/// "no chromaticity" sentinel, calibration always writes a concrete
/// value; it cannot re-select the sentinel.
///
/// # Errors
/// Returns [`ConfigError::ChannelIndexOutOfRange`] for channel indices
/// outside 1..=6, or [`ConfigError::BufferTooShort`] when the buffer
/// does not contain that channel's payload.
pub fn patch_channel(
    buffer: &[u8],
    channel: u8,
    patch: &ChannelPatch,
) -> Result<Bytes, ConfigError> {
    if !(1..=CHANNEL_COUNT as u8).contains(&channel) {
        return Err(ConfigError::ChannelIndexOutOfRange(channel));
    }

    // Skip the header, the preceding elements, and the length prefix
    let payload = HEADER.len() + (channel as usize - 1) * (1 + ELEMENT_LEN) + 1;
    if buffer.len() < payload + ELEMENT_LEN {
        return Err(ConfigError::BufferTooShort(buffer.len()));
    }

    let mut out = BytesMut::from(buffer);
    if let Some(flux) = patch.flux {
        out[payload + 1] = flux;
    }
    if let Some(x) = patch.x {
        out[payload + 2..payload + 4].copy_from_slice(&raw_from_fraction(x).to_le_bytes());
    }
    if let Some(y) = patch.y {
        out[payload + 4..payload + 6].copy_from_slice(&raw_from_fraction(y).to_le_bytes());
    }

    Ok(out.freeze())
}
