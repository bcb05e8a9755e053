//! Little-endian attribute payload readers
//!
//! ZCL numeric attributes arrive as little-endian payloads of odd
//! widths (uint48 for metering counters). Readers return `None` on a
//! short payload so that callers can treat a malformed report as a
//! missing value instead of an error.

/// Read a little-endian u16 from the start of a payload
#[must_use]
pub fn read_u16_le(payload: &[u8]) -> Option<u16> {
    let bytes = payload.get(..2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Read a little-endian i16 from the start of a payload
#[must_use]
pub fn read_i16_le(payload: &[u8]) -> Option<i16> {
    let bytes = payload.get(..2)?;
    Some(i16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Read a little-endian u24 (metering divisors) from the start of a
/// payload
#[must_use]
pub fn read_u24_le(payload: &[u8]) -> Option<u32> {
    let bytes = payload.get(..3)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
}

/// Read a little-endian u48 (metering counters) from the start of a
/// payload
#[must_use]
pub fn read_u48_le(payload: &[u8]) -> Option<u64> {
    let bytes = payload.get(..6)?;
    let mut buf = [0u8; 8];
    buf[..6].copy_from_slice(bytes);
    Some(u64::from_le_bytes(buf))
}
