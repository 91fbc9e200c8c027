//! Byte order of multi-byte fields.

use serde::{Deserialize, Serialize};

/// Byte order used when assembling multi-byte integers.
///
/// Single-byte fields are unaffected. The default is big-endian, the network
/// order most raw captures are written in; Bluetooth itself transmits
/// little-endian, so payloads taken straight off the air need
/// [`ByteOrder::LittleEndian`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Maps a `little_endian` flag onto a byte order.
    pub fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    pub fn is_little_endian(self) -> bool {
        self == ByteOrder::LittleEndian
    }

    /// Assembles an unsigned 16-bit integer.
    #[inline]
    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    /// Assembles an unsigned 32-bit integer.
    #[inline]
    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_big_endian() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
        assert!(!ByteOrder::default().is_little_endian());
    }

    #[test]
    fn test_from_little_endian() {
        assert_eq!(ByteOrder::from_little_endian(true), ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::from_little_endian(false), ByteOrder::BigEndian);
    }

    #[test]
    fn test_u16() {
        assert_eq!(ByteOrder::BigEndian.u16([0x07, 0xE1]), 2017);
        assert_eq!(ByteOrder::LittleEndian.u16([0xE1, 0x07]), 2017);
    }

    #[test]
    fn test_u32() {
        assert_eq!(ByteOrder::BigEndian.u32([0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
        assert_eq!(ByteOrder::LittleEndian.u32([0x01, 0x02, 0x03, 0x04]), 0x0403_0201);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ByteOrder::LittleEndian).unwrap(),
            "\"little-endian\""
        );
        let order: ByteOrder = serde_json::from_str("\"big-endian\"").unwrap();
        assert_eq!(order, ByteOrder::BigEndian);
    }
}
