//! `org.bluetooth.characteristic.temperature_type` (assigned number 0x2A1D).

use std::fmt;

use ble_gatt_buffers::{BufferError, DataView};
use serde::{Serialize, Serializer};

/// Width of an encoded temperature_type in bytes.
pub const TEMPERATURE_TYPE_SIZE: usize = 1;

/// Body location a temperature was measured at.
///
/// Codes 1-9 are assigned; anything else, including 0, decodes to
/// [`TemperatureType::Unknown`] carrying the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureType {
    Armpit,
    Body,
    Ear,
    Finger,
    GastroIntestinalTract,
    Mouth,
    Rectum,
    Toe,
    Tympanum,
    Unknown(u8),
}

/// Assigned codes 1..=9, in order.
const ASSIGNED: [(TemperatureType, &str); 9] = [
    (TemperatureType::Armpit, "Armpit"),
    (TemperatureType::Body, "Body (general)"),
    (TemperatureType::Ear, "Ear (usually ear lobe)"),
    (TemperatureType::Finger, "Finger"),
    (TemperatureType::GastroIntestinalTract, "Gastro-intestinal Tract"),
    (TemperatureType::Mouth, "Mouth"),
    (TemperatureType::Rectum, "Rectum"),
    (TemperatureType::Toe, "Toe"),
    (TemperatureType::Tympanum, "Tympanum (ear drum)"),
];

impl TemperatureType {
    /// Looks up a wire code.
    pub fn from_code(code: u8) -> Self {
        match code {
            1..=9 => ASSIGNED[usize::from(code) - 1].0,
            _ => TemperatureType::Unknown(code),
        }
    }

    /// Returns the wire code.
    pub fn code(self) -> u8 {
        match self {
            TemperatureType::Unknown(code) => code,
            known => ASSIGNED
                .iter()
                .position(|(ty, _)| *ty == known)
                .map_or(0, |index| index as u8 + 1),
        }
    }

    /// Returns the assigned label, or `""` for [`TemperatureType::Unknown`].
    pub fn label(self) -> &'static str {
        match self {
            TemperatureType::Unknown(_) => "",
            known => ASSIGNED[usize::from(known.code()) - 1].1,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, TemperatureType::Unknown(_))
    }
}

impl From<u8> for TemperatureType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for TemperatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TemperatureType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Decodes the temperature_type byte at `offset`.
pub fn decode_temperature_type(view: DataView<'_>, offset: usize) -> Result<TemperatureType, BufferError> {
    Ok(TemperatureType::from_code(view.get_u8(offset)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_byte() {
        for code in 0..=u8::MAX {
            assert_eq!(TemperatureType::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(TemperatureType::from_code(0), TemperatureType::Unknown(0));
        assert_eq!(TemperatureType::from_code(10), TemperatureType::Unknown(10));
        assert_eq!(TemperatureType::from_code(0xFF).label(), "");
        assert!(!TemperatureType::from_code(0).is_known());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TemperatureType::Ear.to_string(), "Ear (usually ear lobe)");
        assert_eq!(TemperatureType::Unknown(42).to_string(), "");
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(
            decode_temperature_type(DataView::new(&[]), 0),
            Err(BufferError::Underflow {
                offset: 0,
                needed: 1,
                len: 0
            })
        );
    }
}
