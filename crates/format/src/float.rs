//! IEEE-11073 32-bit FLOAT.
//!
//! Reference: IEEE 11073-20601, section "FLOAT-Type". The upper 8 bits of the
//! word hold a signed decimal exponent, the lower 24 bits a signed mantissa.

use ble_gatt_buffers::{BufferError, ByteOrder, DataView};
use serde::Serialize;

/// Width of an encoded FLOAT in bytes.
pub const FLOAT_SIZE: usize = 4;

const MANTISSA_MASK: i32 = 0x00FF_FFFF;
const MANTISSA_SIGN: i32 = 0x0080_0000;

/// Special values reserved by IEEE 11073-20601 (exponent 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservedValue {
    /// Not a number, mantissa `0x7FFFFF`.
    Nan,
    /// Not at this resolution, mantissa `0x800000`.
    NRes,
    /// Mantissa `0x7FFFFE`.
    PositiveInfinity,
    /// Mantissa `0x800002`.
    NegativeInfinity,
    /// Reserved for future use, mantissa `0x800001`.
    Reserved,
}

/// A FLOAT split into its signed mantissa and exponent.
///
/// ```
/// use ble_gatt_format::Float32;
///
/// let float = Float32::from_bits(0xFF00_0169);
/// assert_eq!(float, Float32 { mantissa: 361, exponent: -1 });
/// assert_eq!(float.value(), 36.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Float32 {
    /// 24-bit two's-complement mantissa, in `[-8388608, 8388607]`.
    pub mantissa: i32,
    /// 8-bit two's-complement decimal exponent.
    pub exponent: i8,
}

impl Float32 {
    /// Splits a 32-bit word into mantissa and exponent.
    pub fn from_bits(word: u32) -> Self {
        let mut mantissa = (word as i32) & MANTISSA_MASK;
        if mantissa & MANTISSA_SIGN != 0 {
            mantissa = -(!(mantissa - 1) & MANTISSA_MASK);
        }
        let exponent = (word >> 24) as u8 as i8;
        Self { mantissa, exponent }
    }

    /// Returns `mantissa * 10^exponent`.
    ///
    /// Reserved codes are not special-cased and come out as ordinary numbers;
    /// use [`Float32::special`] to detect them.
    pub fn value(self) -> f64 {
        f64::from(self.mantissa) * 10f64.powi(i32::from(self.exponent))
    }

    /// Returns the reserved value this FLOAT encodes, if any.
    pub fn special(self) -> Option<ReservedValue> {
        if self.exponent != 0 {
            return None;
        }
        match self.mantissa {
            0x007F_FFFF => Some(ReservedValue::Nan),
            -0x0080_0000 => Some(ReservedValue::NRes),
            0x007F_FFFE => Some(ReservedValue::PositiveInfinity),
            -0x007F_FFFE => Some(ReservedValue::NegativeInfinity),
            -0x007F_FFFF => Some(ReservedValue::Reserved),
            _ => None,
        }
    }
}

/// Reads the FLOAT at `offset` without evaluating it.
pub fn decode_float32(
    view: DataView<'_>,
    offset: usize,
    order: ByteOrder,
) -> Result<Float32, BufferError> {
    Ok(Float32::from_bits(view.get_u32(offset, order)?))
}

/// Decodes the FLOAT at `offset` to a number.
pub fn decode_float(view: DataView<'_>, offset: usize, order: ByteOrder) -> Result<f64, BufferError> {
    Ok(decode_float32(view, offset, order)?.value())
}
