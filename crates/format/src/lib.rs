//! Primitive Bluetooth GATT field codecs.
//!
//! Stateless decoders for the field formats that GATT characteristics are
//! assembled from. Each decoder takes a [`DataView`], an absolute offset and,
//! for multi-byte fields, a [`ByteOrder`]; each fails with
//! [`BufferError::Underflow`] when the field does not fit.
//!
//! - [`decode_float`] - IEEE-11073 32-bit FLOAT
//! - [`decode_date_time`] - `org.bluetooth.characteristic.date_time` (0x2A08)
//! - [`decode_temperature_type`] - `org.bluetooth.characteristic.temperature_type` (0x2A1D)
//!
//! # Example
//!
//! ```
//! use ble_gatt_format::{decode_float, decode_temperature_type, ByteOrder, DataView, TemperatureType};
//!
//! let view = DataView::new(&[0x69, 0x01, 0x00, 0xFF, 0x02]);
//! assert_eq!(decode_float(view, 0, ByteOrder::LittleEndian).unwrap(), 36.1);
//! assert_eq!(decode_temperature_type(view, 4).unwrap(), TemperatureType::Body);
//! ```

mod date_time;
mod float;
mod temperature_type;

pub use ble_gatt_buffers::{BufferError, ByteOrder, DataView};

pub use date_time::{decode_date_time, decode_date_time_fields, DateTimeFields, DATE_TIME_SIZE};
pub use float::{decode_float, decode_float32, Float32, ReservedValue, FLOAT_SIZE};
pub use temperature_type::{decode_temperature_type, TemperatureType, TEMPERATURE_TYPE_SIZE};
