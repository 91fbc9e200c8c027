//! Decoders for Bluetooth GATT characteristic values.
//!
//! Currently covers `org.bluetooth.characteristic.temperature_measurement`
//! (0x2A1C), as sent by Health Thermometer peripherals. Transport is out of
//! scope: hand the decoder the characteristic value bytes however they were
//! obtained.
//!
//! # Example
//!
//! ```
//! use ble_gatt::{ByteOrder, TemperatureMeasurement, TemperatureType, TemperatureUnit};
//!
//! let bytes = [0x04, 0x69, 0x01, 0x00, 0xFF, 0x02];
//! let record = TemperatureMeasurement::new(&bytes, ByteOrder::LittleEndian);
//!
//! assert_eq!(record.value().unwrap(), 36.1);
//! assert_eq!(record.unit().unwrap(), TemperatureUnit::Celsius);
//! assert_eq!(record.timestamp().unwrap(), None);
//! assert_eq!(record.site().unwrap(), Some(TemperatureType::Body));
//! ```

pub mod characteristic;
mod options;
mod temperature_measurement;

pub use ble_gatt_buffers::{BufferError, ByteOrder};
pub use ble_gatt_format::{DateTimeFields, TemperatureType};

pub use options::{ParseOptions, SitePresence};
pub use temperature_measurement::{
    FieldLayout, Flags, Measurement, TemperatureMeasurement, TemperatureUnit, LAYOUT,
};
