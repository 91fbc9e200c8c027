//! Assigned numbers of the characteristics this crate understands.

/// `org.bluetooth.characteristic.temperature_measurement`
pub const TEMPERATURE_MEASUREMENT: u16 = 0x2A1C;

/// `org.bluetooth.characteristic.temperature_type`
pub const TEMPERATURE_TYPE: u16 = 0x2A1D;

/// `org.bluetooth.characteristic.date_time`
pub const DATE_TIME: u16 = 0x2A08;
