//! `org.bluetooth.characteristic.temperature_measurement` (assigned number 0x2A1C).
//!
//! | Offset  | Size | Field                               | Present when          |
//! |---------|------|-------------------------------------|-----------------------|
//! | 0       | 1    | Flags                               | always                |
//! | 1       | 4    | Temperature value (IEEE-11073 FLOAT) | always               |
//! | 5       | 7    | Time stamp (date_time)              | flag bit 1            |
//! | 5 or 12 | 1    | Temperature type                    | see [`SitePresence`]  |

use std::fmt;

use ble_gatt_buffers::{BufferError, ByteOrder, DataView};
use ble_gatt_format::{
    decode_date_time, decode_float, decode_temperature_type, TemperatureType, DATE_TIME_SIZE,
    FLOAT_SIZE, TEMPERATURE_TYPE_SIZE,
};
use serde::Serialize;
use tracing::trace;

use crate::{ParseOptions, SitePresence};

/// Byte widths of the fields of a temperature measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub flags: usize,
    pub value: usize,
    pub timestamp: usize,
    pub site: usize,
}

/// The temperature measurement field table.
pub const LAYOUT: FieldLayout = FieldLayout {
    flags: 1,
    value: FLOAT_SIZE,
    timestamp: DATE_TIME_SIZE,
    site: TEMPERATURE_TYPE_SIZE,
};

impl FieldLayout {
    pub const fn value_offset(&self) -> usize {
        self.flags
    }

    pub const fn timestamp_offset(&self) -> usize {
        self.flags + self.value
    }

    /// The site follows the timestamp when there is one.
    pub const fn site_offset(&self, has_timestamp: bool) -> usize {
        if has_timestamp {
            self.timestamp_offset() + self.timestamp
        } else {
            self.timestamp_offset()
        }
    }

    /// Number of bytes a record with these flags occupies.
    pub fn record_len(&self, flags: Flags, site_presence: SitePresence) -> usize {
        let mut len = self.timestamp_offset();
        if flags.has_timestamp() {
            len += self.timestamp;
        }
        if flags.has_site(site_presence) {
            len += self.site;
        }
        len
    }
}

/// The leading flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Flags(pub u8);

impl Flags {
    /// Bit 0: value is in Fahrenheit rather than Celsius.
    pub const FAHRENHEIT: u8 = 0x01;
    /// Bit 1: a time stamp follows the value.
    pub const TIMESTAMP_PRESENT: u8 = 0x02;
    /// Bit 2: a temperature type follows.
    pub const SITE_PRESENT: u8 = 0x04;

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_fahrenheit(self) -> bool {
        self.0 & Self::FAHRENHEIT != 0
    }

    pub fn has_timestamp(self) -> bool {
        self.0 & Self::TIMESTAMP_PRESENT != 0
    }

    pub fn has_site(self, site_presence: SitePresence) -> bool {
        self.0 & site_presence.mask() != 0
    }

    pub fn unit(self) -> TemperatureUnit {
        if self.is_fahrenheit() {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        }
    }
}

/// Unit of the temperature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every field of a temperature measurement, decoded at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub flags: Flags,
    pub value: f64,
    pub unit: TemperatureUnit,
    /// Milliseconds since the Unix epoch, local time.
    pub timestamp: Option<i64>,
    pub site: Option<TemperatureType>,
}

/// Decoder over one temperature measurement value.
///
/// Holds nothing but the borrowed bytes and the options. Each accessor reads
/// the flag byte again and works out its own offset, so accessors can be
/// called in any order, any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureMeasurement<'a> {
    view: DataView<'a>,
    options: ParseOptions,
}

impl<'a> TemperatureMeasurement<'a> {
    pub fn new(bytes: &'a [u8], byte_order: ByteOrder) -> Self {
        Self::with_options(bytes, ParseOptions::new(byte_order))
    }

    pub fn with_options(bytes: &'a [u8], options: ParseOptions) -> Self {
        Self {
            view: DataView::new(bytes),
            options,
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.view.as_bytes()
    }

    /// Reads the flag byte.
    pub fn flags(&self) -> Result<Flags, BufferError> {
        Ok(Flags(self.view.get_u8(0)?))
    }

    /// Decodes the temperature value.
    pub fn value(&self) -> Result<f64, BufferError> {
        let offset = LAYOUT.value_offset();
        trace!(offset, "decoding temperature value");
        decode_float(self.view, offset, self.options.byte_order)
    }

    pub fn unit(&self) -> Result<TemperatureUnit, BufferError> {
        Ok(self.flags()?.unit())
    }

    /// Decodes the time stamp, or `None` when the flags say there is none.
    pub fn timestamp(&self) -> Result<Option<i64>, BufferError> {
        let flags = self.flags()?;
        if !flags.has_timestamp() {
            trace!(flags = flags.bits(), "no timestamp");
            return Ok(None);
        }
        let offset = LAYOUT.timestamp_offset();
        trace!(offset, "decoding timestamp");
        decode_date_time(self.view, offset, self.options.byte_order).map(Some)
    }

    /// Decodes the temperature type, or `None` when the flags say there is
    /// none.
    ///
    /// A present but unassigned code decodes to [`TemperatureType::Unknown`].
    pub fn site(&self) -> Result<Option<TemperatureType>, BufferError> {
        let flags = self.flags()?;
        if !flags.has_site(self.options.site_presence) {
            trace!(flags = flags.bits(), "no temperature type");
            return Ok(None);
        }
        let offset = LAYOUT.site_offset(flags.has_timestamp());
        trace!(offset, site_presence = ?self.options.site_presence, "decoding temperature type");
        decode_temperature_type(self.view, offset).map(Some)
    }

    /// Decodes every field.
    pub fn measurement(&self) -> Result<Measurement, BufferError> {
        Ok(Measurement {
            flags: self.flags()?,
            value: self.value()?,
            unit: self.unit()?,
            timestamp: self.timestamp()?,
            site: self.site()?,
        })
    }
}
