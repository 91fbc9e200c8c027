//! `org.bluetooth.characteristic.date_time` (assigned number 0x2A08).
//!
//! Seven bytes: year (u16), month, day, hours, minutes, seconds. The fields
//! carry no time zone and are interpreted as local calendar time.

use ble_gatt_buffers::{BufferError, ByteOrder, DataView};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Width of an encoded date_time in bytes.
pub const DATE_TIME_SIZE: usize = 7;

/// The raw fields of a date_time, as they appear on the wire.
///
/// No field is validated: `month` is 1-based on the wire but may hold any
/// byte, and so may the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl DateTimeFields {
    /// Builds the calendar date-time the fields describe.
    ///
    /// Out-of-range fields roll over into the next larger one: month 13 is
    /// January of the following year, day 0 is the last day of the previous
    /// month, hour 24 is midnight of the next day.
    pub fn to_naive(self) -> NaiveDateTime {
        let months = i32::from(self.year) * 12 + i32::from(self.month) - 1;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as u32 + 1;
        // Any u16 year is inside chrono's range, so the fallback is unreachable.
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let seconds = i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds);
        first_of_month + Duration::days(i64::from(self.day) - 1) + Duration::seconds(seconds)
    }

    /// Resolves the fields in the local time zone.
    ///
    /// An ambiguous local time (clocks turned back) resolves to the earlier
    /// instant. A local time that does not exist (clocks turned forward) is
    /// read with the offset in force before the transition, which moves it
    /// forward by the length of the gap.
    pub fn to_local(self) -> DateTime<Local> {
        let naive = self.to_naive();
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(local) => local,
            // chrono does not order the pair by instant.
            LocalResult::Ambiguous(a, b) => a.min(b),
            LocalResult::None => {
                let before = Local.offset_from_utc_datetime(&(naive - Duration::days(1)));
                let utc = naive - Duration::seconds(i64::from(before.local_minus_utc()));
                Local.from_utc_datetime(&utc)
            }
        }
    }

    /// Milliseconds since the Unix epoch of [`DateTimeFields::to_local`].
    pub fn to_epoch_millis(self) -> i64 {
        self.to_local().timestamp_millis()
    }
}

/// Reads the raw date_time fields at `offset`.
pub fn decode_date_time_fields(
    view: DataView<'_>,
    offset: usize,
    order: ByteOrder,
) -> Result<DateTimeFields, BufferError> {
    let mut reader = view.reader(offset, DATE_TIME_SIZE)?;
    Ok(DateTimeFields {
        year: reader.u16(order)?,
        month: reader.u8()?,
        day: reader.u8()?,
        hours: reader.u8()?,
        minutes: reader.u8()?,
        seconds: reader.u8()?,
    })
}

/// Decodes the date_time at `offset` to epoch milliseconds, local time.
pub fn decode_date_time(
    view: DataView<'_>,
    offset: usize,
    order: ByteOrder,
) -> Result<i64, BufferError> {
    Ok(decode_date_time_fields(view, offset, order)?.to_epoch_millis())
}
