//! Binary buffer reader with cursor tracking.

use crate::{BufferError, ByteOrder};

/// A binary buffer reader that reads data from a window of a byte slice.
///
/// The reader maintains a cursor position and never reads past `end`, even
/// when the underlying slice continues. Reads report the absolute cursor
/// position on failure.
///
/// # Example
///
/// ```
/// use ble_gatt_buffers::{ByteOrder, Reader};
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), Ok(0x01));
/// assert_eq!(reader.u16(ByteOrder::BigEndian), Ok(0x0203));
/// assert!(reader.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    ///
    /// `end` is clamped to the slice length and `x` to `end`.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        let x = x.min(end);
        Self { uint8, x, end }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.x)
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.buf(length).map(|_| ())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        if self.x > self.end || size > self.size() {
            return Err(BufferError::Underflow {
                offset: self.x,
                needed: size,
                len: self.end,
            });
        }
        let x = self.x;
        self.x += size;
        Ok(&self.uint8[x..self.x])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.buf(1)?[0])
    }

    /// Reads an unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self, order: ByteOrder) -> Result<u16, BufferError> {
        let b = self.buf(2)?;
        Ok(order.u16([b[0], b[1]]))
    }

    /// Reads an unsigned 32-bit integer.
    #[inline]
    pub fn u32(&mut self, order: ByteOrder) -> Result<u32, BufferError> {
        let b = self.buf(4)?;
        Ok(order.u32([b[0], b[1], b[2], b[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), Ok(0x01));
        assert_eq!(reader.u8(), Ok(0x02));
        assert_eq!(reader.u8(), Ok(0x03));
        assert_eq!(
            reader.u8(),
            Err(BufferError::Underflow {
                offset: 3,
                needed: 1,
                len: 3
            })
        );
    }

    #[test]
    fn test_u16() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16(ByteOrder::BigEndian), Ok(0x0102));
        assert_eq!(reader.u16(ByteOrder::LittleEndian), Ok(0x0403));
    }

    #[test]
    fn test_u32() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32(ByteOrder::BigEndian), Ok(0x01020304));
    }

    #[test]
    fn test_failed_read_does_not_advance() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert!(reader.u32(ByteOrder::BigEndian).is_err());
        assert_eq!(reader.x, 0);
        assert_eq!(reader.u8(), Ok(0x01));
    }

    #[test]
    fn test_skip() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        reader.skip(2).unwrap();
        assert_eq!(reader.u8(), Ok(0x03));
        assert!(reader.skip(2).is_err());
    }

    #[test]
    fn test_start_past_end_is_clamped() {
        let data = [0x01];
        let mut reader = Reader::from_slice(&data, 5, 3);
        assert_eq!(reader.x, 1);
        assert_eq!(reader.size(), 0);
        assert_eq!(reader.buf(0), Ok(&[][..]));
        assert!(reader.u8().is_err());
    }

    #[test]
    fn test_cursor_moved_past_end_underflows() {
        let data = [0x01, 0x02];
        let mut reader = Reader::new(&data);
        reader.x = 5;
        assert_eq!(
            reader.buf(0),
            Err(BufferError::Underflow {
                offset: 5,
                needed: 0,
                len: 2
            })
        );
    }

    #[test]
    fn test_window_stops_at_end() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::from_slice(&data, 1, 3);
        assert_eq!(reader.size(), 2);
        assert_eq!(reader.u8(), Ok(0x02));
        assert_eq!(reader.u8(), Ok(0x03));
        assert!(reader.u8().is_err());
    }
}
