//! Offset-addressed, bounds-checked view over a borrowed byte slice.

use crate::{BufferError, ByteOrder, Reader};

/// A read-only view over a byte slice, addressed by absolute offset.
///
/// Unlike [`Reader`], a `DataView` has no cursor: every read names its offset,
/// so the same view can be shared freely and read in any order. Each read
/// checks the full width of the field before touching any byte.
///
/// # Example
///
/// ```
/// use ble_gatt_buffers::{ByteOrder, DataView};
///
/// let data = [0xE1, 0x07, 0x0C];
/// let view = DataView::new(&data);
///
/// assert_eq!(view.get_u16(0, ByteOrder::LittleEndian), Ok(2017));
/// assert_eq!(view.get_u8(2), Ok(12));
/// assert!(view.get_u8(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataView<'a> {
    uint8: &'a [u8],
}

impl<'a> DataView<'a> {
    /// Creates a view over the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8 }
    }

    /// Returns the number of bytes in the view.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Returns the underlying byte slice.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.uint8
    }

    /// Returns `size` bytes starting at `offset`.
    pub fn get_bytes(&self, offset: usize, size: usize) -> Result<&'a [u8], BufferError> {
        let len = self.uint8.len();
        match offset.checked_add(size) {
            Some(end) if end <= len => Ok(&self.uint8[offset..end]),
            _ => Err(BufferError::Underflow {
                offset,
                needed: size,
                len,
            }),
        }
    }

    fn get_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], BufferError> {
        let bytes = self.get_bytes(offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn get_u8(&self, offset: usize) -> Result<u8, BufferError> {
        let [byte] = self.get_array::<1>(offset)?;
        Ok(byte)
    }

    /// Reads an unsigned 16-bit integer in the given byte order.
    #[inline]
    pub fn get_u16(&self, offset: usize, order: ByteOrder) -> Result<u16, BufferError> {
        Ok(order.u16(self.get_array(offset)?))
    }

    /// Reads an unsigned 32-bit integer in the given byte order.
    #[inline]
    pub fn get_u32(&self, offset: usize, order: ByteOrder) -> Result<u32, BufferError> {
        Ok(order.u32(self.get_array(offset)?))
    }

    /// Checks that a `size`-byte field fits at `offset` and returns a cursor
    /// confined to it.
    ///
    /// Composite fields are decoded through the returned [`Reader`], so a
    /// short buffer is reported once for the whole field rather than halfway
    /// through it.
    pub fn reader(&self, offset: usize, size: usize) -> Result<Reader<'a>, BufferError> {
        self.get_bytes(offset, size)?;
        Ok(Reader::from_slice(self.uint8, offset, offset + size))
    }
}

impl<'a> From<&'a [u8]> for DataView<'a> {
    fn from(uint8: &'a [u8]) -> Self {
        Self::new(uint8)
    }
}
