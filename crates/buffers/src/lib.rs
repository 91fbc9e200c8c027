//! Binary buffer utilities for BLE GATT payloads.
//!
//! GATT characteristic values arrive as short, fixed-layout byte strings whose
//! multi-byte fields may be stored in either byte order. This crate provides
//! the bounds-checked primitives the codecs are built on.
//!
//! # Overview
//!
//! - [`DataView`] - Offset-addressed reads over a borrowed byte slice
//! - [`Reader`] - Cursor over a field window that [`DataView`] has already checked
//! - [`ByteOrder`] - Byte order of multi-byte fields
//! - [`format_octets`] / [`parse_octets`] - Hex helpers for diagnostics and tooling
//!
//! # Example
//!
//! ```
//! use ble_gatt_buffers::{BufferError, ByteOrder, DataView};
//!
//! let data = [0x06, 0x69, 0x01, 0x00, 0xFF];
//! let view = DataView::new(&data);
//!
//! assert_eq!(view.get_u8(0), Ok(0x06));
//! assert_eq!(view.get_u32(1, ByteOrder::LittleEndian), Ok(0xFF00_0169));
//! assert_eq!(
//!     view.get_u32(2, ByteOrder::LittleEndian),
//!     Err(BufferError::Underflow { offset: 2, needed: 4, len: 5 })
//! );
//! ```

mod byte_order;
mod data_view;
mod octets;
mod reader;

pub use byte_order::ByteOrder;
pub use data_view::DataView;
pub use octets::{format_octets, format_octets_default, parse_octets, OctetsError};
pub use reader::Reader;

use thiserror::Error;

/// Error type for buffer operations.
///
/// Every read declares how many bytes it needs up front; if fewer remain the
/// read fails before any byte is consumed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Fewer than `needed` bytes remain at `offset` in a buffer of `len` bytes.
    #[error("buffer underflow: need {needed} byte(s) at offset {offset}, buffer holds {len}")]
    Underflow {
        offset: usize,
        needed: usize,
        len: usize,
    },
}
