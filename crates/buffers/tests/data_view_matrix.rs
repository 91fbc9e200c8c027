//! Offset-read matrix and property tests for the buffers crate.

use ble_gatt_buffers::{
    format_octets_default, parse_octets, BufferError, ByteOrder, DataView, Reader,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Fixed vectors
// ---------------------------------------------------------------------------

#[test]
fn u32_matrix_both_orders() {
    let cases: &[([u8; 4], u32, u32)] = &[
        ([0x69, 0x01, 0x00, 0xFF], 0x6901_00FF, 0xFF00_0169),
        ([0x1F, 0x0E, 0x00, 0xFE], 0x1F0E_00FE, 0xFE00_0E1F),
        ([0x00, 0x00, 0x00, 0x00], 0, 0),
        ([0xFF, 0xFF, 0xFF, 0xFF], u32::MAX, u32::MAX),
    ];
    for (bytes, be, le) in cases {
        let view = DataView::new(bytes);
        assert_eq!(view.get_u32(0, ByteOrder::BigEndian), Ok(*be));
        assert_eq!(view.get_u32(0, ByteOrder::LittleEndian), Ok(*le));
    }
}

#[test]
fn u16_matrix_both_orders() {
    let view = DataView::new(&[0xE1, 0x07, 0x07, 0xE1]);
    assert_eq!(view.get_u16(0, ByteOrder::LittleEndian), Ok(2017));
    assert_eq!(view.get_u16(2, ByteOrder::BigEndian), Ok(2017));
}

#[test]
fn underflow_reports_offset_width_and_length() {
    let view = DataView::new(&[0x00; 5]);
    let err = view.get_u32(2, ByteOrder::BigEndian).unwrap_err();
    assert_eq!(
        err,
        BufferError::Underflow {
            offset: 2,
            needed: 4,
            len: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "buffer underflow: need 4 byte(s) at offset 2, buffer holds 5"
    );
}

#[test]
fn empty_view_rejects_every_read() {
    let view = DataView::new(&[]);
    assert!(view.is_empty());
    assert!(view.get_u8(0).is_err());
    assert!(view.get_u16(0, ByteOrder::LittleEndian).is_err());
    assert!(view.get_u32(0, ByteOrder::LittleEndian).is_err());
    assert!(view.reader(0, 1).is_err());
}

#[test]
fn reader_from_view_sees_only_its_window() {
    let data = [0x06, 0xE1, 0x07, 0x0C, 0x05];
    let view = DataView::new(&data);
    let mut reader: Reader<'_> = view.reader(1, 3).unwrap();
    assert_eq!(reader.u16(ByteOrder::LittleEndian), Ok(2017));
    assert_eq!(reader.u8(), Ok(12));
    assert_eq!(reader.size(), 0);
    assert!(reader.u8().is_err());
}

#[test]
fn octets_format_then_parse() {
    let data = [0x06, 0x69, 0x01, 0x00, 0xFF, 0xE1, 0x07, 0x0C, 0x05, 0x00, 0x20, 0x28, 0x02];
    let text = format_octets_default(&data);
    assert_eq!(text, "06 69 01 00 ff e1 07 0c 05 00 20 28 02");
    assert_eq!(parse_octets(&text).unwrap(), data.to_vec());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn get_u32_succeeds_iff_in_bounds(data in proptest::collection::vec(any::<u8>(), 0..16), offset in 0usize..20) {
        let view = DataView::new(&data);
        let result = view.get_u32(offset, ByteOrder::LittleEndian);
        if offset + 4 <= data.len() {
            let expected = u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]);
            prop_assert_eq!(result, Ok(expected));
        } else {
            prop_assert_eq!(result, Err(BufferError::Underflow { offset, needed: 4, len: data.len() }));
        }
    }

    #[test]
    fn byte_orders_are_mirror_images(word in any::<u32>()) {
        let be = word.to_be_bytes();
        let le = word.to_le_bytes();
        prop_assert_eq!(DataView::new(&be).get_u32(0, ByteOrder::BigEndian), Ok(word));
        prop_assert_eq!(DataView::new(&le).get_u32(0, ByteOrder::LittleEndian), Ok(word));
    }
}
