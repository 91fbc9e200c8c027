//! Hex helpers for printing and parsing octet strings.

use thiserror::Error;

/// Error returned by [`parse_octets`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OctetsError {
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
}

/// Formats a byte slice as a hex string for debugging.
///
/// # Arguments
///
/// * `octets` - The byte slice to format.
/// * `max` - Maximum number of bytes to display.
///
/// # Example
///
/// ```
/// use ble_gatt_buffers::format_octets;
///
/// assert_eq!(format_octets(&[0x06, 0x69, 0x01, 0xff], 16), "06 69 01 ff");
/// assert_eq!(format_octets(&[], 16), "");
/// ```
pub fn format_octets(octets: &[u8], max: usize) -> String {
    let mut result = octets
        .iter()
        .take(max)
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats a byte slice as a hex string with default max of 16 bytes.
///
/// A full 0x2A1C record is 13 bytes, so the default always shows it whole.
pub fn format_octets_default(octets: &[u8]) -> String {
    format_octets(octets, 16)
}

/// Parses a hex string into bytes.
///
/// Digits may be grouped freely and separated by whitespace, `:`, `-` or `,`;
/// each group may carry a `0x` prefix.
///
/// # Example
///
/// ```
/// use ble_gatt_buffers::parse_octets;
///
/// assert_eq!(parse_octets("06 69:01-00ff").unwrap(), vec![0x06, 0x69, 0x01, 0x00, 0xff]);
/// assert_eq!(parse_octets("0x69 0x01").unwrap(), vec![0x69, 0x01]);
/// assert!(parse_octets("6").is_err());
/// ```
pub fn parse_octets(input: &str) -> Result<Vec<u8>, OctetsError> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | ','))
        .map(|group| {
            group
                .strip_prefix("0x")
                .or_else(|| group.strip_prefix("0X"))
                .unwrap_or(group)
        })
        .collect();

    hex::decode(&digits).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => OctetsError::InvalidDigit(
            digits.get(index..).and_then(|rest| rest.chars().next()).unwrap_or(c),
        ),
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            OctetsError::OddLength(digits.len())
        }
    })
}
