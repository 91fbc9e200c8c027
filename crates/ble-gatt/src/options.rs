//! Parse options for characteristic decoders.

use ble_gatt_buffers::ByteOrder;
use serde::{Deserialize, Serialize};

/// How the temperature-type ("site") field is detected in the flag byte.
///
/// Some decoders in the wild test the flags against `0x03` instead of the
/// assigned bit `0x04`, which reports a site whenever the Fahrenheit or
/// timestamp bit is set. Payloads produced against such decoders only parse
/// the same way under [`SitePresence::LegacyMask`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SitePresence {
    /// Site present iff bit 2 (`0x04`) is set.
    #[default]
    SiteBit,
    /// Site present iff any bit of `0x03` is set.
    LegacyMask,
}

impl SitePresence {
    /// Flag bits that signal a site.
    pub const fn mask(self) -> u8 {
        match self {
            SitePresence::SiteBit => 0x04,
            SitePresence::LegacyMask => 0x03,
        }
    }
}

/// Options fixed at construction of a decoder.
///
/// Deserializes from a partial table, e.g. `{"byte_order": "little-endian"}`,
/// so it can be embedded in an application's own configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub byte_order: ByteOrder,
    pub site_presence: SitePresence,
}

impl ParseOptions {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_site_presence(mut self, site_presence: SitePresence) -> Self {
        self.site_presence = site_presence;
        self
    }
}
