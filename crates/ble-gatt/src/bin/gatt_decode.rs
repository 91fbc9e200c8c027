//! Decode a Temperature Measurement (0x2A1C) value given as hex and print it
//! as JSON.
//!
//! ```text
//! $ TZ=UTC gatt-decode -l 06 69 01 00 ff e1 07 0c 05 00 20 28 02
//! {"flags":6,"value":36.1,"unit":"Celsius","timestamp":1512433960000,"site":"Body (general)"}
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use ble_gatt::{ByteOrder, ParseOptions, SitePresence, TemperatureMeasurement, LAYOUT};
use ble_gatt_buffers::{format_octets_default, parse_octets};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gatt-decode")]
#[command(about = "Decode a Bluetooth Temperature Measurement (0x2A1C) characteristic value")]
struct Cli {
    /// Characteristic value as hex; read from stdin when omitted
    hex: Vec<String>,

    /// Multi-byte fields are little-endian (as sent over the air)
    #[arg(short, long, env = "GATT_LITTLE_ENDIAN")]
    little_endian: bool,

    /// Treat any of flag bits 0-1 as "temperature type present"
    #[arg(long, env = "GATT_LEGACY_SITE_MASK")]
    legacy_site_mask: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

impl Cli {
    fn options(&self) -> ParseOptions {
        let site_presence = if self.legacy_site_mask {
            SitePresence::LegacyMask
        } else {
            SitePresence::SiteBit
        };
        ParseOptions::new(ByteOrder::from_little_endian(self.little_endian))
            .with_site_presence(site_presence)
    }

    fn input(&self) -> Result<String> {
        if !self.hex.is_empty() {
            return Ok(self.hex.join(" "));
        }
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read hex from stdin")?;
        Ok(input)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    let bytes = parse_octets(&cli.input()?).context("invalid hex payload")?;
    debug!(bytes = %format_octets_default(&bytes), ?options, "decoding temperature measurement");

    let record = TemperatureMeasurement::with_options(&bytes, options);
    let measurement = record
        .measurement()
        .context("failed to decode temperature measurement")?;

    let expected = LAYOUT.record_len(measurement.flags, options.site_presence);
    if bytes.len() > expected {
        warn!(expected, actual = bytes.len(), "ignoring trailing bytes");
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&measurement)?
    } else {
        serde_json::to_string(&measurement)?
    };
    println!("{json}");
    Ok(())
}
