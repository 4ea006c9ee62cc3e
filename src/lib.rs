//! Meraki BSSID calculator
//!
//! Meraki MR access points do not advertise their base MAC address on the
//! air. Each radio derives a BSSID per configured SSID by adding fixed
//! offsets to the octets of the base MAC. The offsets depend on the model's
//! hardware family, the MAC's vendor prefix, the radio band and the SSID
//! index, and are published by Meraki. This library holds those offsets and
//! does the arithmetic, so a wireless survey or a WIDS allow-list can be
//! built from inventory data alone.
//!
//! # Modules
//!
//! - [`calculator`] - BSSID arithmetic and the band/overflow policies
//! - [`config`] - Configuration file for policies and extra model aliases
//! - [`error`] - Custom error types for the library
//! - [`inventory`] - BSSIDs for every AP and SSID of an exported inventory
//! - [`mac`] - MAC address and vendor prefix types
//! - [`table`] - The offset table and model-to-family mapping
//!
//! # Example Usage
//!
//! ```
//! use meraki_bssid::calculate;
//!
//! let bssids = calculate("MR53", "0c:8d:db:00:00:00", 12).expect("Calculation failed");
//! assert_eq!(bssids["2.4"].to_string(), "22:8d:db:00:00:00");
//! assert_eq!(bssids["5"].to_string(), "22:8d:cb:00:00:00");
//! ```

/// Calculator module turning (model, MAC, SSID) into per-band BSSIDs.
pub mod calculator;

/// Configuration module for policies and model aliases.
/// Handles reading/writing the TOML config file.
pub mod config;

/// Error module defining custom error types for the library.
/// Uses `thiserror` for ergonomic error handling.
pub mod error;

/// Inventory module walking networks, access points and SSIDs.
pub mod inventory;

/// MAC address parsing and canonical formatting.
pub mod mac;

mod offsets;

/// Offset table holding Meraki's published per-octet offsets.
pub mod table;

// Re-export the calculator API for convenient access
pub use calculator::{
    BandPolicy, BssidCalculator, Bssids, OverflowPolicy, apply_offsets, calculate_octet,
};

// Re-export the main error type for library users
pub use error::BssidError;

pub use inventory::{BssidRecord, Inventory};
pub use mac::{MacAddress, VendorPrefix};
pub use table::{
    DEFAULT_BANDS, HardwareFamily, OffsetEntry, OffsetTable, OffsetTableBuilder, OffsetVector,
    RadioBand, SsidIndex,
};

/// Calculate the BSSIDs of one SSID using the built-in table and default policies.
///
/// Parses `mac` first, then defers to [`BssidCalculator::calculate`].
pub fn calculate(model: &str, mac: &str, ssid: SsidIndex) -> error::Result<Bssids> {
    let mac: MacAddress = mac.parse()?;
    BssidCalculator::new(OffsetTable::builtin()).calculate(model, mac, ssid)
}
