use thiserror::Error;

use crate::mac::VendorPrefix;
use crate::table::{HardwareFamily, RadioBand, SsidIndex};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BssidError {
    #[error("Unknown access point model '{0}'")]
    UnknownModel(String),

    #[error("Vendor prefix {prefix} is not known for {family}")]
    UnknownVendorPrefix {
        family: HardwareFamily,
        prefix: VendorPrefix,
    },

    #[error("Band {band} GHz is not known for {family}, vendor prefix {prefix}")]
    UnknownBand {
        family: HardwareFamily,
        prefix: VendorPrefix,
        band: RadioBand,
    },

    #[error("SSID {ssid} is not known for {family}, vendor prefix {prefix}, band {band} GHz")]
    UnknownSsidIndex {
        family: HardwareFamily,
        prefix: VendorPrefix,
        band: RadioBand,
        ssid: SsidIndex,
    },

    #[error("Octet 0x{octet:02x} with offset {offset} is outside 0..=255")]
    OctetOverflow { octet: u8, offset: i16 },

    #[error("Invalid MAC address '{0}'")]
    InvalidMacAddress(String),

    #[error("Invalid vendor prefix '{0}'")]
    InvalidVendorPrefix(String),

    #[error("Invalid policy '{0}'")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, BssidError>;
