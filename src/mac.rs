//! MAC address and vendor prefix value types.
//!
//! Both types parse from the common textual forms (`0C:8D:DB:00:00:00`,
//! `0c-8d-db-00-00-00`, `0c8d.db00.0000`) and always render in the canonical
//! lowercase, colon-separated form used as table keys and in output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BssidError;

/// A 6-byte hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; 6]);

/// The first three octets of a MAC address (the OUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorPrefix([u8; 3]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn vendor_prefix(&self) -> VendorPrefix {
        VendorPrefix([self.0[0], self.0[1], self.0[2]])
    }
}

impl VendorPrefix {
    pub const fn new(octets: [u8; 3]) -> Self {
        VendorPrefix(octets)
    }

    pub fn octets(&self) -> [u8; 3] {
        self.0
    }
}

/// Strip separators and decode exactly `N` octets of hex.
fn parse_octets<const N: usize>(text: &str) -> Option<[u8; N]> {
    let cleaned: String = text.trim().replace([':', '-', '.'], "");

    if cleaned.len() != N * 2 || !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let mut octets = [0u8; N];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&cleaned[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(octets)
}

fn write_octets(f: &mut fmt::Formatter<'_>, octets: &[u8]) -> fmt::Result {
    for (i, octet) in octets.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{:02x}", octet)?;
    }
    Ok(())
}

impl FromStr for MacAddress {
    type Err = BssidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_octets::<6>(s)
            .map(MacAddress)
            .ok_or_else(|| BssidError::InvalidMacAddress(s.to_string()))
    }
}

impl FromStr for VendorPrefix {
    type Err = BssidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_octets::<3>(s)
            .map(VendorPrefix)
            .ok_or_else(|| BssidError::InvalidVendorPrefix(s.to_string()))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_octets(f, &self.0)
    }
}

impl fmt::Display for VendorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_octets(f, &self.0)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.to_string()
    }
}

impl From<VendorPrefix> for String {
    fn from(prefix: VendorPrefix) -> Self {
        prefix.to_string()
    }
}

impl TryFrom<String> for MacAddress {
    type Error = BssidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for VendorPrefix {
    type Error = BssidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_formats() {
        let expected = MacAddress::new([0x0c, 0x8d, 0xdb, 0x12, 0x34, 0x56]);
        assert_eq!("0c:8d:db:12:34:56".parse::<MacAddress>(), Ok(expected));
        assert_eq!("0C:8D:DB:12:34:56".parse::<MacAddress>(), Ok(expected));
        assert_eq!("0c-8d-db-12-34-56".parse::<MacAddress>(), Ok(expected));
        assert_eq!("0c8d.db12.3456".parse::<MacAddress>(), Ok(expected));
        assert_eq!(" 0c8ddb123456 ".parse::<MacAddress>(), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "0c:8d:db", "0c:8d:db:12:34:56:78", "0c:8d:db:12:34:zz", "0c:8d:db:12:34:5"] {
            assert_eq!(
                bad.parse::<MacAddress>(),
                Err(BssidError::InvalidMacAddress(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
        assert!("0c:8d".parse::<VendorPrefix>().is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        let mac: MacAddress = "0C-8D-DB-0A-B0-FF".parse().unwrap();
        assert_eq!(mac.to_string(), "0c:8d:db:0a:b0:ff");
        assert_eq!(mac.vendor_prefix().to_string(), "0c:8d:db");
    }

    #[test]
    fn test_vendor_prefix_from_mac() {
        let mac: MacAddress = "e0:55:3d:aa:bb:cc".parse().unwrap();
        assert_eq!(mac.vendor_prefix(), VendorPrefix::new([0xe0, 0x55, 0x3d]));
        assert_eq!("E0:55:3D".parse::<VendorPrefix>(), Ok(mac.vendor_prefix()));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let mac = MacAddress::new([0x88, 0x15, 0x44, 0x01, 0x02, 0x03]);
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"88:15:44:01:02:03\"");

        let back: MacAddress = serde_json::from_str("\"88-15-44-01-02-03\"").unwrap();
        assert_eq!(back, mac);
        assert!(serde_json::from_str::<MacAddress>("\"not a mac\"").is_err());
    }
}
