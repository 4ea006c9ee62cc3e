//! BSSID calculation.
//!
//! A [`BssidCalculator`] borrows an [`OffsetTable`] and turns an access point
//! model, its base MAC address and an SSID index into one BSSID per radio
//! band. The arithmetic itself is a per-octet addition of the offset vector
//! found in the table.
//!
//! Two policies shape the result:
//!
//! - [`BandPolicy`] decides which bands are computed. `Strict` (the default)
//!   computes a fixed list of bands and fails if the table lacks any of them.
//!   `Lenient` computes whatever bands the table has for the vendor prefix.
//! - [`OverflowPolicy`] decides what happens when an octet plus its offset
//!   leaves `0..=255`. `Wrap` (the default) reduces modulo 256, `Fail`
//!   returns [`BssidError::OctetOverflow`].
//!
//! # Example
//!
//! ```
//! use meraki_bssid::{BssidCalculator, OffsetTable};
//!
//! let calculator = BssidCalculator::new(OffsetTable::builtin());
//! let bssids = calculator
//!     .calculate("MR53", "0c:8d:db:00:00:00".parse().unwrap(), 12)
//!     .unwrap();
//! assert_eq!(bssids["2.4"].to_string(), "22:8d:db:00:00:00");
//! assert_eq!(bssids["5"].to_string(), "22:8d:cb:00:00:00");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{BssidError, Result};
use crate::mac::MacAddress;
use crate::table::{HardwareFamily, OffsetTable, OffsetVector, RadioBand, SsidIndex};

/// Derived BSSIDs keyed by radio band.
pub type Bssids = BTreeMap<RadioBand, MacAddress>;

/// What to do when an octet plus its offset leaves the byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Reduce modulo 256, as the radio hardware does.
    #[default]
    Wrap,
    /// Refuse with [`BssidError::OctetOverflow`].
    Fail,
}

/// Which radio bands a calculation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandPolicy {
    /// Every configured band must be in the table.
    #[default]
    Strict,
    /// Only the bands the table has an entry for.
    Lenient,
}

impl FromStr for OverflowPolicy {
    type Err = BssidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(OverflowPolicy::Wrap),
            "fail" => Ok(OverflowPolicy::Fail),
            _ => Err(BssidError::InvalidPolicy(s.to_string())),
        }
    }
}

impl FromStr for BandPolicy {
    type Err = BssidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(BandPolicy::Strict),
            "lenient" => Ok(BandPolicy::Lenient),
            _ => Err(BssidError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Fail => "fail",
        })
    }
}

impl fmt::Display for BandPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BandPolicy::Strict => "strict",
            BandPolicy::Lenient => "lenient",
        })
    }
}

/// Add a signed offset to one octet.
pub fn calculate_octet(octet: u8, offset: i16, policy: OverflowPolicy) -> Result<u8> {
    let sum = i32::from(octet) + i32::from(offset);

    match policy {
        OverflowPolicy::Wrap => Ok(sum.rem_euclid(256) as u8),
        OverflowPolicy::Fail => {
            u8::try_from(sum).map_err(|_| BssidError::OctetOverflow { octet, offset })
        }
    }
}

/// Apply an offset vector to every octet of a MAC address.
pub fn apply_offsets(mac: MacAddress, offsets: OffsetVector, policy: OverflowPolicy) -> Result<MacAddress> {
    let base = mac.octets();
    let deltas = offsets.as_array();
    let mut octets = [0u8; 6];

    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = calculate_octet(base[i], deltas[i], policy)?;
    }

    Ok(MacAddress::new(octets))
}

/// Computes BSSIDs against a borrowed offset table.
#[derive(Debug, Clone)]
pub struct BssidCalculator<'t> {
    table: &'t OffsetTable,
    bands: Vec<RadioBand>,
    band_policy: BandPolicy,
    overflow: OverflowPolicy,
}

impl<'t> BssidCalculator<'t> {
    /// Strict bands `2.4` and `5`, wrapping arithmetic.
    pub fn new(table: &'t OffsetTable) -> Self {
        BssidCalculator {
            table,
            bands: RadioBand::defaults(),
            band_policy: BandPolicy::default(),
            overflow: OverflowPolicy::default(),
        }
    }

    /// Bands computed under [`BandPolicy::Strict`].
    pub fn with_bands<I, B>(mut self, bands: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<RadioBand>,
    {
        self.bands = bands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_band_policy(mut self, policy: BandPolicy) -> Self {
        self.band_policy = policy;
        self
    }

    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    pub fn table(&self) -> &'t OffsetTable {
        self.table
    }

    pub fn band_policy(&self) -> BandPolicy {
        self.band_policy
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn bands(&self) -> &[RadioBand] {
        &self.bands
    }

    /// BSSIDs of one SSID on an access point, keyed by band.
    pub fn calculate(&self, model: &str, mac: MacAddress, ssid: SsidIndex) -> Result<Bssids> {
        let family = self.table.family_of(model)?;
        self.calculate_for_family(family, mac, ssid)
    }

    /// Same as [`calculate`](Self::calculate) with the family already resolved.
    pub fn calculate_for_family(
        &self,
        family: HardwareFamily,
        mac: MacAddress,
        ssid: SsidIndex,
    ) -> Result<Bssids> {
        let prefix = mac.vendor_prefix();
        let mut bssids = Bssids::new();

        match self.band_policy {
            BandPolicy::Strict => {
                for band in &self.bands {
                    let offsets = self.table.offsets_for(family, prefix, band, ssid)?;
                    bssids.insert(band.clone(), apply_offsets(mac, offsets, self.overflow)?);
                }
            }
            BandPolicy::Lenient => {
                for band in self.table.bands_for(family, prefix)? {
                    let offsets = match self.table.offsets_for(family, prefix, band, ssid) {
                        Ok(offsets) => offsets,
                        Err(BssidError::UnknownSsidIndex { .. }) => {
                            tracing::debug!("No offsets for SSID {} on band {}, skipping", ssid, band);
                            continue;
                        }
                        Err(e) => return Err(e),
                    };
                    bssids.insert(band.clone(), apply_offsets(mac, offsets, self.overflow)?);
                }
            }
        }

        tracing::debug!(
            "{} ({}) SSID {} -> {} band(s)",
            mac,
            family,
            ssid,
            bssids.len()
        );
        Ok(bssids)
    }
}
