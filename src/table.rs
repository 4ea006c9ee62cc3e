//! The offset table.
//!
//! Meraki derives every BSSID from the access point's base MAC address by
//! adding a small signed offset to each octet. The offsets depend on four
//! things: the hardware family of the model, the vendor prefix of the MAC,
//! the radio band, and the SSID index. This module holds those offsets in an
//! immutable nested map and answers lookups against it.
//!
//! The built-in table is transcribed in [`crate::offsets`] and built once on
//! first use. Custom tables (for tests, or for layering extra model aliases
//! on top of the built-in data) are assembled with [`OffsetTableBuilder`].
//!
//! # Example
//!
//! ```
//! use meraki_bssid::{OffsetTable, RadioBand};
//!
//! let table = OffsetTable::builtin();
//! let family = table.family_of("MR53").unwrap();
//! let prefix = "0c:8d:db".parse().unwrap();
//! let offsets = table
//!     .offsets_for(family, prefix, &RadioBand::new("5"), 12)
//!     .unwrap();
//! assert_eq!(offsets.as_array(), [0x16, 0, -0x10, 0, 0, 0]);
//! ```

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{BssidError, Result};
use crate::mac::VendorPrefix;
use crate::offsets::{MODEL_FAMILIES, REFERENCE_OFFSETS};

/// Bands a calculation covers unless told otherwise.
pub const DEFAULT_BANDS: [&str; 2] = ["2.4", "5"];

/// 1-based index of a configured wireless network on an access point.
pub type SsidIndex = u32;

/// Group of access point models sharing the same BSSID arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareFamily(pub u8);

impl fmt::Display for HardwareFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "family {}", self.0)
    }
}

/// Frequency band label, e.g. `"2.4"` or `"5"`.
///
/// Bands are an open set; nothing here assumes there are exactly two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadioBand(String);

impl RadioBand {
    pub fn new(label: impl Into<String>) -> Self {
        RadioBand(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two bands every MR access point in the reference data exposes.
    pub fn defaults() -> Vec<RadioBand> {
        DEFAULT_BANDS.iter().map(|b| RadioBand::new(*b)).collect()
    }
}

impl fmt::Display for RadioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for RadioBand {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RadioBand {
    fn from(label: &str) -> Self {
        RadioBand::new(label)
    }
}

/// Signed offsets for octet positions 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetVector([i16; 6]);

impl OffsetVector {
    pub const fn new(offsets: [i16; 6]) -> Self {
        OffsetVector(offsets)
    }

    /// Offset for a 1-based octet position.
    pub fn get(&self, position: usize) -> Option<i16> {
        position.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    pub fn as_array(&self) -> [i16; 6] {
        self.0
    }
}

impl From<[i16; 6]> for OffsetVector {
    fn from(offsets: [i16; 6]) -> Self {
        OffsetVector(offsets)
    }
}

impl fmt::Display for OffsetVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, offset) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if *offset < 0 {
                write!(f, "-0x{:02x}", offset.unsigned_abs())?;
            } else {
                write!(f, "+0x{:02x}", offset)?;
            }
        }
        Ok(())
    }
}

/// One fully-keyed row of the table, as yielded by [`OffsetTable::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetEntry<'a> {
    pub family: HardwareFamily,
    pub prefix: VendorPrefix,
    pub band: &'a RadioBand,
    pub ssid: SsidIndex,
    pub offsets: OffsetVector,
}

type SsidOffsets = BTreeMap<SsidIndex, OffsetVector>;
type BandOffsets = BTreeMap<RadioBand, SsidOffsets>;
type PrefixOffsets = BTreeMap<VendorPrefix, BandOffsets>;

/// Immutable lookup table of offsets and model families.
#[derive(Debug, Clone, Default)]
pub struct OffsetTable {
    families: BTreeMap<HardwareFamily, PrefixOffsets>,
    models: BTreeMap<String, HardwareFamily>,
}

lazy_static! {
    static ref BUILTIN: OffsetTable = OffsetTable::reference_builder().build();
}

/// Model names are matched case-insensitively and without surrounding space.
fn model_key(model: &str) -> String {
    model.trim().to_ascii_uppercase()
}

impl OffsetTable {
    /// The built-in table with Meraki's published offsets.
    pub fn builtin() -> &'static OffsetTable {
        &BUILTIN
    }

    /// An empty builder.
    pub fn builder() -> OffsetTableBuilder {
        OffsetTableBuilder::default()
    }

    /// A builder preloaded with the built-in offsets and models.
    pub fn reference_builder() -> OffsetTableBuilder {
        let mut builder = OffsetTableBuilder::default();

        for block in REFERENCE_OFFSETS {
            let family = HardwareFamily(block.family);
            let prefix = VendorPrefix::new(block.prefix);
            for (row, offsets) in block.rows.iter().enumerate() {
                let ssid = row as SsidIndex + 1;
                builder = builder.offsets(family, prefix, block.band, ssid, OffsetVector::new(*offsets));
            }
        }

        for (model, family) in MODEL_FAMILIES {
            builder = builder.model(*model, HardwareFamily(*family));
        }

        builder
    }

    /// Resolve an access point model name to its hardware family.
    pub fn family_of(&self, model: &str) -> Result<HardwareFamily> {
        self.models
            .get(&model_key(model))
            .copied()
            .ok_or_else(|| BssidError::UnknownModel(model.to_string()))
    }

    /// Look up the offsets for one fully-specified key.
    pub fn offsets_for(
        &self,
        family: HardwareFamily,
        prefix: VendorPrefix,
        band: &RadioBand,
        ssid: SsidIndex,
    ) -> Result<OffsetVector> {
        let ssids = self
            .prefix_bands(family, prefix)?
            .get(band)
            .ok_or_else(|| BssidError::UnknownBand {
                family,
                prefix,
                band: band.clone(),
            })?;

        ssids
            .get(&ssid)
            .copied()
            .ok_or_else(|| BssidError::UnknownSsidIndex {
                family,
                prefix,
                band: band.clone(),
                ssid,
            })
    }

    /// Bands the table knows for a (family, vendor prefix) pair, in label order.
    pub fn bands_for(
        &self,
        family: HardwareFamily,
        prefix: VendorPrefix,
    ) -> Result<impl Iterator<Item = &RadioBand>> {
        Ok(self.prefix_bands(family, prefix)?.keys())
    }

    /// Vendor prefixes known for a family.
    pub fn prefixes_for(&self, family: HardwareFamily) -> impl Iterator<Item = VendorPrefix> + '_ {
        self.families
            .get(&family)
            .into_iter()
            .flat_map(|prefixes| prefixes.keys().copied())
    }

    /// Every model name with its family, sorted by name.
    pub fn models(&self) -> impl Iterator<Item = (&str, HardwareFamily)> {
        self.models.iter().map(|(name, family)| (name.as_str(), *family))
    }

    /// Every keyed offset vector in the table.
    pub fn entries(&self) -> impl Iterator<Item = OffsetEntry<'_>> {
        self.families.iter().flat_map(|(family, prefixes)| {
            prefixes.iter().flat_map(move |(prefix, bands)| {
                bands.iter().flat_map(move |(band, ssids)| {
                    ssids.iter().map(move |(ssid, offsets)| OffsetEntry {
                        family: *family,
                        prefix: *prefix,
                        band,
                        ssid: *ssid,
                        offsets: *offsets,
                    })
                })
            })
        })
    }

    /// Number of offset vectors in the table.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    fn prefix_bands(&self, family: HardwareFamily, prefix: VendorPrefix) -> Result<&BandOffsets> {
        self.families
            .get(&family)
            .and_then(|prefixes| prefixes.get(&prefix))
            .ok_or(BssidError::UnknownVendorPrefix { family, prefix })
    }
}

/// Assembles an [`OffsetTable`]. Later inserts for the same key win.
#[derive(Debug, Default)]
pub struct OffsetTableBuilder {
    table: OffsetTable,
}

impl OffsetTableBuilder {
    pub fn offsets(
        mut self,
        family: HardwareFamily,
        prefix: VendorPrefix,
        band: impl Into<RadioBand>,
        ssid: SsidIndex,
        offsets: OffsetVector,
    ) -> Self {
        self.table
            .families
            .entry(family)
            .or_default()
            .entry(prefix)
            .or_default()
            .entry(band.into())
            .or_default()
            .insert(ssid, offsets);
        self
    }

    pub fn model(mut self, model: &str, family: HardwareFamily) -> Self {
        self.table.models.insert(model_key(model), family);
        self
    }

    pub fn build(self) -> OffsetTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> VendorPrefix {
        s.parse().unwrap()
    }

    fn sample_table() -> OffsetTable {
        OffsetTable::builder()
            .model("AP1", HardwareFamily(7))
            .offsets(HardwareFamily(7), prefix("aa:bb:cc"), "6", 1, OffsetVector::new([1, 0, 0, 0, 0, 0]))
            .offsets(HardwareFamily(7), prefix("aa:bb:cc"), "6", 2, OffsetVector::new([2, 0, 0, 0, 0, -1]))
            .build()
    }

    #[test]
    fn test_family_of() {
        let table = OffsetTable::builtin();
        assert_eq!(table.family_of("MR12"), Ok(HardwareFamily(1)));
        assert_eq!(table.family_of("MR34"), Ok(HardwareFamily(2)));
        assert_eq!(table.family_of("MR30H"), Ok(HardwareFamily(3)));
        assert_eq!(table.family_of(" mr53 "), Ok(HardwareFamily(3)));
        assert_eq!(
            table.family_of("MX64"),
            Err(BssidError::UnknownModel("MX64".to_string()))
        );
    }

    #[test]
    fn test_builtin_shape() {
        let table = OffsetTable::builtin();
        assert_eq!(table.len(), 240);
        assert_eq!(table.models().count(), 17);
        for entry in table.entries() {
            assert!((1..=15).contains(&entry.ssid));
            assert_eq!(entry.offsets.as_array().len(), 6);
            assert!(entry.offsets.as_array().iter().all(|o| (-0x50..=0x50).contains(o)));
        }
    }

    #[test]
    fn test_offsets_for_errors() {
        let table = sample_table();
        let family = HardwareFamily(7);

        assert_eq!(
            table.offsets_for(family, prefix("aa:bb:cc"), &"6".into(), 2),
            Ok(OffsetVector::new([2, 0, 0, 0, 0, -1]))
        );
        assert_eq!(
            table.offsets_for(family, prefix("00:00:01"), &"6".into(), 1),
            Err(BssidError::UnknownVendorPrefix {
                family,
                prefix: prefix("00:00:01"),
            })
        );
        assert_eq!(
            table.offsets_for(HardwareFamily(8), prefix("aa:bb:cc"), &"6".into(), 1),
            Err(BssidError::UnknownVendorPrefix {
                family: HardwareFamily(8),
                prefix: prefix("aa:bb:cc"),
            })
        );
        assert!(matches!(
            table.offsets_for(family, prefix("aa:bb:cc"), &"2.4".into(), 1),
            Err(BssidError::UnknownBand { .. })
        ));
        assert!(matches!(
            table.offsets_for(family, prefix("aa:bb:cc"), &"6".into(), 3),
            Err(BssidError::UnknownSsidIndex { ssid: 3, .. })
        ));
    }

    #[test]
    fn test_bands_and_prefixes() {
        let table = OffsetTable::builtin();
        let bands: Vec<&str> = table
            .bands_for(HardwareFamily(2), prefix("88:15:14"))
            .unwrap()
            .map(RadioBand::as_str)
            .collect();
        assert_eq!(bands, vec!["2.4", "5"]);

        let prefixes: Vec<String> = table
            .prefixes_for(HardwareFamily(3))
            .map(|p| p.to_string())
            .collect();
        assert_eq!(prefixes, vec!["0c:8d:db", "88:15:44", "e0:55:3d"]);
        assert_eq!(table.prefixes_for(HardwareFamily(9)).count(), 0);
    }

    #[test]
    fn test_later_insert_wins() {
        let table = OffsetTable::reference_builder()
            .model("MR53", HardwareFamily(1))
            .build();
        assert_eq!(table.family_of("MR53"), Ok(HardwareFamily(1)));
        // The shared built-in table is untouched.
        assert_eq!(OffsetTable::builtin().family_of("MR53"), Ok(HardwareFamily(3)));
    }

    #[test]
    fn test_offset_vector_positions() {
        let offsets = OffsetVector::new([0x02, 0, -0x40, 0, 0, 0x0e]);
        assert_eq!(offsets.get(0), None);
        assert_eq!(offsets.get(1), Some(0x02));
        assert_eq!(offsets.get(3), Some(-0x40));
        assert_eq!(offsets.get(6), Some(0x0e));
        assert_eq!(offsets.get(7), None);
        assert_eq!(offsets.to_string(), "+0x02 +0x00 -0x40 +0x00 +0x00 +0x0e");
    }
}
