//! Compares the built-in offset table against the reference fixture, entry by entry.

use meraki_bssid::{HardwareFamily, OffsetTable, OffsetVector, RadioBand, SsidIndex, VendorPrefix};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
struct Fixture {
    models: BTreeMap<String, u8>,
    offsets: Vec<FixtureEntry>,
}

#[derive(Deserialize)]
struct FixtureEntry {
    family: u8,
    prefix: VendorPrefix,
    band: RadioBand,
    ssid: SsidIndex,
    offsets: OffsetVector,
}

fn fixture() -> Fixture {
    serde_json::from_str(include_str!("fixtures/reference_offsets.json"))
        .expect("fixture should parse")
}

#[test]
fn test_every_reference_entry_matches() {
    let table = OffsetTable::builtin();
    let fixture = fixture();

    for entry in &fixture.offsets {
        let actual = table
            .offsets_for(HardwareFamily(entry.family), entry.prefix, &entry.band, entry.ssid)
            .unwrap_or_else(|e| panic!("missing entry: {e}"));
        assert_eq!(
            actual, entry.offsets,
            "family {} prefix {} band {} ssid {}",
            entry.family, entry.prefix, entry.band, entry.ssid
        );
    }
}

#[test]
fn test_table_has_no_extra_entries() {
    let table = OffsetTable::builtin();
    let fixture = fixture();

    let expected: BTreeMap<(u8, String, String, SsidIndex), OffsetVector> = fixture
        .offsets
        .iter()
        .map(|e| ((e.family, e.prefix.to_string(), e.band.to_string(), e.ssid), e.offsets))
        .collect();
    assert_eq!(expected.len(), fixture.offsets.len(), "fixture has duplicate keys");

    let actual: BTreeMap<(u8, String, String, SsidIndex), OffsetVector> = table
        .entries()
        .map(|e| ((e.family.0, e.prefix.to_string(), e.band.to_string(), e.ssid), e.offsets))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_every_model_maps_to_reference_family() {
    let table = OffsetTable::builtin();
    let fixture = fixture();

    for (model, family) in &fixture.models {
        assert_eq!(table.family_of(model).unwrap(), HardwareFamily(*family), "{model}");
    }

    let actual: BTreeMap<String, u8> = table
        .models()
        .map(|(model, family)| (model.to_string(), family.0))
        .collect();
    assert_eq!(actual, fixture.models);
}

#[test]
fn test_every_family_has_both_bands() {
    let table = OffsetTable::builtin();

    for family in [1, 2, 3].map(HardwareFamily) {
        let prefixes: Vec<VendorPrefix> = table.prefixes_for(family).collect();
        assert!(!prefixes.is_empty(), "{family} has no prefixes");

        for prefix in prefixes {
            let bands: Vec<&str> = table
                .bands_for(family, prefix)
                .unwrap()
                .map(RadioBand::as_str)
                .collect();
            assert_eq!(bands, vec!["2.4", "5"], "{family} {prefix}");
        }
    }
}
