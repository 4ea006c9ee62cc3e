use meraki_bssid::{
    BandPolicy, BssidCalculator, BssidError, HardwareFamily, MacAddress, OffsetTable,
    OffsetVector, OverflowPolicy, calculate,
};

fn pair(model: &str, mac: &str, ssid: u32) -> (String, String) {
    let bssids = calculate(model, mac, ssid).unwrap();
    (bssids["2.4"].to_string(), bssids["5"].to_string())
}

#[test]
fn test_documented_example() {
    assert_eq!(
        pair("MR53", "0c:8d:db:00:00:00", 12),
        ("22:8d:db:00:00:00".to_string(), "22:8d:cb:00:00:00".to_string())
    );
}

#[test]
fn test_each_family() {
    let cases = [
        ("MR66", "88:15:44:05:00:00", 3, "82:15:44:05:00:00", "82:15:54:05:00:00"),
        ("MR18", "00:18:0a:12:34:56", 15, "3a:18:0a:12:34:56", "3a:18:1a:12:34:56"),
        ("MR26", "e0:55:3d:10:20:30", 15, "e2:55:7d:10:20:3e", "e2:55:6d:10:20:3e"),
        ("MR34", "e0:55:3d:10:20:30", 11, "e2:55:7d:10:20:3a", "e2:55:6d:10:20:3a"),
        ("MR42", "88:15:44:fe:dc:ba", 7, "92:15:44:fe:dc:ba", "92:15:54:fe:dc:ba"),
        ("MR84", "0c:8d:db:08:ff:ff", 4, "02:8d:db:08:ff:ff", "02:8d:cb:08:ff:ff"),
        ("MR33", "e0:55:3d:aa:bb:cc", 9, "c2:55:3d:aa:bb:cc", "c2:55:2d:aa:bb:cc"),
    ];

    for (model, mac, ssid, two_four, five) in cases {
        assert_eq!(
            pair(model, mac, ssid),
            (two_four.to_string(), five.to_string()),
            "{model} {mac} SSID {ssid}"
        );
    }
}

#[test]
fn test_input_forms_are_normalized() {
    assert_eq!(pair("mr53", "0C-8D-DB-00-00-00", 12), pair("MR53", "0c:8d:db:00:00:00", 12));
}

#[test]
fn test_failures() {
    assert_eq!(
        calculate("MR99", "0c:8d:db:00:00:00", 1),
        Err(BssidError::UnknownModel("MR99".to_string()))
    );
    assert!(matches!(
        calculate("MR53", "00:18:0a:00:00:00", 1),
        Err(BssidError::UnknownVendorPrefix { family: HardwareFamily(3), .. })
    ));
    assert!(matches!(
        calculate("MR53", "0c:8d:db:00:00:00", 16),
        Err(BssidError::UnknownSsidIndex { ssid: 16, .. })
    ));
    assert_eq!(
        calculate("MR53", "0c:8d:db", 1),
        Err(BssidError::InvalidMacAddress("0c:8d:db".to_string()))
    );
}

#[test]
fn test_wrapping_below_zero_and_fail_policy() {
    // Family 2 subtracts 0x40 from octet 3 on the 88:15:14 block.
    assert_eq!(
        pair("MR32", "88:15:14:c0:ff:ee", 4),
        ("8a:15:d4:c0:ff:f1".to_string(), "8a:15:e4:c0:ff:f1".to_string())
    );

    let calculator =
        BssidCalculator::new(OffsetTable::builtin()).with_overflow_policy(OverflowPolicy::Fail);
    let mac: MacAddress = "88:15:14:c0:ff:ee".parse().unwrap();
    assert!(matches!(
        calculator.calculate("MR32", mac, 4),
        Err(BssidError::OctetOverflow { .. })
    ));

    let high: MacAddress = "88:15:54:c0:ff:ee".parse().unwrap();
    let table = OffsetTable::reference_builder()
        .offsets(HardwareFamily(2), high.vendor_prefix(), "2.4", 4, OffsetVector::new([0x02, 0, -0x40, 0, 0, 0x03]))
        .offsets(HardwareFamily(2), high.vendor_prefix(), "5", 4, OffsetVector::new([0x02, 0, -0x30, 0, 0, 0x03]))
        .build();
    let bssids = BssidCalculator::new(&table)
        .with_overflow_policy(OverflowPolicy::Fail)
        .calculate("MR32", high, 4)
        .unwrap();
    assert_eq!(bssids["2.4"].to_string(), "8a:15:14:c0:ff:f1");
    assert_eq!(bssids["5"].to_string(), "8a:15:24:c0:ff:f1");
}

#[test]
fn test_lenient_matches_strict_on_reference_data() {
    let table = OffsetTable::builtin();
    let strict = BssidCalculator::new(table);
    let lenient = BssidCalculator::new(table).with_band_policy(BandPolicy::Lenient);

    for entry in table.entries() {
        let mac = MacAddress::from({
            let p = entry.prefix.octets();
            [p[0], p[1], p[2], 0x40, 0x80, 0x10]
        });
        assert_eq!(
            strict.calculate_for_family(entry.family, mac, entry.ssid),
            lenient.calculate_for_family(entry.family, mac, entry.ssid)
        );
    }
}
