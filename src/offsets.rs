//! Reference offset data for Meraki MR access points.
//!
//! Transcribed from Meraki's published "Calculating Cisco Meraki BSSID MAC
//! Addresses" rules. Each block lists the per-octet offsets for SSIDs 1
//! through 15, in order, for one hardware family, vendor prefix and radio band.
//! A wrong value here yields a plausible but wrong BSSID, so every entry is
//! checked against `tests/fixtures/reference_offsets.json`.

/// Offsets for one (family, vendor prefix, band) triple, indexed by SSID - 1.
pub(crate) struct OffsetBlock {
    pub family: u8,
    pub prefix: [u8; 3],
    pub band: &'static str,
    pub rows: [[i16; 6]; 15],
}

pub(crate) static REFERENCE_OFFSETS: &[OffsetBlock] = &[
    OffsetBlock {
        family: 1,
        prefix: [0x00, 0x18, 0x0a],
        band: "2.4",
        rows: [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 2
            [0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 3
            [0x0e, 0x00, 0x00, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x00, 0x00, 0x00, 0x00], // 6
            [0x1a, 0x00, 0x00, 0x00, 0x00, 0x00], // 7
            [0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x00, 0x00, 0x00, 0x00], // 9
            [0x26, 0x00, 0x00, 0x00, 0x00, 0x00], // 10
            [0x2a, 0x00, 0x00, 0x00, 0x00, 0x00], // 11
            [0x2e, 0x00, 0x00, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x00, 0x00, 0x00, 0x00], // 13
            [0x36, 0x00, 0x00, 0x00, 0x00, 0x00], // 14
            [0x3a, 0x00, 0x00, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 1,
        prefix: [0x00, 0x18, 0x0a],
        band: "5",
        rows: [
            [0x02, 0x00, 0x10, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x10, 0x00, 0x00, 0x00], // 2
            [0x0a, 0x00, 0x10, 0x00, 0x00, 0x00], // 3
            [0x0e, 0x00, 0x10, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x10, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x10, 0x00, 0x00, 0x00], // 6
            [0x1a, 0x00, 0x10, 0x00, 0x00, 0x00], // 7
            [0x1e, 0x00, 0x10, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x10, 0x00, 0x00, 0x00], // 9
            [0x26, 0x00, 0x10, 0x00, 0x00, 0x00], // 10
            [0x2a, 0x00, 0x10, 0x00, 0x00, 0x00], // 11
            [0x2e, 0x00, 0x10, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x10, 0x00, 0x00, 0x00], // 13
            [0x36, 0x00, 0x10, 0x00, 0x00, 0x00], // 14
            [0x3a, 0x00, 0x10, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 1,
        prefix: [0x88, 0x15, 0x44],
        band: "2.4",
        rows: [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 2
            [-0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 3
            [-0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x00, 0x00, 0x00, 0x00], // 6
            [0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 7
            [0x0e, 0x00, 0x00, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x00, 0x00, 0x00, 0x00], // 9
            [0x26, 0x00, 0x00, 0x00, 0x00, 0x00], // 10
            [0x1a, 0x00, 0x00, 0x00, 0x00, 0x00], // 11
            [0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x00, 0x00, 0x00, 0x00], // 13
            [0x36, 0x00, 0x00, 0x00, 0x00, 0x00], // 14
            [0x2a, 0x00, 0x00, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 1,
        prefix: [0x88, 0x15, 0x44],
        band: "5",
        rows: [
            [0x02, 0x00, 0x10, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x10, 0x00, 0x00, 0x00], // 2
            [-0x06, 0x00, 0x10, 0x00, 0x00, 0x00], // 3
            [-0x02, 0x00, 0x10, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x10, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x10, 0x00, 0x00, 0x00], // 6
            [0x0a, 0x00, 0x10, 0x00, 0x00, 0x00], // 7
            [0x0e, 0x00, 0x10, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x10, 0x00, 0x00, 0x00], // 9
            [0x26, 0x00, 0x10, 0x00, 0x00, 0x00], // 10
            [0x1a, 0x00, 0x10, 0x00, 0x00, 0x00], // 11
            [0x1e, 0x00, 0x10, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x10, 0x00, 0x00, 0x00], // 13
            [0x36, 0x00, 0x10, 0x00, 0x00, 0x00], // 14
            [0x2a, 0x00, 0x10, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 2,
        prefix: [0x00, 0x18, 0x0a],
        band: "2.4",
        rows: [
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x00], // 1
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x01], // 2
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x02], // 3
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x03], // 4
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x04], // 5
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x05], // 6
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x06], // 7
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x07], // 8
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x08], // 9
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x09], // 10
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0a], // 11
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0b], // 12
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0c], // 13
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0d], // 14
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0e], // 15
        ],
    },
    OffsetBlock {
        family: 2,
        prefix: [0x00, 0x18, 0x0a],
        band: "5",
        rows: [
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x00], // 1
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x01], // 2
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x02], // 3
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x03], // 4
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x04], // 5
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x05], // 6
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x06], // 7
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x07], // 8
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x08], // 9
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x09], // 10
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x0a], // 11
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x0b], // 12
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x0c], // 13
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x0d], // 14
            [0x02, 0x00, 0x50, 0x00, 0x00, 0x0e], // 15
        ],
    },
    OffsetBlock {
        family: 2,
        prefix: [0x88, 0x15, 0x14],
        band: "2.4",
        rows: [
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x00], // 1
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x01], // 2
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x02], // 3
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x03], // 4
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x04], // 5
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x05], // 6
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x06], // 7
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x07], // 8
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x08], // 9
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x09], // 10
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x0a], // 11
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x0b], // 12
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x0c], // 13
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x0d], // 14
            [0x02, 0x00, -0x40, 0x00, 0x00, 0x0e], // 15
        ],
    },
    OffsetBlock {
        family: 2,
        prefix: [0x88, 0x15, 0x14],
        band: "5",
        rows: [
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x00], // 1
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x01], // 2
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x02], // 3
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x03], // 4
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x04], // 5
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x05], // 6
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x06], // 7
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x07], // 8
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x08], // 9
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x09], // 10
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x0a], // 11
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x0b], // 12
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x0c], // 13
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x0d], // 14
            [0x02, 0x00, -0x30, 0x00, 0x00, 0x0e], // 15
        ],
    },
    OffsetBlock {
        family: 2,
        prefix: [0xe0, 0x55, 0x3d],
        band: "2.4",
        rows: [
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x00], // 1
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x01], // 2
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x02], // 3
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x03], // 4
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x04], // 5
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x05], // 6
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x06], // 7
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x07], // 8
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x08], // 9
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x09], // 10
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0a], // 11
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0b], // 12
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0c], // 13
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0d], // 14
            [0x02, 0x00, 0x40, 0x00, 0x00, 0x0e], // 15
        ],
    },
    OffsetBlock {
        family: 2,
        prefix: [0xe0, 0x55, 0x3d],
        band: "5",
        rows: [
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x00], // 1
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x01], // 2
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x02], // 3
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x03], // 4
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x04], // 5
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x05], // 6
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x06], // 7
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x07], // 8
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x08], // 9
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x09], // 10
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x0a], // 11
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x0b], // 12
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x0c], // 13
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x0d], // 14
            [0x02, 0x00, 0x30, 0x00, 0x00, 0x0e], // 15
        ],
    },
    OffsetBlock {
        family: 3,
        prefix: [0x88, 0x15, 0x44],
        band: "2.4",
        rows: [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 2
            [-0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 3
            [-0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x00, 0x00, 0x00, 0x00], // 6
            [0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 7
            [0x0e, 0x00, 0x00, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x00, 0x00, 0x00, 0x00], // 9
            [0x26, 0x00, 0x00, 0x00, 0x00, 0x00], // 10
            [0x1a, 0x00, 0x00, 0x00, 0x00, 0x00], // 11
            [0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x00, 0x00, 0x00, 0x00], // 13
            [0x36, 0x00, 0x00, 0x00, 0x00, 0x00], // 14
            [0x2a, 0x00, 0x00, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 3,
        prefix: [0x88, 0x15, 0x44],
        band: "5",
        rows: [
            [0x02, 0x00, 0x10, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x10, 0x00, 0x00, 0x00], // 2
            [-0x06, 0x00, 0x10, 0x00, 0x00, 0x00], // 3
            [-0x02, 0x00, 0x10, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x10, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x10, 0x00, 0x00, 0x00], // 6
            [0x0a, 0x00, 0x10, 0x00, 0x00, 0x00], // 7
            [0x0e, 0x00, 0x10, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x10, 0x00, 0x00, 0x00], // 9
            [0x26, 0x00, 0x10, 0x00, 0x00, 0x00], // 10
            [0x1a, 0x00, 0x10, 0x00, 0x00, 0x00], // 11
            [0x1e, 0x00, 0x10, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x10, 0x00, 0x00, 0x00], // 13
            [0x36, 0x00, 0x10, 0x00, 0x00, 0x00], // 14
            [0x2a, 0x00, 0x10, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 3,
        prefix: [0xe0, 0x55, 0x3d],
        band: "2.4",
        rows: [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 2
            [0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 3
            [0x0e, 0x00, 0x00, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, 0x00, 0x00, 0x00, 0x00], // 6
            [0x1a, 0x00, 0x00, 0x00, 0x00, 0x00], // 7
            [0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // 8
            [-0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // 9
            [-0x1a, 0x00, 0x00, 0x00, 0x00, 0x00], // 10
            [-0x16, 0x00, 0x00, 0x00, 0x00, 0x00], // 11
            [-0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 12
            [-0x0e, 0x00, 0x00, 0x00, 0x00, 0x00], // 13
            [-0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 14
            [-0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 3,
        prefix: [0xe0, 0x55, 0x3d],
        band: "5",
        rows: [
            [0x02, 0x00, -0x10, 0x00, 0x00, 0x00], // 1
            [0x06, 0x00, -0x10, 0x00, 0x00, 0x00], // 2
            [0x0a, 0x00, -0x10, 0x00, 0x00, 0x00], // 3
            [0x0e, 0x00, -0x10, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, -0x10, 0x00, 0x00, 0x00], // 5
            [0x16, 0x00, -0x10, 0x00, 0x00, 0x00], // 6
            [0x1a, 0x00, -0x10, 0x00, 0x00, 0x00], // 7
            [0x1e, 0x00, -0x10, 0x00, 0x00, 0x00], // 8
            [-0x1e, 0x00, -0x10, 0x00, 0x00, 0x00], // 9
            [-0x1a, 0x00, -0x10, 0x00, 0x00, 0x00], // 10
            [-0x16, 0x00, -0x10, 0x00, 0x00, 0x00], // 11
            [-0x12, 0x00, -0x10, 0x00, 0x00, 0x00], // 12
            [-0x0e, 0x00, -0x10, 0x00, 0x00, 0x00], // 13
            [-0x0a, 0x00, -0x10, 0x00, 0x00, 0x00], // 14
            [-0x06, 0x00, -0x10, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 3,
        prefix: [0x0c, 0x8d, 0xdb],
        band: "2.4",
        rows: [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1
            [-0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 2
            [-0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 3
            [-0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 5
            [0x0e, 0x00, 0x00, 0x00, 0x00, 0x00], // 6
            [0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 7
            [0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, 0x00, 0x00, 0x00, 0x00], // 9
            [0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // 10
            [0x1a, 0x00, 0x00, 0x00, 0x00, 0x00], // 11
            [0x16, 0x00, 0x00, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, 0x00, 0x00, 0x00, 0x00], // 13
            [0x2e, 0x00, 0x00, 0x00, 0x00, 0x00], // 14
            [0x2a, 0x00, 0x00, 0x00, 0x00, 0x00], // 15
        ],
    },
    OffsetBlock {
        family: 3,
        prefix: [0x0c, 0x8d, 0xdb],
        band: "5",
        rows: [
            [0x02, 0x00, -0x10, 0x00, 0x00, 0x00], // 1
            [-0x02, 0x00, -0x10, 0x00, 0x00, 0x00], // 2
            [-0x06, 0x00, -0x10, 0x00, 0x00, 0x00], // 3
            [-0x0a, 0x00, -0x10, 0x00, 0x00, 0x00], // 4
            [0x12, 0x00, -0x10, 0x00, 0x00, 0x00], // 5
            [0x0e, 0x00, -0x10, 0x00, 0x00, 0x00], // 6
            [0x0a, 0x00, -0x10, 0x00, 0x00, 0x00], // 7
            [0x06, 0x00, -0x10, 0x00, 0x00, 0x00], // 8
            [0x22, 0x00, -0x10, 0x00, 0x00, 0x00], // 9
            [0x1e, 0x00, -0x10, 0x00, 0x00, 0x00], // 10
            [0x1a, 0x00, -0x10, 0x00, 0x00, 0x00], // 11
            [0x16, 0x00, -0x10, 0x00, 0x00, 0x00], // 12
            [0x32, 0x00, -0x10, 0x00, 0x00, 0x00], // 13
            [0x2e, 0x00, -0x10, 0x00, 0x00, 0x00], // 14
            [0x2a, 0x00, -0x10, 0x00, 0x00, 0x00], // 15
        ],
    },
];

/// Access point models and the hardware family whose arithmetic they share.
pub(crate) static MODEL_FAMILIES: &[(&str, u8)] = &[
    ("MR12", 1),
    ("MR16", 1),
    ("MR18", 1),
    ("MR24", 1),
    ("MR62", 1),
    ("MR66", 1),
    ("MR32", 2),
    ("MR34", 2),
    ("MR26", 2),
    ("MR72", 2),
    ("MR30H", 3),
    ("MR33", 3),
    ("MR42", 3),
    ("MR52", 3),
    ("MR53", 3),
    ("MR74", 3),
    ("MR84", 3),
];
