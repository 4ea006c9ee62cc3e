//! Organization-wide BSSID listing.
//!
//! Walks an inventory exported from the Meraki dashboard (networks, devices,
//! and the SSIDs configured per network or config template) and computes the
//! BSSIDs of every enabled SSID on every MR access point.
//!
//! # Inventory Format
//!
//! ```json
//! {
//!   "networks": [{ "id": "N_1", "name": "HQ", "configTemplateId": "L_9" }],
//!   "devices": [{ "model": "MR53", "mac": "0c:8d:db:00:00:00", "networkId": "N_1" }],
//!   "ssids": { "L_9": [{ "number": 0, "name": "Corp", "enabled": true }] }
//! }
//! ```
//!
//! SSID `number` is the dashboard's 0-based slot; the BSSID calculation uses
//! `number + 1`. A network bound to a config template takes its SSIDs from the
//! template id rather than its own id.
//!
//! [`write_csv`] exports the resulting records in the dashboard tool's CSV layout.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::calculator::{BssidCalculator, Bssids};
use crate::mac::MacAddress;
use crate::table::{RadioBand, SsidIndex};

/// A dashboard network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub config_template_id: Option<String>,
}

/// A device from the organization inventory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEntry {
    pub model: String,
    pub mac: String,

    /// None for devices not claimed into a network.
    #[serde(default)]
    pub network_id: Option<String>,
}

/// One configured SSID slot.
#[derive(Debug, Clone, Deserialize)]
pub struct SsidEntry {
    /// 0-based slot number as reported by the dashboard.
    pub number: SsidIndex,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub networks: Vec<NetworkEntry>,
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,

    /// SSIDs keyed by network id or config template id.
    #[serde(default)]
    pub ssids: BTreeMap<String, Vec<SsidEntry>>,
}

/// The BSSIDs one access point broadcasts for one SSID.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BssidRecord {
    pub network: String,
    pub ssid: String,
    pub ap_mac: MacAddress,
    pub bssids: Bssids,
}

impl Inventory {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory file: {}", path.display()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse inventory file: {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Access points (MR models) assigned to a network.
    pub fn access_points<'a>(&'a self, network: &'a NetworkEntry) -> impl Iterator<Item = &'a DeviceEntry> {
        self.devices.iter().filter(move |device| {
            device.model.starts_with("MR") && device.network_id.as_deref() == Some(network.id.as_str())
        })
    }

    /// Enabled SSIDs of a network, following its config template when bound to one.
    pub fn enabled_ssids<'a>(&'a self, network: &'a NetworkEntry) -> impl Iterator<Item = &'a SsidEntry> {
        let key = network.config_template_id.as_deref().unwrap_or(&network.id);

        let ssids = self.ssids.get(key);
        if ssids.is_none() {
            tracing::warn!("No SSIDs listed for '{}' ({})", network.name, key);
        }

        ssids.into_iter().flatten().filter(|ssid| ssid.enabled)
    }

    /// BSSIDs for every enabled SSID on every access point, network by network.
    pub fn bssids(&self, calculator: &BssidCalculator<'_>) -> Result<Vec<BssidRecord>> {
        let mut records = Vec::new();

        for network in &self.networks {
            let aps: Vec<&DeviceEntry> = self.access_points(network).collect();
            if aps.is_empty() {
                tracing::debug!("Network '{}' has no access points", network.name);
                continue;
            }

            for ssid in self.enabled_ssids(network) {
                let index = ssid.number.checked_add(1).with_context(|| {
                    format!(
                        "SSID '{}' in network '{}' has out-of-range number {}",
                        ssid.name, network.name, ssid.number
                    )
                })?;

                for ap in &aps {
                    let mac: MacAddress = ap.mac.parse().with_context(|| {
                        format!("Bad MAC for {} in network '{}'", ap.model, network.name)
                    })?;

                    let bssids = calculator
                        .calculate(&ap.model, mac, index)
                        .with_context(|| {
                            format!(
                                "Failed to calculate BSSIDs for {} {} in network '{}'",
                                ap.model, ap.mac, network.name
                            )
                        })?;

                    records.push(BssidRecord {
                        network: network.name.clone(),
                        ssid: ssid.name.clone(),
                        ap_mac: mac,
                        bssids,
                    });
                }
            }
        }

        tracing::debug!("Computed {} BSSID records", records.len());
        Ok(records)
    }
}

/// Write records as CSV, one row per (network, SSID, AP), one column per band.
///
/// Header: `Network name,SSID name,AP mac,<band> BSSID...`. A band missing
/// from a record (lenient mode) leaves its cell empty.
pub fn write_csv<W: io::Write>(records: &[BssidRecord], bands: &[RadioBand], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![
        "Network name".to_string(),
        "SSID name".to_string(),
        "AP mac".to_string(),
    ];
    header.extend(bands.iter().map(|band| format!("{} BSSID", band)));
    wtr.write_record(&header).context("Failed to write CSV header")?;

    for record in records {
        let mut row = vec![
            record.network.clone(),
            record.ssid.clone(),
            record.ap_mac.to_string(),
        ];
        row.extend(
            bands
                .iter()
                .map(|band| record.bssids.get(band).map(|m| m.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&row).context("Failed to write CSV row")?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}
