use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::calculator::{BandPolicy, BssidCalculator, OverflowPolicy};
use crate::table::{DEFAULT_BANDS, HardwareFamily, OffsetTable};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub overflow: OverflowPolicy,
    #[serde(default)]
    pub band_policy: BandPolicy,
    #[serde(default = "default_bands")]
    pub bands: Vec<String>,
    /// Extra model name -> hardware family aliases, layered over the built-in mapping.
    #[serde(default)]
    pub models: BTreeMap<String, u8>,
}

fn default_bands() -> Vec<String> {
    DEFAULT_BANDS.iter().map(|b| b.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            overflow: OverflowPolicy::default(),
            band_policy: BandPolicy::default(),
            bands: default_bands(),
            models: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.bands.is_empty() {
            bail!("At least one band must be configured");
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn add_model(&mut self, model: &str, family: u8) {
        // Replace an alias that differs only in case
        self.models.retain(|m, _| !m.eq_ignore_ascii_case(model.trim()));
        self.models.insert(model.trim().to_string(), family);
    }

    /// Built-in table with this config's model aliases layered on top.
    pub fn table(&self) -> OffsetTable {
        if self.models.is_empty() {
            return OffsetTable::builtin().clone();
        }

        self.models
            .iter()
            .fold(OffsetTable::reference_builder(), |builder, (model, family)| {
                tracing::debug!("Model alias {} -> family {}", model, family);
                builder.model(model, HardwareFamily(*family))
            })
            .build()
    }

    pub fn calculator<'t>(&self, table: &'t OffsetTable) -> BssidCalculator<'t> {
        BssidCalculator::new(table)
            .with_bands(self.bands.iter().map(String::as_str))
            .with_band_policy(self.band_policy)
            .with_overflow_policy(self.overflow)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?;
    Ok(config_dir.join("meraki-bssid").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RadioBand;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bands, vec!["2.4", "5"]);
        assert_eq!(config.overflow, OverflowPolicy::Wrap);
        assert_eq!(config.band_policy, BandPolicy::Strict);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            overflow = "fail"
            band_policy = "lenient"
            bands = ["5"]

            [models]
            MR36 = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.overflow, OverflowPolicy::Fail);
        assert_eq!(config.band_policy, BandPolicy::Lenient);
        assert_eq!(config.bands, vec!["5"]);
        assert_eq!(config.models.get("MR36"), Some(&3));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_toml_str("overflow = \"saturate\"").is_err());
        assert!(Config::from_toml_str("bands = []").is_err());
    }

    #[test]
    fn test_table_includes_aliases() {
        let mut config = Config::default();
        config.add_model("MR36", 3);
        config.add_model("mr36", 2);
        assert_eq!(config.models.len(), 1);

        let table = config.table();
        assert_eq!(table.family_of("MR36").unwrap(), HardwareFamily(2));
        assert_eq!(table.family_of("MR53").unwrap(), HardwareFamily(3));
        assert!(OffsetTable::builtin().family_of("MR36").is_err());
    }

    #[test]
    fn test_calculator_follows_config() {
        let config = Config::from_toml_str("bands = [\"5\"]\noverflow = \"fail\"").unwrap();
        let table = config.table();
        let calculator = config.calculator(&table);

        assert_eq!(calculator.bands(), &[RadioBand::new("5")]);
        assert_eq!(calculator.overflow_policy(), OverflowPolicy::Fail);

        let bssids = calculator
            .calculate("MR53", "0c:8d:db:00:00:00".parse().unwrap(), 12)
            .unwrap();
        assert_eq!(bssids.len(), 1);
        assert_eq!(bssids["5"].to_string(), "22:8d:cb:00:00:00");
    }
}
